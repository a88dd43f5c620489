// src/config.rs
use crate::args::Args;
use author_sloc_ports::filesystem::ScanPlan;
use author_sloc_shared_kernel::{AuthorSlocError, DomainError, PresentationError};
use derive_builder::Builder;
use std::path::PathBuf;

/// Resolved run configuration.
#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct Config {
    #[builder(default = "PathBuf::from(\".\")")]
    pub root: PathBuf,
    #[builder(default = "vec![ScanPlan::DEFAULT_EXTENSION.to_string()]")]
    pub extensions: Vec<String>,
    #[builder(default)]
    pub exclude: Vec<String>,
    #[builder(default = "true")]
    pub include_hidden: bool,
    #[builder(default = "true")]
    pub follow_links: bool,
    /// 著者テーブルの書き出し先
    #[builder(default)]
    pub csv_output: Option<PathBuf>,
    #[builder(default)]
    pub verbosity: u8,
}

impl Config {
    /// Enumeration parameters for the scan.
    #[must_use]
    pub fn scan_plan(&self) -> ScanPlan {
        ScanPlan {
            root: self.root.clone(),
            extensions: self.extensions.clone(),
            exclude_patterns: self.exclude.clone(),
            include_hidden: self.include_hidden,
            follow_links: self.follow_links,
        }
    }
}

impl TryFrom<Args> for Config {
    type Error = AuthorSlocError;

    fn try_from(args: Args) -> Result<Self, Self::Error> {
        let mut builder = ConfigBuilder::default();
        builder
            .root(args.root_directory)
            .exclude(args.scan.exclude)
            .include_hidden(!args.scan.no_hidden)
            .follow_links(!args.scan.no_follow)
            .csv_output(args.output.csv)
            .verbosity(args.verbose);

        if !args.scan.ext.is_empty() {
            let extensions = args
                .scan
                .ext
                .iter()
                .map(|ext| normalize_extension(ext))
                .collect::<Result<Vec<_>, _>>()?;
            builder.extensions(extensions);
        }

        builder
            .build()
            .map_err(|err| PresentationError::ConfigBuildFailed(err.to_string()).into())
    }
}

/// `.java` / ` java ` -> `java`
fn normalize_extension(raw: &str) -> Result<String, DomainError> {
    let ext = raw.trim();
    let ext = ext.strip_prefix('.').unwrap_or(ext);
    let invalid = |reason: &str| DomainError::InvalidExtension {
        extension: raw.to_string(),
        reason: reason.to_string(),
    };
    if ext.is_empty() {
        return Err(invalid("empty extension"));
    }
    if ext.contains(['/', '\\', '.']) || ext.chars().any(char::is_whitespace) {
        return Err(invalid("must be a bare extension such as `java`"));
    }
    Ok(ext.to_string())
}

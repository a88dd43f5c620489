// crates/shared-kernel/src/error.rs
use std::path::PathBuf;

use thiserror::Error;

/// Root error type shared across the workspace.
#[derive(Debug, Error)]
pub enum AuthorSlocError {
    /// Adds human context while preserving original error as the source.
    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<AuthorSlocError>,
    },

    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("Infrastructure error: {0}")]
    Infrastructure(#[from] InfrastructureError),

    #[error("Application error: {0}")]
    Application(#[from] ApplicationError),

    #[error("Presentation error: {0}")]
    Presentation(#[from] PresentationError),
}

pub type Result<T> = std::result::Result<T, AuthorSlocError>;

/// Domain-layer specific errors.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invalid author pattern: {details}")]
    InvalidAuthorPattern { details: String },

    #[error("Invalid extension '{extension}': {reason}")]
    InvalidExtension { extension: String, reason: String },
}

pub type DomainResult<T> = std::result::Result<T, DomainError>;

/// Application-layer errors.
#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("Failed to analyse '{path}': {reason}")]
    AnalysisFailed {
        path: PathBuf,
        reason: String,
        #[source]
        source: Option<Box<AuthorSlocError>>,
    },

    #[error("Failed to collect source files under '{root}'")]
    FileCollectionFailed {
        root: PathBuf,
        #[source]
        source: Option<Box<AuthorSlocError>>,
    },
}

/// Infrastructure-layer errors.
#[derive(Debug, Error)]
pub enum InfrastructureError {
    #[error("Failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file '{path}': {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Directory walk failed under '{root}': {details}")]
    Walk { root: PathBuf, details: String },

    #[error("Root directory not found: '{0}'")]
    RootNotFound(PathBuf),

    #[error("Invalid glob pattern '{pattern}': {details}")]
    InvalidPattern { pattern: String, details: String },
}

/// Presentation-layer errors.
#[derive(Debug, Error)]
pub enum PresentationError {
    #[error("Configuration building failed: {0}")]
    ConfigBuildFailed(String),

    #[error("Failed to write report: {0}")]
    Output(#[source] std::io::Error),
}

/// Extension trait to add additional context to results.
pub trait ErrorContext<T> {
    fn context(self, context: impl Into<String>) -> Result<T>;
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: Into<AuthorSlocError>,
{
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| AuthorSlocError::Context {
            context: context.into(),
            source: Box::new(e.into()),
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| AuthorSlocError::Context {
            context: f(),
            source: Box::new(e.into()),
        })
    }
}

use crate::language::{LineProcessor, get_processor};
use crate::stats::SourceAnalysis;

/// Size of the prefix inspected for NUL bytes.
const BINARY_PROBE_LEN: usize = 8 * 1024;

/// Classify every line of a byte slice.
///
/// This is the core entry point for line counting. Binary content (a NUL byte
/// near the start) is flagged and left uncounted. Invalid UTF-8 is replaced
/// rather than rejected.
#[must_use]
pub fn count_bytes(input: &[u8], extension: &str) -> SourceAnalysis {
    if is_binary(input) {
        return SourceAnalysis {
            is_binary: true,
            ..SourceAnalysis::default()
        };
    }

    let text = crate::language::string_utils::from_utf8_lossy(input);
    let mut processor = get_processor(extension);

    SourceAnalysis {
        tally: processor.tally(&text),
        is_binary: false,
    }
}

fn is_binary(input: &[u8]) -> bool {
    let len = input.len().min(BINARY_PROBE_LEN);
    input[..len].contains(&0)
}

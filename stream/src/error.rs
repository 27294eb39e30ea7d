use thiserror::Error;

/// Input-validation faults for stream analytics.
///
/// Absent or empty streams are not errors; they produce empty results.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StreamError {
    /// Parallel streams don't have the same number of samples
    #[error("stream `{stream}` has {actual} samples, expected {expected}")]
    LengthMismatch {
        stream: &'static str,
        expected: usize,
        actual: usize,
    },

    /// A stream required by the caller isn't part of the set
    #[error("stream `{0}` is missing")]
    MissingStream(&'static str),
}

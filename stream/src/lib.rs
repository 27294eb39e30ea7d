//! Activity streams as delivered by the fitness provider.
//!
//! A stream is one physical quantity (distance, altitude, heart rate, ...)
//! sampled over the course of an activity. Streams of the same activity are
//! parallel: the same index refers to the same instant.

mod downsample;
mod error;
mod models;
mod reconstruct;

pub use downsample::*;
pub use error::*;
pub use models::*;
pub use reconstruct::*;

/// Checks that `data` has exactly `expected` samples.
///
/// Parallel streams of different length can't be paired by index, so the
/// caller gets the mismatch back instead of a silently truncated result.
pub fn ensure_parallel(
    name: &'static str,
    expected: usize,
    data: &[f64],
) -> Result<(), StreamError> {
    if data.len() == expected {
        return Ok(());
    }

    tracing::warn!(
        stream = name,
        expected,
        actual = data.len(),
        "parallel stream length mismatch"
    );

    Err(StreamError::LengthMismatch {
        stream: name,
        expected,
        actual: data.len(),
    })
}

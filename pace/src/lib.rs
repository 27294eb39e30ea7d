//! # Pace
//!
//! Pace is the inverse of speed, expressed as minutes per kilometre for
//! running and cycling and minutes per 100 metres for swimming:
//!
//! ```notrust
//! pace(min/km)   = 1000 / (v * 60)
//! pace(min/100m) = 100 / v / 60
//! ```
//!
//! where `v` is velocity in meters per second.

pub mod slope;
pub mod splits;

pub use slope::{SegmentCategory, SegmentStat, SlopeOptions};
pub use splits::Split;

/// Pace in minutes per kilometre, `None` when not moving.
#[inline]
pub fn pace_min_per_km(velocity: f64) -> Option<f64> {
    (velocity > 0.0).then(|| 1000.0 / (velocity * 60.0))
}

/// Pace in minutes per 100 metres, `None` when not moving.
#[inline]
pub fn pace_min_per_100m(velocity: f64) -> Option<f64> {
    (velocity > 0.0).then(|| 100.0 / velocity / 60.0)
}

/// Formats a pace as `m:ss /km`.
pub fn format_pace(min_per_km: f64) -> String {
    let mut minutes = min_per_km.floor();
    let mut seconds = ((min_per_km - minutes) * 60.0).round();

    if seconds >= 60.0 {
        minutes += 1.0;
        seconds = 0.0;
    }

    format!("{minutes}:{seconds:02} /km")
}

//! Pace by slope.
//!
//! Every interval between two consecutive samples is classified by its
//! gradient:
//!
//! ```notrust
//! slope(%) = Δaltitude / Δdistance * 100
//! ```
//!
//! - climb - slope above `climb_threshold`
//! - descent - slope below `descent_threshold`
//! - flat - everything in between
//!
//! Intervals shorter than `min_distance` meters or without forward time are
//! GPS noise or pauses and are left out.

use stream::{StreamError, StreamKind, StreamSet, ensure_parallel, reconstruct_time};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum SegmentCategory {
    Climb,
    Flat,
    Descent,
}

impl SegmentCategory {
    /// Order in which stats are reported.
    pub const ALL: [SegmentCategory; 3] = [
        SegmentCategory::Climb,
        SegmentCategory::Flat,
        SegmentCategory::Descent,
    ];

    const fn index(self) -> usize {
        match self {
            SegmentCategory::Climb => 0,
            SegmentCategory::Flat => 1,
            SegmentCategory::Descent => 2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SegmentStat {
    pub category: SegmentCategory,
    pub distance_meters: f64,
    pub duration_seconds: f64,
}

impl SegmentStat {
    pub const fn empty(category: SegmentCategory) -> Self {
        Self {
            category,
            distance_meters: 0.0,
            duration_seconds: 0.0,
        }
    }

    /// Average pace over the category in minutes per kilometre.
    pub fn pace_min_per_km(&self) -> Option<f64> {
        if self.distance_meters <= 0.0 {
            return None;
        }

        Some((self.duration_seconds / (self.distance_meters / 1000.0)) / 60.0)
    }
}

#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SlopeOptions {
    /// Slope in percent above which an interval is a climb
    pub climb_threshold: f64,
    /// Slope in percent below which an interval is a descent
    pub descent_threshold: f64,
    /// Intervals covering this many meters or less are skipped
    pub min_distance: f64,
}

impl SlopeOptions {
    pub const fn new() -> Self {
        Self {
            climb_threshold: 3.0,
            descent_threshold: -3.0,
            min_distance: 1.0,
        }
    }

    pub const fn set_climb_threshold(mut self, climb_threshold: f64) -> Self {
        self.climb_threshold = climb_threshold;
        self
    }

    pub const fn set_descent_threshold(mut self, descent_threshold: f64) -> Self {
        self.descent_threshold = descent_threshold;
        self
    }

    pub const fn set_min_distance(mut self, min_distance: f64) -> Self {
        self.min_distance = min_distance;
        self
    }

    pub fn category(&self, slope: f64) -> SegmentCategory {
        if slope > self.climb_threshold {
            return SegmentCategory::Climb;
        }

        if slope < self.descent_threshold {
            return SegmentCategory::Descent;
        }

        SegmentCategory::Flat
    }
}

impl Default for SlopeOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// Distance and duration spent climbing, on the flat and descending,
/// with the default thresholds.
///
/// # Params
/// - `distance` - cumulative distance in meters
/// - `altitude` - altitude in meters
/// - `elapsed_time` - elapsed time in seconds
pub fn classify_segments(
    distance: &[f64],
    altitude: &[f64],
    elapsed_time: &[f64],
) -> Result<[SegmentStat; 3], StreamError> {
    classify_segments_with(distance, altitude, elapsed_time, &SlopeOptions::new())
}

pub fn classify_segments_with(
    distance: &[f64],
    altitude: &[f64],
    elapsed_time: &[f64],
    options: &SlopeOptions,
) -> Result<[SegmentStat; 3], StreamError> {
    ensure_parallel("altitude", distance.len(), altitude)?;
    ensure_parallel("time", distance.len(), elapsed_time)?;

    let mut stats = SegmentCategory::ALL.map(SegmentStat::empty);
    let mut skipped = 0_usize;

    for i in 0..distance.len().saturating_sub(1) {
        let dist = distance[i + 1] - distance[i];
        let elev = altitude[i + 1] - altitude[i];
        let duration = elapsed_time[i + 1] - elapsed_time[i];

        // `!(x > y)` also drops NaN deltas
        if !(dist > options.min_distance) || !(duration > 0.0) {
            skipped += 1;
            continue;
        }

        let slope = (elev / dist) * 100.0;
        let stat = &mut stats[options.category(slope).index()];

        stat.distance_meters += dist;
        stat.duration_seconds += duration;
    }

    if skipped > 0 {
        tracing::debug!(
            skipped,
            intervals = distance.len().saturating_sub(1),
            "skipped intervals without distance or time progress"
        );
    }

    Ok(stats)
}

/// Slope stats straight from an activity's streams.
///
/// When the activity has no time stream it is rebuilt from velocity.
/// Returns `None` if distance, altitude or time can't be obtained.
pub fn segments_from_streams(
    streams: &StreamSet,
    options: &SlopeOptions,
) -> Result<Option<[SegmentStat; 3]>, StreamError> {
    let distance = streams.data(StreamKind::Distance);
    let altitude = streams.data(StreamKind::Altitude);
    let velocity = streams.data(StreamKind::Velocity);

    let time = match streams.data(StreamKind::Time) {
        [] if !velocity.is_empty() => reconstruct_time(distance, velocity),
        time => time.to_vec(),
    };

    if distance.is_empty() || altitude.is_empty() || time.is_empty() {
        tracing::debug!(
            distance = distance.len(),
            altitude = altitude.len(),
            time = time.len(),
            "incomplete streams for slope analysis"
        );
        return Ok(None);
    }

    classify_segments_with(distance, altitude, &time, options).map(Some)
}

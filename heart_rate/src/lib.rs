//! # Heart-rate zones
//!
//! Time spent in each training zone, zones being bands of the maximum heart
//! rate (MHR):
//!
//! - Zone 1 - below `72%`
//! - Zone 2 - `72-82%`
//! - Zone 3 - `82-87%`
//! - Zone 4 - `87-92%`
//! - Zone 5 - `92-97%`
//! - Zone 6 - `97%` and above
//!
//! Each band includes its lower bound.

use stream::Stream;

/// Maximum heart rate used when the athlete's own isn't known.
pub const DEFAULT_MAX_HEART_RATE: f64 = 191.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HeartRateZone {
    Zone1,
    Zone2,
    Zone3,
    Zone4,
    Zone5,
    Zone6,
}

impl HeartRateZone {
    pub const ALL: [HeartRateZone; 6] = [
        HeartRateZone::Zone1,
        HeartRateZone::Zone2,
        HeartRateZone::Zone3,
        HeartRateZone::Zone4,
        HeartRateZone::Zone5,
        HeartRateZone::Zone6,
    ];

    /// Zone number, 1 to 6.
    pub const fn number(self) -> u8 {
        match self {
            HeartRateZone::Zone1 => 1,
            HeartRateZone::Zone2 => 2,
            HeartRateZone::Zone3 => 3,
            HeartRateZone::Zone4 => 4,
            HeartRateZone::Zone5 => 5,
            HeartRateZone::Zone6 => 6,
        }
    }

    const fn index(self) -> usize {
        self.number() as usize - 1
    }
}

/// Calculate MHR for age.
///
/// # Params
/// - `age` - person age in years
#[inline]
pub const fn estimated_max_heart_rate(age: u8) -> f64 {
    207.0 - (age as f64 * 0.7)
}

#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ZoneOptions {
    /// Maximum heart rate in beats per minute
    pub max_heart_rate: f64,
    /// Upper bounds of zones 1 to 5 in percent of MHR, ascending
    pub upper_bounds: [f64; 5],
}

impl ZoneOptions {
    pub const fn new() -> Self {
        Self {
            max_heart_rate: DEFAULT_MAX_HEART_RATE,
            upper_bounds: [72.0, 82.0, 87.0, 92.0, 97.0],
        }
    }

    pub const fn from_age(age: u8) -> Self {
        Self::new().set_max_heart_rate(estimated_max_heart_rate(age))
    }

    pub const fn set_max_heart_rate(mut self, max_heart_rate: f64) -> Self {
        self.max_heart_rate = max_heart_rate;
        self
    }

    pub const fn set_upper_bounds(mut self, upper_bounds: [f64; 5]) -> Self {
        self.upper_bounds = upper_bounds;
        self
    }

    /// Zone of a single sample. `None` when no usable MHR is configured.
    pub fn zone(&self, bpm: f64) -> Option<HeartRateZone> {
        if !(self.max_heart_rate > 0.0) {
            return None;
        }

        let percent = (bpm / self.max_heart_rate) * 100.0;

        let zone = self
            .upper_bounds
            .iter()
            .position(|bound| percent < *bound)
            .map_or(HeartRateZone::Zone6, |index| HeartRateZone::ALL[index]);

        Some(zone)
    }
}

impl Default for ZoneOptions {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ZoneTime {
    pub zone: HeartRateZone,
    pub samples: usize,
    pub seconds: f64,
    pub percent_of_total_time: f64,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ZoneDistribution {
    pub zones: [ZoneTime; 6],
    pub total_seconds: f64,
}

impl ZoneDistribution {
    pub fn zone(&self, zone: HeartRateZone) -> &ZoneTime {
        &self.zones[zone.index()]
    }
}

/// Share of time spent in every zone.
///
/// Returns `None` when there is nothing to report: no samples, no usable
/// MHR or a non positive sample interval.
///
/// # Params
/// - `heart_rate` - samples in beats per minute
/// - `max_heart_rate` - MHR in beats per minute
/// - `sample_interval` - seconds represented by one sample
pub fn bin_heart_rate_zones(
    heart_rate: &[f64],
    max_heart_rate: f64,
    sample_interval: f64,
) -> Option<ZoneDistribution> {
    bin_heart_rate_zones_with(
        heart_rate,
        &ZoneOptions::new().set_max_heart_rate(max_heart_rate),
        sample_interval,
    )
}

pub fn bin_heart_rate_zones_with(
    heart_rate: &[f64],
    options: &ZoneOptions,
    sample_interval: f64,
) -> Option<ZoneDistribution> {
    if heart_rate.is_empty() {
        return None;
    }

    let mut counts = [0_usize; 6];
    for bpm in heart_rate {
        let zone = options.zone(*bpm)?;
        counts[zone.index()] += 1;
    }

    let total_seconds = counts.iter().sum::<usize>() as f64 * sample_interval;

    if !(total_seconds > 0.0) {
        tracing::debug!(
            samples = heart_rate.len(),
            sample_interval,
            "no time to distribute over heart-rate zones"
        );
        return None;
    }

    let zones = HeartRateZone::ALL.map(|zone| {
        let samples = counts[zone.index()];
        let seconds = samples as f64 * sample_interval;

        ZoneTime {
            zone,
            samples,
            seconds,
            percent_of_total_time: (seconds / total_seconds) * 100.0,
        }
    });

    Some(ZoneDistribution {
        zones,
        total_seconds,
    })
}

/// Zones for a heart-rate stream, taking the interval from the stream itself.
pub fn zones_from_stream(stream: &Stream, options: &ZoneOptions) -> Option<ZoneDistribution> {
    bin_heart_rate_zones_with(&stream.data, options, stream.sample_interval())
}

/// Arithmetic mean of the samples.
pub fn average_heart_rate(heart_rate: &[f64]) -> Option<f64> {
    if heart_rate.is_empty() {
        return None;
    }

    Some(heart_rate.iter().sum::<f64>() / heart_rate.len() as f64)
}

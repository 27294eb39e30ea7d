//! Per-kilometre splits from cumulative distance and velocity.

const KILOMETER: f64 = 1000.0;

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Split {
    /// 1-based kilometre number
    pub kilometer: usize,
    /// 1000 for complete splits, the remaining meters for the trailing one
    pub distance_meters: f64,
    pub pace_min_per_km: f64,
    pub partial: bool,
}

/// Average pace of every completed kilometre, plus the unfinished remainder.
///
/// Samples count towards a split only while moving forward with a positive
/// velocity. A split closes on the first sample whose whole-kilometre mark
/// passes the previous one.
///
/// # Params
/// - `distance` - cumulative distance in meters
/// - `velocity` - velocity in meters per second, parallel to `distance`
pub fn km_splits(distance: &[f64], velocity: &[f64]) -> Vec<Split> {
    let mut splits = Vec::new();

    let mut last_km = 0_usize;
    let mut minutes = 0.0;
    let mut kilometers = 0.0;
    let mut previous = 0.0;

    for (i, meters) in distance.iter().copied().enumerate() {
        let km = meters / KILOMETER;
        let delta = km - previous;
        previous = km;

        let speed = velocity.get(i).copied().unwrap_or_default();
        if speed > 0.0 && delta > 0.0 {
            minutes += (delta * KILOMETER) / (speed * 60.0);
            kilometers += delta;
        }

        if km.floor() > last_km as f64 {
            let pace = match kilometers > 0.0 {
                true => minutes / kilometers,
                false => 0.0,
            };

            last_km += 1;
            splits.push(Split {
                kilometer: last_km,
                distance_meters: KILOMETER,
                pace_min_per_km: pace,
                partial: false,
            });

            minutes = 0.0;
            kilometers = 0.0;
        }
    }

    let remaining = previous - last_km as f64;
    if kilometers > 0.0 && remaining > 0.0 {
        splits.push(Split {
            kilometer: last_km + 1,
            distance_meters: remaining * KILOMETER,
            pace_min_per_km: minutes / kilometers,
            partial: true,
        });
    }

    splits
}

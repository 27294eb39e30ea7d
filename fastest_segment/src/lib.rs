//! # Fastest segments
//!
//! Searches the distance stream of an activity for the shortest span of
//! samples covering a target distance. Streams are sampled at roughly one
//! point per second, so the sample count doubles as elapsed seconds.
//! It's an approximation: pair it with the time stream when wall-clock
//! accuracy matters.

/// 1 km, 5 km, 10 km and half marathon.
pub const CANONICAL_TARGETS: [f64; 4] = [1000.0, 5000.0, 10000.0, 21100.0];

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FastestKmRecord {
    pub target_distance_meters: f64,
    pub elapsed_samples: usize,
    pub activity_id: String,
}

/// Fewest samples between a start and the first later sample at least
/// `target` meters further. `None` if the target doesn't fit in the series.
///
/// Starts are scanned in order and the scan stops at the first start whose
/// window runs past the end of the series.
pub fn fastest_segment(distance: &[f64], target: f64) -> Option<usize> {
    let cumulative = distance.windows(2).all(|pair| pair[0] <= pair[1]);

    match cumulative {
        true => scan_monotonic(distance, target),
        false => scan_restarting(distance, target),
    }
}

/// Two pointers moving forward only, linear in the series length.
///
/// With a non-decreasing series the end found for one start is never past
/// the end the next start needs, so the pointer is kept across starts.
fn scan_monotonic(distance: &[f64], target: f64) -> Option<usize> {
    let mut best = None;
    let mut end = 0;

    for (start, start_distance) in distance.iter().enumerate() {
        let goal = start_distance + target;

        end = end.max(start);
        while end < distance.len() && distance[end] < goal {
            end += 1;
        }

        if end >= distance.len() {
            break;
        }

        best = Some(best.map_or(end - start, |best: usize| best.min(end - start)));
    }

    best
}

/// Restarts the end pointer for every start. Quadratic, but exact for
/// series that go backwards (GPS corrections).
fn scan_restarting(distance: &[f64], target: f64) -> Option<usize> {
    let mut best = None;

    for (start, start_distance) in distance.iter().enumerate() {
        let goal = start_distance + target;

        let mut end = start;
        while end < distance.len() && distance[end] < goal {
            end += 1;
        }

        if end >= distance.len() {
            break;
        }

        best = Some(best.map_or(end - start, |best: usize| best.min(end - start)));
    }

    best
}

/// Best effort for each target that fits in the activity.
pub fn fastest_records(
    distance: &[f64],
    activity_id: &str,
    targets: &[f64],
) -> Vec<FastestKmRecord> {
    if distance.is_empty() {
        return Vec::new();
    }

    targets
        .iter()
        .filter_map(|&target| {
            let elapsed_samples = fastest_segment(distance, target);

            if elapsed_samples.is_none() {
                tracing::debug!(activity_id, target, "target distance longer than activity");
            }

            elapsed_samples.map(|elapsed_samples| FastestKmRecord {
                target_distance_meters: target,
                elapsed_samples,
                activity_id: activity_id.to_owned(),
            })
        })
        .collect()
}

/// Human readable duration: `1 h 2 min 3 s`, `2 min 3 s` or `3 s`.
///
/// Rounds to whole seconds first, so `119.6` reads `2 min 0 s`.
pub fn format_duration(seconds: f64) -> String {
    let seconds = seconds.round();
    let hours = (seconds / 3600.0).floor();
    let minutes = ((seconds % 3600.0) / 60.0).floor();
    let secs = seconds % 60.0;

    if hours > 0.0 {
        return format!("{hours} h {minutes} min {secs} s");
    }

    if minutes > 0.0 {
        return format!("{minutes} min {secs} s");
    }

    format!("{secs} s")
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Deterministic distance stream with irregular steps.
    fn distance_stream(len: usize, seed: u64) -> Vec<f64> {
        let mut state = seed;
        let mut total = 0.0;

        (0..len)
            .map(|_| {
                state = state
                    .wrapping_mul(6364136223846793005)
                    .wrapping_add(1442695040888963407);
                total += ((state >> 33) % 8) as f64;
                total
            })
            .collect()
    }

    #[test]
    fn single_window_from_start() {
        assert_eq!(fastest_segment(&[0.0, 200.0, 500.0, 1000.0], 1000.0), Some(3));
    }

    #[test]
    fn later_start_can_be_faster() {
        // 0 -> 1000 takes 3 samples, 500 -> 1500 only 2
        assert_eq!(
            fastest_segment(&[0.0, 200.0, 500.0, 1000.0, 1500.0], 1000.0),
            Some(2)
        );
    }

    #[test]
    fn target_out_of_reach() {
        assert_eq!(fastest_segment(&[0.0, 200.0, 500.0, 999.0], 1000.0), None);
        assert_eq!(fastest_segment(&[], 1000.0), None);
    }

    #[test]
    fn longer_target_never_faster() {
        let distance = distance_stream(30_000, 7);

        let best = [400.0, 1000.0, 5000.0, 10000.0, 21100.0]
            .map(|target| fastest_segment(&distance, target).expect("fits"));

        assert!(best.windows(2).all(|pair| pair[0] <= pair[1]), "{best:?}");
    }

    #[test]
    fn two_pointer_matches_restarting_scan() {
        for seed in 0..20 {
            let distance = distance_stream(2_000, seed);

            for target in [0.0, 3.0, 50.0, 1000.0, 7000.0, 50_000.0] {
                assert_eq!(
                    scan_monotonic(&distance, target),
                    scan_restarting(&distance, target),
                    "seed {seed}, target {target}"
                );
            }
        }
    }

    #[test]
    fn series_going_backwards() {
        // GPS correction at index 2; from 0 m the target is reached at 1400 m,
        // from 600 m nothing reaches 1600 m and the scan stops
        let distance = [0.0, 600.0, 400.0, 900.0, 1400.0, 1500.0];

        assert_eq!(fastest_segment(&distance, 1000.0), Some(4));
    }

    #[test]
    fn canonical_records() {
        let distance = (0..=3000).map(|i| i as f64 * 4.0).collect::<Vec<_>>();

        let records = fastest_records(&distance, "42", &CANONICAL_TARGETS);

        assert_eq!(records, vec![
            FastestKmRecord {
                target_distance_meters: 1000.0,
                elapsed_samples: 250,
                activity_id: "42".to_owned(),
            },
            FastestKmRecord {
                target_distance_meters: 5000.0,
                elapsed_samples: 1250,
                activity_id: "42".to_owned(),
            },
            FastestKmRecord {
                target_distance_meters: 10000.0,
                elapsed_samples: 2500,
                activity_id: "42".to_owned(),
            },
        ]);
    }

    #[test]
    fn no_records_without_distance() {
        assert!(fastest_records(&[], "1", &CANONICAL_TARGETS).is_empty());
    }

    #[test]
    fn durations() {
        assert_eq!(format_duration(42.0), "42 s");
        assert_eq!(format_duration(125.0), "2 min 5 s");
        assert_eq!(format_duration(3723.0), "1 h 2 min 3 s");
    }

    #[test]
    fn rounding_carries_into_minutes_and_hours() {
        assert_eq!(format_duration(119.6), "2 min 0 s");
        assert_eq!(format_duration(59.5), "1 min 0 s");
        assert_eq!(format_duration(3599.7), "1 h 0 min 0 s");
        assert_eq!(format_duration(119.4), "1 min 59 s");
    }
}

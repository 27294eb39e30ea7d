/// Rebuilds an elapsed-time stream from cumulative distance and velocity,
/// for activities recorded without a time stream.
///
/// Each step takes `Δdistance / speed` seconds where speed is the velocity at
/// the sample, then the one before it, then 1 m/s when neither is usable.
/// Errors accumulate over the activity; nothing resynchronises them.
pub fn reconstruct_time(distance: &[f64], velocity: &[f64]) -> Vec<f64> {
    if distance.is_empty() {
        return Vec::new();
    }

    let usable = |index: usize| {
        velocity
            .get(index)
            .copied()
            .filter(|speed| *speed != 0.0 && !speed.is_nan())
    };

    let mut time = Vec::with_capacity(distance.len());
    time.push(0.0);

    let mut elapsed = 0.0;
    for (index, pair) in distance.windows(2).enumerate() {
        let current = index + 1;
        let speed = usable(current).or_else(|| usable(index)).unwrap_or(1.0);

        elapsed += (pair[1] - pair[0]) / speed;
        time.push(elapsed);
    }

    time
}

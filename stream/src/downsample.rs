/// Upper bound for points handed to a chart.
pub const MAX_CHART_POINTS: usize = 150;

/// Stride that spreads a series of `len` samples over at most
/// roughly `max_points` points.
#[inline]
pub const fn chart_stride(len: usize, max_points: usize) -> usize {
    if max_points == 0 {
        return 1;
    }

    let stride = len / max_points;

    if stride < 1 { 1 } else { stride }
}

/// Keeps every `stride`-th element starting with the first one and
/// truncates the result to `max_points` elements.
///
/// A zero stride is treated as one.
pub fn downsample<T: Clone>(data: &[T], stride: usize, max_points: usize) -> Vec<T> {
    data.iter()
        .step_by(stride.max(1))
        .take(max_points)
        .cloned()
        .collect()
}

/// [`downsample`] with the stride derived from the series length.
pub fn downsample_for_chart<T: Clone>(data: &[T], max_points: usize) -> Vec<T> {
    downsample(data, chart_stride(data.len(), max_points), max_points)
}

/// Fixed-interval thinning without a point cap.
pub fn every_nth<T: Clone>(data: &[T], interval: usize) -> Vec<T> {
    downsample(data, interval, usize::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_first_and_every_stride() {
        let data = (0..10).collect::<Vec<u32>>();

        assert_eq!(downsample(&data, 3, 150), vec![0, 3, 6, 9]);
    }

    #[test]
    fn truncates_to_max_points() {
        let data = (0..10).collect::<Vec<u32>>();

        assert_eq!(downsample(&data, 1, 4), vec![0, 1, 2, 3]);
    }

    #[test]
    fn empty_and_zero_stride() {
        assert!(downsample::<f64>(&[], 5, 150).is_empty());
        assert_eq!(downsample(&[1, 2, 3], 0, 150), vec![1, 2, 3]);
    }

    #[test]
    fn stride_for_chart() {
        assert_eq!(chart_stride(0, MAX_CHART_POINTS), 1);
        assert_eq!(chart_stride(149, MAX_CHART_POINTS), 1);
        assert_eq!(chart_stride(3_600, MAX_CHART_POINTS), 24);
        assert_eq!(chart_stride(10, 0), 1);
    }

    #[test]
    fn chart_series_bounded() {
        for len in [0, 1, 150, 151, 299, 300, 301, 3_601, 20_000] {
            let data = (0..len).collect::<Vec<usize>>();
            let result = downsample_for_chart(&data, MAX_CHART_POINTS);

            assert!(result.len() <= MAX_CHART_POINTS, "len {len}");
            assert_eq!(result.first().copied(), data.first().copied());
        }
    }

    #[test]
    fn fixed_interval() {
        let data = (0..45).collect::<Vec<u32>>();

        assert_eq!(every_nth(&data, 20), vec![0, 20, 40]);
    }
}

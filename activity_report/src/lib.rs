//! Every stream analysis of one activity, bundled for a rendering layer.

use fastest_segment::{CANONICAL_TARGETS, FastestKmRecord, fastest_records};
use heart_rate::{ZoneDistribution, ZoneOptions, average_heart_rate, zones_from_stream};
use pace::{
    SegmentStat, SlopeOptions, Split, pace_min_per_km, slope::segments_from_streams,
    splits::km_splits,
};
use stream::{MAX_CHART_POINTS, StreamError, StreamKind, StreamSet, chart_stride, downsample};

#[derive(Debug, Clone)]
pub struct ReportOptions {
    pub slope: SlopeOptions,
    pub zones: ZoneOptions,
    /// Target distances in meters for fastest segments
    pub targets: Vec<f64>,
    pub max_chart_points: usize,
}

impl ReportOptions {
    pub fn new() -> Self {
        Self {
            slope: SlopeOptions::new(),
            zones: ZoneOptions::new(),
            targets: CANONICAL_TARGETS.to_vec(),
            max_chart_points: MAX_CHART_POINTS,
        }
    }

    pub fn set_slope(mut self, slope: SlopeOptions) -> Self {
        self.slope = slope;
        self
    }

    pub fn set_zones(mut self, zones: ZoneOptions) -> Self {
        self.zones = zones;
        self
    }

    pub fn set_targets(mut self, targets: impl Into<Vec<f64>>) -> Self {
        self.targets = targets.into();
        self
    }

    pub fn set_max_chart_points(mut self, max_chart_points: usize) -> Self {
        self.max_chart_points = max_chart_points;
        self
    }
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// Streams thinned out for a line chart. All series share the stride taken
/// from the distance stream, so equal indices still line up.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ChartSeries {
    pub sample_index: Vec<usize>,
    pub distance_km: Vec<f64>,
    pub pace_min_per_km: Vec<Option<f64>>,
    pub altitude: Vec<f64>,
    pub heart_rate: Vec<f64>,
}

impl ChartSeries {
    pub fn from_streams(streams: &StreamSet, max_points: usize) -> Self {
        let distance = streams.data(StreamKind::Distance);
        let stride = chart_stride(distance.len().max(1), max_points);

        let sample_index = (0..distance.len()).collect::<Vec<_>>();
        let distance_km = distance.iter().map(|this| this / 1000.0).collect::<Vec<_>>();
        let pace = streams
            .data(StreamKind::Velocity)
            .iter()
            .map(|this| pace_min_per_km(*this))
            .collect::<Vec<_>>();

        Self {
            sample_index: downsample(&sample_index, stride, max_points),
            distance_km: downsample(&distance_km, stride, max_points),
            pace_min_per_km: downsample(&pace, stride, max_points),
            altitude: downsample(streams.data(StreamKind::Altitude), stride, max_points),
            heart_rate: downsample(streams.data(StreamKind::HeartRate), stride, max_points),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ActivityReport {
    pub activity_id: String,
    /// `None` when distance, altitude or time are unavailable
    pub segments: Option<[SegmentStat; 3]>,
    pub fastest: Vec<FastestKmRecord>,
    /// `None` when the activity has no heart-rate data
    pub zones: Option<ZoneDistribution>,
    pub average_heart_rate: Option<f64>,
    pub splits: Vec<Split>,
    pub chart: ChartSeries,
}

impl ActivityReport {
    /// Runs every analysis over the streams of one activity.
    ///
    /// Fails only when streams that must be parallel differ in length.
    pub fn build(
        activity_id: impl Into<String>,
        streams: &StreamSet,
        options: &ReportOptions,
    ) -> Result<Self, StreamError> {
        let activity_id = activity_id.into();

        let distance = streams.data(StreamKind::Distance);
        let heart_rate = streams.get(StreamKind::HeartRate);

        let segments = segments_from_streams(streams, &options.slope)?;
        let fastest = fastest_records(distance, &activity_id, &options.targets);
        let zones = heart_rate.and_then(|this| zones_from_stream(this, &options.zones));
        let average_heart_rate = average_heart_rate(streams.data(StreamKind::HeartRate));
        let splits = km_splits(distance, streams.data(StreamKind::Velocity));
        let chart = ChartSeries::from_streams(streams, options.max_chart_points);

        tracing::info!(
            activity_id = %activity_id,
            samples = distance.len(),
            records = fastest.len(),
            splits = splits.len(),
            has_zones = zones.is_some(),
            "activity report built"
        );

        Ok(Self {
            activity_id,
            segments,
            fastest,
            zones,
            average_heart_rate,
            splits,
            chart,
        })
    }
}

#[cfg(test)]
mod tests {
    use heart_rate::HeartRateZone;
    use pace::SegmentCategory;
    use stream::Stream;

    use super::*;

    /// Flat 3 km at 4 m/s, one sample per second, then a 1 km climb.
    fn run() -> StreamSet {
        let len = 1_001;

        let distance = (0..len).map(|i| i as f64 * 4.0).collect::<Vec<_>>();
        let altitude = (0..len)
            .map(|i| match i {
                ..750 => 100.0,
                _ => 100.0 + (i - 750) as f64 * 0.4,
            })
            .collect::<Vec<_>>();
        let time = (0..len).map(|i| i as f64).collect::<Vec<_>>();
        let heart_rate = (0..len)
            .map(|i| if i < 500 { 130.0 } else { 180.0 })
            .collect::<Vec<_>>();

        StreamSet::new()
            .with(Stream::new(StreamKind::Distance, distance))
            .with(Stream::new(StreamKind::Altitude, altitude))
            .with(Stream::new(StreamKind::Time, time))
            .with(Stream::new(StreamKind::Velocity, vec![4.0; len]))
            .with(Stream::new(StreamKind::HeartRate, heart_rate))
    }

    #[test]
    fn full_report() {
        let report = ActivityReport::build("1234", &run(), &ReportOptions::default())
            .expect("parallel streams");

        assert_eq!(report.activity_id, "1234");

        let segments = report.segments.expect("complete streams");
        assert_eq!(segments[0].category, SegmentCategory::Climb);
        assert_eq!(segments[0].distance_meters, 1000.0);
        assert_eq!(segments[1].distance_meters, 3000.0);
        assert_eq!(segments[2].distance_meters, 0.0);

        assert_eq!(report.fastest.len(), 1);
        assert_eq!(report.fastest[0].elapsed_samples, 250);

        let zones = report.zones.expect("heart rate recorded");
        assert_eq!(zones.zone(HeartRateZone::Zone1).samples, 500);
        assert_eq!(zones.zone(HeartRateZone::Zone5).samples, 501);

        assert_eq!(
            report.average_heart_rate,
            Some((500.0 * 130.0 + 501.0 * 180.0) / 1001.0)
        );
        assert_eq!(report.splits.len(), 4);
        assert!(report.splits.iter().all(|this| !this.partial));
    }

    #[test]
    fn chart_series_aligned() {
        let options = ReportOptions::default().set_max_chart_points(100);
        let report = ActivityReport::build("1", &run(), &options).expect("parallel streams");

        let chart = report.chart;
        assert_eq!(chart.sample_index.len(), 100);
        assert_eq!(chart.sample_index[..3], [0, 10, 20]);
        assert_eq!(chart.distance_km[1], 0.04);
        assert_eq!(chart.altitude.len(), 100);
        assert_eq!(chart.heart_rate.len(), 100);
        assert_eq!(chart.pace_min_per_km[0], pace_min_per_km(4.0));
    }

    #[test]
    fn swim_without_gps() {
        let streams = StreamSet::new().with(
            Stream::new(StreamKind::HeartRate, vec![120.0, 125.0, 130.0]).with_original_size(9),
        );

        let report = ActivityReport::build("7", &streams, &ReportOptions::default())
            .expect("nothing to pair");

        assert_eq!(report.segments, None);
        assert!(report.fastest.is_empty());
        assert!(report.splits.is_empty());
        assert_eq!(report.zones.map(|this| this.total_seconds), Some(9.0));
        assert!(report.chart.distance_km.is_empty());
        assert_eq!(report.chart.heart_rate.len(), 3);
    }

    #[test]
    fn mismatched_streams_rejected() {
        let full = run();
        let mut broken = [StreamKind::Distance, StreamKind::Altitude, StreamKind::Velocity]
            .into_iter()
            .filter_map(|kind| full.get(kind).cloned())
            .collect::<StreamSet>();
        broken.insert(Stream::new(StreamKind::Time, vec![0.0, 1.0]));

        let err = ActivityReport::build("1", &broken, &ReportOptions::default()).unwrap_err();

        assert_eq!(
            err,
            StreamError::LengthMismatch {
                stream: "time",
                expected: 1001,
                actual: 2,
            }
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serializes_for_rendering() {
        let report = ActivityReport::build("1", &run(), &ReportOptions::default())
            .expect("parallel streams");

        let json = serde_json::to_value(&report).expect("serializable");

        assert_eq!(json["activity_id"], "1");
        assert_eq!(json["segments"][1]["category"], "flat");
        assert_eq!(json["fastest"][0]["target_distance_meters"], 1000.0);
    }
}

use crate::Activity;

/// Heart-rate figures across an activity history.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HeartRateOverview {
    /// Mean of the per-activity average heart rates
    pub average_heartrate: f64,
    pub max_heartrate: f64,
    /// Activity where `max_heartrate` was recorded
    pub max_activity_id: u64,
    /// Activities that carried heart-rate data
    pub activity_count: usize,
}

/// `None` when no activity was recorded with a heart-rate monitor.
pub fn heart_rate_overview<'a>(
    activities: impl IntoIterator<Item = &'a Activity>,
) -> Option<HeartRateOverview> {
    let mut overview: Option<HeartRateOverview> = None;
    let mut average_sum = 0.0;

    for activity in activities {
        let (Some(average), Some(max)) = (activity.average_heartrate, activity.max_heartrate) else {
            continue;
        };

        average_sum += average;

        let this = overview.get_or_insert(HeartRateOverview {
            average_heartrate: 0.0,
            max_heartrate: max,
            max_activity_id: activity.activity_id,
            activity_count: 0,
        });

        this.activity_count += 1;
        if max > this.max_heartrate {
            this.max_heartrate = max;
            this.max_activity_id = activity.activity_id;
        }
    }

    overview.map(|mut this| {
        this.average_heartrate = average_sum / this.activity_count as f64;
        this
    })
}

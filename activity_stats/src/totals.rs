use std::collections::BTreeMap;

use time::Month;

use crate::Activity;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Totals {
    pub distance_km: f64,
    pub elevation_m: f64,
    pub moving_hours: f64,
    pub count: usize,
}

impl Totals {
    fn add(&mut self, activity: &Activity) {
        self.distance_km += activity.distance / 1000.0;
        self.elevation_m += activity.total_elevation_gain;
        self.moving_hours += activity.moving_time / 3600.0;
        self.count += 1;
    }
}

impl<'a> FromIterator<&'a Activity> for Totals {
    fn from_iter<T: IntoIterator<Item = &'a Activity>>(iter: T) -> Self {
        iter.into_iter().fold(Self::default(), |mut acc, this| {
            acc.add(this);
            acc
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MonthlySummary {
    pub month: Month,
    pub totals: Totals,
}

/// Totals per calendar month, January first, regardless of the year.
pub fn monthly_summary<'a>(
    activities: impl IntoIterator<Item = &'a Activity>,
) -> [MonthlySummary; 12] {
    let mut summary: [MonthlySummary; 12] = std::array::from_fn(|index| MonthlySummary {
        month: Month::January.nth_next(index as u8),
        totals: Totals::default(),
    });

    for activity in activities {
        let index = usize::from(u8::from(activity.start_day().month())) - 1;
        summary[index].totals.add(activity);
    }

    summary
}

/// Number of activities per sport type.
pub fn sport_breakdown<'a>(
    activities: impl IntoIterator<Item = &'a Activity>,
) -> BTreeMap<String, usize> {
    activities
        .into_iter()
        .fold(BTreeMap::new(), |mut acc, this| {
            *acc.entry(this.sport_type.clone()).or_default() += 1;
            acc
        })
}

#[cfg(test)]
mod tests {
    use time::macros::datetime;

    use super::*;
    use crate::{ActivityFilter, activity::tests::activity};

    #[test]
    fn totals_in_display_units() {
        let activities = [
            activity(1, "Run", datetime!(2024-03-04 07:00 UTC), 6000.0),
            activity(2, "Run", datetime!(2024-03-06 07:00 UTC), 12000.0),
        ];

        let totals = activities.iter().collect::<Totals>();

        assert_eq!(totals.distance_km, 18.0);
        assert_eq!(totals.elevation_m, 180.0);
        assert!((totals.moving_hours - 6000.0 / 3600.0).abs() < 1e-9);
        assert_eq!(totals.count, 2);
    }

    #[test]
    fn filtered_totals() {
        let activities = [
            activity(1, "Run", datetime!(2024-03-04 07:00 UTC), 6000.0),
            activity(2, "Ride", datetime!(2024-03-06 07:00 UTC), 30000.0),
        ];

        let totals = ActivityFilter::new()
            .set_sport_type("Ride")
            .apply(&activities)
            .into_iter()
            .collect::<Totals>();

        assert_eq!(totals.distance_km, 30.0);
        assert_eq!(totals.count, 1);
    }

    #[test]
    fn months_across_years() {
        let activities = [
            activity(1, "Run", datetime!(2023-01-15 07:00 UTC), 5000.0),
            activity(2, "Run", datetime!(2024-01-20 07:00 UTC), 5000.0),
            activity(3, "Swim", datetime!(2024-12-31 23:00 UTC), 2000.0),
        ];

        let summary = monthly_summary(&activities);

        assert_eq!(summary[0].month, Month::January);
        assert_eq!(summary[0].totals.count, 2);
        assert_eq!(summary[0].totals.distance_km, 10.0);
        assert_eq!(summary[11].month, Month::December);
        assert_eq!(summary[11].totals.count, 1);
        assert!(summary[1..11].iter().all(|this| this.totals == Totals::default()));
    }

    #[test]
    fn sports() {
        let activities = [
            activity(1, "Run", datetime!(2024-03-04 07:00 UTC), 5000.0),
            activity(2, "Ride", datetime!(2024-03-05 07:00 UTC), 5000.0),
            activity(3, "Run", datetime!(2024-03-06 07:00 UTC), 5000.0),
        ];

        let breakdown = sport_breakdown(&activities);

        assert_eq!(breakdown.get("Run"), Some(&2));
        assert_eq!(breakdown.get("Ride"), Some(&1));
        assert_eq!(breakdown.len(), 2);
    }
}

//! Weekly and monthly training goals.
//!
//! A goal targets one metric over the period containing its deadline:
//! the Monday-to-Sunday week for weekly goals, the calendar month for
//! monthly ones. Activities are placed by their UTC start date.

use thiserror::Error;
use time::{Date, Duration};

use crate::{Activity, Totals};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum GoalError {
    /// Progress can't be measured against a zero or negative objective
    #[error("Invalid objective: {0}")]
    InvalidObjective(f64),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum GoalPeriod {
    Week,
    Month,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum GoalMetric {
    /// Kilometers
    Distance,
    /// Meters of elevation gain
    Elevation,
    /// Hours of moving time
    Time,
    ActivityCount,
}

impl GoalMetric {
    pub const fn unit(self) -> &'static str {
        match self {
            GoalMetric::Distance => "km",
            GoalMetric::Elevation => "m",
            GoalMetric::Time => "h",
            GoalMetric::ActivityCount => "",
        }
    }

    fn of(self, totals: &Totals) -> f64 {
        match self {
            GoalMetric::Distance => totals.distance_km,
            GoalMetric::Elevation => totals.elevation_m,
            GoalMetric::Time => totals.moving_hours,
            GoalMetric::ActivityCount => totals.count as f64,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Goal {
    pub id: String,
    pub period: GoalPeriod,
    pub metric: GoalMetric,
    pub objective: f64,
    pub deadline: Date,
}

impl Goal {
    /// Progress towards the objective in percent, capped at 100.
    pub fn progress_percent(&self, activities: &[Activity]) -> Result<f64, GoalError> {
        if !(self.objective > 0.0) {
            return Err(GoalError::InvalidObjective(self.objective));
        }

        let total = calculate_total(activities, self.period, self.metric, self.deadline);

        Ok(((total / self.objective) * 100.0).min(100.0))
    }

    /// Whether the deadline is strictly before `today`.
    pub fn is_expired(&self, today: Date) -> bool {
        today > self.deadline
    }
}

/// First day and the day after the last day of the period containing `deadline`.
pub fn period_bounds(period: GoalPeriod, deadline: Date) -> (Date, Date) {
    match period {
        GoalPeriod::Week => {
            let offset = deadline.weekday().number_days_from_monday();
            let start = deadline - Duration::days(i64::from(offset));
            (start, start + Duration::days(7))
        }
        GoalPeriod::Month => {
            let start = deadline.replace_day(1).unwrap_or(deadline);
            let days = i64::from(time::util::days_in_year_month(deadline.year(), deadline.month()));
            (start, start + Duration::days(days))
        }
    }
}

pub fn activities_in_period(
    activities: &[Activity],
    period: GoalPeriod,
    deadline: Date,
) -> Vec<&Activity> {
    let (start, end) = period_bounds(period, deadline);

    activities
        .iter()
        .filter(|this| {
            let day = this.start_day();
            start <= day && day < end
        })
        .collect()
}

/// Goal metric summed over the period containing `deadline`.
pub fn calculate_total(
    activities: &[Activity],
    period: GoalPeriod,
    metric: GoalMetric,
    deadline: Date,
) -> f64 {
    let totals = activities_in_period(activities, period, deadline)
        .into_iter()
        .collect::<Totals>();

    tracing::debug!(?period, ?metric, %deadline, count = totals.count, "goal period totals");

    metric.of(&totals)
}

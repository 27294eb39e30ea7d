use time::{Month, OffsetDateTime, UtcOffset};

/// Activity summary as synced from the provider.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Activity {
    #[cfg_attr(feature = "serde", serde(rename = "activityId"))]
    pub activity_id: u64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub name: String,
    /// Meters
    pub distance: f64,
    /// Seconds
    pub moving_time: f64,
    /// Seconds
    pub elapsed_time: f64,
    /// Meters
    pub total_elevation_gain: f64,
    pub sport_type: String,
    #[cfg_attr(feature = "serde", serde(with = "time::serde::rfc3339"))]
    pub start_date: OffsetDateTime,
    #[cfg_attr(feature = "serde", serde(default))]
    pub average_heartrate: Option<f64>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub max_heartrate: Option<f64>,
}

impl Activity {
    /// Calendar date of the start, in UTC.
    pub fn start_day(&self) -> time::Date {
        self.start_date.to_offset(UtcOffset::UTC).date()
    }
}

/// Narrows a history down by sport, year and month. `None` matches anything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActivityFilter {
    pub sport_type: Option<String>,
    pub year: Option<i32>,
    pub month: Option<Month>,
}

impl ActivityFilter {
    pub const fn new() -> Self {
        Self {
            sport_type: None,
            year: None,
            month: None,
        }
    }

    pub fn set_sport_type(mut self, sport_type: impl Into<String>) -> Self {
        self.sport_type = Some(sport_type.into());
        self
    }

    pub const fn set_year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    pub const fn set_month(mut self, month: Month) -> Self {
        self.month = Some(month);
        self
    }

    pub fn matches(&self, activity: &Activity) -> bool {
        let day = activity.start_day();

        self.sport_type
            .as_deref()
            .is_none_or(|sport| sport == activity.sport_type)
            && self.year.is_none_or(|year| year == day.year())
            && self.month.is_none_or(|month| month == day.month())
    }

    pub fn apply<'a>(&self, activities: &'a [Activity]) -> Vec<&'a Activity> {
        activities.iter().filter(|this| self.matches(this)).collect()
    }
}

//! Totals, monthly summaries and goals over an athlete's activity history.
//!
//! Works on activity summaries only; streams are handled by the per-activity
//! crates.

mod activity;
pub mod goals;
mod heart_rate;
mod totals;

pub use activity::*;
pub use goals::{Goal, GoalError, GoalMetric, GoalPeriod};
pub use heart_rate::*;
pub use totals::*;

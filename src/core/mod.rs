pub mod aggregate;
pub mod calculator;
pub mod classify;
pub mod filter;
pub mod logic;

pub use aggregate::{
    aggregate_hours, aggregate_months, aggregate_time_series, aggregate_weekdays,
    build_cluster_insight, build_dashboard_model,
};
pub use classify::classify;
pub use filter::filter;
pub use logic::Core;

use crate::errors::AppResult;
use crate::models::Checkin;
use chrono::{DateTime, Utc};

/// Pair each check-in with its parsed instant, stably sorted by instant.
pub(crate) fn sort_by_instant(checkins: &[Checkin]) -> AppResult<Vec<(DateTime<Utc>, &Checkin)>> {
    let mut sorted = checkins
        .iter()
        .map(|checkin| checkin.instant().map(|instant| (instant, checkin)))
        .collect::<AppResult<Vec<_>>>()?;
    sorted.sort_by_key(|(instant, _)| *instant);
    Ok(sorted)
}

//! Filter pipeline: range cutoff, weekday set and daypart, ANDed.

use super::sort_by_instant;
use crate::errors::AppResult;
use crate::models::{Checkin, DashboardFilters};
use chrono::{Datelike, TimeDelta, TimeZone, Timelike};
use tracing::debug;

/// Keep the check-ins matching `spec`, evaluating weekday and hour in `tz`.
///
/// The range window is anchored on the latest check-in, not on "now", and
/// includes its lower bound. `spec.granularity` is ignored here.
pub fn filter<Tz: TimeZone>(
    checkins: &[Checkin],
    spec: &DashboardFilters,
    tz: &Tz,
) -> AppResult<Vec<Checkin>> {
    let sorted = sort_by_instant(checkins)?;
    let Some((latest, _)) = sorted.last() else {
        return Ok(Vec::new());
    };

    let cutoff = spec.range.days().map(|days| *latest - TimeDelta::days(days));

    let kept: Vec<Checkin> = sorted
        .iter()
        .filter(|(instant, _)| {
            if cutoff.is_some_and(|bound| *instant < bound) {
                return false;
            }
            let local = instant.with_timezone(tz);
            spec.weekday.matches(local.weekday().num_days_from_sunday())
                && spec.daypart.matches(local.hour())
        })
        .map(|(_, checkin)| (*checkin).clone())
        .collect();

    debug!(
        input = checkins.len(),
        kept = kept.len(),
        range = spec.range.as_str(),
        weekday = spec.weekday.as_str(),
        daypart = spec.daypart.as_str(),
        "filtered check-ins"
    );

    Ok(kept)
}

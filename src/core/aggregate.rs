//! Aggregator: dashboard views derived from a filtered check-in list.

use super::calculator::buckets::{bucket_label, bucket_start, local_date, local_day_start_millis};
use super::calculator::clusters::{close_runs, is_cluster};
use super::{filter, sort_by_instant};
use crate::errors::AppResult;
use crate::models::{
    BucketPoint, Checkin, ClusterInsight, DashboardFilters, DashboardModel, Granularity,
    HourCount, Kpis, SortOrder, WeekdayCount,
};
use chrono::{Datelike, NaiveDate, TimeZone, Timelike};
use std::collections::{BTreeMap, BTreeSet};
use tracing::{debug, instrument};

pub const WEEKDAY_LABELS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

const SERIES_MIN: usize = 6;
const SERIES_MAX: usize = 48;
const TABLE_MIN: usize = 8;
const TABLE_MAX: usize = 120;

/// Group check-ins into calendar buckets, ascending by bucket start.
fn group_buckets<Tz: TimeZone>(
    checkins: &[Checkin],
    granularity: Granularity,
    tz: &Tz,
) -> AppResult<Vec<BucketPoint>> {
    let mut points: BTreeMap<NaiveDate, BucketPoint> = BTreeMap::new();

    for checkin in checkins {
        let start = bucket_start(local_date(&checkin.instant()?, tz), granularity);
        points
            .entry(start)
            .or_insert_with(|| {
                BucketPoint::new(
                    bucket_label(start, granularity),
                    local_day_start_millis(tz, start),
                )
            })
            .record(checkin);
    }

    Ok(points.into_values().collect())
}

/// Primary time series. Ordering is applied before truncation, so `desc`
/// keeps the most recent buckets and `asc` the earliest.
pub fn aggregate_time_series<Tz: TimeZone>(
    checkins: &[Checkin],
    granularity: Granularity,
    order: SortOrder,
    limit: usize,
    tz: &Tz,
) -> AppResult<Vec<BucketPoint>> {
    let mut points = group_buckets(checkins, granularity, tz)?;
    if order.is_desc() {
        points.reverse();
    }
    points.truncate(limit.clamp(SERIES_MIN, SERIES_MAX));
    Ok(points)
}

/// Monthly trend over the whole filtered set; never truncated.
pub fn aggregate_months<Tz: TimeZone>(
    checkins: &[Checkin],
    order: SortOrder,
    tz: &Tz,
) -> AppResult<Vec<BucketPoint>> {
    let mut points = group_buckets(checkins, Granularity::Month, tz)?;
    if order.is_desc() {
        points.reverse();
    }
    Ok(points)
}

pub fn aggregate_hours<Tz: TimeZone>(checkins: &[Checkin], tz: &Tz) -> AppResult<Vec<HourCount>> {
    let mut slots = [0usize; 24];
    for checkin in checkins {
        slots[checkin.instant()?.with_timezone(tz).hour() as usize] += 1;
    }
    Ok(slots
        .iter()
        .enumerate()
        .map(|(hour, count)| HourCount {
            hour: hour as u32,
            count: *count,
        })
        .collect())
}

/// Sunday-first weekday histogram.
pub fn aggregate_weekdays<Tz: TimeZone>(
    checkins: &[Checkin],
    tz: &Tz,
) -> AppResult<Vec<WeekdayCount>> {
    let mut slots = [0usize; 7];
    for checkin in checkins {
        let weekday = checkin.instant()?.with_timezone(tz).weekday();
        slots[weekday.num_days_from_sunday() as usize] += 1;
    }
    Ok(WEEKDAY_LABELS
        .iter()
        .zip(slots)
        .map(|(label, count)| WeekdayCount {
            label: label.to_string(),
            count,
        })
        .collect())
}

/// Re-derive clusters on `checkins` instead of trusting `is_espresso`:
/// after filtering, a cluster may have lost members.
pub fn build_cluster_insight(checkins: &[Checkin]) -> AppResult<ClusterInsight> {
    let sorted = sort_by_instant(checkins)?;
    if sorted.is_empty() {
        return Ok(ClusterInsight::default());
    }

    let epochs: Vec<i64> = sorted.iter().map(|(dt, _)| dt.timestamp_millis()).collect();
    let mut insight = ClusterInsight {
        largest_cluster: 1,
        ..ClusterInsight::default()
    };

    for run in close_runs(&epochs) {
        if is_cluster(&run) {
            insight.cluster_events += 1;
            insight.close_event_entries += run.len();
        }
        insight.largest_cluster = insight.largest_cluster.max(run.len());
    }

    Ok(insight)
}

fn build_kpis<Tz: TimeZone>(checkins: &[Checkin], tz: &Tz) -> AppResult<Kpis> {
    let total = checkins.len();
    let espresso_count = checkins.iter().filter(|c| c.is_espresso).count();

    let days = checkins
        .iter()
        .map(|c| c.instant().map(|dt| local_date(&dt, tz)))
        .collect::<AppResult<BTreeSet<NaiveDate>>>()?;

    Ok(Kpis {
        total,
        espresso_count,
        normal_count: total - espresso_count,
        espresso_ratio: if total == 0 {
            0.0
        } else {
            espresso_count as f64 / total as f64
        },
        average_per_day: if days.is_empty() {
            0.0
        } else {
            total as f64 / days.len() as f64
        },
    })
}

/// Ascending by instant, truncated, then reversed for `desc`.
fn build_table_rows(checkins: &[Checkin], order: SortOrder, limit: usize) -> AppResult<Vec<Checkin>> {
    let mut rows: Vec<Checkin> = sort_by_instant(checkins)?
        .into_iter()
        .map(|(_, checkin)| checkin.clone())
        .collect();
    rows.truncate(limit.saturating_mul(4).clamp(TABLE_MIN, TABLE_MAX));
    if order.is_desc() {
        rows.reverse();
    }
    Ok(rows)
}

/// Filter `checkins` and derive every dashboard view from the result.
#[instrument(skip_all, fields(checkins = checkins.len(), limit = limit))]
pub fn build_dashboard_model<Tz: TimeZone>(
    checkins: &[Checkin],
    filters: &DashboardFilters,
    order: SortOrder,
    limit: usize,
    tz: &Tz,
) -> AppResult<DashboardModel> {
    let filtered = filter(checkins, filters, tz)?;

    let model = DashboardModel {
        kpis: build_kpis(&filtered, tz)?,
        time_series: aggregate_time_series(&filtered, filters.granularity, order, limit, tz)?,
        hourly: aggregate_hours(&filtered, tz)?,
        weekday: aggregate_weekdays(&filtered, tz)?,
        monthly: aggregate_months(&filtered, order, tz)?,
        insight: build_cluster_insight(&filtered)?,
        table_rows: build_table_rows(&filtered, order, limit)?,
        filtered,
    };

    debug!(
        filtered = model.filtered.len(),
        buckets = model.time_series.len(),
        months = model.monthly.len(),
        "built dashboard model"
    );

    Ok(model)
}

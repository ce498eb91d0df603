//! Calendar bucket keys (day / ISO week / month) in an injected time zone.

use crate::models::Granularity;
use chrono::{DateTime, Datelike, NaiveDate, NaiveTime, TimeDelta, TimeZone, Utc};

/// First calendar day of the bucket containing `date`.
pub fn bucket_start(date: NaiveDate, granularity: Granularity) -> NaiveDate {
    match granularity {
        Granularity::Day => date,
        // ISO weeks start on Monday
        Granularity::Week => date - TimeDelta::days(date.weekday().num_days_from_monday() as i64),
        Granularity::Month => NaiveDate::from_ymd_opt(date.year(), date.month(), 1).unwrap_or(date),
    }
}

pub fn bucket_label(start: NaiveDate, granularity: Granularity) -> String {
    match granularity {
        Granularity::Month => start.format("%Y-%m").to_string(),
        Granularity::Day | Granularity::Week => start.format("%Y-%m-%d").to_string(),
    }
}

/// Epoch milliseconds of the first existing local instant of `date`.
/// Zones that skip midnight on a DST switch fall forward to the next hour.
pub fn local_day_start_millis<Tz: TimeZone>(tz: &Tz, date: NaiveDate) -> i64 {
    let midnight = date.and_time(NaiveTime::MIN);

    for step in 0..24 {
        let naive = midnight + TimeDelta::hours(step);
        if let Some(dt) = tz.from_local_datetime(&naive).earliest() {
            return dt.timestamp_millis();
        }
    }

    midnight.and_utc().timestamp_millis()
}

/// Calendar date of `instant` as seen in `tz`.
pub fn local_date<Tz: TimeZone>(instant: &DateTime<Utc>, tz: &Tz) -> NaiveDate {
    instant.with_timezone(tz).date_naive()
}

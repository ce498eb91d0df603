mod common;
use brewlog::core::filter;
use brewlog::errors::AppError;
use brewlog::models::{Checkin, DashboardFilters, Daypart, Range, WeekdayFilter};
use chrono::{FixedOffset, Utc};
use common::{classified, dashboard_fixture};

fn spec(range: Range, weekday: WeekdayFilter, daypart: Daypart) -> DashboardFilters {
    DashboardFilters {
        range,
        weekday,
        daypart,
        ..DashboardFilters::default()
    }
}

fn ids(rows: &[Checkin]) -> Vec<&str> {
    rows.iter().map(|r| r.id.as_str()).collect()
}

#[test]
fn test_morning_keeps_hours_five_to_eleven() {
    let rows = filter(
        &dashboard_fixture(),
        &spec(Range::All, WeekdayFilter::All, Daypart::Morning),
        &Utc,
    )
    .unwrap();

    assert_eq!(ids(&rows), vec!["a", "b"]);
}

#[test]
fn test_dayparts_partition_the_day() {
    let events = classified(&[
        ("h04", "2026-02-10T04:59:00.000Z"),
        ("h05", "2026-02-10T05:00:00.000Z"),
        ("h11", "2026-02-10T11:59:00.000Z"),
        ("h12", "2026-02-10T12:00:00.000Z"),
        ("h16", "2026-02-10T16:30:00.000Z"),
        ("h17", "2026-02-10T17:00:00.000Z"),
        ("h21", "2026-02-10T21:45:00.000Z"),
        ("h22", "2026-02-10T22:00:00.000Z"),
    ]);
    let run = |daypart| filter(&events, &spec(Range::All, WeekdayFilter::All, daypart), &Utc).unwrap();

    assert_eq!(ids(&run(Daypart::Morning)), vec!["h05", "h11"]);
    assert_eq!(ids(&run(Daypart::Afternoon)), vec!["h12", "h16"]);
    assert_eq!(ids(&run(Daypart::Evening)), vec!["h17", "h21"]);
    assert_eq!(ids(&run(Daypart::Night)), vec!["h04", "h22"]);
    assert_eq!(run(Daypart::All).len(), events.len());
}

#[test]
fn test_range_cutoff_is_inclusive() {
    let events = classified(&[
        ("old", "2026-01-01T09:59:59.999Z"),
        ("edge", "2026-01-01T10:00:00.000Z"),
        ("mid", "2026-01-20T08:00:00.000Z"),
        ("latest", "2026-01-31T10:00:00.000Z"),
    ]);

    let rows = filter(
        &events,
        &spec(Range::Last30Days, WeekdayFilter::All, Daypart::All),
        &Utc,
    )
    .unwrap();
    assert_eq!(ids(&rows), vec!["edge", "mid", "latest"]);

    let all = filter(&events, &spec(Range::All, WeekdayFilter::All, Daypart::All), &Utc).unwrap();
    assert_eq!(all, events);
}

#[test]
fn test_weekday_filters() {
    // 2026-02-01 is a Sunday
    let events = dashboard_fixture();
    let run = |weekday| filter(&events, &spec(Range::All, weekday, Daypart::All), &Utc).unwrap();

    assert_eq!(ids(&run(WeekdayFilter::Weekends)), vec!["a", "b"]);
    assert_eq!(ids(&run(WeekdayFilter::Weekdays)), vec!["c", "d", "e"]);
    assert_eq!(ids(&run(WeekdayFilter::Tue)), vec!["d"]);
    assert!(run(WeekdayFilter::Sat).is_empty());
}

#[test]
fn test_weekday_and_hour_follow_injected_zone() {
    // 23:30 UTC Wednesday is 01:30 Thursday at +02:00
    let events = dashboard_fixture();
    let plus_two = FixedOffset::east_opt(2 * 3600).unwrap();

    let thu = filter(
        &events,
        &spec(Range::All, WeekdayFilter::Thu, Daypart::Night),
        &plus_two,
    )
    .unwrap();
    assert_eq!(ids(&thu), vec!["e"]);

    let wed_utc = filter(
        &events,
        &spec(Range::All, WeekdayFilter::Wed, Daypart::Night),
        &Utc,
    )
    .unwrap();
    assert_eq!(ids(&wed_utc), vec!["e"]);
}

#[test]
fn test_predicates_are_combined() {
    let rows = filter(
        &dashboard_fixture(),
        &spec(Range::Last30Days, WeekdayFilter::Weekdays, Daypart::Afternoon),
        &Utc,
    )
    .unwrap();
    assert_eq!(ids(&rows), vec!["c"]);
}

#[test]
fn test_filter_never_grows_and_keeps_order() {
    let events = dashboard_fixture();
    let rows = filter(&events, &DashboardFilters::default(), &Utc).unwrap();
    assert_eq!(rows, events);
}

#[test]
fn test_empty_input_ignores_spec() {
    let rows = filter(
        &[],
        &spec(Range::Last90Days, WeekdayFilter::Mon, Daypart::Night),
        &Utc,
    )
    .unwrap();
    assert!(rows.is_empty());
}

#[test]
fn test_malformed_timestamp_is_rejected() {
    let mut events = dashboard_fixture();
    events[2].created_at = "yesterday".to_string();

    let err = filter(&events, &DashboardFilters::default(), &Utc).unwrap_err();
    assert!(matches!(err, AppError::InvalidTimestamp(ref v) if v == "yesterday"));
}

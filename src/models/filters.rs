use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Date-range cutoff, relative to the latest check-in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum Range {
    #[serde(rename = "30d")]
    #[value(name = "30d")]
    Last30Days,
    #[serde(rename = "90d")]
    #[value(name = "90d")]
    Last90Days,
    #[serde(rename = "365d")]
    #[value(name = "365d")]
    Last365Days,
    #[serde(rename = "all")]
    #[value(name = "all")]
    All,
}

impl Range {
    /// Window length in days, `None` for `all`.
    pub fn days(&self) -> Option<i64> {
        match self {
            Range::Last30Days => Some(30),
            Range::Last90Days => Some(90),
            Range::Last365Days => Some(365),
            Range::All => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Range::Last30Days => "30d",
            Range::Last90Days => "90d",
            Range::Last365Days => "365d",
            Range::All => "all",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    Day,
    Week,
    Month,
}

impl Granularity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Granularity::Day => "day",
            Granularity::Week => "week",
            Granularity::Month => "month",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum WeekdayFilter {
    All,
    Weekdays,
    Weekends,
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
    Sun,
}

impl WeekdayFilter {
    /// Sunday-based index (Sun = 0) of a single-day filter.
    fn single_day(&self) -> Option<u32> {
        match self {
            WeekdayFilter::Sun => Some(0),
            WeekdayFilter::Mon => Some(1),
            WeekdayFilter::Tue => Some(2),
            WeekdayFilter::Wed => Some(3),
            WeekdayFilter::Thu => Some(4),
            WeekdayFilter::Fri => Some(5),
            WeekdayFilter::Sat => Some(6),
            WeekdayFilter::All | WeekdayFilter::Weekdays | WeekdayFilter::Weekends => None,
        }
    }

    /// `weekday` uses the Sunday = 0 convention.
    pub fn matches(&self, weekday: u32) -> bool {
        match self {
            WeekdayFilter::All => true,
            WeekdayFilter::Weekdays => (1..=5).contains(&weekday),
            WeekdayFilter::Weekends => weekday == 0 || weekday == 6,
            day => day.single_day() == Some(weekday),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            WeekdayFilter::All => "all",
            WeekdayFilter::Weekdays => "weekdays",
            WeekdayFilter::Weekends => "weekends",
            WeekdayFilter::Mon => "mon",
            WeekdayFilter::Tue => "tue",
            WeekdayFilter::Wed => "wed",
            WeekdayFilter::Thu => "thu",
            WeekdayFilter::Fri => "fri",
            WeekdayFilter::Sat => "sat",
            WeekdayFilter::Sun => "sun",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Daypart {
    All,
    Morning,
    Afternoon,
    Evening,
    Night,
}

impl Daypart {
    pub fn matches(&self, hour: u32) -> bool {
        match self {
            Daypart::All => true,
            Daypart::Morning => (5..=11).contains(&hour),
            Daypart::Afternoon => (12..=16).contains(&hour),
            Daypart::Evening => (17..=21).contains(&hour),
            // wraps midnight
            Daypart::Night => hour >= 22 || hour <= 4,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Daypart::All => "all",
            Daypart::Morning => "morning",
            Daypart::Afternoon => "afternoon",
            Daypart::Evening => "evening",
            Daypart::Night => "night",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn is_desc(&self) -> bool {
        matches!(self, SortOrder::Desc)
    }
}

/// Full set of dashboard controls supplied per query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardFilters {
    pub range: Range,
    pub granularity: Granularity,
    pub weekday: WeekdayFilter,
    pub daypart: Daypart,
}

impl Default for DashboardFilters {
    fn default() -> Self {
        Self {
            range: Range::All,
            granularity: Granularity::Day,
            weekday: WeekdayFilter::All,
            daypart: Daypart::All,
        }
    }
}

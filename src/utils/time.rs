//! Time utilities: timestamp parsing/normalization and time-zone selection.

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, FixedOffset, Offset, SecondsFormat, Utc};
use std::fmt;
use std::str::FromStr;

/// Parse an RFC 3339 timestamp into a UTC instant truncated to milliseconds.
pub fn parse_timestamp(s: &str) -> AppResult<DateTime<Utc>> {
    let parsed =
        DateTime::parse_from_rfc3339(s).map_err(|_| AppError::InvalidTimestamp(s.to_string()))?;
    DateTime::from_timestamp_millis(parsed.timestamp_millis())
        .ok_or_else(|| AppError::InvalidTimestamp(s.to_string()))
}

/// `2026-02-10T10:00:00.000Z`
pub fn format_timestamp(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Time zone used for calendar days, weekdays and hours.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Zone {
    /// Zone of the running process.
    Local,
    Fixed(FixedOffset),
}

impl Zone {
    pub fn utc() -> Self {
        Zone::Fixed(Utc.fix())
    }
}

impl FromStr for Zone {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        match s.to_lowercase().as_str() {
            "local" => return Ok(Zone::Local),
            "utc" | "z" => return Ok(Zone::utc()),
            _ => {}
        }

        // ±HH:MM or ±HHMM
        let invalid = || AppError::InvalidTimezone(s.to_string());
        let (sign, rest) = match s.split_at_checked(1) {
            Some(("+", rest)) => (1, rest),
            Some(("-", rest)) => (-1, rest),
            _ => return Err(invalid()),
        };
        let digits: String = rest.chars().filter(|c| *c != ':').collect();
        if digits.len() != 4 || !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid());
        }
        let hours: i32 = digits[..2].parse().map_err(|_| invalid())?;
        let minutes: i32 = digits[2..].parse().map_err(|_| invalid())?;
        if minutes >= 60 {
            return Err(invalid());
        }
        FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
            .map(Zone::Fixed)
            .ok_or_else(invalid)
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Zone::Local => write!(f, "local"),
            Zone::Fixed(offset) if offset.local_minus_utc() == 0 => write!(f, "utc"),
            Zone::Fixed(offset) => write!(f, "{offset}"),
        }
    }
}

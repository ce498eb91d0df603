use crate::errors::AppResult;
use crate::utils::time::parse_timestamp;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Label attached to every classified check-in.
pub const BOARD_NAME: &str = "Coffee";

/// Check-in as delivered by the ingest layer, before classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawCheckin {
    pub id: String,
    pub board_id: String,
    pub created_at: String, // any RFC 3339 timestamp
}

impl RawCheckin {
    pub fn new(id: impl Into<String>, board_id: impl Into<String>, created_at: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            board_id: board_id.into(),
            created_at: created_at.into(),
        }
    }
}

/// Classified check-in, in canonical (time, id) order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Checkin {
    pub id: String,
    pub board_id: String,
    pub board_name: String,
    pub created_at: String, // normalized: UTC, millisecond precision, `Z`
    pub is_espresso: bool,
    pub gap_to_prev_seconds: Option<i64>,
}

impl Checkin {
    /// Re-parse the stored timestamp.
    pub fn instant(&self) -> AppResult<DateTime<Utc>> {
        parse_timestamp(&self.created_at)
    }
}

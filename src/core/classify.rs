//! Classifier: canonical ordering, gap-to-previous and espresso flags.

use crate::core::calculator::clusters::{close_runs, is_cluster};
use crate::errors::AppResult;
use crate::models::{BOARD_NAME, Checkin, RawCheckin};
use crate::utils::time::{format_timestamp, parse_timestamp};
use chrono::{DateTime, Utc};
use tracing::debug;

/// Classify raw check-ins.
///
/// The output is sorted by instant (ties by `id`), one entry per input.
/// A single unparseable `createdAt` aborts the whole call.
pub fn classify(entries: &[RawCheckin]) -> AppResult<Vec<Checkin>> {
    let mut sorted: Vec<(DateTime<Utc>, &RawCheckin)> = entries
        .iter()
        .map(|entry| parse_timestamp(&entry.created_at).map(|dt| (dt, entry)))
        .collect::<AppResult<_>>()?;

    sorted.sort_by(|(lt, left), (rt, right)| lt.cmp(rt).then_with(|| left.id.cmp(&right.id)));

    let epochs: Vec<i64> = sorted.iter().map(|(dt, _)| dt.timestamp_millis()).collect();

    let mut espresso = vec![false; sorted.len()];
    for run in close_runs(&epochs).into_iter().filter(is_cluster) {
        espresso[run].fill(true);
    }

    let checkins: Vec<Checkin> = sorted
        .iter()
        .enumerate()
        .map(|(i, (dt, entry))| Checkin {
            id: entry.id.clone(),
            board_id: entry.board_id.clone(),
            board_name: BOARD_NAME.to_string(),
            created_at: format_timestamp(dt),
            is_espresso: espresso[i],
            gap_to_prev_seconds: (i > 0).then(|| gap_seconds(epochs[i - 1], epochs[i])),
        })
        .collect();

    debug!(
        total = checkins.len(),
        espresso = checkins.iter().filter(|c| c.is_espresso).count(),
        "classified check-ins"
    );

    Ok(checkins)
}

/// Whole seconds between two instants, halves rounded up.
fn gap_seconds(prev_ms: i64, current_ms: i64) -> i64 {
    ((current_ms - prev_ms) as f64 / 1000.0).round() as i64
}

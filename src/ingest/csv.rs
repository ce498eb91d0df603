//! Board export CSV: one file mixing `Board` and `Checkin` rows.

use crate::core::classify;
use crate::errors::{AppError, AppResult};
use crate::models::{Checkin, RawCheckin};
use std::io::Read;
use tracing::debug;

/// Columns the ingest cares about; any other column is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CsvRow {
    pub entity: String,
    pub board_id: String,
    pub board_name: String,
    pub checkin_id: String,
    pub checkin_board_id: String,
    pub checkin_created_at: String,
}

/// Header positions of the wanted columns; `None` when a column is absent.
struct ColumnIndex {
    entity: Option<usize>,
    board_id: Option<usize>,
    board_name: Option<usize>,
    checkin_id: Option<usize>,
    checkin_board_id: Option<usize>,
    checkin_created_at: Option<usize>,
}

impl ColumnIndex {
    fn from_headers(headers: &csv::StringRecord) -> Self {
        // a UTF-8 BOM sticks to the first header
        let find = |name: &str| {
            headers
                .iter()
                .position(|h| h.trim_start_matches('\u{feff}') == name)
        };
        Self {
            entity: find("entity"),
            board_id: find("board_id"),
            board_name: find("board_name"),
            checkin_id: find("checkin_id"),
            checkin_board_id: find("checkin_boardId"),
            checkin_created_at: find("checkin_createdAt"),
        }
    }

    /// Short rows and missing columns read as empty cells.
    fn row(&self, record: &csv::StringRecord) -> CsvRow {
        let cell = |idx: Option<usize>| {
            idx.and_then(|i| record.get(i))
                .unwrap_or("")
                .to_string()
        };
        CsvRow {
            entity: cell(self.entity),
            board_id: cell(self.board_id),
            board_name: cell(self.board_name),
            checkin_id: cell(self.checkin_id),
            checkin_board_id: cell(self.checkin_board_id),
            checkin_created_at: cell(self.checkin_created_at),
        }
    }
}

/// Parse every row. Ragged rows are accepted and blank lines skipped.
pub fn parse_rows<R: Read>(reader: R) -> AppResult<Vec<CsvRow>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::Headers)
        .from_reader(reader);

    let columns = ColumnIndex::from_headers(rdr.headers()?);
    let rows = rdr
        .records()
        .map(|record| record.map(|r| columns.row(&r)))
        .collect::<Result<Vec<CsvRow>, csv::Error>>()?;
    debug!(rows = rows.len(), "parsed board export");
    Ok(rows)
}

/// Id of the first `Board` row named `name`; that row must carry an id.
pub fn resolve_board(rows: &[CsvRow], name: &str) -> AppResult<String> {
    rows.iter()
        .find(|row| row.entity == "Board" && row.board_name == name)
        .filter(|row| !row.board_id.is_empty())
        .map(|row| row.board_id.clone())
        .ok_or_else(|| AppError::BoardNotFound(name.to_string()))
}

/// `Checkin` rows belonging to `board_id`, in file order.
pub fn to_raw_checkins(rows: &[CsvRow], board_id: &str) -> Vec<RawCheckin> {
    rows.iter()
        .filter(|row| row.entity == "Checkin" && row.checkin_board_id == board_id)
        .map(|row| RawCheckin::new(&row.checkin_id, board_id, &row.checkin_created_at))
        .collect()
}

/// Parse, pick the board called `board_name` and classify its check-ins.
pub fn load_checkins<R: Read>(reader: R, board_name: &str) -> AppResult<Vec<Checkin>> {
    let rows = parse_rows(reader)?;
    let board_id = resolve_board(&rows, board_name)?;
    classify(&to_raw_checkins(&rows, &board_id))
}

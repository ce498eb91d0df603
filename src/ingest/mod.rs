pub mod csv;

pub use self::csv::{CsvRow, load_checkins, parse_rows, resolve_board, to_raw_checkins};

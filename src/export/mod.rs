// src/export/mod.rs

mod csv;
mod fs_utils;
mod json;

pub use self::csv::write_checkins_csv;
pub use fs_utils::ensure_writable;
pub use json::write_json;

use crate::errors::AppResult;
use crate::models::Checkin;
use crate::ui::messages::success;
use clap::ValueEnum;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Common completion message for file exports.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Json,
    Csv,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Csv => "csv",
        }
    }
}

/// Write classified check-ins to `path` in the requested format.
pub fn export_checkins(
    checkins: &[Checkin],
    format: ExportFormat,
    path: &Path,
    force: bool,
) -> AppResult<()> {
    ensure_writable(path, force)?;
    let out = BufWriter::new(File::create(path)?);
    match format {
        ExportFormat::Json => write_json(out, checkins)?,
        ExportFormat::Csv => write_checkins_csv(out, checkins)?,
    }
    notify_export_success(&format.as_str().to_uppercase(), path);
    Ok(())
}

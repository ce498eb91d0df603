use super::load_input;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::{ExportFormat, export_checkins, write_checkins_csv, write_json};
use crate::utils::path::expand_tilde;
use std::io;

/// Handle the `classify` command
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Classify {
        input,
        board,
        format,
        file,
        force,
    } = cmd
    {
        let board = board.as_deref().unwrap_or(&cfg.board_name);
        let checkins = load_input(input, board)?;

        match file {
            Some(f) => export_checkins(&checkins, *format, &expand_tilde(f), *force)?,
            None => match format {
                ExportFormat::Json => write_json(io::stdout().lock(), &checkins)?,
                ExportFormat::Csv => write_checkins_csv(io::stdout().lock(), &checkins)?,
            },
        }
    }
    Ok(())
}

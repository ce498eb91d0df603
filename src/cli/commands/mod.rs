pub mod classify;
pub mod config;
pub mod dashboard;
pub mod init;

use crate::errors::AppResult;
use crate::ingest::load_checkins;
use crate::models::Checkin;
use crate::ui::messages::info;
use crate::utils::path::expand_tilde;
use std::fs::File;
use std::io::BufReader;

/// Open a board export and classify the check-ins of `board`.
pub(crate) fn load_input(input: &str, board: &str) -> AppResult<Vec<Checkin>> {
    let path = expand_tilde(input);
    let checkins = load_checkins(BufReader::new(File::open(&path)?), board)?;
    info(format!(
        "Loaded {} {} check-ins from {}",
        checkins.len(),
        board,
        path.display()
    ));
    Ok(checkins)
}

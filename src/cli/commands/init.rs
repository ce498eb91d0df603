use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use std::path::Path;

/// Handle the `init` command: write a default configuration file
pub fn handle(cmd: &Commands, path: &Path) -> AppResult<()> {
    if let Commands::Init { force } = cmd {
        if path.exists() && !*force {
            return Err(AppError::Config(format!(
                "'{}' already exists (use --force to overwrite)",
                path.display()
            )));
        }

        Config::default().save(path)?;
        success(format!("Config file: {}", path.display()));
    }
    Ok(())
}

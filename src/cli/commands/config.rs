use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{header, warning};
use std::path::Path;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config, path: &Path) -> AppResult<()> {
    if let Commands::Config { print_config } = cmd {
        if !*print_config {
            warning("Nothing to do: pass --print to show the configuration");
            return Ok(());
        }

        header(format!("Configuration ({})", path.display()));
        if !path.exists() {
            warning("Config file not found, showing defaults");
        }
        print!("{}", serde_yaml::to_string(cfg)?);
    }
    Ok(())
}

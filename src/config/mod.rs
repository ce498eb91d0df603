use crate::errors::{AppError, AppResult};
use crate::models::{DashboardFilters, Daypart, Granularity, Range, SortOrder, WeekdayFilter};
use crate::utils::time::Zone;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_board_name")]
    pub board_name: String,
    #[serde(default = "default_timezone")]
    pub timezone: String,
    #[serde(default = "default_range")]
    pub range: Range,
    #[serde(default = "default_granularity")]
    pub granularity: Granularity,
    #[serde(default = "default_weekday")]
    pub weekday: WeekdayFilter,
    #[serde(default = "default_daypart")]
    pub daypart: Daypart,
    #[serde(default = "default_order")]
    pub order: SortOrder,
    #[serde(default = "default_limit")]
    pub limit: usize,
}

fn default_board_name() -> String {
    "Coffee".to_string()
}
fn default_timezone() -> String {
    "local".to_string()
}
fn default_range() -> Range {
    Range::All
}
fn default_granularity() -> Granularity {
    Granularity::Day
}
fn default_weekday() -> WeekdayFilter {
    WeekdayFilter::All
}
fn default_daypart() -> Daypart {
    Daypart::All
}
fn default_order() -> SortOrder {
    SortOrder::Desc
}
fn default_limit() -> usize {
    12
}

impl Default for Config {
    fn default() -> Self {
        Self {
            board_name: default_board_name(),
            timezone: default_timezone(),
            range: default_range(),
            granularity: default_granularity(),
            weekday: default_weekday(),
            daypart: default_daypart(),
            order: default_order(),
            limit: default_limit(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("brewlog")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".brewlog")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("brewlog.conf")
    }

    /// Load configuration from `path`, or return defaults if not found
    pub fn load(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        Ok(serde_yaml::from_str(&content)?)
    }

    /// Write the configuration as YAML, creating the parent directory
    pub fn save(&self, path: &Path) -> AppResult<()> {
        if let Some(dir) = path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir)?;
        }
        fs::write(path, serde_yaml::to_string(self)?)?;
        Ok(())
    }

    /// Parsed `timezone` setting
    pub fn zone(&self) -> AppResult<Zone> {
        self.timezone
            .parse()
            .map_err(|_| AppError::Config(format!("invalid timezone '{}'", self.timezone)))
    }

    pub fn filters(&self) -> DashboardFilters {
        DashboardFilters {
            range: self.range,
            granularity: self.granularity,
            weekday: self.weekday,
            daypart: self.daypart,
        }
    }
}

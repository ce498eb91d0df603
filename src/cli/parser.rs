use crate::export::ExportFormat;
use crate::models::{Daypart, Granularity, Range, SortOrder, WeekdayFilter};
use clap::{Parser, Subcommand};

/// Command-line interface definition for brewlog
#[derive(Parser)]
#[command(
    name = "brewlog",
    version = env!("CARGO_PKG_VERSION"),
    about = "Classify coffee check-ins into espresso sessions and build dashboard aggregates",
    long_about = None
)]
pub struct Cli {
    /// Override configuration file path
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a default configuration file
    Init {
        #[arg(long, short = 'f', help = "Overwrite an existing configuration file")]
        force: bool,
    },

    /// Show the configuration
    Config {
        #[arg(long = "print", help = "Print the effective configuration")]
        print_config: bool,
    },

    /// Classify the check-ins of a board export
    Classify {
        /// Board export CSV
        #[arg(long, short = 'i', value_name = "CSV")]
        input: String,

        /// Board name (defaults to the configured one)
        #[arg(long)]
        board: Option<String>,

        #[arg(long, value_enum, default_value = "json")]
        format: ExportFormat,

        /// Output file; stdout when omitted
        #[arg(long, value_name = "FILE")]
        file: Option<String>,

        #[arg(long, short = 'f', help = "Overwrite the output file")]
        force: bool,
    },

    /// Build the dashboard model of a board export
    Dashboard {
        /// Board export CSV
        #[arg(long, short = 'i', value_name = "CSV")]
        input: String,

        /// Board name (defaults to the configured one)
        #[arg(long)]
        board: Option<String>,

        #[arg(long, value_enum)]
        range: Option<Range>,

        #[arg(long, value_enum)]
        granularity: Option<Granularity>,

        #[arg(long, value_enum)]
        weekday: Option<WeekdayFilter>,

        #[arg(long, value_enum)]
        daypart: Option<Daypart>,

        #[arg(long, value_enum)]
        order: Option<SortOrder>,

        /// Result-size control for the series and table rows
        #[arg(long)]
        limit: Option<usize>,

        /// Time zone: local, utc or a fixed offset like +02:00
        #[arg(long, allow_hyphen_values = true)]
        tz: Option<String>,

        #[arg(long, help = "Print the model as JSON instead of tables")]
        json: bool,

        /// Write the model as JSON to this file
        #[arg(long, value_name = "FILE")]
        file: Option<String>,

        #[arg(long, short = 'f', help = "Overwrite the output file")]
        force: bool,
    },
}

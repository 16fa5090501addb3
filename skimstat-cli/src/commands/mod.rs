//! CLI command implementations

use crate::error::CliResult;
use clap::Subcommand;

pub mod frequency;
pub mod median;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Emit the running median of distinct words per record
    Median(median::MedianArgs),

    /// Emit the corpus-wide word frequency table
    Frequency(frequency::FrequencyArgs),
}

impl Commands {
    /// Execute the selected command
    pub fn execute(&self) -> CliResult<()> {
        match self {
            Commands::Median(args) => args.execute(),
            Commands::Frequency(args) => args.execute(),
        }
    }
}

/// Initialize logging based on verbosity level
pub(crate) fn init_logging(quiet: bool, verbose: u8) {
    if quiet {
        return;
    }
    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let _ = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(log_level),
    )
    .try_init();
}

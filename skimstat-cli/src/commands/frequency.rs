//! Frequency command implementation

use crate::{
    commands::init_logging,
    config::CliConfig,
    error::{CliError, CliResult},
    input::open_input,
    output::{open_output, FrequencyWriter},
};
use anyhow::Context;
use clap::Args;
use skimstat_engine::{EngineConfig, FrequencyPipeline};
use std::path::PathBuf;

/// Arguments for the frequency command
#[derive(Debug, Args)]
pub struct FrequencyArgs {
    /// Input corpus file ("-" for stdin)
    #[arg(short, long, value_name = "FILE")]
    pub input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Worker thread count (default: one per CPU)
    #[arg(short, long, value_name = "N")]
    pub threads: Option<usize>,

    /// Maximum in-memory chunk size in MB
    #[arg(long, value_name = "MB")]
    pub chunk_mb: Option<usize>,

    /// Token column width in the output table
    #[arg(short, long, value_name = "COLS")]
    pub width: Option<usize>,

    /// Suppress log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl FrequencyArgs {
    /// Execute the frequency command
    pub fn execute(&self) -> CliResult<()> {
        init_logging(self.quiet, self.verbose);

        let config = CliConfig::load_or_default(self.config.as_deref())?;
        let engine_config = self.engine_config(&config);
        let width = self.width.unwrap_or(config.output.token_width);
        if width == 0 {
            return Err(CliError::ConfigError("token width must be non-zero".to_string()).into());
        }

        log::info!(
            "tallying word frequencies for {} with {} workers",
            self.input.display(),
            engine_config.worker_count()
        );

        let pipeline = FrequencyPipeline::new(engine_config)?;
        let input = open_input(&self.input)?;
        let table = pipeline
            .run(input)
            .with_context(|| format!("failed processing {}", self.input.display()))?;

        log::debug!(
            "{} distinct tokens, {} total occurrences",
            table.len(),
            table.total()
        );

        let mut writer = FrequencyWriter::new(open_output(self.output.as_deref())?, width);
        for (token, count) in table.sorted_entries() {
            writer.emit(&token, count)?;
        }
        writer.finish()?;

        Ok(())
    }

    /// Engine configuration with command-line overrides applied
    fn engine_config(&self, config: &CliConfig) -> EngineConfig {
        let mut engine = config.engine_config();
        if self.threads.is_some() {
            engine.threads = self.threads;
        }
        if let Some(chunk_mb) = self.chunk_mb {
            engine.max_chunk_bytes = chunk_mb * 1024 * 1024;
        }
        engine
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args() -> FrequencyArgs {
        FrequencyArgs {
            input: "corpus.txt".into(),
            output: None,
            config: None,
            threads: None,
            chunk_mb: None,
            width: None,
            quiet: true,
            verbose: 0,
        }
    }

    #[test]
    fn flags_override_config_file_values() {
        let mut cli_args = args();
        cli_args.threads = Some(7);
        cli_args.chunk_mb = Some(4);

        let engine = cli_args.engine_config(&CliConfig::default());
        assert_eq!(engine.threads, Some(7));
        assert_eq!(engine.max_chunk_bytes, 4 * 1024 * 1024);
    }

    #[test]
    fn config_file_values_survive_without_flags() {
        let mut config = CliConfig::default();
        config.performance.worker_threads = 3;
        config.performance.chunk_size_mb = 16;

        let engine = args().engine_config(&config);
        assert_eq!(engine.threads, Some(3));
        assert_eq!(engine.max_chunk_bytes, 16 * 1024 * 1024);
    }
}

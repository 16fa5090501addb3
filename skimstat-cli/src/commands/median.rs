//! Median command implementation

use crate::{
    commands::init_logging,
    config::CliConfig,
    error::CliResult,
    input::open_input,
    output::{open_output, MedianWriter},
};
use anyhow::Context;
use clap::Args;
use skimstat_engine::MedianPipeline;
use std::path::PathBuf;

/// Arguments for the median command
#[derive(Debug, Args)]
pub struct MedianArgs {
    /// Input corpus file ("-" for stdin)
    #[arg(short, long, value_name = "FILE")]
    pub input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Suppress log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl MedianArgs {
    /// Execute the median command
    pub fn execute(&self) -> CliResult<()> {
        init_logging(self.quiet, self.verbose);

        let config = CliConfig::load_or_default(self.config.as_deref())?;
        let pipeline = MedianPipeline::new(config.engine_config())?;

        log::info!("computing running median for {}", self.input.display());

        let input = open_input(&self.input)?;
        let mut writer = MedianWriter::new(open_output(self.output.as_deref())?);

        let records = pipeline
            .run(input, |median| {
                writer.emit(median)?;
                Ok(())
            })
            .with_context(|| format!("failed processing {}", self.input.display()))?;
        writer.finish()?;

        log::info!("processed {records} records");
        Ok(())
    }
}

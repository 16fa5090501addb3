//! Sequential running-median pipeline
//!
//! Streams records in corpus order through the histogram tracker. The
//! tracker's window state is order-dependent and not commutative, so this
//! pipeline is intentionally single-threaded; per-record working memory is
//! one line plus the fixed-size histogram.

use crate::{config::EngineConfig, error::Result, input::Input};
use skimstat_core::{distinct_words, Median, MedianTracker};
use std::io::{BufRead, BufReader};

/// Running median of distinct words per record.
#[derive(Debug)]
pub struct MedianPipeline {
    config: EngineConfig,
}

impl MedianPipeline {
    /// Build a pipeline with the given configuration.
    pub fn new(config: EngineConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Stream records from `input`, invoking `sink` with the median after
    /// each one. Returns the number of records processed.
    pub fn run<F>(&self, input: Input, mut sink: F) -> Result<u64>
    where
        F: FnMut(Median) -> Result<()>,
    {
        let reader = BufReader::new(input.into_reader()?);
        let mut tracker = MedianTracker::with_domain(self.config.max_distinct);

        for line in reader.lines() {
            let line = line?;
            let median = tracker.observe(distinct_words(&line))?;
            sink(median)?;
        }

        Ok(tracker.records())
    }
}

//! Concurrent token-frequency aggregation
//!
//! Each chunk of the corpus is partitioned across the configured worker
//! count; workers tokenize their range and tally into one shared
//! [`FrequencyTable`]. DashMap's sharded entry API makes insert-or-
//! increment atomic per key, so the parallel tally always equals the
//! sequential one. The table outlives individual chunks and accumulates
//! for the whole run; sorting happens once at the end.

use crate::{
    chunker::ChunkReader,
    config::EngineConfig,
    error::Result,
    input::Input,
    partition::partition,
};
use dashmap::DashMap;
use rayon::prelude::*;
use skimstat_core::tokens;

/// Concurrent token tally shared by all workers of a run.
#[derive(Debug, Default)]
pub struct FrequencyTable {
    counts: DashMap<String, u64>,
}

impl FrequencyTable {
    /// Empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert-or-increment, atomic per key.
    pub fn tally(&self, token: &str) {
        // Fast path avoids allocating for tokens already present.
        if let Some(mut count) = self.counts.get_mut(token) {
            *count += 1;
            return;
        }
        *self.counts.entry(token.to_string()).or_insert(0) += 1;
    }

    /// Count recorded for one token.
    pub fn get(&self, token: &str) -> Option<u64> {
        self.counts.get(token).map(|entry| *entry.value())
    }

    /// Number of distinct tokens.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// True when nothing has been tallied.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts, i.e. the total token count of the corpus.
    pub fn total(&self) -> u64 {
        self.counts.iter().map(|entry| *entry.value()).sum()
    }

    /// Drain into `(token, count)` pairs sorted by byte order.
    ///
    /// Deterministic and locale-independent; call only after all workers
    /// have joined.
    pub fn sorted_entries(&self) -> Vec<(String, u64)> {
        let mut entries: Vec<(String, u64)> = self
            .counts
            .iter()
            .map(|entry| (entry.key().clone(), *entry.value()))
            .collect();
        entries.sort_unstable_by(|a, b| a.0.cmp(&b.0));
        entries
    }
}

/// Fork-join word frequency pipeline.
#[derive(Debug)]
pub struct FrequencyPipeline {
    config: EngineConfig,
}

impl FrequencyPipeline {
    /// Build a pipeline with the given configuration.
    pub fn new(config: EngineConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Tally one whitespace-aligned chunk into `table`.
    ///
    /// Workers run in parallel over disjoint ranges; the parallel iterator
    /// is the join barrier, so the table is quiescent when this returns.
    pub fn tally_chunk(&self, chunk: &str, table: &FrequencyTable) {
        let ranges = partition(chunk, self.config.worker_count());
        ranges.into_par_iter().for_each(|range| {
            for token in tokens(&chunk[range]) {
                table.tally(token);
            }
        });
    }

    /// Process a whole corpus and return the accumulated table.
    ///
    /// The input is consumed as bounded whitespace-aligned chunks; all of
    /// a chunk's workers complete before the next chunk is read, and the
    /// table carries across chunks.
    pub fn run(&self, input: Input) -> Result<FrequencyTable> {
        let table = FrequencyTable::new();
        let mut chunks = ChunkReader::new(input.into_reader()?, self.config.max_chunk_bytes);
        while let Some(chunk) = chunks.next_chunk()? {
            self.tally_chunk(&chunk, &table);
        }
        Ok(table)
    }
}

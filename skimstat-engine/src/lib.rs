//! Pipeline orchestration for skimstat corpus statistics
//!
//! This crate wires the core algorithms into two runnable pipelines over
//! arbitrarily large line-oriented corpora: a strictly sequential running
//! median of distinct words per record, and a fork-join parallel word
//! frequency tally. It owns chunked reading, whitespace-aligned
//! partitioning, worker coordination, and engine configuration.

#![warn(missing_docs)]

pub mod chunker;
pub mod config;
pub mod error;
pub mod frequency;
pub mod input;
pub mod median;
pub mod partition;

// Re-export key types
pub use chunker::ChunkReader;
pub use config::EngineConfig;
pub use error::{EngineError, Result};
pub use frequency::{FrequencyPipeline, FrequencyTable};
pub use input::Input;
pub use median::MedianPipeline;
pub use partition::partition;

// Re-export from core for convenience
pub use skimstat_core::{distinct_words, tokens, CoreError, Median, MedianTracker, DEFAULT_MAX_DISTINCT};

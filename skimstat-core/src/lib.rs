//! Core statistics algorithms for skimstat
//!
//! This crate contains the pure, single-threaded building blocks shared by
//! both corpus pipelines: whitespace tokenization, the per-record distinct
//! word counter, and the histogram-based streaming median tracker.
//! No I/O and no threading live here.

#![warn(missing_docs)]

pub mod error;
pub mod median;
pub mod tokenize;
pub mod tracker;

// Re-export key types
pub use error::{CoreError, Result};
pub use median::Median;
pub use tokenize::{distinct_words, tokens};
pub use tracker::{MedianTracker, DEFAULT_MAX_DISTINCT};

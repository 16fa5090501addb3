//! Layered error types
//!
//! Core contract violations arrive as [`CoreError`] and are wrapped;
//! everything the engine itself can hit is enumerated here. All variants
//! are fatal to the run: there is no partial-result mode and no retry.

use skimstat_core::CoreError;
use thiserror::Error;

/// Engine-level errors
#[derive(Error, Debug)]
pub enum EngineError {
    /// Core algorithm error
    #[error("core statistics error: {0}")]
    Core(#[from] CoreError),

    /// A chunk or worker range could not be aligned to whitespace
    #[error(
        "no whitespace boundary within {limit} bytes at corpus offset {offset}; \
         a single token exceeds the chunk budget"
    )]
    PartitionAlignment {
        /// Corpus byte offset where alignment failed
        offset: u64,
        /// The chunk budget in effect
        limit: usize,
    },

    /// The configured chunk buffer could not be allocated
    #[error("cannot allocate a {requested}-byte chunk buffer; lower max_chunk_bytes and rerun")]
    ResourceExhausted {
        /// Requested allocation size in bytes
        requested: usize,
    },

    /// Invalid engine configuration
    #[error("invalid configuration: {0}")]
    Config(String),

    /// I/O error from the record source
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The corpus is not valid UTF-8
    #[error("invalid UTF-8 at corpus offset {offset}")]
    Encoding {
        /// Byte offset of the first invalid byte
        offset: u64,
    },
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;

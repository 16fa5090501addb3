//! Error types for the core algorithms

use thiserror::Error;

/// Errors raised by the core statistics algorithms
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A distinct-word count fell outside the tracker's bounded domain
    #[error("distinct-word count {count} exceeds the tracker domain of {max} buckets")]
    DomainExceeded {
        /// The offending distinct-word count
        count: usize,
        /// The configured number of histogram buckets
        max: usize,
    },
}

/// Result type for core operations
pub type Result<T> = core::result::Result<T, CoreError>;

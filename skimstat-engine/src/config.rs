//! Engine configuration

use crate::error::{EngineError, Result};
use skimstat_core::DEFAULT_MAX_DISTINCT;

/// Engine configuration shared by both pipelines
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Worker count for the frequency pipeline (None = one per CPU)
    pub threads: Option<usize>,
    /// Maximum in-memory chunk size in bytes
    pub max_chunk_bytes: usize,
    /// Histogram buckets for the median tracker
    pub max_distinct: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            threads: None,
            max_chunk_bytes: 256 * 1024 * 1024, // 256 MiB
            max_distinct: DEFAULT_MAX_DISTINCT,
        }
    }
}

impl EngineConfig {
    /// Configuration for memory-constrained hosts
    pub fn low_memory() -> Self {
        Self {
            max_chunk_bytes: 16 * 1024 * 1024, // 16 MiB
            ..Self::default()
        }
    }

    /// Resolved worker count
    pub fn worker_count(&self) -> usize {
        self.threads.unwrap_or_else(num_cpus::get).max(1)
    }

    /// Reject configurations no pipeline can run with
    pub fn validate(&self) -> Result<()> {
        if self.threads == Some(0) {
            return Err(EngineError::Config(
                "threads must be at least 1".to_string(),
            ));
        }
        if self.max_chunk_bytes == 0 {
            return Err(EngineError::Config(
                "max_chunk_bytes must be non-zero".to_string(),
            ));
        }
        if self.max_distinct == 0 {
            return Err(EngineError::Config(
                "max_distinct must be non-zero".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = EngineConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.max_distinct, DEFAULT_MAX_DISTINCT);
        assert!(config.worker_count() >= 1);
    }

    #[test]
    fn low_memory_shrinks_chunks() {
        let config = EngineConfig::low_memory();
        assert!(config.max_chunk_bytes < EngineConfig::default().max_chunk_bytes);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_values_are_rejected() {
        let config = EngineConfig {
            threads: Some(0),
            ..EngineConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(EngineError::Config(_))
        ));

        let config = EngineConfig {
            max_chunk_bytes: 0,
            ..EngineConfig::default()
        };
        assert!(config.validate().is_err());

        let config = EngineConfig {
            max_distinct: 0,
            ..EngineConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn explicit_thread_count_wins() {
        let config = EngineConfig {
            threads: Some(3),
            ..EngineConfig::default()
        };
        assert_eq!(config.worker_count(), 3);
    }
}

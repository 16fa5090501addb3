//! Configuration module

use crate::error::CliResult;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use skimstat_engine::EngineConfig;
use std::fs;
use std::path::Path;

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct CliConfig {
    /// Performance configuration
    #[serde(default)]
    pub performance: PerformanceConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

/// Performance-related configuration
#[derive(Debug, Deserialize, Serialize)]
pub struct PerformanceConfig {
    /// Maximum in-memory chunk size (MB)
    pub chunk_size_mb: usize,

    /// Number of worker threads (0 = auto)
    pub worker_threads: usize,
}

impl Default for PerformanceConfig {
    fn default() -> Self {
        Self {
            chunk_size_mb: 256,
            worker_threads: 0,
        }
    }
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize)]
pub struct OutputConfig {
    /// Column width for tokens in the frequency table
    pub token_width: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { token_width: 30 }
    }
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> CliResult<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: CliConfig = toml::from_str(&text)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        Ok(config)
    }

    /// Load from a path if given, otherwise use defaults
    pub fn load_or_default(path: Option<&Path>) -> CliResult<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Translate into an engine configuration
    pub fn engine_config(&self) -> EngineConfig {
        EngineConfig {
            threads: (self.performance.worker_threads > 0)
                .then_some(self.performance.worker_threads),
            max_chunk_bytes: self.performance.chunk_size_mb * 1024 * 1024,
            ..EngineConfig::default()
        }
    }
}

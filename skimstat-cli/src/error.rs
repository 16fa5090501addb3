//! Error handling for the CLI application

use std::fmt;

/// Custom error type for CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// Corpus file not found or inaccessible
    FileNotFound(String),
    /// Configuration error
    ConfigError(String),
    /// Processing error from the engine
    ProcessingError(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::FileNotFound(path) => write!(f, "File not found: {path}"),
            CliError::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
            CliError::ProcessingError(msg) => write!(f, "Processing error: {msg}"),
        }
    }
}

impl std::error::Error for CliError {}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_not_found_display() {
        let error = CliError::FileNotFound("corpus.txt".to_string());
        assert_eq!(error.to_string(), "File not found: corpus.txt");
    }

    #[test]
    fn config_error_display() {
        let error = CliError::ConfigError("token_width must be non-zero".to_string());
        assert!(error.to_string().starts_with("Configuration error:"));
    }

    #[test]
    fn processing_error_display() {
        let error = CliError::ProcessingError("domain exceeded".to_string());
        assert!(error.to_string().starts_with("Processing error:"));
    }

    #[test]
    fn implements_error_trait() {
        let error = CliError::FileNotFound("x".to_string());
        let _: &dyn std::error::Error = &error;
    }
}

//! skimstat CLI library
//!
//! Command-line wiring around the skimstat engine: argument parsing,
//! corpus file handling, output formatting, and logging setup.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod output;

pub use error::{CliError, CliResult};

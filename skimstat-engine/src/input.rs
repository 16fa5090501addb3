//! Input abstraction for corpus sources
//!
//! Both pipelines consume a lazy, finite, forward-only byte stream; this
//! enum unifies the sources the surrounding driver can supply. Restarting
//! means constructing a fresh `Input`.

use crate::error::Result;
use std::fs::File;
use std::io::{Cursor, Read};
use std::path::PathBuf;

/// A corpus source
pub enum Input {
    /// In-memory text
    Text(String),
    /// File path, opened lazily when the pipeline runs
    File(PathBuf),
    /// Arbitrary reader (stdin, pipes, test fixtures)
    Reader(Box<dyn Read + Send>),
}

impl Input {
    /// Corpus from an owned string
    pub fn from_text(text: impl Into<String>) -> Self {
        Input::Text(text.into())
    }

    /// Corpus from a file path
    pub fn from_file(path: impl Into<PathBuf>) -> Self {
        Input::File(path.into())
    }

    /// Corpus from any reader
    pub fn from_reader(reader: impl Read + Send + 'static) -> Self {
        Input::Reader(Box::new(reader))
    }

    /// Convert into a byte reader for the pipelines
    pub(crate) fn into_reader(self) -> Result<Box<dyn Read + Send>> {
        match self {
            Input::Text(text) => Ok(Box::new(Cursor::new(text.into_bytes()))),
            Input::File(path) => Ok(Box::new(File::open(path)?)),
            Input::Reader(reader) => Ok(reader),
        }
    }
}

impl std::fmt::Debug for Input {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Input::Text(text) => f
                .debug_tuple("Text")
                .field(&format!("<{} bytes>", text.len()))
                .finish(),
            Input::File(path) => f.debug_tuple("File").field(path).finish(),
            Input::Reader(_) => f.debug_tuple("Reader").field(&"<Reader>").finish(),
        }
    }
}

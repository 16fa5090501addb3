//! Frequency-table output sink

use std::io::{self, Write};

/// Writes `(token, count)` rows with the token left-justified in a fixed
/// width column, e.g. `apple                         3`.
pub struct FrequencyWriter<W: Write> {
    writer: W,
    width: usize,
}

impl<W: Write> FrequencyWriter<W> {
    /// Create a writer with the given token column width
    pub fn new(writer: W, width: usize) -> Self {
        Self { writer, width }
    }

    /// Emit one table row
    pub fn emit(&mut self, token: &str, count: u64) -> io::Result<()> {
        writeln!(self.writer, "{token:<width$}{count}", width = self.width)
    }

    /// Flush buffered output
    pub fn finish(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

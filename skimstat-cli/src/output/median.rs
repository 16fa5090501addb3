//! Running-median output sink

use skimstat_engine::Median;
use std::io::{self, Write};

/// Writes one formatted median per record, e.g. `3.00` or `2.50`.
pub struct MedianWriter<W: Write> {
    writer: W,
}

impl<W: Write> MedianWriter<W> {
    /// Create a new median writer
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Emit the median after one record
    pub fn emit(&mut self, median: Median) -> io::Result<()> {
        writeln!(self.writer, "{median}")
    }

    /// Flush buffered output
    pub fn finish(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

//! Bounded whitespace-aligned chunk reading
//!
//! Corpora larger than the memory budget are consumed as a sequence of
//! chunks, each at most `max_chunk_bytes` long and each ending exactly on
//! a whitespace byte so no token or record straddles two chunks. The
//! trailing partial token of every chunk is carried into the next one.
//! This is the only place in the codebase that aligns chunk edges.

use crate::error::{EngineError, Result};
use std::io::Read;

/// Reads successive whitespace-aligned UTF-8 chunks from a byte source.
pub struct ChunkReader<R: Read> {
    reader: R,
    max_chunk_bytes: usize,
    /// Bytes after the last whitespace of the previous chunk.
    carry: Vec<u8>,
    /// Corpus offset of the next byte to emit, for error context.
    offset: u64,
    eof: bool,
}

impl<R: Read> ChunkReader<R> {
    /// Create a reader yielding chunks of at most `max_chunk_bytes`.
    pub fn new(reader: R, max_chunk_bytes: usize) -> Self {
        Self {
            reader,
            max_chunk_bytes,
            carry: Vec::new(),
            offset: 0,
            eof: false,
        }
    }

    /// Next chunk, or `None` once the source is exhausted.
    ///
    /// Every returned chunk except possibly the last ends on a whitespace
    /// byte. A source containing a single token longer than the chunk
    /// budget fails with [`EngineError::PartitionAlignment`]; a buffer the
    /// host cannot allocate fails with [`EngineError::ResourceExhausted`].
    pub fn next_chunk(&mut self) -> Result<Option<String>> {
        if self.eof && self.carry.is_empty() {
            return Ok(None);
        }

        let mut buf: Vec<u8> = Vec::new();
        buf.try_reserve_exact(self.max_chunk_bytes)
            .map_err(|_| EngineError::ResourceExhausted {
                requested: self.max_chunk_bytes,
            })?;
        buf.append(&mut self.carry);

        if !self.eof {
            let remaining = self.max_chunk_bytes - buf.len();
            let n = (&mut self.reader)
                .take(remaining as u64)
                .read_to_end(&mut buf)?;
            if n < remaining {
                self.eof = true;
            }
        }

        if buf.is_empty() {
            return Ok(None);
        }

        if !self.eof {
            // Hold back the trailing partial token for the next chunk.
            match buf.iter().rposition(|b| b.is_ascii_whitespace()) {
                Some(pos) => self.carry = buf.split_off(pos + 1),
                None => {
                    return Err(EngineError::PartitionAlignment {
                        offset: self.offset,
                        limit: self.max_chunk_bytes,
                    })
                }
            }
        }

        let chunk_start = self.offset;
        self.offset += buf.len() as u64;
        match String::from_utf8(buf) {
            Ok(chunk) => Ok(Some(chunk)),
            Err(err) => Err(EngineError::Encoding {
                offset: chunk_start + err.utf8_error().valid_up_to() as u64,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn collect_chunks(text: &str, max: usize) -> Vec<String> {
        let mut reader = ChunkReader::new(Cursor::new(text.as_bytes().to_vec()), max);
        let mut chunks = Vec::new();
        while let Some(chunk) = reader.next_chunk().unwrap() {
            chunks.push(chunk);
        }
        chunks
    }

    #[test]
    fn small_input_is_one_chunk() {
        let chunks = collect_chunks("a a b\nb c\n", 1024);
        assert_eq!(chunks, vec!["a a b\nb c\n"]);
    }

    #[test]
    fn chunks_reassemble_the_corpus() {
        let text = "one two three\nfour five\nsix seven eight nine\n";
        for max in 6..16 {
            let chunks = collect_chunks(text, max);
            assert_eq!(chunks.concat(), text, "budget {max}");
            for chunk in &chunks {
                assert!(chunk.len() <= max, "budget {max}");
            }
        }
    }

    #[test]
    fn chunk_edges_never_split_tokens() {
        let text = "alpha beta gamma delta epsilon\n";
        for max in 8..20 {
            for chunk in collect_chunks(text, max) {
                // Every non-final chunk ends on whitespace; tokens inside
                // each chunk must all be full words of the source.
                for token in chunk.split_whitespace() {
                    assert!(
                        text.split_whitespace().any(|t| t == token),
                        "token {token:?} split at budget {max}"
                    );
                }
            }
        }
    }

    #[test]
    fn oversized_token_is_an_alignment_error() {
        let text = "tiny enormoustokenwithoutanybreak more";
        let mut reader = ChunkReader::new(Cursor::new(text.as_bytes().to_vec()), 8);
        // First chunk carries "tiny ".
        reader.next_chunk().unwrap();
        let err = reader.next_chunk().unwrap_err();
        assert!(matches!(err, EngineError::PartitionAlignment { .. }));
    }

    #[test]
    fn trailing_token_without_newline_is_emitted() {
        let chunks = collect_chunks("a b c", 1024);
        assert_eq!(chunks, vec!["a b c"]);
    }

    #[test]
    fn empty_source_yields_no_chunks() {
        let chunks = collect_chunks("", 64);
        assert!(chunks.is_empty());
    }

    #[test]
    fn invalid_utf8_reports_offset() {
        let bytes = vec![b'o', b'k', b' ', 0xff, 0xfe, b'\n'];
        let mut reader = ChunkReader::new(Cursor::new(bytes), 64);
        let err = reader.next_chunk().unwrap_err();
        assert!(matches!(err, EngineError::Encoding { offset: 3 }));
    }
}

// SPDX-License-Identifier: MIT
//
// Output buffering.
//
// Encoders never touch the caller's sink directly. Every escape sequence and
// glyph goes into an in-memory `OutputBuffer`; only a fully successful render
// is handed to the sink, in a single `write_all`. A render that fails halfway
// (bad palette index, empty palette) therefore writes nothing at all.

use std::io::{self, Write};

/// Bytes reserved per cell up front: a 3-byte UTF-8 glyph plus a little
/// headroom for escape sequences.
const BYTES_PER_CELL: usize = 6;

/// A byte buffer that accumulates one render's output.
pub struct OutputBuffer {
    buf: Vec<u8>,
}

impl OutputBuffer {
    #[must_use]
    pub const fn new() -> Self {
        Self { buf: Vec::new() }
    }

    /// Reserve room for a grid of `cells` cells.
    #[must_use]
    pub fn for_cells(cells: usize) -> Self {
        Self {
            buf: Vec::with_capacity(cells.saturating_mul(BYTES_PER_CELL)),
        }
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// The accumulated bytes (for testing and debugging).
    #[inline]
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Append raw bytes (glyph text, line breaks).
    #[inline]
    pub fn push_bytes(&mut self, bytes: &[u8]) {
        self.buf.extend_from_slice(bytes);
    }

    #[must_use]
    pub fn into_inner(self) -> Vec<u8> {
        self.buf
    }

    /// Write accumulated output to `w` and clear the buffer.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to `w` fails.
    pub fn flush_to<W: Write + ?Sized>(&mut self, w: &mut W) -> io::Result<()> {
        if !self.buf.is_empty() {
            w.write_all(&self.buf)?;
            w.flush()?;
            self.buf.clear();
        }
        Ok(())
    }
}

impl Write for OutputBuffer {
    #[inline]
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        // No-op; the real flush is `flush_to`.
        Ok(())
    }
}

impl Default for OutputBuffer {
    fn default() -> Self {
        Self::new()
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_is_empty() {
        let buf = OutputBuffer::new();
        assert!(buf.is_empty());
        assert_eq!(buf.len(), 0);
    }

    #[test]
    fn write_trait_appends() {
        let mut buf = OutputBuffer::new();
        write!(buf, "\x1b[{}m", 31).unwrap();
        buf.push_bytes(b"A");
        assert_eq!(buf.as_bytes(), b"\x1b[31mA");
    }

    #[test]
    fn flush_to_moves_bytes_and_clears() {
        let mut buf = OutputBuffer::for_cells(4);
        buf.push_bytes(b"hello");
        let mut sink = Vec::new();
        buf.flush_to(&mut sink).unwrap();
        assert_eq!(sink, b"hello");
        assert!(buf.is_empty());
    }

    #[test]
    fn flush_of_empty_buffer_writes_nothing() {
        let mut buf = OutputBuffer::new();
        let mut sink = Vec::new();
        buf.flush_to(&mut sink).unwrap();
        assert!(sink.is_empty());
    }

    #[test]
    fn into_inner_returns_bytes() {
        let mut buf = OutputBuffer::new();
        buf.push_bytes(b"xyz");
        assert_eq!(buf.into_inner(), b"xyz".to_vec());
    }
}

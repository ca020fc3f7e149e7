//! Line framing for the command input
//!
//! Bytes are accumulated until `\n`. A line longer than the buffer is
//! dropped in full and reported once, at its terminating newline, so the
//! next line starts clean.

use heapless::{String, Vec};

/// Longest accepted command line, excluding the terminator
pub const MAX_LINE_LEN: usize = 32;

/// Errors from line framing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LineError {
    /// Line did not fit the buffer and was discarded
    Overflow,
    /// Line was not valid UTF-8
    Encoding,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineState {
    /// Collecting bytes
    Filling,
    /// Skipping the rest of an oversized line
    Discarding,
}

/// Accumulates serial bytes into complete lines
#[derive(Debug, Clone)]
pub struct LineBuffer<const N: usize = MAX_LINE_LEN> {
    buffer: Vec<u8, N>,
    state: LineState,
}

impl<const N: usize> Default for LineBuffer<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> LineBuffer<N> {
    pub const fn new() -> Self {
        Self {
            buffer: Vec::new(),
            state: LineState::Filling,
        }
    }

    /// Drop any partial line
    pub fn reset(&mut self) {
        self.buffer.clear();
        self.state = LineState::Filling;
    }

    /// Feed a single byte
    ///
    /// Returns `Ok(Some(line))` when a non-empty line is complete, without
    /// its terminator.
    pub fn feed(&mut self, byte: u8) -> Result<Option<String<N>>, LineError> {
        match (self.state, byte) {
            (LineState::Discarding, b'\n') => {
                self.reset();
                Err(LineError::Overflow)
            }
            (LineState::Discarding, _) => Ok(None),
            (LineState::Filling, b'\n') => {
                if self.buffer.last() == Some(&b'\r') {
                    self.buffer.pop();
                }
                let bytes = core::mem::take(&mut self.buffer);
                if bytes.is_empty() {
                    return Ok(None);
                }
                String::from_utf8(bytes)
                    .map(Some)
                    .map_err(|_| LineError::Encoding)
            }
            (LineState::Filling, _) => {
                if self.buffer.push(byte).is_err() {
                    self.buffer.clear();
                    self.state = LineState::Discarding;
                }
                Ok(None)
            }
        }
    }

    /// Feed multiple bytes
    ///
    /// Returns the first complete line found, if any. Remaining bytes after
    /// it are not consumed.
    pub fn feed_bytes(&mut self, bytes: &[u8]) -> Result<Option<String<N>>, LineError> {
        for &byte in bytes {
            if let Some(line) = self.feed(byte)? {
                return Ok(Some(line));
            }
        }
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_line() {
        let mut lines = LineBuffer::<16>::new();
        let line = lines.feed_bytes(b"SEL 2 5\n").unwrap().unwrap();
        assert_eq!(line.as_str(), "SEL 2 5");
    }

    #[test]
    fn test_crlf_stripped() {
        let mut lines = LineBuffer::<16>::new();
        let line = lines.feed_bytes(b"VIEW\r\n").unwrap().unwrap();
        assert_eq!(line.as_str(), "VIEW");
    }

    #[test]
    fn test_blank_lines_skipped() {
        let mut lines = LineBuffer::<16>::new();
        assert_eq!(lines.feed_bytes(b"\n\r\n").unwrap(), None);
        let line = lines.feed_bytes(b"INFO\n").unwrap().unwrap();
        assert_eq!(line.as_str(), "INFO");
    }

    #[test]
    fn test_split_across_feeds() {
        let mut lines = LineBuffer::<16>::new();
        assert_eq!(lines.feed_bytes(b"SYM ").unwrap(), None);
        assert_eq!(lines.feed_bytes(b"Fe").unwrap(), None);
        let line = lines.feed_bytes(b"\n").unwrap().unwrap();
        assert_eq!(line.as_str(), "SYM Fe");
    }

    #[test]
    fn test_overflow_discards_whole_line() {
        let mut lines = LineBuffer::<4>::new();
        assert_eq!(lines.feed_bytes(b"TOOLONG"), Ok(None));
        assert_eq!(lines.feed(b'\n'), Err(LineError::Overflow));

        // Next line is unaffected
        let line = lines.feed_bytes(b"NUM\n").unwrap().unwrap();
        assert_eq!(line.as_str(), "NUM");
    }

    #[test]
    fn test_invalid_utf8() {
        let mut lines = LineBuffer::<8>::new();
        assert_eq!(lines.feed_bytes(&[0xFF, 0xFE, b'\n']), Err(LineError::Encoding));
        assert!(lines.feed_bytes(b"OK\n").unwrap().is_some());
    }

    #[test]
    fn test_remaining_bytes_not_consumed() {
        let mut lines = LineBuffer::<16>::new();
        let data = b"VIEW\nINFO\n";
        let first = lines.feed_bytes(&data[..5]).unwrap().unwrap();
        assert_eq!(first.as_str(), "VIEW");
        let second = lines.feed_bytes(&data[5..]).unwrap().unwrap();
        assert_eq!(second.as_str(), "INFO");
    }
}

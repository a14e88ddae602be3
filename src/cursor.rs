//! Byte cursor shared by the scanner and its handlers.
//!
//! Handlers peek ahead to decide whether a trigger is real and then advance
//! the cursor past everything they consumed, so no byte is revisited.

use memchr::memchr3;

use crate::Range;

/// A forward-only cursor over the input bytes.
///
/// # Example
/// ```
/// use sweepmark::cursor::Cursor;
///
/// let mut cursor = Cursor::new(b"## Title");
/// assert_eq!(cursor.peek(), Some(b'#'));
/// cursor.advance(3);
/// assert_eq!(cursor.peek(), Some(b'T'));
/// ```
#[derive(Clone, Copy)]
pub struct Cursor<'a> {
    input: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    #[inline]
    pub fn new(input: &'a [u8]) -> Self {
        Self { input, pos: 0 }
    }

    /// The whole input, independent of the cursor position.
    #[inline]
    pub fn input(&self) -> &'a [u8] {
        self.input
    }

    /// Current offset from the start of input.
    #[inline]
    pub fn offset(&self) -> usize {
        self.pos
    }

    /// Number of bytes remaining.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.input.len() - self.pos
    }

    /// Peek the current byte without advancing.
    #[inline]
    pub fn peek(&self) -> Option<u8> {
        self.input.get(self.pos).copied()
    }

    /// Peek at byte n positions ahead.
    #[inline]
    pub fn peek_ahead(&self, n: usize) -> Option<u8> {
        self.input.get(self.pos + n).copied()
    }

    /// Advance by n bytes.
    #[inline]
    pub fn advance(&mut self, n: usize) {
        debug_assert!(n <= self.remaining());
        self.pos = (self.pos + n).min(self.input.len());
    }

    /// Advance by 1 byte.
    #[inline]
    pub fn bump(&mut self) {
        self.advance(1);
    }

    /// Check whether the next two bytes are `first` then `second`.
    #[inline]
    pub fn at_pair(&self, first: u8, second: u8) -> bool {
        self.peek() == Some(first) && self.peek_ahead(1) == Some(second)
    }

    /// Skip while predicate is true, returning the number of bytes skipped.
    #[inline]
    pub fn skip_while<F>(&mut self, mut predicate: F) -> usize
    where
        F: FnMut(u8) -> bool,
    {
        let start = self.pos;
        while let Some(b) = self.peek() {
            if !predicate(b) {
                break;
            }
            self.pos += 1;
        }
        self.pos - start
    }

    /// Skip spaces only.
    #[inline]
    pub fn skip_spaces(&mut self) -> usize {
        self.skip_while(|b| b == b' ')
    }

    /// Skip a run of `\n`/`\r` bytes.
    #[inline]
    pub fn skip_line_breaks(&mut self) -> usize {
        self.skip_while(is_line_break)
    }

    /// Get a range from a start offset to current position.
    #[inline]
    pub fn range_from(&self, start: usize) -> Range {
        Range::from_usize(start, self.pos)
    }

    /// Get the remaining bytes as a slice.
    #[inline]
    pub fn remaining_slice(&self) -> &'a [u8] {
        &self.input[self.pos..]
    }

    /// Offset of the first `needle` or line break at or after `from`, or the
    /// input length if there is neither.
    #[inline]
    pub fn line_stop(&self, from: usize, needle: u8) -> usize {
        self.input
            .get(from..)
            .and_then(|haystack| memchr3(needle, b'\n', b'\r', haystack))
            .map_or(self.input.len(), |found| from + found)
    }

    /// Offset of the next `needle` at or after `from`, stopping at the end
    /// of the current line.
    #[inline]
    pub fn find_in_line(&self, from: usize, needle: u8) -> Option<usize> {
        let stop = self.line_stop(from, needle);
        (self.input.get(stop) == Some(&needle)).then_some(stop)
    }
}

/// `\n` and `\r` are the only line-break bytes.
#[inline]
pub fn is_line_break(b: u8) -> bool {
    b == b'\n' || b == b'\r'
}

impl std::fmt::Debug for Cursor<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cursor")
            .field("offset", &self.offset())
            .field("remaining", &self.remaining())
            .finish()
    }
}

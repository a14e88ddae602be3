//! Compact spans into the input buffer.
//!
//! Image and link lookahead records where the alt text, target and title
//! live instead of copying them out; the writer slices the input when it
//! emits the attribute.

/// Byte range into the input, `u32` offsets.
///
/// # Example
/// ```
/// use sweepmark::Range;
///
/// let input = b"![logo](cdn.png)";
/// let alt = Range::new(2, 6);
/// assert_eq!(alt.slice(input), b"logo");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[repr(C)]
pub struct Range {
    pub start: u32,
    pub end: u32,
}

const _: () = assert!(std::mem::size_of::<Range>() == 8);

impl Range {
    /// Create a new range.
    #[inline]
    pub const fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    /// Create a range from cursor offsets.
    ///
    /// # Panics
    /// Panics in debug mode if values exceed u32::MAX.
    #[inline]
    pub fn from_usize(start: usize, end: usize) -> Self {
        debug_assert!(start <= end);
        debug_assert!(end <= u32::MAX as usize);
        Self {
            start: start as u32,
            end: end as u32,
        }
    }

    /// Empty range at a position, used for a missing image source.
    #[inline]
    pub const fn empty_at(pos: u32) -> Self {
        Self {
            start: pos,
            end: pos,
        }
    }

    #[inline]
    pub fn slice<'a>(&self, input: &'a [u8]) -> &'a [u8] {
        &input[self.start as usize..self.end as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_empty_source() {
        let r = Range::empty_at(7);
        assert_eq!(r, Range::new(7, 7));
        assert_eq!(r.slice(b"![alt]  tail"), b"");
    }

    #[test]
    fn test_range_slice_title() {
        let input = b"(url \"Title\")";
        let title = Range::from_usize(6, 11);
        assert_eq!(title.slice(input), b"Title");
    }
}

//! HTML output buffer.
//!
//! Append-only except for the pending link placeholder, which is rewritten
//! in place once the link target has been scanned.

use crate::limits::LINK_PLACEHOLDER;
use crate::stack::Element;

/// HTML output writer.
///
/// Only ASCII markup and input slices cut at ASCII delimiters are written,
/// so the buffer is always valid UTF-8.
///
/// # Example
/// ```
/// use sweepmark::{Element, HtmlWriter};
///
/// let mut writer = HtmlWriter::with_capacity_for(16);
/// writer.open(Element::Heading(2));
/// writer.write_text("Title");
/// writer.close(Element::Heading(2));
/// assert_eq!(writer.as_str(), "<h2>Title</h2>");
/// ```
pub struct HtmlWriter {
    out: Vec<u8>,
}

impl HtmlWriter {
    #[inline]
    pub fn new() -> Self {
        Self {
            out: Vec::with_capacity(1024),
        }
    }

    /// Create with pre-allocated capacity based on expected input size.
    ///
    /// Markup adds roughly a quarter on top of the input.
    #[inline]
    pub fn with_capacity_for(input_len: usize) -> Self {
        Self::with_buffer(Vec::with_capacity(input_len + input_len / 4))
    }

    /// Reuse an existing buffer; its contents are discarded.
    #[inline]
    pub fn with_buffer(mut out: Vec<u8>) -> Self {
        out.clear();
        Self { out }
    }

    /// Write input bytes verbatim. Callers pass whole UTF-8 sequences.
    #[inline]
    pub(crate) fn write_bytes(&mut self, bytes: &[u8]) {
        self.out.extend_from_slice(bytes);
    }

    /// Write literal text without escaping.
    #[inline]
    pub fn write_text(&mut self, text: &str) {
        self.out.extend_from_slice(text.as_bytes());
    }

    #[inline]
    fn write_str(&mut self, s: &'static str) {
        self.out.extend_from_slice(s.as_bytes());
    }

    /// Write an attribute value for a double-quoted attribute.
    fn write_escaped_attr(&mut self, value: &[u8]) {
        let value = String::from_utf8_lossy(value);
        let escaped = html_escape::encode_double_quoted_attribute(value.as_ref());
        self.out.extend_from_slice(escaped.as_bytes());
    }

    /// Write opening tag: `<tag>`
    #[inline]
    pub fn open(&mut self, element: Element) {
        self.out.push(b'<');
        self.write_str(element.tag());
        self.out.push(b'>');
    }

    /// Write closing tag: `</tag>`
    #[inline]
    pub fn close(&mut self, element: Element) {
        self.write_str("</");
        self.write_str(element.tag());
        self.out.push(b'>');
    }

    /// Write the anchor placeholder and return its offset.
    #[inline]
    pub fn link_placeholder(&mut self) -> usize {
        let at = self.out.len();
        self.write_str(LINK_PLACEHOLDER);
        at
    }

    /// Replace the placeholder at `at` with `<a href="..." title="...">`.
    pub fn patch_link(&mut self, at: usize, href: &[u8], title: Option<&[u8]>) {
        debug_assert!(self.placeholder_at(at));
        let mut opening = HtmlWriter::with_capacity_for(href.len() + 16);
        opening.write_str("<a href=\"");
        opening.write_escaped_attr(href);
        opening.out.push(b'"');
        if let Some(title) = title.filter(|t| !t.is_empty()) {
            opening.write_str(" title=\"");
            opening.write_escaped_attr(title);
            opening.out.push(b'"');
        }
        opening.out.push(b'>');
        self.out.splice(at..at + LINK_PLACEHOLDER.len(), opening.out);
    }

    /// Turn the placeholder at `at` back into the literal `[` it came from.
    pub fn revert_link_placeholder(&mut self, at: usize) {
        debug_assert!(self.placeholder_at(at));
        self.out.splice(at..at + LINK_PLACEHOLDER.len(), [b'[']);
    }

    fn placeholder_at(&self, at: usize) -> bool {
        self.out.get(at..at + LINK_PLACEHOLDER.len()) == Some(LINK_PLACEHOLDER.as_bytes())
    }

    /// Insert an opening tag at `at`, before output already written.
    pub fn insert_open(&mut self, at: usize, element: Element) {
        let tag = element.tag().as_bytes();
        let mut opening = Vec::with_capacity(tag.len() + 2);
        opening.push(b'<');
        opening.extend_from_slice(tag);
        opening.push(b'>');
        self.out.splice(at..at, opening);
    }

    /// Write a void image element. `src` is always present, `alt` and
    /// `title` only when non-empty.
    pub fn image(&mut self, src: &[u8], alt: &[u8], title: Option<&[u8]>) {
        self.write_str("<img src=\"");
        self.write_escaped_attr(src);
        self.out.push(b'"');
        if !alt.is_empty() {
            self.write_str(" alt=\"");
            self.write_escaped_attr(alt);
            self.out.push(b'"');
        }
        if let Some(title) = title.filter(|t| !t.is_empty()) {
            self.write_str(" title=\"");
            self.write_escaped_attr(title);
            self.out.push(b'"');
        }
        self.out.push(b'>');
    }

    /// Current output length.
    #[inline]
    pub fn len(&self) -> usize {
        self.out.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.out.is_empty()
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        // SAFETY: only ASCII markup and whole UTF-8 sequences are written
        unsafe { std::str::from_utf8_unchecked(&self.out) }
    }

    #[inline]
    pub fn into_vec(self) -> Vec<u8> {
        self.out
    }

    #[inline]
    pub fn into_string(self) -> String {
        // SAFETY: only ASCII markup and whole UTF-8 sequences are written
        unsafe { String::from_utf8_unchecked(self.out) }
    }
}

impl Default for HtmlWriter {
    fn default() -> Self {
        Self::new()
    }
}

//! sweepmark: single-pass Markdown subset to HTML transducer
//!
//! The input is scanned once, left to right. There is no document tree:
//! each byte is either copied to the output or interpreted as a trigger
//! that opens or closes an element, and an explicit stack of pending
//! closers keeps the output well formed.
//!
//! # Supported syntax
//! - ATX headings `#` to `######`, closed at the end of the line
//! - Paragraphs, one per line
//! - Unordered lists `- `, nested by indentation
//! - Emphasis `*x*` / `_x_` and strong `**x**` / `__x__` (toggle based)
//! - Links `[text](target "title")` and images `![alt](src "title")`
//!
//! # Design Principles
//! - No AST: output is produced while scanning
//! - No backtracking: lookahead always advances the cursor past what it read
//! - Total: every input renders, malformed markup degrades to literal text
//! - Literal text is not HTML-escaped; attribute values are

/// Emit a `log::trace!` record when the `trace` feature is enabled.
macro_rules! trace_event {
    ($($arg:tt)*) => {
        #[cfg(feature = "trace")]
        log::trace!($($arg)*);
    };
}

mod block;
mod boundary;
pub mod cursor;
mod inline;
pub mod limits;
pub mod range;
pub mod render;
mod scanner;
pub mod stack;

pub use range::Range;
pub use render::HtmlWriter;
pub use stack::Element;

use scanner::Scanner;

/// What to do with a `[` that never becomes a complete link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnresolvedLink {
    /// Rewrite the pending anchor back to the literal `[` it came from.
    #[default]
    Literal,
    /// Keep an `<a>` without `href` around the scanned text.
    Anchor,
}

/// Rendering options.
#[derive(Debug, Clone, Copy, Default)]
pub struct Options {
    /// Handling of `[` without a following `](target)` on the same line.
    pub unresolved_links: UnresolvedLink,
}

/// Convert Markdown to HTML.
///
/// # Example
/// ```
/// let html = sweepmark::render("# Hello\nWorld");
/// assert_eq!(html, "<h1>Hello</h1>\n<p>World</p>");
/// ```
pub fn render(input: &str) -> String {
    render_with_options(input, &Options::default())
}

/// Convert Markdown to HTML with options.
pub fn render_with_options(input: &str, options: &Options) -> String {
    let writer = HtmlWriter::with_capacity_for(input.len());
    Scanner::new(input.as_bytes(), writer, *options)
        .run()
        .into_string()
}

/// Convert Markdown to HTML, writing into a provided buffer.
///
/// The buffer is cleared first; its capacity is reused.
pub fn render_into(input: &str, out: &mut Vec<u8>) {
    render_into_with_options(input, out, &Options::default());
}

/// Convert Markdown to HTML into a provided buffer with options.
pub fn render_into_with_options(input: &str, out: &mut Vec<u8>, options: &Options) {
    let mut buffer = std::mem::take(out);
    buffer.reserve(input.len() + input.len() / 4);
    let writer = HtmlWriter::with_buffer(buffer);
    *out = Scanner::new(input.as_bytes(), writer, *options)
        .run()
        .into_vec();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paragraph() {
        assert_eq!(render("text"), "<p>text</p>");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(render(""), "");
        assert_eq!(render("\n\n"), "");
    }

    #[test]
    fn test_render_into_reuses_buffer() {
        let mut out = b"leftover".to_vec();
        render_into("# Title", &mut out);
        assert_eq!(out, b"<h1>Title</h1>");
        render_into("- a", &mut out);
        assert_eq!(out, b"<ul><li>a</li></ul>");
    }

    #[test]
    fn test_options_default_is_literal() {
        assert_eq!(Options::default().unresolved_links, UnresolvedLink::Literal);
    }

    #[test]
    fn test_multibyte_text_survives() {
        assert_eq!(render("# Héllo *wörld*"), "<h1>Héllo <i>wörld</i></h1>");
    }
}

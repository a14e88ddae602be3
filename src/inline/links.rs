//! Link and image handling.
//!
//! Handles:
//! - Inline links: `[text](url "title")`
//! - Images: `![alt](url "title")`
//!
//! A link is opened as a placeholder anchor at `[` and its content is
//! scanned as ordinary inline text. The target is only known at `]`, so the
//! placeholder is patched in place then. An image is scanned ahead in one
//! go and written as a single void element.

use crate::cursor::{Cursor, is_line_break};
use crate::scanner::Scanner;
use crate::stack::Element;
use crate::{Range, UnresolvedLink};

/// A parsed `(url "title")` span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Destination {
    pub url: Range,
    pub title: Option<Range>,
    /// Offset just past the closing `)`.
    pub end: usize,
}

/// What follows a url: the title and the offset past `)`, or `None` if the
/// destination is malformed.
type Tail = Option<(Option<Range>, usize)>;

/// Results of earlier lookahead scans on the current line.
///
/// A url or bracket scan that starts anywhere inside an already scanned
/// stretch ends at the same stop byte, so it is answered from here. Every
/// byte is then read by at most one scan of each kind, which keeps lines
/// of repeated `[](` or `![` linear.
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct Lookahead {
    /// `(from, end, tail)`: a url starting in `from..=end` ends at `end`.
    url: Option<(usize, usize, Tail)>,
    /// `(from, stop)`: the first `]` or line break at or after any offset
    /// in `from..=stop` is at `stop`.
    bracket: Option<(usize, usize)>,
}

impl Lookahead {
    /// Parse `(url)` or `(url "title")` starting exactly at `at`.
    ///
    /// The url runs up to a space or `)`. The whole span must sit on one
    /// line.
    pub(crate) fn destination(&mut self, cursor: &Cursor<'_>, at: usize) -> Option<Destination> {
        if cursor.input().get(at) != Some(&b'(') {
            return None;
        }

        let url_start = at + 1;
        let (url_end, tail) = match self.url {
            Some((from, end, tail)) if (from..=end).contains(&url_start) => (end, tail),
            _ => {
                let end = scan_url(cursor.input(), url_start);
                let tail = destination_tail(cursor, end);
                self.url = Some((url_start, end, tail));
                (end, tail)
            }
        };

        let (title, end) = tail?;
        Some(Destination {
            url: Range::from_usize(url_start, url_end),
            title,
            end,
        })
    }

    /// Offset of the `]` closing a bracket opened before `from`, if it is on
    /// the same line.
    fn close_bracket(&mut self, cursor: &Cursor<'_>, from: usize) -> Option<usize> {
        let stop = match self.bracket {
            Some((start, stop)) if (start..=stop).contains(&from) => stop,
            _ => {
                let stop = cursor.line_stop(from, b']');
                self.bracket = Some((from, stop));
                stop
            }
        };
        (cursor.input().get(stop) == Some(&b']')).then_some(stop)
    }

    /// Scan an image starting at the `!` under the cursor.
    ///
    /// Requires a `]` on the same line. Without a well-formed destination
    /// right after it, the image gets an empty source and the span ends at
    /// `]`.
    pub(crate) fn image(&mut self, cursor: &Cursor<'_>) -> Option<ImageSpan> {
        let alt_start = cursor.offset() + 2;
        let alt_end = self.close_bracket(cursor, alt_start)?;
        let alt = Range::from_usize(alt_start, alt_end);
        let after = alt_end + 1;

        Some(match self.destination(cursor, after) {
            Some(dest) => ImageSpan {
                alt,
                src: dest.url,
                title: dest.title,
                end: dest.end,
            },
            None => ImageSpan {
                alt,
                src: Range::empty_at(after as u32),
                title: None,
                end: after,
            },
        })
    }
}

/// Offset of the space, `)` or line break ending a url that starts at `from`.
fn scan_url(input: &[u8], from: usize) -> usize {
    input
        .get(from..)
        .and_then(|rest| {
            rest.iter()
                .position(|&b| b == b' ' || b == b')' || is_line_break(b))
        })
        .map_or(input.len(), |found| from + found)
}

/// Optional `"title"` and the closing `)` after a url ending at `pos`.
fn destination_tail(cursor: &Cursor<'_>, mut pos: usize) -> Tail {
    let input = cursor.input();
    pos += count_spaces(&input[pos..]);

    let mut title = None;
    if input.get(pos) == Some(&b'"') {
        let title_start = pos + 1;
        let title_end = cursor.find_in_line(title_start, b'"')?;
        title = Some(Range::from_usize(title_start, title_end));
        pos = title_end + 1;
        pos += count_spaces(&input[pos..]);
    }

    (input.get(pos) == Some(&b')')).then_some((title, pos + 1))
}

fn count_spaces(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|&&b| b == b' ').count()
}

/// A scanned `![alt](src "title")` span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ImageSpan {
    pub alt: Range,
    pub src: Range,
    pub title: Option<Range>,
    /// Offset just past the consumed span.
    pub end: usize,
}

impl Scanner<'_> {
    /// `[` opens a placeholder anchor. Links do not nest: a `[` while one
    /// is pending is literal.
    pub(crate) fn link_open(&mut self) {
        if self.pending_link.is_some() {
            return self.text();
        }
        self.cursor.bump();
        self.start_bare_inline();
        let at = self.out.link_placeholder();
        trace_event!("link placeholder at {}", at);
        self.open.push(Element::Anchor);
        self.pending_link = Some(at);
    }

    /// `]` resolves the pending link if `(target)` follows immediately.
    pub(crate) fn link_close(&mut self) {
        let (Some(at), Some(index)) = (self.pending_link, self.open.position(Element::Anchor))
        else {
            return self.text();
        };

        let after = self.cursor.offset() + 1;
        let Some(dest) = self.lookahead.destination(&self.cursor, after) else {
            self.cursor.bump();
            self.abandon_link(at, index);
            return;
        };

        while self.open.len() > index + 1 {
            self.close_top();
        }
        let input = self.cursor.input();
        trace_event!("link at {} resolved", at);
        self.out.patch_link(
            at,
            dest.url.slice(input),
            dest.title.map(|t| t.slice(input)),
        );
        self.pending_link = None;
        self.close_top();
        self.cursor.advance(dest.end - self.cursor.offset());
    }

    /// `]` without a target.
    fn abandon_link(&mut self, at: usize, index: usize) {
        match self.options.unresolved_links {
            UnresolvedLink::Literal => {
                trace_event!("link at {} has no target, kept as text", at);
                self.open.remove(index);
                self.pending_link = None;
                self.out.revert_link_placeholder(at);
                self.out.write_text("]");
                self.wrap_bare_line();
            }
            UnresolvedLink::Anchor => {
                while self.open.len() > index + 1 {
                    self.close_top();
                }
                self.pending_link = None;
                self.close_top();
            }
        }
    }

    /// `![` starts an image. Without a `]` on the line the `!` is literal.
    pub(crate) fn image(&mut self) {
        let Some(span) = self.lookahead.image(&self.cursor) else {
            return self.text();
        };
        self.start_bare_inline();
        let input = self.cursor.input();
        trace_event!("image at {}", self.cursor.offset());
        self.out.image(
            span.src.slice(input),
            span.alt.slice(input),
            span.title.map(|t| t.slice(input)),
        );
        self.cursor.advance(span.end - self.cursor.offset());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn destination(input: &[u8], at: usize) -> Option<(Vec<u8>, Option<Vec<u8>>, usize)> {
        let cursor = Cursor::new(input);
        Lookahead::default().destination(&cursor, at).map(|d| {
            (
                d.url.slice(input).to_vec(),
                d.title.map(|t| t.slice(input).to_vec()),
                d.end,
            )
        })
    }

    #[test]
    fn test_destination_plain() {
        assert_eq!(destination(b"](anchor) tail", 1), Some((b"anchor".to_vec(), None, 9)));
    }

    #[test]
    fn test_destination_with_title() {
        let input = b"(url  \"A title\" )";
        assert_eq!(
            destination(input, 0),
            Some((b"url".to_vec(), Some(b"A title".to_vec()), input.len()))
        );
    }

    #[test]
    fn test_destination_empty() {
        assert_eq!(destination(b"()", 0), Some((Vec::new(), None, 2)));
    }

    #[test]
    fn test_destination_rejects_malformed() {
        assert_eq!(destination(b"x(url)", 0), None);
        assert_eq!(destination(b"(url", 0), None);
        assert_eq!(destination(b"(url trailing)", 0), None);
        assert_eq!(destination(b"(url \"open)", 0), None);
        assert_eq!(destination(b"(url\n)", 0), None);
    }

    #[test]
    fn test_image_full() {
        let input = b"![alt](src \"T\") after";
        let span = Lookahead::default().image(&Cursor::new(input)).unwrap();
        assert_eq!(span.alt.slice(input), b"alt");
        assert_eq!(span.src.slice(input), b"src");
        assert_eq!(span.title.map(|t| t.slice(input)), Some(b"T".as_slice()));
        assert_eq!(&input[span.end..], b" after");
    }

    #[test]
    fn test_image_without_destination() {
        let input = b"![alt] (src)";
        let span = Lookahead::default().image(&Cursor::new(input)).unwrap();
        assert_eq!(span.src.slice(input), b"");
        assert_eq!(span.end, 6);
    }

    #[test]
    fn test_image_needs_bracket_on_line() {
        assert!(Lookahead::default().image(&Cursor::new(b"![alt\n]")).is_none());
    }

    #[test]
    fn test_failed_url_scan_is_reused_on_the_same_line() {
        let input = "[](".repeat(64);
        let cursor = Cursor::new(input.as_bytes());
        let mut lookahead = Lookahead::default();

        assert_eq!(lookahead.destination(&cursor, 2), None);
        let first = lookahead.url;
        assert_eq!(first.map(|(from, end, _)| (from, end)), Some((3, input.len())));

        for at in (5..input.len()).step_by(3) {
            assert_eq!(lookahead.destination(&cursor, at), None);
        }
        assert_eq!(lookahead.url.map(|(from, end, _)| (from, end)), Some((3, input.len())));
    }

    #[test]
    fn test_cached_url_keeps_its_own_start() {
        let input = b"(a(b \"t\")";
        let cursor = Cursor::new(input);
        let mut lookahead = Lookahead::default();

        let outer = lookahead.destination(&cursor, 0).unwrap();
        assert_eq!(outer.url.slice(input), b"a(b");
        let inner = lookahead.destination(&cursor, 2).unwrap();
        assert_eq!(inner.url.slice(input), b"b");
        assert_eq!(inner.title.map(|t| t.slice(input)), Some(b"t".as_slice()));
        assert_eq!(inner.end, outer.end);
    }

    #[test]
    fn test_failed_bracket_scan_is_reused_on_the_same_line() {
        let input = "![".repeat(64);
        let mut lookahead = Lookahead::default();
        let mut cursor = Cursor::new(input.as_bytes());

        while cursor.remaining() > 0 {
            assert!(lookahead.image(&cursor).is_none());
            assert_eq!(lookahead.bracket, Some((2, input.len())));
            cursor.advance(2);
        }
    }
}

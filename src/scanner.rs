//! Scanner and dispatcher.
//!
//! Owns the per-call state shared by the block, inline and line-boundary
//! handlers: cursor, output buffer, open-element stack, block kind and the
//! indentation counters.

use crate::cursor::Cursor;
use crate::inline::Lookahead;
use crate::render::HtmlWriter;
use crate::stack::{Element, OpenElements};
use crate::{Options, UnresolvedLink};

/// Innermost block-level construct currently open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BlockKind {
    None,
    Paragraph,
    /// Heading level (1-6).
    Heading(u8),
    List,
}

/// Bytes that end a run of literal text.
///
/// `#` and `-` are only triggers at the start of a line, which a text run
/// never crosses, so they are copied in bulk.
const TEXT_STOP: [bool; 256] = {
    let mut table = [false; 256];
    table[b'\n' as usize] = true;
    table[b'\r' as usize] = true;
    table[b'*' as usize] = true;
    table[b'_' as usize] = true;
    table[b'[' as usize] = true;
    table[b']' as usize] = true;
    table[b'!' as usize] = true;
    table
};

pub(crate) struct Scanner<'a> {
    pub(crate) cursor: Cursor<'a>,
    pub(crate) out: HtmlWriter,
    pub(crate) open: OpenElements,
    pub(crate) block: BlockKind,
    /// Inline content is flowing on the current line. Set by every block
    /// that holds text, and by a link or image seen outside any block.
    pub(crate) inline: bool,
    /// Output offset where inline content outside any block began on the
    /// current line.
    pub(crate) bare_start: Option<usize>,
    /// No byte of the current line has been dispatched yet.
    pub(crate) line_start: bool,
    pub(crate) indent: usize,
    pub(crate) previous_indent: usize,
    /// Output offset of the anchor placeholder waiting for its target.
    pub(crate) pending_link: Option<usize>,
    pub(crate) lookahead: Lookahead,
    pub(crate) options: Options,
}

impl<'a> Scanner<'a> {
    pub(crate) fn new(input: &'a [u8], out: HtmlWriter, options: Options) -> Self {
        Self {
            cursor: Cursor::new(input),
            out,
            open: OpenElements::new(),
            block: BlockKind::None,
            inline: false,
            bare_start: None,
            line_start: true,
            indent: 0,
            previous_indent: 0,
            pending_link: None,
            lookahead: Lookahead::default(),
            options,
        }
    }

    /// Scan the whole input and return the finished output.
    pub(crate) fn run(mut self) -> HtmlWriter {
        self.indent = self.cursor.skip_spaces();

        while let Some(b) = self.cursor.peek() {
            let line_start = std::mem::replace(&mut self.line_start, false);
            match b {
                b'\n' | b'\r' => self.line_boundary(),
                b'#' if line_start => self.heading(),
                b'-' if line_start && self.cursor.at_pair(b'-', b' ') => self.list_item(),
                b'*' | b'_' => self.emphasis(b),
                b'[' => self.link_open(),
                b']' => self.link_close(),
                b'!' if self.cursor.peek_ahead(1) == Some(b'[') => self.image(),
                _ => self.text(),
            }
        }

        self.close_all();
        debug_assert!(self.pending_link.is_none());
        self.out
    }

    /// Copy a run of literal text, starting with the current byte whatever
    /// it is.
    pub(crate) fn text(&mut self) {
        self.ensure_block();
        let start = self.cursor.offset();
        self.cursor.bump();
        self.cursor.skip_while(|b| !TEXT_STOP[b as usize]);
        let run = self.cursor.range_from(start);
        self.out.write_bytes(run.slice(self.cursor.input()));
    }

    /// Open a paragraph if nothing on this line holds inline content yet.
    pub(crate) fn ensure_block(&mut self) {
        if self.block == BlockKind::None && !self.inline {
            self.open_element(Element::Paragraph);
            self.block = BlockKind::Paragraph;
            self.inline = true;
        }
    }

    /// A link or image outside any block starts inline content without a
    /// paragraph around it.
    pub(crate) fn start_bare_inline(&mut self) {
        if self.block == BlockKind::None && !self.inline {
            self.bare_start = Some(self.out.len());
        }
        self.inline = true;
    }

    /// A bare line turned out to hold ordinary text: wrap it in a paragraph
    /// from where its inline content began. Only inline entries are open
    /// outside a block, so the paragraph goes to the bottom of the stack.
    pub(crate) fn wrap_bare_line(&mut self) {
        if self.block != BlockKind::None {
            return;
        }
        let Some(at) = self.bare_start.take() else {
            return;
        };
        trace_event!("bare line from {} wrapped in <p>", at);
        debug_assert!(self.open.position(Element::Paragraph).is_none());
        self.out.insert_open(at, Element::Paragraph);
        self.open.insert_below(0, Element::Paragraph);
        self.block = BlockKind::Paragraph;
    }

    pub(crate) fn open_element(&mut self, element: Element) {
        trace_event!("open <{}> at {}", element.tag(), self.cursor.offset());
        self.out.open(element);
        self.open.push(element);
    }

    /// Pop the innermost element and write its closer.
    ///
    /// An anchor that is still waiting for its target is either reverted to
    /// a literal `[` or closed as a bare `<a>`, depending on the options. A
    /// reverted anchor leaves ordinary text, so a bare line gets its
    /// paragraph after all.
    pub(crate) fn close_top(&mut self) {
        let Some(element) = self.open.pop() else {
            return;
        };
        if element == Element::Anchor {
            if let Some(at) = self.pending_link.take() {
                if self.options.unresolved_links == UnresolvedLink::Literal {
                    trace_event!("unresolved link at {} reverted to text", at);
                    self.out.revert_link_placeholder(at);
                    self.wrap_bare_line();
                    return;
                }
            }
        }
        self.out.close(element);
    }

    /// Close emphasis and anchors above the innermost block element.
    pub(crate) fn close_inline(&mut self) {
        while self.open.top().is_some_and(Element::is_inline) {
            self.close_top();
        }
    }

    /// Close every open element, innermost first.
    pub(crate) fn close_all(&mut self) {
        while !self.open.is_empty() {
            self.close_top();
        }
    }
}

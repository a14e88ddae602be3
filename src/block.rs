//! Block-structure handlers: headings and list items.
//!
//! Both are only dispatched at the start of a line. Paragraphs are opened
//! implicitly by [`Scanner::ensure_block`].

use crate::limits::{MAX_HEADING_LEVEL, MAX_LIST_NESTING};
use crate::scanner::{BlockKind, Scanner};
use crate::stack::Element;

impl Scanner<'_> {
    /// `#`..`######` followed by at least one space opens a heading.
    ///
    /// A longer run, or a run without a following space, is written as
    /// literal text inside a new paragraph.
    pub(crate) fn heading(&mut self) {
        let rest = self.cursor.remaining_slice();
        let level = rest.iter().take_while(|&&b| b == b'#').count();
        let spaces = rest[level..].iter().take_while(|&&b| b == b' ').count();

        if level > MAX_HEADING_LEVEL || spaces == 0 {
            self.ensure_block();
            self.out.write_bytes(&rest[..level]);
            self.cursor.advance(level);
            return;
        }

        self.cursor.advance(level + spaces);
        let level = level as u8;
        self.open_element(Element::Heading(level));
        self.block = BlockKind::Heading(level);
        self.inline = true;
    }

    /// `- ` at the start of a line opens a list item.
    ///
    /// The nesting transition depends on the indentation of this line
    /// compared to the previous one and on what is innermost on the stack.
    pub(crate) fn list_item(&mut self) {
        self.cursor.advance(2);

        let in_item = self.open.top() == Some(Element::ListItem);
        if in_item && self.indent == self.previous_indent {
            self.close_top();
        } else if in_item && self.indent > self.previous_indent {
            if self.open.list_depth() < MAX_LIST_NESTING {
                trace_event!("nested list at depth {}", self.open.list_depth() + 1);
                self.open_element(Element::List);
            } else {
                self.close_top();
            }
        } else if self.indent < self.previous_indent {
            self.unwind_list_level();
        }

        if self.open.top() != Some(Element::List) {
            self.open_element(Element::List);
        }
        self.open_element(Element::ListItem);
        self.block = BlockKind::List;
        self.inline = true;
    }

    /// Close the innermost item and, if that list is nested in an item,
    /// the list and its parent item. One level per call.
    fn unwind_list_level(&mut self) {
        if self.open.top() == Some(Element::ListItem) {
            self.close_top();
        }
        if self.open.top() == Some(Element::List) && self.open.parent() == Some(Element::ListItem) {
            trace_event!("list dedent from depth {}", self.open.list_depth());
            self.close_top();
            self.close_top();
        }
    }
}

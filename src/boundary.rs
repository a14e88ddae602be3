//! Line-boundary handler.
//!
//! A run of line breaks, including lines that hold nothing but spaces, is
//! one boundary event. The spaces after the run are the indentation of the
//! next line.

use crate::cursor::is_line_break;
use crate::scanner::{BlockKind, Scanner};
use crate::stack::Element;

impl Scanner<'_> {
    pub(crate) fn line_boundary(&mut self) {
        let break_start = self.cursor.offset();
        let break_len = if self.cursor.at_pair(b'\r', b'\n') { 2 } else { 1 };

        let indent = loop {
            self.cursor.skip_line_breaks();
            let spaces = self.cursor.skip_spaces();
            if !self.cursor.peek().is_some_and(is_line_break) {
                break spaces;
            }
        };
        self.previous_indent = self.indent;
        self.indent = indent;
        self.line_start = true;

        self.close_inline();
        self.bare_start = None;

        match self.block {
            BlockKind::None => {}
            BlockKind::Paragraph | BlockKind::Heading(_) => {
                debug_assert!(match self.block {
                    BlockKind::Heading(level) => self.open.top() == Some(Element::Heading(level)),
                    _ => self.open.top() == Some(Element::Paragraph),
                });
                self.close_top();
                let input = self.cursor.input();
                self.out.write_bytes(&input[break_start..break_start + break_len]);
                self.block = BlockKind::None;
            }
            BlockKind::List => {
                if !self.cursor.at_pair(b'-', b' ') {
                    trace_event!("list ended at {}", self.cursor.offset());
                    self.close_all();
                    self.block = BlockKind::None;
                }
            }
        }
        self.inline = false;
    }
}

#[cfg(test)]
mod tests {
    use crate::render;

    #[test]
    fn test_line_break_closes_paragraph() {
        assert_eq!(render("text 1\ntext 2"), "<p>text 1</p>\n<p>text 2</p>");
    }

    #[test]
    fn test_blank_lines_coalesce() {
        assert_eq!(render("a\n\n\nb"), "<p>a</p>\n<p>b</p>");
        assert_eq!(render("a\n   \n\nb"), "<p>a</p>\n<p>b</p>");
    }

    #[test]
    fn test_crlf_is_emitted_whole() {
        assert_eq!(render("a\r\nb"), "<p>a</p>\r\n<p>b</p>");
    }

    #[test]
    fn test_crlf_between_items() {
        assert_eq!(render("- Item 1\r\n- Item 2"), "<ul><li>Item 1</li><li>Item 2</li></ul>");
    }

    #[test]
    fn test_mixed_break_run_between_items() {
        let input = "- Item 1\r\n\r\n\r- Item 2";
        assert_eq!(render(input), "<ul><li>Item 1</li><li>Item 2</li></ul>");
    }

    #[test]
    fn test_leading_breaks_are_dropped() {
        assert_eq!(render("\n\n# Title"), "<h1>Title</h1>");
    }

    #[test]
    fn test_list_closed_by_text_line() {
        assert_eq!(
            render("- Item 1\nnew paragraph"),
            "<ul><li>Item 1</li></ul><p>new paragraph</p>"
        );
    }

    #[test]
    fn test_emphasis_does_not_cross_lines() {
        assert_eq!(render("*a\nb*"), "<p><i>a</i></p>\n<p>b<i></i></p>");
    }

    #[test]
    fn test_emphasis_closed_between_items() {
        assert_eq!(
            render("- *a\n- b"),
            "<ul><li><i>a</i></li><li>b</li></ul>"
        );
    }
}

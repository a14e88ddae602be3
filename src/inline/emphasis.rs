//! Toggle-based emphasis.
//!
//! A marker closes the innermost element when it matches, otherwise it
//! opens a new one. There is no opener/closer pairing, so `*a*b*c*` simply
//! toggles italic four times.

use crate::scanner::Scanner;
use crate::stack::Element;

impl Scanner<'_> {
    /// `*`/`_` toggles `<i>`, a doubled marker toggles `<strong>`.
    pub(crate) fn emphasis(&mut self, marker: u8) {
        self.ensure_block();

        let element = if self.cursor.peek_ahead(1) == Some(marker) {
            self.cursor.advance(2);
            Element::Strong
        } else {
            self.cursor.bump();
            Element::Italic
        };

        if self.open.top() == Some(element) {
            self.close_top();
        } else {
            self.open_element(element);
        }
    }
}

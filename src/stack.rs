//! Open-element stack.
//!
//! Every entry stands for an opening tag already written to the output.
//! Popping an entry is the only way its closing tag gets written.

use smallvec::SmallVec;

/// An element whose closing tag is still pending.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Element {
    Paragraph,
    /// Heading level (1-6).
    Heading(u8),
    List,
    ListItem,
    Strong,
    Italic,
    Anchor,
}

impl Element {
    /// HTML tag name.
    pub fn tag(self) -> &'static str {
        match self {
            Self::Paragraph => "p",
            Self::Heading(1) => "h1",
            Self::Heading(2) => "h2",
            Self::Heading(3) => "h3",
            Self::Heading(4) => "h4",
            Self::Heading(5) => "h5",
            Self::Heading(_) => "h6",
            Self::List => "ul",
            Self::ListItem => "li",
            Self::Strong => "strong",
            Self::Italic => "i",
            Self::Anchor => "a",
        }
    }

    /// Inline elements are closed at every line boundary.
    #[inline]
    pub fn is_inline(self) -> bool {
        matches!(self, Self::Strong | Self::Italic | Self::Anchor)
    }
}

/// LIFO of pending closers.
#[derive(Debug, Default)]
pub struct OpenElements {
    entries: SmallVec<[Element; 16]>,
    lists: usize,
}

impl OpenElements {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn push(&mut self, element: Element) {
        if element == Element::List {
            self.lists += 1;
        }
        self.entries.push(element);
    }

    #[inline]
    pub fn pop(&mut self) -> Option<Element> {
        let element = self.entries.pop()?;
        if element == Element::List {
            self.lists -= 1;
        }
        Some(element)
    }

    /// Innermost open element.
    #[inline]
    pub fn top(&self) -> Option<Element> {
        self.entries.last().copied()
    }

    /// Element directly below the innermost one.
    #[inline]
    pub fn parent(&self) -> Option<Element> {
        let len = self.entries.len();
        if len < 2 {
            None
        } else {
            Some(self.entries[len - 2])
        }
    }

    /// Index of the innermost entry equal to `element`.
    pub fn position(&self, element: Element) -> Option<usize> {
        self.entries.iter().rposition(|&e| e == element)
    }

    /// Slide a block element under entries whose opening tags follow the
    /// one just inserted into the output.
    pub fn insert_below(&mut self, index: usize, element: Element) {
        debug_assert!(!element.is_inline());
        if element == Element::List {
            self.lists += 1;
        }
        self.entries.insert(index, element);
    }

    /// Drop an entry without closing it. Only valid for an element whose
    /// opening tag was removed from the output.
    pub fn remove(&mut self, index: usize) -> Element {
        let element = self.entries.remove(index);
        if element == Element::List {
            self.lists -= 1;
        }
        element
    }

    /// Number of open `<ul>` elements.
    #[inline]
    pub fn list_depth(&self) -> usize {
        self.lists
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

//! Fixed bounds of the transducer.
//!
//! Lists are the only construct whose depth is driven by the input alone,
//! so they are the only thing capped.

/// Deepest heading produced by a `#` run (`<h6>`).
pub const MAX_HEADING_LEVEL: usize = 6;

/// Maximum number of nested `<ul>` elements.
///
/// An indentation increase past this depth opens a sibling item instead.
pub const MAX_LIST_NESTING: usize = 32;

/// Anchor opening written at `[` until the link target is known.
pub const LINK_PLACEHOLDER: &str = "<a>";

//! Inline-formatting handlers.
//!
//! Inline markup is interpreted on the fly: emphasis toggles elements on
//! the open-element stack, links open a placeholder anchor that is patched
//! once the target is scanned, and images are written as one void element.

mod emphasis;
mod links;

pub(crate) use links::Lookahead;

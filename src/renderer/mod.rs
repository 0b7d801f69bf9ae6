//! Terminal output for animated elements.
//!
//! The effects never touch the terminal themselves; they only write into
//! [`TextElement`](crate::element::TextElement) slots. The presenter here
//! polls those slots and draws them in place, redrawing only lines whose text
//! actually changed since the last frame.

pub mod inline;

pub use inline::{InlinePresenter, truncate_to_width};

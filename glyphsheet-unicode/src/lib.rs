//! Character tables and classification for glyphsheet atlases.
//!
//! Each supported [`Language`] maps to a fixed list of inclusive code point ranges;
//! the atlas generator filters the resulting characters against the font's cmap.
//! [`CharClass`] is the coarse category written next to every glyph in the layout
//! document.

mod class;
mod language;

pub use class::CharClass;
pub use language::{Language, UnknownLanguage};

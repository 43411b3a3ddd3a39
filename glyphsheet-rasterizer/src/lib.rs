//! Font loading and glyph rasterization for glyphsheet atlases.
//!
//! Fonts are loaded from a file with `fontdb` and rendered to alpha masks with
//! `swash`. Everything the atlas packer needs from a font goes through the
//! [`GlyphSource`] trait, implemented here by [`SwashRasterizer`].

mod error;
mod face;
mod font_size;
mod glyph_bounds;
mod mask;
mod render;
mod shear;
mod source;
#[cfg(test)]
mod test_fonts;

pub use error::RasterizerError;
pub use face::FontFace;
pub use font_size::{FontSize, resolve_font_size, resolve_font_size_with};
pub use glyph_bounds::GlyphBounds;
pub use mask::{Anchor, GlyphMask, LineMetrics};
pub use render::{GlyphRenderer, render_glyph};
pub use shear::ItalicCell;
pub use source::{GlyphSource, SwashRasterizer};

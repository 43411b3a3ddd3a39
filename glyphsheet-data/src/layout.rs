/// Fixed dimensions of the generated atlases.
///
/// Every atlas is a single `CANVAS_WIDTH` wide image divided into rows of
/// `CELL_HEIGHT` pixels. Variable-width atlases pack glyphs back to back within a
/// row; fixed-width atlases give every glyph exactly one `CELL_WIDTH` cell.
#[derive(Debug, Clone, Copy)]
pub struct AtlasLayout;

#[rustfmt::skip]
impl AtlasLayout {
    pub const CELL_WIDTH: i32              = 128;
    pub const CELL_HEIGHT: i32             = 128;
    pub const CANVAS_WIDTH: i32            = 8192;
    /// Canvas height of variable-width atlases (two rows).
    pub const VARIABLE_CANVAS_HEIGHT: i32  = 256;
    /// Canvas height of fixed-width atlases (four rows).
    pub const FIXED_CANVAS_HEIGHT: i32     = 512;
    /// Left inset of a glyph inside a variable-width slot.
    pub const GLYPH_PADDING: i32           = 4;
    /// Horizontal gap added after each variable-width glyph; keeps hooks and
    /// overhangs out of the neighbouring slot.
    pub const GLYPH_SPACING: i32           = 8;
    /// Layout unit declared in the document's `width` attribute.
    pub const DECLARED_WIDTH: i32          = 64;
    /// Horizontal shear applied to italic variants (source x = x + SHEAR * y).
    pub const ITALIC_SHEAR: f64            = 0.3;
    /// Minimum ink height of `M`, relative to `CELL_HEIGHT`, when picking a font size.
    pub const TARGET_HEIGHT_RATIO: f32     = 0.5;
}

impl AtlasLayout {
    /// Number of glyph rows that fit a canvas of the given height.
    pub fn rows(canvas_height: i32) -> i32 {
        canvas_height / Self::CELL_HEIGHT
    }
}

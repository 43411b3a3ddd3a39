use std::fmt;

use glyphsheet_data::{AtlasLayout, FontVariant};

/// Canvas background of an atlas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Background {
    /// Fully transparent; the atlases described by the layout document.
    Transparent,
    /// Opaque black; written with an `_alpha` suffix.
    Opaque,
}

impl Background {
    pub fn rgba(self) -> [u8; 4] {
        match self {
            Background::Transparent => [0, 0, 0, 0],
            Background::Opaque => [0, 0, 0, 255],
        }
    }

    pub fn file_suffix(self) -> &'static str {
        match self {
            Background::Transparent => "",
            Background::Opaque => "_alpha",
        }
    }
}

/// Everything that determines how one atlas is packed.
///
/// Fixed-width packing is derived, never chosen: italic variants and opaque
/// backgrounds always pack one glyph per cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleConfig {
    variant: FontVariant,
    background: Background,
    stroke_width: u32,
}

impl StyleConfig {
    /// `bold_stroke_width` only applies to the bold variants; the others use no stroke.
    pub fn new(variant: FontVariant, background: Background, bold_stroke_width: u32) -> Self {
        let stroke_width = if variant.is_bold() { bold_stroke_width } else { 0 };
        Self { variant, background, stroke_width }
    }

    /// The eight atlases in generation order: the transparent variants first, then
    /// their opaque counterparts.
    pub fn all(bold_stroke_width: u32) -> [StyleConfig; 8] {
        let transparent = FontVariant::ALL.map(|v| Self::new(v, Background::Transparent, bold_stroke_width));
        let opaque = FontVariant::ALL.map(|v| Self::new(v, Background::Opaque, bold_stroke_width));

        [
            transparent[0], transparent[1], transparent[2], transparent[3],
            opaque[0], opaque[1], opaque[2], opaque[3],
        ]
    }

    pub fn variant(&self) -> FontVariant {
        self.variant
    }

    pub fn background(&self) -> Background {
        self.background
    }

    pub fn stroke_width(&self) -> u32 {
        self.stroke_width
    }

    pub fn is_italic(&self) -> bool {
        self.variant.is_italic()
    }

    pub fn is_fixed_width(&self) -> bool {
        self.variant.is_italic() || self.background == Background::Opaque
    }

    pub fn canvas_height(&self) -> i32 {
        if self.is_fixed_width() {
            AtlasLayout::FIXED_CANVAS_HEIGHT
        } else {
            AtlasLayout::VARIABLE_CANVAS_HEIGHT
        }
    }

    /// Width a glyph claims when checking whether it still fits the current row.
    pub(crate) fn slot_width(&self, natural_width: i32) -> i32 {
        if self.is_fixed_width() { AtlasLayout::CELL_WIDTH } else { natural_width }
    }

    /// Distance the cursor moves after placing a glyph.
    pub(crate) fn advance(&self, natural_width: i32) -> i32 {
        if self.is_fixed_width() {
            AtlasLayout::CELL_WIDTH
        } else {
            natural_width + 2 * self.stroke_width as i32 + AtlasLayout::GLYPH_SPACING
        }
    }

    /// File name (without extension) of this atlas for the given font.
    pub fn file_stem(&self, font_name: &str) -> String {
        format!(
            "{font_name}{}{}",
            self.variant.file_suffix(),
            self.background.file_suffix()
        )
    }
}

impl fmt::Display for StyleConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.background {
            Background::Transparent => write!(f, "{}", self.variant.element_name()),
            Background::Opaque => write!(f, "{} (opaque)", self.variant.element_name()),
        }
    }
}

/// The four style variants an atlas set is generated in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontVariant {
    Regular,
    Bold,
    Italic,
    BoldItalic,
}

impl FontVariant {
    /// All variants in generation and document order.
    pub const ALL: [FontVariant; 4] = [
        FontVariant::Regular,
        FontVariant::Bold,
        FontVariant::Italic,
        FontVariant::BoldItalic,
    ];

    pub fn is_bold(self) -> bool {
        matches!(self, FontVariant::Bold | FontVariant::BoldItalic)
    }

    pub fn is_italic(self) -> bool {
        matches!(self, FontVariant::Italic | FontVariant::BoldItalic)
    }

    /// Element name of this variant inside a `<character>` element.
    pub fn element_name(self) -> &'static str {
        match self {
            FontVariant::Regular => "regular",
            FontVariant::Bold => "bold",
            FontVariant::Italic => "italic",
            FontVariant::BoldItalic => "boldItalic",
        }
    }

    /// Suffix appended to the font name for this variant's texture file.
    pub fn file_suffix(self) -> &'static str {
        match self {
            FontVariant::Regular => "",
            FontVariant::Bold => "Bold",
            FontVariant::Italic => "Italic",
            FontVariant::BoldItalic => "BoldItalic",
        }
    }

    pub(crate) fn ordinal(self) -> usize {
        match self {
            FontVariant::Regular => 0,
            FontVariant::Bold => 1,
            FontVariant::Italic => 2,
            FontVariant::BoldItalic => 3,
        }
    }
}

/// Placement of one glyph variant in atlas pixel space.
///
/// `x`/`y` is the top-left of the glyph's ink inside its row, `width` its measured
/// horizontal extent. `y` is always a multiple of the row height.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct GlyphGeometry {
    pub x: i32,
    pub y: i32,
    pub width: i32,
}

impl GlyphGeometry {
    pub fn new(x: i32, y: i32, width: i32) -> Self {
        Self { x, y, width }
    }
}

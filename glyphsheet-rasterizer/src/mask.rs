/// Vertical font metrics at the rasterization size, in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineMetrics {
    /// Distance from the baseline up to the ascender line.
    pub ascent: f32,
    /// Distance from the baseline down to the descender line (positive).
    pub descent: f32,
}

/// A rasterized glyph as an 8-bit coverage mask.
///
/// `left`/`top` position the mask relative to the pen origin on the baseline:
/// mask pixel `(0, 0)` lands at `(pen_x + left, baseline - top)`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GlyphMask {
    pub left: i32,
    pub top: i32,
    pub width: u32,
    pub height: u32,
    /// Horizontal advance in pixels.
    pub advance: f32,
    /// Row-major coverage, `width * height` bytes.
    pub data: Vec<u8>,
}

impl GlyphMask {
    /// A glyph without ink, e.g. a space.
    pub fn empty(advance: f32) -> Self {
        Self { advance, ..Self::default() }
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Width of the ink box; the glyph's natural width in the atlas.
    pub fn ink_width(&self) -> i32 {
        self.width as i32
    }

    pub fn ink_height(&self) -> i32 {
        self.height as i32
    }

    /// Covered pixels as `(x, y, alpha)`, relative to the pen origin on the baseline.
    pub fn pixels(&self) -> impl Iterator<Item = (i32, i32, u8)> + '_ {
        let width = self.width.max(1) as usize;
        self.data
            .iter()
            .enumerate()
            .filter(|&(_, &alpha)| alpha > 0)
            .map(move |(i, &alpha)| {
                let x = (i % width) as i32 + self.left;
                let y = (i / width) as i32 - self.top;
                (x, y, alpha)
            })
    }
}

/// How a glyph is positioned relative to an anchor point.
///
/// Vertically the anchor always sits halfway between the ascender and descender
/// lines; horizontally it is either the pen origin or the middle of the advance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    LeftMiddle,
    CenterMiddle,
}

impl Anchor {
    /// Pen origin `(x, baseline_y)` that places `glyph` at anchor point `(x, y)`.
    pub fn pen_origin(self, glyph: &GlyphMask, metrics: LineMetrics, x: i32, y: i32) -> (i32, i32) {
        let pen_x = match self {
            Anchor::LeftMiddle => x as f32,
            Anchor::CenterMiddle => x as f32 - glyph.advance / 2.0,
        };
        let baseline = y as f32 + (metrics.ascent - metrics.descent) / 2.0;

        (pen_x.round() as i32, baseline.round() as i32)
    }
}

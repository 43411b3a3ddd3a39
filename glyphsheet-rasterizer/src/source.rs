use swash::scale::ScaleContext;

use crate::{FontFace, GlyphMask, LineMetrics, render_glyph};

/// Everything the atlas packer needs from a font at a fixed pixel size.
pub trait GlyphSource {
    /// Returns true when the font's cmap covers `ch`.
    fn has_glyph(&self, ch: char) -> bool;

    /// Vertical metrics at the rasterization size.
    fn line_metrics(&self) -> LineMetrics;

    /// Renders `ch`, widened by `stroke_width` pixels on every side.
    fn rasterize(&mut self, ch: char, stroke_width: u32) -> GlyphMask;
}

/// [`GlyphSource`] backed by swash.
pub struct SwashRasterizer {
    face: FontFace,
    context: ScaleContext,
    size: f32,
    metrics: LineMetrics,
}

impl SwashRasterizer {
    pub fn new(face: FontFace, size: f32) -> Self {
        let metrics = face.line_metrics(size);
        Self { face, context: ScaleContext::new(), size, metrics }
    }
}

impl GlyphSource for SwashRasterizer {
    fn has_glyph(&self, ch: char) -> bool {
        self.face.has_glyph(ch)
    }

    fn line_metrics(&self) -> LineMetrics {
        self.metrics
    }

    fn rasterize(&mut self, ch: char, stroke_width: u32) -> GlyphMask {
        render_glyph(ch)
            .stroke_width(stroke_width)
            .rasterize(&self.face, &mut self.context, self.size)
    }
}

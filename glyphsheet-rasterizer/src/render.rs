use swash::{
    scale::{Render, ScaleContext, Source},
    zeno::Format,
};
use tracing::trace;

use crate::{FontFace, GlyphMask};

const SOURCES: &[Source] = &[Source::Outline];

/// Builder for rendering a single character to a [`GlyphMask`].
#[derive(Debug)]
pub struct GlyphRenderer {
    symbol: char,
    stroke_width: u32,
}

pub fn render_glyph(symbol: char) -> GlyphRenderer {
    GlyphRenderer::new(symbol)
}

impl GlyphRenderer {
    fn new(symbol: char) -> Self {
        Self { symbol, stroke_width: 0 }
    }

    /// Widens the outline by `width` pixels on every side.
    pub fn stroke_width(mut self, width: u32) -> Self {
        self.stroke_width = width;
        self
    }

    /// Renders the glyph unhinted at `size` pixels per em.
    ///
    /// Characters without an outline (spaces, empty glyphs) produce an empty mask
    /// that still carries the advance.
    pub fn rasterize(self, face: &FontFace, context: &mut ScaleContext, size: f32) -> GlyphMask {
        let font = face.font_ref();
        let glyph_id = font.charmap().map(self.symbol);
        let advance = font.glyph_metrics(&[]).scale(size).advance_width(glyph_id);

        let mut scaler = context.builder(font).size(size).hint(false).build();

        let stroke = self.stroke_width as i32;
        let plain_bounds = if stroke > 0 {
            scaler.scale_outline(glyph_id).map(|outline| outline.bounds())
        } else {
            None
        };

        let mut render = Render::new(SOURCES);
        render.format(Format::Alpha);
        if stroke > 0 {
            // widens the ink by twice the strength
            render.embolden(self.stroke_width as f32);
        }

        match render.render(&mut scaler, glyph_id) {
            Some(image) if image.placement.width > 0 && image.placement.height > 0 => {
                trace!(
                    symbol = %self.symbol,
                    glyph_id,
                    width = image.placement.width,
                    height = image.placement.height,
                    "Rasterized glyph"
                );

                // the stroke straddles the plain outline, `stroke` px on each side
                let (left, top) = match plain_bounds {
                    Some(bounds) => (
                        bounds.min.x.floor() as i32 - stroke,
                        bounds.max.y.ceil() as i32 + stroke,
                    ),
                    None => (image.placement.left, image.placement.top),
                };

                GlyphMask {
                    left,
                    top,
                    width: image.placement.width,
                    height: image.placement.height,
                    advance,
                    data: image.data,
                }
            },
            _ => GlyphMask::empty(advance),
        }
    }
}

//! A synthetic [`GlyphSource`] drawing every glyph as a solid box.

use std::collections::{HashMap, HashSet};

use glyphsheet_rasterizer::{GlyphMask, GlyphSource, LineMetrics};

const DEFAULT_WIDTH: u32 = 20;
const GLYPH_HEIGHT: u32 = 40;

pub(crate) struct BoxFont {
    supported: HashSet<char>,
    widths: HashMap<char, u32>,
    default_width: u32,
    rasterize_calls: usize,
}

impl BoxFont {
    /// A font covering exactly the characters of `supported`.
    pub(crate) fn new(supported: &str) -> Self {
        Self {
            supported: supported.chars().collect(),
            widths: HashMap::new(),
            default_width: DEFAULT_WIDTH,
            rasterize_calls: 0,
        }
    }

    /// Overrides the ink width of `ch` at stroke 0.
    pub(crate) fn with_width(mut self, ch: char, width: u32) -> Self {
        self.widths.insert(ch, width);
        self
    }

    /// Sets the ink width at stroke 0 of every glyph without an override.
    pub(crate) fn with_default_width(mut self, width: u32) -> Self {
        self.default_width = width;
        self
    }

    pub(crate) fn rasterize_calls(&self) -> usize {
        self.rasterize_calls
    }
}

impl GlyphSource for BoxFont {
    fn has_glyph(&self, ch: char) -> bool {
        self.supported.contains(&ch)
    }

    fn line_metrics(&self) -> LineMetrics {
        LineMetrics { ascent: 60.0, descent: 20.0 }
    }

    fn rasterize(&mut self, ch: char, stroke_width: u32) -> GlyphMask {
        self.rasterize_calls += 1;

        let base = self.widths.get(&ch).copied().unwrap_or(self.default_width);
        if base == 0 {
            return GlyphMask::empty(8.0);
        }

        let width = base + 2 * stroke_width;
        let height = GLYPH_HEIGHT + 2 * stroke_width;
        GlyphMask {
            left: 2 - stroke_width as i32,
            top: (GLYPH_HEIGHT + stroke_width) as i32,
            width,
            height,
            advance: (base + 4) as f32,
            data: vec![255; (width * height) as usize],
        }
    }
}

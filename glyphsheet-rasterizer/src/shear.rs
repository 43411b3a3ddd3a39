use glyphsheet_data::AtlasLayout;

use crate::{Anchor, GlyphBounds, GlyphMask, LineMetrics};

/// A glyph drawn upright into a single cell and sheared into italic.
///
/// The glyph is centred on the cell, then every output pixel `(x, y)` samples the
/// upright image at `(x + SHEAR * y, y)` with bicubic interpolation. Ink shifted
/// outside the cell is lost.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItalicCell {
    alpha: Vec<u8>,
}

impl ItalicCell {
    /// Edge length of the square cell.
    pub const SIZE: i32 = AtlasLayout::CELL_WIDTH;

    pub fn render(glyph: &GlyphMask, metrics: LineMetrics) -> Self {
        let upright = Self::draw_upright(glyph, metrics);
        Self { alpha: shear(&upright, Self::SIZE, AtlasLayout::ITALIC_SHEAR) }
    }

    fn draw_upright(glyph: &GlyphMask, metrics: LineMetrics) -> Vec<u8> {
        let size = Self::SIZE;
        let mut canvas = vec![0u8; (size * size) as usize];
        let (pen_x, baseline) =
            Anchor::CenterMiddle.pen_origin(glyph, metrics, size / 2, size / 2);

        for (x, y, alpha) in glyph.pixels() {
            let (cx, cy) = (pen_x + x, baseline + y);
            if (0..size).contains(&cx) && (0..size).contains(&cy) {
                let idx = (cy * size + cx) as usize;
                canvas[idx] = canvas[idx].max(alpha);
            }
        }

        canvas
    }

    /// Covered pixels as `(x, y, alpha)` in cell coordinates.
    pub fn pixels(&self) -> impl Iterator<Item = (i32, i32, u8)> + '_ {
        let size = Self::SIZE;
        self.alpha
            .iter()
            .enumerate()
            .filter(|&(_, &alpha)| alpha > 0)
            .map(move |(i, &alpha)| (i as i32 % size, i as i32 / size, alpha))
    }

    /// Ink bounds from a sweep over every pixel of the cell.
    pub fn ink_bounds(&self) -> Option<GlyphBounds> {
        GlyphBounds::of_pixels(self.pixels())
    }
}

/// Shears a square coverage image horizontally: `src_x = x + factor * y`.
fn shear(src: &[u8], size: i32, factor: f64) -> Vec<u8> {
    let mut out = vec![0u8; src.len()];

    for y in 0..size {
        // sample at pixel centres
        let sy = f64::from(y) + 0.5;
        for x in 0..size {
            let sx = f64::from(x) + 0.5 + factor * sy;
            out[(y * size + x) as usize] = sample_bicubic(src, size, sx, sy);
        }
    }

    out
}

/// Samples `src` at continuous coordinates (pixel centres at `i + 0.5`).
///
/// Points outside the image are transparent and the 4x4 neighbourhood is clamped to
/// the image edges. The interpolated value is truncated, not rounded.
fn sample_bicubic(src: &[u8], size: i32, x: f64, y: f64) -> u8 {
    let extent = f64::from(size);
    if x < 0.0 || y < 0.0 || x >= extent || y >= extent {
        return 0;
    }

    let (x, y) = (x - 0.5, y - 0.5);
    let (x0, y0) = (x.floor(), y.floor());
    let (dx, dy) = (x - x0, y - y0);
    let (x0, y0) = (x0 as i32 - 1, y0 as i32 - 1);

    let at = |px: i32, py: i32| -> f64 {
        let px = px.clamp(0, size - 1);
        let py = py.clamp(0, size - 1);
        f64::from(src[(py * size + px) as usize])
    };
    let row = |py: i32| cubic(at(x0, py), at(x0 + 1, py), at(x0 + 2, py), at(x0 + 3, py), dx);

    let value = cubic(row(y0), row(y0 + 1), row(y0 + 2), row(y0 + 3), dy);
    if value <= 0.0 {
        0
    } else if value >= 255.0 {
        255
    } else {
        value as u8
    }
}

/// Cubic convolution (a = -1) between `v2` and `v3`, at `d` in [0, 1).
fn cubic(v1: f64, v2: f64, v3: f64, v4: f64, d: f64) -> f64 {
    let p1 = v2;
    let p2 = -v1 + v3;
    let p3 = 2.0 * (v1 - v2) + v3 - v4;
    let p4 = -v1 + v2 - v3 + v4;
    p1 + d * (p2 + d * (p3 + d * p4))
}

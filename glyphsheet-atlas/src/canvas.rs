use std::{fs::File, io::BufWriter, path::Path};

use glyphsheet_rasterizer::{Anchor, GlyphMask, ItalicCell, LineMetrics};

use crate::error::AtlasError;

const WHITE: [u8; 4] = [0xff, 0xff, 0xff, 0xff];

/// RGBA8 raster an atlas is drawn into.
pub struct AtlasCanvas {
    width: i32,
    height: i32,
    pixels: Vec<u8>,
}

impl std::fmt::Debug for AtlasCanvas {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AtlasCanvas")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("pixels_kb", &(self.pixels.len() / 1024))
            .finish()
    }
}

impl AtlasCanvas {
    pub fn new(width: i32, height: i32, background: [u8; 4]) -> Self {
        let pixels = background
            .iter()
            .copied()
            .cycle()
            .take((width * height * 4) as usize)
            .collect();

        Self { width, height, pixels }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn pixel(&self, x: i32, y: i32) -> Option<[u8; 4]> {
        let idx = self.index(x, y)?;
        let mut rgba = [0; 4];
        rgba.copy_from_slice(&self.pixels[idx..idx + 4]);
        Some(rgba)
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width || y >= self.height {
            return None;
        }
        Some(((y * self.width + x) * 4) as usize)
    }

    /// Blends `ink` into the pixel at `(x, y)` with the given coverage.
    /// Pixels outside the canvas are ignored.
    fn blend(&mut self, x: i32, y: i32, ink: [u8; 4], coverage: u8) {
        let Some(idx) = self.index(x, y) else {
            return;
        };

        let a = coverage as u32;
        for (dst, src) in self.pixels[idx..idx + 4].iter_mut().zip(ink) {
            *dst = ((src as u32 * a + *dst as u32 * (255 - a) + 127) / 255) as u8;
        }
    }

    /// Draws a glyph in white, positioned by `anchor` at `(x, y)`.
    pub fn draw_glyph(
        &mut self,
        glyph: &GlyphMask,
        metrics: LineMetrics,
        anchor: Anchor,
        x: i32,
        y: i32,
    ) {
        let (pen_x, baseline) = anchor.pen_origin(glyph, metrics, x, y);
        for (gx, gy, alpha) in glyph.pixels() {
            self.blend(pen_x + gx, baseline + gy, WHITE, alpha);
        }
    }

    /// Pastes a sheared italic cell with its top-left corner at `(x, y)`, using the
    /// cell's own coverage as mask.
    pub fn paste_cell(&mut self, cell: &ItalicCell, x: i32, y: i32) {
        for (cx, cy, alpha) in cell.pixels() {
            self.blend(x + cx, y + cy, WHITE, alpha);
        }
    }

    /// Writes the canvas as an 8-bit RGBA PNG.
    ///
    /// # Errors
    /// Fails when the file cannot be created or encoding fails.
    pub fn save_png(&self, path: &Path) -> Result<(), AtlasError> {
        let fail = |detail: String| AtlasError::image_write_failed(path, &detail);

        let file = File::create(path).map_err(|e| fail(e.to_string()))?;
        let mut encoder = png::Encoder::new(BufWriter::new(file), self.width as u32, self.height as u32);
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);

        let mut writer = encoder
            .write_header()
            .map_err(|e| fail(format!("PNG encoder error: {e}")))?;
        writer
            .write_image_data(&self.pixels)
            .map_err(|e| fail(format!("PNG write error: {e}")))?;
        writer
            .finish()
            .map_err(|e| fail(format!("PNG finish error: {e}")))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block(width: u32, height: u32) -> GlyphMask {
        GlyphMask {
            left: 0,
            top: height as i32,
            width,
            height,
            advance: width as f32,
            data: vec![255; (width * height) as usize],
        }
    }

    #[test]
    fn fills_background() {
        let transparent = AtlasCanvas::new(4, 2, [0, 0, 0, 0]);
        let opaque = AtlasCanvas::new(4, 2, [0, 0, 0, 255]);

        assert_eq!(transparent.pixel(3, 1), Some([0, 0, 0, 0]));
        assert_eq!(opaque.pixel(0, 0), Some([0, 0, 0, 255]));
        assert_eq!(opaque.pixel(4, 0), None);
    }

    #[test]
    fn draws_left_middle_anchored_glyph() {
        let metrics = LineMetrics { ascent: 20.0, descent: 10.0 };
        let mut canvas = AtlasCanvas::new(64, 64, [0, 0, 0, 0]);

        // baseline at 32 + 5; glyph covers rows 27..37, columns 4..8
        canvas.draw_glyph(&block(4, 10), metrics, Anchor::LeftMiddle, 4, 32);

        assert_eq!(canvas.pixel(4, 27), Some(WHITE));
        assert_eq!(canvas.pixel(7, 36), Some(WHITE));
        assert_eq!(canvas.pixel(8, 30), Some([0, 0, 0, 0]));
        assert_eq!(canvas.pixel(4, 37), Some([0, 0, 0, 0]));
    }

    #[test]
    fn partial_coverage_blends_towards_white() {
        let metrics = LineMetrics { ascent: 0.0, descent: 0.0 };
        let mut glyph = block(1, 1);
        glyph.data = vec![128];

        let mut canvas = AtlasCanvas::new(2, 2, [0, 0, 0, 255]);
        canvas.draw_glyph(&glyph, metrics, Anchor::LeftMiddle, 0, 1);

        assert_eq!(canvas.pixel(0, 0), Some([128, 128, 128, 255]));
    }

    #[test]
    fn clips_at_canvas_edges() {
        let metrics = LineMetrics { ascent: 0.0, descent: 0.0 };
        let mut canvas = AtlasCanvas::new(8, 8, [0, 0, 0, 0]);
        canvas.draw_glyph(&block(20, 20), metrics, Anchor::LeftMiddle, -4, 4);

        assert_eq!(canvas.pixel(0, 0), Some(WHITE));
        assert_eq!(canvas.pixel(7, 3), Some(WHITE));
        assert_eq!(canvas.pixel(7, 4), Some([0, 0, 0, 0]));
    }

    #[test]
    fn writes_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("atlas.png");

        AtlasCanvas::new(16, 8, [0, 0, 0, 255]).save_png(&path).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
    }

    #[test]
    fn unwritable_path_is_a_packing_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("atlas.png");

        let err = AtlasCanvas::new(1, 1, [0; 4]).save_png(&path).unwrap_err();
        assert!(!err.is_setup());
    }
}

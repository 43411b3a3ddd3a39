use glyphsheet_data::AtlasLayout;
use swash::scale::ScaleContext;
use tracing::{debug, info, warn};

use crate::{FontFace, render_glyph};

const MIN_FONT_SIZE: u32 = 50;
const MAX_FONT_SIZE: u32 = 150;
const REFERENCE_GLYPH: char = 'M';

/// The pixel size chosen for rasterizing a font.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontSize {
    /// Pixels per em.
    pub size: f32,
    /// Ink height of the reference glyph (`M`) at `size`.
    pub reference_height: i32,
    /// False when even the largest probed size fell short of the target.
    pub reached_target: bool,
}

/// Finds the smallest size whose `M` is at least `target_ratio` of a cell tall.
///
/// Sizes are probed one pixel at a time from 50 up to 150; the search is capped at
/// 150 when no size reaches the target.
pub fn resolve_font_size(face: &FontFace, target_ratio: f32) -> FontSize {
    let mut context = ScaleContext::new();
    resolve_font_size_with(target_ratio, |size| {
        render_glyph(REFERENCE_GLYPH)
            .rasterize(face, &mut context, size)
            .ink_height()
    })
}

/// [`resolve_font_size`] with a caller-supplied measurement of the reference glyph
/// height at a given size.
pub fn resolve_font_size_with(target_ratio: f32, mut measure: impl FnMut(f32) -> i32) -> FontSize {
    let target_height = AtlasLayout::CELL_HEIGHT as f32 * target_ratio;
    let mut last_height = 0;

    for size in MIN_FONT_SIZE..=MAX_FONT_SIZE {
        let height = measure(size as f32);
        debug!(size, height, target_height, "Probing font size");

        if height as f32 >= target_height {
            info!(size, reference_height = height, "Resolved font size");
            return FontSize { size: size as f32, reference_height: height, reached_target: true };
        }
        last_height = height;
    }

    warn!(
        size = MAX_FONT_SIZE,
        reference_height = last_height,
        target_height,
        "Reference glyph never reached the target height, capping font size"
    );
    FontSize {
        size: MAX_FONT_SIZE as f32,
        reference_height: last_height,
        reached_target: false,
    }
}

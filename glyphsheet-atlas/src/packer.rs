use std::{collections::HashMap, fmt};

use glyphsheet_data::{AtlasLayout, GlyphGeometry, MissingVariant};
use glyphsheet_rasterizer::{Anchor, GlyphBounds, GlyphMask, GlyphSource, ItalicCell, LineMetrics};
use tracing::{debug, warn};

use crate::{
    canvas::AtlasCanvas,
    coordinate::{AtlasCursor, CellOrigin},
    style::StyleConfig,
};

/// An italic cell together with its scanned ink bounds.
#[derive(Debug)]
struct ItalicGlyph {
    cell: ItalicCell,
    bounds: Option<GlyphBounds>,
}

/// Rasterized glyphs shared by every atlas pass.
///
/// Masks are keyed by `(character, stroke)` and italic cells by the same key, so the
/// opaque passes reuse what the transparent passes measured instead of rendering the
/// font again.
pub struct GlyphCache<S> {
    source: S,
    metrics: LineMetrics,
    masks: HashMap<(char, u32), GlyphMask>,
    italics: HashMap<(char, u32), ItalicGlyph>,
}

impl<S: GlyphSource> GlyphCache<S> {
    pub fn new(source: S) -> Self {
        let metrics = source.line_metrics();
        Self {
            source,
            metrics,
            masks: HashMap::new(),
            italics: HashMap::new(),
        }
    }

    #[cfg(test)]
    pub(crate) fn source(&self) -> &S {
        &self.source
    }

    pub fn line_metrics(&self) -> LineMetrics {
        self.metrics
    }

    fn mask(&mut self, ch: char, stroke_width: u32) -> &GlyphMask {
        self.masks
            .entry((ch, stroke_width))
            .or_insert_with(|| self.source.rasterize(ch, stroke_width))
    }

    /// Ink width of the unstroked glyph.
    fn natural_width(&mut self, ch: char) -> i32 {
        self.mask(ch, 0).ink_width()
    }

    fn italic(&mut self, ch: char, stroke_width: u32) -> &ItalicGlyph {
        let key = (ch, stroke_width);
        if !self.italics.contains_key(&key) {
            let metrics = self.metrics;
            let cell = ItalicCell::render(self.mask(ch, stroke_width), metrics);
            let bounds = cell.ink_bounds();
            self.italics.insert(key, ItalicGlyph { cell, bounds });
        }

        &self.italics[&key]
    }
}

/// A character placed in an atlas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacedGlyph {
    pub character: char,
    pub(crate) cell: CellOrigin,
    pub geometry: GlyphGeometry,
}

/// Non-fatal conditions found while packing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PackWarning {
    /// The atlas ran out of rows; `dropped` were never placed.
    Truncated {
        style: StyleConfig,
        placed: usize,
        dropped: Vec<char>,
    },
    /// Characters of the layout document lacking geometry in a later style pass.
    /// They are written with all-zero geometry for those variants.
    IncompleteRecords(Vec<MissingVariant>),
}

impl fmt::Display for PackWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PackWarning::Truncated { style, placed, dropped } => write!(
                f,
                "{style} atlas is full: placed {placed} characters, {} did not fit",
                dropped.len()
            ),
            PackWarning::IncompleteRecords(missing) => write!(
                f,
                "{} character variants have no atlas placement and use zero geometry",
                missing.len()
            ),
        }
    }
}

/// The canvas and placements of a single atlas.
#[derive(Debug)]
pub struct PackedAtlas {
    pub style: StyleConfig,
    pub canvas: AtlasCanvas,
    pub placements: Vec<PlacedGlyph>,
    pub truncated: Option<PackWarning>,
}

impl PackedAtlas {
    /// Geometry of every placed character, in placement order.
    pub fn geometry(&self) -> impl Iterator<Item = (char, GlyphGeometry)> + '_ {
        self.placements
            .iter()
            .map(|p| (p.character, p.geometry))
    }

    /// Number of rows holding at least one glyph.
    pub fn rows_used(&self) -> i32 {
        self.placements
            .last()
            .map_or(0, |p| p.cell.y / AtlasLayout::CELL_HEIGHT + 1)
    }
}

/// Packs `chars` into a fresh canvas for `style`, left to right and top to bottom.
///
/// Packing stops at the first character that no longer fits; the rest are reported
/// in [`PackedAtlas::truncated`].
pub fn pack_atlas<S: GlyphSource>(
    style: StyleConfig,
    chars: &[char],
    glyphs: &mut GlyphCache<S>,
) -> PackedAtlas {
    let height = style.canvas_height();
    let mut canvas = AtlasCanvas::new(AtlasLayout::CANVAS_WIDTH, height, style.background().rgba());
    let mut cursor = AtlasCursor::new(height);
    let mut placements = Vec::with_capacity(chars.len());
    let mut truncated = None;

    for (i, &ch) in chars.iter().enumerate() {
        let natural = glyphs.natural_width(ch);
        let Some(cell) = cursor.reserve(style.slot_width(natural)) else {
            let dropped = chars[i..].to_vec();
            warn!(
                style = %style,
                placed = i,
                dropped = dropped.len(),
                "Atlas out of rows, remaining characters not packed"
            );
            truncated = Some(PackWarning::Truncated { style, placed: i, dropped });
            break;
        };

        let (offset, width) = if style.is_italic() {
            place_italic(&mut canvas, glyphs, style, ch, cell, natural)
        } else {
            place_upright(&mut canvas, glyphs, style, ch, cell, natural)
        };

        placements.push(PlacedGlyph {
            character: ch,
            cell,
            geometry: GlyphGeometry::new(cell.x + offset, cell.y, width),
        });
        cursor.advance(style.advance(natural));
    }

    debug!(style = %style, placed = placements.len(), "Packed atlas");

    PackedAtlas { style, canvas, placements, truncated }
}

/// Returns the glyph's offset within its slot and its recorded width.
fn place_upright<S: GlyphSource>(
    canvas: &mut AtlasCanvas,
    glyphs: &mut GlyphCache<S>,
    style: StyleConfig,
    ch: char,
    cell: CellOrigin,
    natural: i32,
) -> (i32, i32) {
    let metrics = glyphs.line_metrics();
    let mask = glyphs.mask(ch, style.stroke_width());
    let mid_y = cell.y + AtlasLayout::CELL_HEIGHT / 2;

    if style.is_fixed_width() {
        let mid_x = cell.x + AtlasLayout::CELL_WIDTH / 2;
        canvas.draw_glyph(mask, metrics, Anchor::CenterMiddle, mid_x, mid_y);
        (0, natural)
    } else {
        let x = cell.x + AtlasLayout::GLYPH_PADDING;
        canvas.draw_glyph(mask, metrics, Anchor::LeftMiddle, x, mid_y);
        (AtlasLayout::GLYPH_PADDING, natural)
    }
}

fn place_italic<S: GlyphSource>(
    canvas: &mut AtlasCanvas,
    glyphs: &mut GlyphCache<S>,
    style: StyleConfig,
    ch: char,
    cell: CellOrigin,
    natural: i32,
) -> (i32, i32) {
    let italic = glyphs.italic(ch, style.stroke_width());
    canvas.paste_cell(&italic.cell, cell.x, cell.y);

    let offset = italic.bounds.map_or(0, |b| b.min_x);
    let span = italic.bounds.map_or(0, |b| b.column_span());
    (offset, if span > 0 { span } else { natural })
}

#[cfg(test)]
mod tests {
    use glyphsheet_data::FontVariant;
    use glyphsheet_unicode::Language;

    use super::*;
    use crate::{style::Background, test_font::BoxFont};

    fn latin_font() -> BoxFont {
        BoxFont::new(&Language::Latin.characters().into_iter().collect::<String>())
    }

    fn style(variant: FontVariant, background: Background) -> StyleConfig {
        StyleConfig::new(variant, background, 2)
    }

    fn regular() -> StyleConfig {
        style(FontVariant::Regular, Background::Transparent)
    }

    #[test]
    fn first_glyph_starts_at_origin() {
        let mut glyphs = GlyphCache::new(BoxFont::new("AB"));
        let atlas = pack_atlas(regular(), &['A', 'B'], &mut glyphs);

        let first = atlas.placements[0];
        assert_eq!(first.cell, CellOrigin { x: 0, y: 0 });
        assert_eq!(first.geometry, GlyphGeometry::new(4, 0, 20));
        assert_eq!(atlas.placements[1].geometry, GlyphGeometry::new(32, 0, 20));
        assert!(atlas.truncated.is_none());
    }

    #[test]
    fn x_increases_within_a_row() {
        let mut glyphs = GlyphCache::new(latin_font().with_width('M', 60).with_width('i', 6));
        let chars = Language::Latin.characters();
        let atlas = pack_atlas(regular(), &chars, &mut glyphs);

        assert_eq!(atlas.placements.len(), chars.len());
        for pair in atlas.placements.windows(2) {
            assert_eq!(pair[0].geometry.y, pair[1].geometry.y);
            assert!(pair[1].geometry.x > pair[0].geometry.x);
        }
    }

    #[test]
    fn wraps_to_the_next_row() {
        let mut glyphs = GlyphCache::new(latin_font().with_default_width(100));
        let chars: Vec<char> = Language::Latin.characters().into_iter().take(80).collect();
        let atlas = pack_atlas(regular(), &chars, &mut glyphs);

        // 75 slots of 100 px advancing by 108 fit into 8192
        let wrapped = atlas.placements[75];
        assert_eq!(atlas.placements[74].geometry.y, 0);
        assert_eq!(wrapped.cell, CellOrigin { x: 0, y: 128 });
        assert_eq!(wrapped.geometry.y, 128);
        assert!(wrapped.geometry.x <= AtlasLayout::GLYPH_PADDING);
    }

    #[test]
    fn bold_advance_includes_stroke() {
        let mut glyphs = GlyphCache::new(BoxFont::new("AB"));
        let bold = style(FontVariant::Bold, Background::Transparent);
        let atlas = pack_atlas(bold, &['A', 'B'], &mut glyphs);

        // natural width 20, stroke 2 on both sides, 8 spacing
        assert_eq!(atlas.placements[1].geometry, GlyphGeometry::new(36, 0, 20));
    }

    #[test]
    fn fixed_width_glyphs_stay_in_their_cell() {
        let chars = Language::Latin.characters();
        let fixed_styles = [
            style(FontVariant::Italic, Background::Transparent),
            style(FontVariant::BoldItalic, Background::Transparent),
            style(FontVariant::Regular, Background::Opaque),
            style(FontVariant::Bold, Background::Opaque),
            style(FontVariant::Italic, Background::Opaque),
            style(FontVariant::BoldItalic, Background::Opaque),
        ];

        let mut glyphs = GlyphCache::new(latin_font().with_width('W', 90));
        for style in fixed_styles {
            let atlas = pack_atlas(style, &chars, &mut glyphs);
            assert_eq!(atlas.placements.len(), chars.len(), "{style}");

            for placed in &atlas.placements {
                let cell_x = placed.cell.x;
                assert_eq!(cell_x % AtlasLayout::CELL_WIDTH, 0);
                assert_eq!(placed.geometry.y % AtlasLayout::CELL_HEIGHT, 0);
                assert!((cell_x..cell_x + AtlasLayout::CELL_WIDTH).contains(&placed.geometry.x));
            }
        }
    }

    #[test]
    fn italic_geometry_comes_from_the_sheared_cell() {
        let mut glyphs = GlyphCache::new(BoxFont::new("A"));
        let italic = style(FontVariant::Italic, Background::Transparent);
        let atlas = pack_atlas(italic, &['A'], &mut glyphs);

        let geometry = atlas.placements[0].geometry;
        assert!(geometry.x > 0);
        // the 40 px tall box leans by 0.3 * 40 = 12 px
        assert!((30..=34).contains(&geometry.width), "width {}", geometry.width);
    }

    #[test]
    fn empty_italic_falls_back_to_natural_width() {
        let mut glyphs = GlyphCache::new(BoxFont::new("AB").with_width('B', 0));
        let italic = style(FontVariant::Italic, Background::Transparent);
        let atlas = pack_atlas(italic, &['A', 'B'], &mut glyphs);

        assert_eq!(atlas.placements[1].geometry, GlyphGeometry::new(128, 0, 0));
    }

    #[test]
    fn packing_is_deterministic() {
        let chars = Language::Latin.characters();
        let run = || {
            let mut glyphs = GlyphCache::new(latin_font().with_width('W', 70));
            StyleConfig::all(2).map(|style| pack_atlas(style, &chars, &mut glyphs).placements)
        };

        assert_eq!(run(), run());
    }

    #[test]
    fn truncates_when_rows_run_out() {
        let chars = Language::Latin.characters();
        let mut glyphs = GlyphCache::new(latin_font().with_default_width(100));
        let atlas = pack_atlas(regular(), &chars, &mut glyphs);

        assert_eq!(atlas.placements.len(), 150);
        match atlas.truncated {
            Some(PackWarning::Truncated { placed, dropped, .. }) => {
                assert_eq!(placed, 150);
                assert_eq!(dropped, chars[150..].to_vec());
            },
            other => panic!("expected truncation, got {other:?}"),
        }
    }

    #[test]
    fn backgrounds_and_ink() {
        let mut glyphs = GlyphCache::new(BoxFont::new("A"));

        let transparent = pack_atlas(regular(), &['A'], &mut glyphs);
        let opaque = pack_atlas(style(FontVariant::Regular, Background::Opaque), &['A'], &mut glyphs);

        assert_eq!(transparent.canvas.height(), 256);
        assert_eq!(opaque.canvas.height(), 512);
        assert_eq!(transparent.canvas.pixel(8191, 255), Some([0, 0, 0, 0]));
        assert_eq!(opaque.canvas.pixel(8191, 511), Some([0, 0, 0, 255]));

        // pen at x 4, baseline 64 + (60 - 20) / 2, box 40 px tall starting 2 px right
        assert_eq!(transparent.canvas.pixel(6, 44), Some([255; 4]));
        assert_eq!(transparent.canvas.pixel(5, 44), Some([0, 0, 0, 0]));
        assert_eq!(transparent.canvas.pixel(6, 43), Some([0, 0, 0, 0]));
    }

    #[test]
    fn masks_are_rendered_once_per_stroke() {
        let chars = ['A', '1', '!'];
        let mut glyphs = GlyphCache::new(BoxFont::new("A1!"));
        for style in StyleConfig::all(2) {
            pack_atlas(style, &chars, &mut glyphs);
        }

        assert_eq!(glyphs.source().rasterize_calls(), 2 * chars.len());
    }
}

use glyphsheet_data::{FontVariant, PackedGeometryTable};
use glyphsheet_rasterizer::GlyphSource;
use tracing::{info, warn};

use crate::{
    charset::CharacterSet,
    error::AtlasError,
    packer::{GlyphCache, PackWarning, PackedAtlas, pack_atlas},
    style::{Background, StyleConfig},
};

/// Outcome of packing one atlas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AtlasSummary {
    pub style: StyleConfig,
    pub placed: usize,
    pub rows_used: i32,
}

/// Everything a generation run produced besides the images themselves.
#[derive(Debug)]
pub struct GenerationSummary {
    /// Geometry of the transparent atlases; the content of the layout document.
    pub table: PackedGeometryTable,
    pub atlases: Vec<AtlasSummary>,
    pub warnings: Vec<PackWarning>,
}

/// Packs all eight atlases of a font.
///
/// Every atlas is handed to the sink as soon as it is packed, so only one canvas is
/// alive at a time.
pub struct AtlasGenerator<S> {
    glyphs: GlyphCache<S>,
    bold_stroke_width: u32,
}

impl<S: GlyphSource> AtlasGenerator<S> {
    pub fn new(source: S, bold_stroke_width: u32) -> Self {
        Self { glyphs: GlyphCache::new(source), bold_stroke_width }
    }

    #[cfg(test)]
    pub(crate) fn source(&self) -> &S {
        self.glyphs.source()
    }

    /// Packs the transparent atlases, then their opaque counterparts.
    ///
    /// The regular transparent pass decides which characters the layout document
    /// lists; the bold, italic and bold-italic passes fill in their geometry. Opaque
    /// atlases are packed from the same glyph measurements but are not recorded.
    ///
    /// # Errors
    /// Returns the first error of `sink`; packing stops there.
    pub fn generate(
        &mut self,
        charset: &CharacterSet,
        mut sink: impl FnMut(&PackedAtlas) -> Result<(), AtlasError>,
    ) -> Result<GenerationSummary, AtlasError> {
        let mut table = PackedGeometryTable::default();
        let mut atlases = Vec::with_capacity(8);
        let mut warnings = Vec::new();

        for style in StyleConfig::all(self.bold_stroke_width) {
            let atlas = pack_atlas(style, charset.chars(), &mut self.glyphs);
            info!(
                style = %style,
                placed = atlas.placements.len(),
                characters = charset.len(),
                "Atlas packed"
            );

            sink(&atlas)?;

            if style.background() == Background::Transparent {
                table = match style.variant() {
                    FontVariant::Regular => PackedGeometryTable::from_regular_pass(atlas.geometry()),
                    variant => table.with_variant(variant, atlas.geometry()),
                };
            }

            atlases.push(AtlasSummary {
                style,
                placed: atlas.placements.len(),
                rows_used: atlas.rows_used(),
            });
            warnings.extend(atlas.truncated);
        }

        let missing = table.missing_variants();
        if !missing.is_empty() {
            warn!(
                count = missing.len(),
                "Characters missing from some style atlases, using zero geometry"
            );
            warnings.push(PackWarning::IncompleteRecords(missing));
        }

        Ok(GenerationSummary { table, atlases, warnings })
    }
}

#[cfg(test)]
mod tests {
    use glyphsheet_data::{FontDocument, GlyphGeometry};
    use glyphsheet_unicode::{CharClass, Language};

    use super::*;
    use crate::{packer::PlacedGlyph, test_font::BoxFont};

    fn latin_font() -> BoxFont {
        BoxFont::new(&Language::Latin.characters().into_iter().collect::<String>())
    }

    #[test]
    fn three_character_font_end_to_end() {
        let font = BoxFont::new("A1!");
        let charset = CharacterSet::from_chars(Language::Latin, ['A', '1', '!'], &font);

        let mut generator = AtlasGenerator::new(font, 2);
        let summary = generator.generate(&charset, |_| Ok(())).unwrap();

        assert!(summary.warnings.is_empty());
        let records = summary.table.records();
        let chars: Vec<_> = records.iter().map(|r| r.character).collect();
        let classes: Vec<_> = records.iter().map(|r| r.class()).collect();
        assert_eq!(chars, ['A', '1', '!']);
        assert_eq!(classes, [CharClass::Alphabetical, CharClass::Numerical, CharClass::Special]);
        assert!(records.iter().all(|r| r.is_complete()));

        let xml = FontDocument::new("GENERIC", Language::Latin, &summary.table).to_xml();
        assert_eq!(xml.matches("<character ").count(), 3);
        assert_eq!(xml.matches("<boldItalic ").count(), 3);

        let a = xml.find("character=\"A\"").unwrap();
        let one = xml.find("character=\"1\"").unwrap();
        let bang = xml.find("character=\"!\"").unwrap();
        assert!(a < one && one < bang);
        assert!(xml.contains(
            "<character uvIndex=\"2\" character=\"!\" byte=\"33\" type=\"special\">"
        ));
    }

    #[test]
    fn sink_receives_every_atlas_in_order() {
        let font = BoxFont::new("AB");
        let charset = CharacterSet::from_chars(Language::Latin, ['A', 'B'], &font);

        let mut seen = Vec::new();
        AtlasGenerator::new(font, 2)
            .generate(&charset, |atlas| {
                seen.push((atlas.style.file_stem("GENERIC"), atlas.canvas.height()));
                Ok(())
            })
            .unwrap();

        let expected = [
            ("GENERIC", 256),
            ("GENERICBold", 256),
            ("GENERICItalic", 512),
            ("GENERICBoldItalic", 512),
            ("GENERIC_alpha", 512),
            ("GENERICBold_alpha", 512),
            ("GENERICItalic_alpha", 512),
            ("GENERICBoldItalic_alpha", 512),
        ];
        let expected: Vec<_> = expected
            .into_iter()
            .map(|(stem, height)| (stem.to_string(), height))
            .collect();
        assert_eq!(seen, expected);
    }

    #[test]
    fn sink_errors_abort_generation() {
        let font = BoxFont::new("A");
        let charset = CharacterSet::from_chars(Language::Latin, ['A'], &font);

        let mut calls = 0;
        let result = AtlasGenerator::new(font, 2).generate(&charset, |_| {
            calls += 1;
            Err(AtlasError::Packing("disk full".into()))
        });

        assert!(result.is_err());
        assert_eq!(calls, 1);
    }

    #[test]
    fn opaque_passes_reuse_measurements() {
        let font = latin_font();
        let charset = CharacterSet::resolve(Language::Latin, &font);

        let mut generator = AtlasGenerator::new(font, 2);
        generator.generate(&charset, |_| Ok(())).unwrap();

        // one unstroked and one stroked rendering per character
        assert_eq!(generator.source().rasterize_calls(), 2 * charset.len());
    }

    #[test]
    fn opaque_layout_is_not_recorded() {
        let font = BoxFont::new("AB");
        let charset = CharacterSet::from_chars(Language::Latin, ['A', 'B'], &font);

        let mut opaque_regular: Vec<PlacedGlyph> = Vec::new();
        let summary = AtlasGenerator::new(font, 2)
            .generate(&charset, |atlas| {
                if atlas.style.background() == Background::Opaque
                    && atlas.style.variant() == FontVariant::Regular
                {
                    opaque_regular = atlas.placements.clone();
                }
                Ok(())
            })
            .unwrap();

        let b = summary.table.get('B').unwrap();
        assert_eq!(b.geometry(FontVariant::Regular), Some(GlyphGeometry::new(32, 0, 20)));
        assert_eq!(opaque_regular[1].geometry, GlyphGeometry::new(128, 0, 20));
    }

    #[test]
    fn truncation_shrinks_the_document() {
        let font = latin_font().with_default_width(100);
        let charset = CharacterSet::resolve(Language::Latin, &font);

        let summary = AtlasGenerator::new(font, 2)
            .generate(&charset, |_| Ok(()))
            .unwrap();

        let xml = FontDocument::new("GENERIC", Language::Latin, &summary.table).to_xml();
        assert_eq!(xml.matches("<character ").count(), 150);
        assert!(summary.table.len() < charset.len());

        let truncated: Vec<_> = summary
            .warnings
            .iter()
            .filter_map(|w| match w {
                PackWarning::Truncated { style, placed, .. } => Some((style.variant(), *placed)),
                PackWarning::IncompleteRecords(_) => None,
            })
            .collect();
        assert_eq!(truncated, [(FontVariant::Regular, 150), (FontVariant::Bold, 146)]);

        // the bold atlas holds fewer glyphs than the regular one
        let incomplete = summary.warnings.iter().find_map(|w| match w {
            PackWarning::IncompleteRecords(missing) => Some(missing.len()),
            PackWarning::Truncated { .. } => None,
        });
        assert_eq!(incomplete, Some(4));
    }
}

use std::collections::HashMap;

use glyphsheet_unicode::CharClass;

use crate::{FontVariant, GlyphGeometry};

/// A character and its geometry in each of the four style atlases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterRecord {
    /// The character as it is drawn.
    pub character: char,
    geometry: [Option<GlyphGeometry>; 4],
}

impl CharacterRecord {
    fn new(character: char) -> Self {
        Self { character, geometry: [None; 4] }
    }

    pub fn code_point(&self) -> u32 {
        self.character as u32
    }

    pub fn class(&self) -> CharClass {
        CharClass::of(self.character)
    }

    /// Geometry of the given variant, if that variant's atlas placed the character.
    pub fn geometry(&self, variant: FontVariant) -> Option<GlyphGeometry> {
        self.geometry[variant.ordinal()]
    }

    /// Geometry of the given variant, or an all-zero geometry when it was never placed.
    pub fn geometry_or_default(&self, variant: FontVariant) -> GlyphGeometry {
        self.geometry(variant).unwrap_or_default()
    }

    pub fn is_complete(&self) -> bool {
        self.geometry.iter().all(Option::is_some)
    }
}

/// A record whose atlas for `variant` ran out of space before reaching it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MissingVariant {
    pub character: char,
    pub variant: FontVariant,
}

/// Geometry of every packed character across the style passes.
///
/// The regular pass defines which characters exist and in which order; the other
/// passes only fill in their variant for characters already present. The table is
/// passed by value from one pass to the next.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackedGeometryTable {
    records: Vec<CharacterRecord>,
    index: HashMap<char, usize>,
}

impl PackedGeometryTable {
    /// Creates the table from the placements of the regular pass, in placement order.
    ///
    /// A character placed twice keeps its first placement.
    pub fn from_regular_pass(placed: impl IntoIterator<Item = (char, GlyphGeometry)>) -> Self {
        let mut table = Self::default();
        for (ch, geometry) in placed {
            if table.index.contains_key(&ch) {
                continue;
            }

            let mut record = CharacterRecord::new(ch);
            record.geometry[FontVariant::Regular.ordinal()] = Some(geometry);
            table.index.insert(ch, table.records.len());
            table.records.push(record);
        }

        table
    }

    /// Returns the table with `variant` geometry recorded for the given placements.
    ///
    /// Placements of characters the regular pass did not place are ignored.
    pub fn with_variant(
        mut self,
        variant: FontVariant,
        placed: impl IntoIterator<Item = (char, GlyphGeometry)>,
    ) -> Self {
        for (ch, geometry) in placed {
            if let Some(&idx) = self.index.get(&ch) {
                self.records[idx].geometry[variant.ordinal()] = Some(geometry);
            }
        }

        self
    }

    /// Records in the order of the regular pass.
    pub fn records(&self) -> &[CharacterRecord] {
        &self.records
    }

    pub fn get(&self, ch: char) -> Option<&CharacterRecord> {
        self.index.get(&ch).map(|&idx| &self.records[idx])
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Every (character, variant) pair that has no geometry yet.
    pub fn missing_variants(&self) -> Vec<MissingVariant> {
        self.records
            .iter()
            .flat_map(|record| {
                FontVariant::ALL
                    .into_iter()
                    .filter(|&variant| record.geometry(variant).is_none())
                    .map(|variant| MissingVariant { character: record.character, variant })
            })
            .collect()
    }
}

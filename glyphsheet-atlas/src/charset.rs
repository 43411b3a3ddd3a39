use std::collections::HashSet;

use glyphsheet_rasterizer::GlyphSource;
use glyphsheet_unicode::Language;
use tracing::debug;

/// Characters of a language that the font can actually draw, in packing order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterSet {
    language: Language,
    chars: Vec<char>,
    dropped: Vec<char>,
}

impl CharacterSet {
    /// Resolves the language's code point ranges against the font's cmap.
    pub fn resolve(language: Language, source: &impl GlyphSource) -> Self {
        Self::from_chars(language, language.characters(), source)
    }

    /// Builds a set from an explicit character order. Characters the font has no
    /// glyph for are set aside in [`CharacterSet::dropped`]; duplicates keep their
    /// first position.
    pub fn from_chars(
        language: Language,
        chars: impl IntoIterator<Item = char>,
        source: &impl GlyphSource,
    ) -> Self {
        let mut seen = HashSet::new();
        let (chars, dropped): (Vec<char>, Vec<char>) = chars
            .into_iter()
            .filter(|&ch| seen.insert(ch))
            .partition(|&ch| source.has_glyph(ch));

        debug!(
            language = %language,
            supported = chars.len(),
            dropped = dropped.len(),
            "Resolved character set"
        );

        Self { language, chars, dropped }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Characters of the language the font has no glyph for.
    pub fn dropped(&self) -> &[char] {
        &self.dropped
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }
}

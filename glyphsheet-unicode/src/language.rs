use std::{collections::HashSet, fmt, ops::RangeInclusive, str::FromStr};

/// Returned when a language tag has no character table.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized language '{tag}' (expected one of: {})", Language::tags().join(", "))]
pub struct UnknownLanguage {
    /// The tag as it was given.
    pub tag: String,
}

/// A character repertoire an atlas can be generated for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    Latin,
    Cyrillic,
}

#[rustfmt::skip]
const LATIN: &[RangeInclusive<u32>] = &[
    0x0021..=0x007E, // printable ASCII, space excluded
    0x00A1..=0x00A1, // ¡
    0x00A3..=0x00A3, // £
    0x00B0..=0x00B4, // ° ± ² ³ ´
    0x00BF..=0x00D6, // ¿ À-Ö
    0x00D9..=0x00DD, // Ù-Ý
    0x00DF..=0x00FD, // ß-ý
    0x00FF..=0x0103, // ÿ Ā-ă
];

#[rustfmt::skip]
const CYRILLIC: &[RangeInclusive<u32>] = &[
    0x0400..=0x045E,
];

impl Language {
    pub const ALL: [Language; 2] = [Language::Latin, Language::Cyrillic];

    /// The tag used on the command line and in the layout document.
    pub fn tag(self) -> &'static str {
        match self {
            Language::Latin => "latin",
            Language::Cyrillic => "cyrillic",
        }
    }

    pub fn tags() -> Vec<&'static str> {
        Self::ALL.iter().map(|l| l.tag()).collect()
    }

    /// Inclusive code point ranges covered by this language, in output order.
    pub fn code_point_ranges(self) -> &'static [RangeInclusive<u32>] {
        match self {
            Language::Latin => LATIN,
            Language::Cyrillic => CYRILLIC,
        }
    }

    /// All characters of the language in range order, without duplicates.
    ///
    /// Code points that are not valid `char`s (surrogates) are skipped.
    pub fn characters(self) -> Vec<char> {
        let mut seen = HashSet::new();
        self.code_point_ranges()
            .iter()
            .cloned()
            .flatten()
            .filter_map(char::from_u32)
            .filter(|ch| seen.insert(*ch))
            .collect()
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Language {
    type Err = UnknownLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim();
        Self::ALL
            .into_iter()
            .find(|l| l.tag().eq_ignore_ascii_case(tag))
            .ok_or_else(|| UnknownLanguage { tag: tag.to_string() })
    }
}

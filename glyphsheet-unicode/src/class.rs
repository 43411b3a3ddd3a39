use std::fmt;

/// Coarse glyph category stored in the layout document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    /// Digits, including superscript and subscript digits.
    Numerical,
    /// Letters of any script.
    Alphabetical,
    /// Everything else: punctuation, symbols, marks.
    Special,
}

impl CharClass {
    /// Classifies a character. Digits take precedence over letters.
    pub fn of(ch: char) -> Self {
        if is_digit(ch) {
            CharClass::Numerical
        } else if ch.is_alphabetic() {
            CharClass::Alphabetical
        } else {
            CharClass::Special
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CharClass::Numerical => "numerical",
            CharClass::Alphabetical => "alphabetical",
            CharClass::Special => "special",
        }
    }
}

impl fmt::Display for CharClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Decimal digits and the superscript/subscript digit forms.
///
/// Vulgar fractions and other numeric symbols (`½`, `Ⅻ`) are not digits.
#[rustfmt::skip]
fn is_digit(ch: char) -> bool {
    ch.is_ascii_digit()
        || matches!(ch,
            '\u{00B2}' | '\u{00B3}' | '\u{00B9}' | // ² ³ ¹
            '\u{2070}' | '\u{2074}'..='\u{2079}' | // superscripts
            '\u{2080}'..='\u{2089}' |              // subscripts
            '\u{0660}'..='\u{0669}' |              // Arabic-Indic
            '\u{06F0}'..='\u{06F9}' |              // Extended Arabic-Indic
            '\u{0966}'..='\u{096F}' |              // Devanagari
            '\u{FF10}'..='\u{FF19}'                // fullwidth
        )
}

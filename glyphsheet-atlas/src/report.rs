use std::path::Path;

use glyphsheet_data::AtlasLayout;
use glyphsheet_rasterizer::FontSize;
use glyphsheet_unicode::Language;

use crate::{
    charset::CharacterSet,
    generator::GenerationSummary,
    packer::PackWarning,
    writer::TextureOutcome,
};

/// Characters of a language left out because the font has no glyph for them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DroppedCharacters {
    pub language: Language,
    pub chars: Vec<char>,
    /// Size of the language's full character table.
    pub total: usize,
}

impl DroppedCharacters {
    pub fn of(charset: &CharacterSet) -> Self {
        Self {
            language: charset.language(),
            chars: charset.dropped().to_vec(),
            total: charset.len() + charset.dropped().len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Share of the language's characters the font supports, in percent.
    pub fn coverage(&self) -> f64 {
        if self.total == 0 {
            return 100.0;
        }
        (self.total - self.chars.len()) as f64 / self.total as f64 * 100.0
    }
}

pub fn print_font_size(family: &str, size: &FontSize) {
    println!("Font family: {family}");
    println!("Using font size: {}", size.size);
    if !size.reached_target {
        println!(
            "⚠️  Reference glyph only {}px tall at the maximum size",
            size.reference_height
        );
    }
}

pub fn print_generation_summary(summary: &GenerationSummary, document: &Path) {
    println!("\nGlyph atlases generated!");
    println!("Characters in layout document: {}", summary.table.len());
    for atlas in &summary.atlases {
        println!(
            "  {:<22} {:>4} glyphs in {}/{} rows",
            atlas.style.to_string(),
            atlas.placed,
            atlas.rows_used,
            AtlasLayout::rows(atlas.style.canvas_height())
        );
    }
    println!("XML file '{}' created successfully!", document.display());
}

pub fn report_conversions(outcomes: &[TextureOutcome]) {
    for outcome in outcomes {
        match outcome {
            TextureOutcome::Converted(texture) => {
                println!("Image successfully converted: {}", texture.display());
            },
            TextureOutcome::Unconverted(png) => println!("Image written: {}", png.display()),
            TextureOutcome::Failed { png, failure } => {
                eprintln!("❌ Error converting {}: {failure}", png.display());
            },
        }
    }

    let failed = outcomes.iter().filter(|o| o.is_failure()).count();
    if failed > 0 {
        println!("⚠️  {failed} of {} atlases were left as PNG", outcomes.len());
    }
}

pub fn report_warnings(warnings: &[PackWarning]) {
    if warnings.is_empty() {
        return;
    }

    println!("\n⚠️  {} packing warnings:", warnings.len());
    for warning in warnings {
        println!("  {warning}");
        match warning {
            PackWarning::Truncated { dropped, .. } => {
                println!("    {}", describe_chars(dropped));
            },
            PackWarning::IncompleteRecords(missing) => {
                for m in missing {
                    println!("    {} {}", describe_char(m.character), m.variant.element_name());
                }
            },
        }
    }
}

pub fn report_dropped_characters(dropped: &DroppedCharacters) {
    println!("\n🔍 Checking {} characters for missing glyphs...", dropped.language);

    if dropped.is_empty() {
        println!("✅ All {} characters are supported by the font", dropped.total);
        return;
    }

    println!(
        "⚠️  Found {} missing glyphs out of {} checked:",
        dropped.chars.len(),
        dropped.total
    );
    for chunk in dropped.chars.chunks(8) {
        println!("    {}", describe_chars(chunk));
    }
    println!("📊 Font coverage: {:.1}%", dropped.coverage());
}

fn describe_chars(chars: &[char]) -> String {
    chars
        .iter()
        .map(|&ch| describe_char(ch))
        .collect::<Vec<_>>()
        .join(", ")
}

fn describe_char(ch: char) -> String {
    let codepoint = ch as u32;
    if ch.is_control() || ch.is_whitespace() {
        format!("U+{codepoint:04X}")
    } else {
        format!("'{ch}' (0x{codepoint:04X})")
    }
}

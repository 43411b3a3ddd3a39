use std::{
    io::{self, BufRead, Write},
    path::PathBuf,
};

use clap::Parser;
use glyphsheet_unicode::Language;

use crate::error::AtlasError;

#[derive(Parser, Debug)]
#[command(
    name = "glyphsheet",
    about = "Glyph atlas generator for bitmap font rendering",
    long_about = "Packs the glyphs of a TTF/OTF font into regular, bold, italic and bold-italic \
                  atlases (transparent and opaque) and writes a font.xml layout document"
)]
pub struct Cli {
    /// Path to the TrueType/OpenType font file
    #[arg(
        value_name = "FONT",
        required_unless_present = "list_languages",
        value_parser = validate_file_exists
    )]
    pub font: Option<PathBuf>,

    /// Font identifier, used for the output directory and file names (e.g. GENERIC).
    /// Prompted for when omitted.
    #[arg(short, long, value_name = "ID")]
    pub name: Option<String>,

    /// Character set language (latin, cyrillic). Prompted for when omitted.
    #[arg(short, long, value_name = "LANGUAGE")]
    pub language: Option<String>,

    /// Directory in which the font directory is created
    #[arg(short, long, default_value = ".", value_name = "DIR")]
    pub output_dir: PathBuf,

    /// External tool converting each PNG atlas into a texture
    #[arg(long, default_value = "textureTool/textureTool.exe", value_name = "PATH")]
    pub texture_tool: PathBuf,

    /// Keep the PNG atlases and do not run the texture tool
    #[arg(long)]
    pub skip_conversion: bool,

    /// Stroke width in pixels used for the bold variants
    #[arg(long, default_value = "2", value_name = "PX")]
    pub stroke_width: u32,

    /// List supported languages and exit
    #[arg(short = 'L', long)]
    pub list_languages: bool,

    /// Show which characters of the language the font has no glyph for
    #[arg(long)]
    pub check_missing: bool,

    /// Wait for enter before exiting
    #[arg(long)]
    pub pause: bool,
}

impl Cli {
    /// Validates the CLI arguments
    pub fn validate(&self) -> Result<(), AtlasError> {
        if self.stroke_width == 0 {
            return Err(AtlasError::invalid_input("stroke width must be positive"));
        }

        if let Some(name) = &self.name {
            validate_font_name(name)?;
        }

        Ok(())
    }

    /// The font identifier from the command line, or prompted for on stdin.
    pub fn font_name(&self) -> Result<String, AtlasError> {
        let name = match &self.name {
            Some(name) => name.trim().to_string(),
            None => prompt(
                "Font ID does not have to be unique; the font library makes it unique.\n\
                 Enter the id of the font (eg: GENERIC): ",
            )?,
        };

        validate_font_name(&name)?;
        Ok(name)
    }

    /// The language from the command line, or prompted for on stdin.
    pub fn language(&self) -> Result<Language, AtlasError> {
        let tag = match &self.language {
            Some(tag) => tag.clone(),
            None => prompt(&format!(
                "Enter the language of the font ({}): ",
                Language::tags().join(", ")
            ))?,
        };

        tag.parse()
            .map_err(|e| AtlasError::unknown_language(&e))
    }

    /// Displays the supported languages and their code point ranges
    pub fn display_language_list() {
        println!("{:<10} {:>5}  Code points", "Language", "Count");
        println!("{}", "-".repeat(60));

        for language in Language::ALL {
            let ranges = language
                .code_point_ranges()
                .iter()
                .map(|r| {
                    if r.start() == r.end() {
                        r.start().to_string()
                    } else {
                        format!("{}-{}", r.start(), r.end())
                    }
                })
                .collect::<Vec<_>>()
                .join(", ");

            println!("{:<10} {:>5}  {ranges}", language.tag(), language.characters().len());
        }
    }

    /// Prints a summary of the configuration
    pub fn print_summary(&self, font_name: &str, language: Language) {
        println!("\nGenerating glyph atlases:");
        if let Some(font) = &self.font {
            println!("  Font file: {}", font.display());
        }
        println!("  Font ID: {font_name}");
        println!("  Language: {language}");
        println!("  Output: {}", self.output_dir.join(font_name).display());

        if self.stroke_width != 2 {
            println!("  Bold stroke: {}px", self.stroke_width);
        }

        if self.skip_conversion {
            println!("  Texture conversion: skipped");
        } else {
            println!("  Texture tool: {}", self.texture_tool.display());
        }
    }
}

fn validate_font_name(name: &str) -> Result<(), AtlasError> {
    if name.is_empty() {
        return Err(AtlasError::invalid_input("font id must not be empty"));
    }

    if name.contains(['/', '\\']) || name == "." || name == ".." {
        return Err(AtlasError::invalid_input(&format!(
            "font id '{name}' must not contain path separators"
        )));
    }

    Ok(())
}

fn prompt(message: &str) -> Result<String, AtlasError> {
    print!("{message}");
    io::stdout()
        .flush()
        .map_err(|e| AtlasError::invalid_input(&e.to_string()))?;

    read_answer(&mut io::stdin().lock())
}

fn read_answer(input: &mut impl BufRead) -> Result<String, AtlasError> {
    let mut line = String::new();
    input
        .read_line(&mut line)
        .map_err(|e| AtlasError::invalid_input(&format!("failed to read answer: {e}")))?;

    Ok(line.trim().to_string())
}

/// Blocks until enter is pressed.
pub fn wait_for_enter(message: &str) -> Result<(), AtlasError> {
    prompt(message).map(|_| ())
}

fn validate_file_exists(s: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(s);

    match () {
        _ if !path.exists() => Err(format!("Input file does not exist: {s}")),
        _ if !path.is_file() => Err(format!("Path is not a file: {s}")),
        _ => Ok(path),
    }
}

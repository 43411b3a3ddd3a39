mod canvas;
mod charset;
mod cli;
mod converter;
mod coordinate;
mod error;
mod generator;
mod logging;
mod packer;
mod report;
mod style;
#[cfg(test)]
mod test_font;
mod writer;

use clap::Parser;
use color_eyre::eyre::{Context, Result};
use glyphsheet_data::{AtlasLayout, FontDocument};
use glyphsheet_rasterizer::{FontFace, SwashRasterizer, resolve_font_size};
use tracing::warn;

use crate::{
    charset::CharacterSet,
    cli::{Cli, wait_for_enter},
    converter::TextureConverter,
    error::AtlasError,
    generator::AtlasGenerator,
    logging::{LoggingConfig, init_logging},
    report::DroppedCharacters,
    writer::AtlasWriter,
};

fn main() -> Result<()> {
    // panic hook
    color_eyre::install()?;

    let _guard = init_logging(LoggingConfig::from_env()).wrap_err("Failed to initialize logging")?;

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        "glyphsheet starting up"
    );

    let cli = Cli::parse();

    if cli.list_languages {
        Cli::display_language_list();
        return Ok(());
    }

    let result = run(&cli);
    if let Err(report) = &result
        && let Some(err) = report.downcast_ref::<AtlasError>()
    {
        tracing::error!(setup = err.is_setup(), error = %err, "Atlas generation aborted");
    }

    if cli.pause {
        let message = match &result {
            Ok(()) => "Font successfully generated. Press enter to exit.",
            Err(_) => "Font generation failed. Press enter to exit.",
        };
        wait_for_enter(message)?;
    }

    result
}

fn run(cli: &Cli) -> Result<()> {
    cli.validate()?;

    let font_path = cli
        .font
        .as_deref()
        .ok_or_else(|| AtlasError::invalid_input("no input file provided"))?;
    let font_name = cli.font_name()?;
    let language = cli.language()?;

    let face = FontFace::from_file(font_path).map_err(|e| AtlasError::font_load_failed(&e))?;
    let font_size = resolve_font_size(&face, AtlasLayout::TARGET_HEIGHT_RATIO);
    report::print_font_size(face.family_name(), &font_size);

    let rasterizer = SwashRasterizer::new(face, font_size.size);
    let charset = CharacterSet::resolve(language, &rasterizer);
    if charset.is_empty() {
        warn!(language = %language, "Font supports none of the language's characters");
    }

    let dropped = DroppedCharacters::of(&charset);
    if !dropped.is_empty() {
        warn!(
            language = %language,
            dropped = dropped.chars.len(),
            total = dropped.total,
            "Font has no glyphs for some characters, leaving them out"
        );
    }

    cli.print_summary(&font_name, language);

    let converter = (!cli.skip_conversion).then(|| TextureConverter::new(cli.texture_tool.clone()));
    let mut writer = AtlasWriter::create(&cli.output_dir, &font_name, converter)?;

    let mut generator = AtlasGenerator::new(rasterizer, cli.stroke_width);
    let summary = generator
        .generate(&charset, |atlas| writer.write_atlas(atlas))
        .wrap_err_with(|| format!("Failed to generate atlases for '{font_name}'"))?;

    let document = FontDocument::new(&font_name, language, &summary.table);
    let document_path = writer.write_document(&document)?;

    println!("\nOutput directory: {}", writer.dir().display());
    report::report_conversions(writer.outcomes());
    report::print_generation_summary(&summary, &document_path);
    report::report_warnings(&summary.warnings);

    if cli.check_missing {
        report::report_dropped_characters(&dropped);
    }

    Ok(())
}

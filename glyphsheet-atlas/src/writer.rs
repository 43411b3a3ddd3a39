use std::{
    fs,
    path::{Path, PathBuf},
};

use compact_str::CompactString;
use glyphsheet_data::FontDocument;
use tracing::{debug, info, warn};

use crate::{
    converter::{ConversionFailure, TextureConverter},
    error::AtlasError,
    packer::PackedAtlas,
};

/// File name of the layout document inside the font directory.
pub const DOCUMENT_FILE_NAME: &str = "font.xml";

/// What became of one atlas image after it was written.
#[derive(Debug)]
pub enum TextureOutcome {
    /// The converter produced this texture and the PNG was removed.
    Converted(PathBuf),
    /// Conversion was skipped; the PNG is the final output.
    Unconverted(PathBuf),
    /// The converter failed; the PNG was kept.
    Failed { png: PathBuf, failure: ConversionFailure },
}

impl TextureOutcome {
    pub fn is_failure(&self) -> bool {
        matches!(self, TextureOutcome::Failed { .. })
    }
}

/// Writes atlases and the layout document into `<root>/<font name>/`.
#[derive(Debug)]
pub struct AtlasWriter {
    dir: PathBuf,
    font_name: CompactString,
    converter: Option<TextureConverter>,
    outcomes: Vec<TextureOutcome>,
}

impl AtlasWriter {
    /// Creates the font directory under `root`.
    ///
    /// # Errors
    /// Fails when the directory cannot be created.
    pub fn create(
        root: &Path,
        font_name: &str,
        converter: Option<TextureConverter>,
    ) -> Result<Self, AtlasError> {
        let dir = root.join(font_name);
        fs::create_dir_all(&dir).map_err(|e| AtlasError::output_dir_creation_failed(&dir, &e))?;

        Ok(Self {
            dir,
            font_name: CompactString::from(font_name),
            converter,
            outcomes: Vec::new(),
        })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn outcomes(&self) -> &[TextureOutcome] {
        &self.outcomes
    }

    /// Saves the atlas as PNG and runs the converter on it, if any.
    ///
    /// # Errors
    /// Only a failed PNG write is an error; converter failures are recorded.
    pub fn write_atlas(&mut self, atlas: &PackedAtlas) -> Result<(), AtlasError> {
        let png = self
            .dir
            .join(format!("{}.png", atlas.style.file_stem(&self.font_name)));
        atlas.canvas.save_png(&png)?;
        debug!(
            png = %png.display(),
            width = atlas.canvas.width(),
            height = atlas.canvas.height(),
            "Atlas image written"
        );

        let outcome = match &self.converter {
            None => TextureOutcome::Unconverted(png),
            Some(converter) => match converter.convert(&png) {
                Ok(texture) => {
                    info!(texture = %texture.display(), "Atlas converted");
                    TextureOutcome::Converted(texture)
                },
                Err(failure) => {
                    warn!(png = %png.display(), error = %failure, "Texture conversion failed");
                    TextureOutcome::Failed { png, failure }
                },
            },
        };

        self.outcomes.push(outcome);
        Ok(())
    }

    /// Writes `font.xml` and returns its path.
    ///
    /// # Errors
    /// Fails when the file cannot be written.
    pub fn write_document(&self, document: &FontDocument<'_>) -> Result<PathBuf, AtlasError> {
        let path = self.dir.join(DOCUMENT_FILE_NAME);
        fs::write(&path, document.to_xml())
            .map_err(|e| AtlasError::document_write_failed(&path, &e))?;

        info!(path = %path.display(), characters = document.character_count(), "Layout document written");
        Ok(path)
    }
}

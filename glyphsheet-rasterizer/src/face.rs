use std::path::Path;

use swash::{CacheKey, FontRef};
use tracing::{debug, info};

use crate::{LineMetrics, RasterizerError};

/// An owned font face, loaded from disk through `fontdb`.
///
/// Keeps the raw face bytes plus the swash identifiers needed to hand out
/// short-lived [`FontRef`]s.
pub struct FontFace {
    data: Vec<u8>,
    offset: u32,
    key: CacheKey,
    family_name: String,
}

impl std::fmt::Debug for FontFace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontFace")
            .field("family_name", &self.family_name)
            .field("data_kb", &(self.data.len() / 1024))
            .finish()
    }
}

impl FontFace {
    /// Loads the first face of a TrueType/OpenType file.
    ///
    /// # Errors
    /// Fails when the file cannot be read, holds no face, or the face cannot be
    /// parsed.
    pub fn from_file(path: &Path) -> Result<Self, RasterizerError> {
        let mut db = fontdb::Database::new();
        db.load_font_file(path).map_err(|source| RasterizerError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let no_face = || RasterizerError::NoFace { path: path.to_path_buf() };

        let face_info = db.faces().next().ok_or_else(no_face)?;
        let face_id = face_info.id;
        let family_name = face_info
            .families
            .first()
            .map(|(name, _)| name.clone())
            .or_else(|| path.file_stem().map(|s| s.to_string_lossy().into_owned()))
            .unwrap_or_default();

        if db.len() > 1 {
            debug!(faces = db.len(), "Font collection detected, using the first face");
        }

        let (data, index) = db
            .with_face_data(face_id, |data, index| (data.to_vec(), index))
            .ok_or_else(no_face)?;

        let face = Self::from_bytes(data, index, family_name)?;
        info!(path = %path.display(), family = %face.family_name, "Loaded font face");

        Ok(face)
    }

    /// Wraps in-memory font data.
    ///
    /// # Errors
    /// Fails when `data` does not contain a parsable face at `index`.
    pub fn from_bytes(
        data: Vec<u8>,
        index: u32,
        family_name: impl Into<String>,
    ) -> Result<Self, RasterizerError> {
        let (offset, key) = {
            let font = FontRef::from_index(&data, index as usize)
                .ok_or(RasterizerError::InvalidFace { index })?;
            (font.offset, font.key)
        };

        Ok(Self { data, offset, key, family_name: family_name.into() })
    }

    pub fn family_name(&self) -> &str {
        &self.family_name
    }

    pub(crate) fn font_ref(&self) -> FontRef<'_> {
        FontRef { data: &self.data, offset: self.offset, key: self.key }
    }

    /// Returns true when the cmap maps `ch` to a real glyph.
    pub fn has_glyph(&self, ch: char) -> bool {
        self.font_ref().charmap().map(ch) != 0
    }

    /// Ascent and descent at the given pixel size.
    pub fn line_metrics(&self, size: f32) -> LineMetrics {
        let metrics = self.font_ref().metrics(&[]).scale(size);
        LineMetrics { ascent: metrics.ascent, descent: metrics.descent.abs() }
    }
}

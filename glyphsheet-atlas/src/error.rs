use std::path::Path;

use glyphsheet_rasterizer::RasterizerError;
use glyphsheet_unicode::UnknownLanguage;

/// Fatal error categories of an atlas run.
///
/// Converter failures and truncated atlases are not errors; they are collected in
/// the run report and generation continues.
#[derive(thiserror::Error, Debug)]
pub enum AtlasError {
    /// Invalid input, unknown language or an unloadable font. Nothing was written.
    #[error("Setup error: {0}")]
    Setup(String),

    /// Writing an atlas image, the output directory or the layout document failed.
    #[error("Packing error: {0}")]
    Packing(String),
}

impl AtlasError {
    // Setup errors
    pub(crate) fn invalid_input(detail: &str) -> Self {
        Self::Setup(format!("Invalid input: {detail}"))
    }

    pub(crate) fn unknown_language(err: &UnknownLanguage) -> Self {
        Self::Setup(err.to_string())
    }

    pub(crate) fn font_load_failed(err: &RasterizerError) -> Self {
        Self::Setup(format!("Font loading failed: {err}"))
    }

    // Packing errors
    pub(crate) fn output_dir_creation_failed(path: &Path, err: &std::io::Error) -> Self {
        Self::Packing(format!(
            "Failed to create output directory '{}': {err}",
            path.display()
        ))
    }

    pub(crate) fn image_write_failed(path: &Path, detail: &str) -> Self {
        Self::Packing(format!("Failed to write atlas image '{}': {detail}", path.display()))
    }

    pub(crate) fn document_write_failed(path: &Path, err: &std::io::Error) -> Self {
        Self::Packing(format!(
            "Failed to write layout document '{}': {err}",
            path.display()
        ))
    }

    pub fn is_setup(&self) -> bool {
        matches!(self, Self::Setup(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn categories() {
        let err = AtlasError::unknown_language(&UnknownLanguage { tag: "elvish".into() });
        assert!(err.is_setup());
        assert!(err.to_string().starts_with("Setup error: unrecognized language 'elvish'"));

        let io = std::io::Error::other("disk full");
        let err = AtlasError::document_write_failed(Path::new("out/font.xml"), &io);
        assert!(!err.is_setup());
        assert_eq!(
            err.to_string(),
            "Packing error: Failed to write layout document 'out/font.xml': disk full"
        );
    }
}

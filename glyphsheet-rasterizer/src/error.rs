use std::path::PathBuf;

/// Errors raised while loading a font for rasterization.
#[derive(thiserror::Error, Debug)]
pub enum RasterizerError {
    /// The font file could not be read.
    #[error("Failed to read font file '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file was read but contains no usable font face.
    #[error("No font face found in '{}'", path.display())]
    NoFace { path: PathBuf },

    /// The face data could not be parsed by the rasterizer.
    #[error("Font data is not a valid TrueType/OpenType face (index {index})")]
    InvalidFace { index: u32 },
}

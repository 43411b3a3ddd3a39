use std::{
    fs, io,
    path::{Path, PathBuf},
    process::{Command, ExitStatus},
};

use tracing::{debug, warn};

/// Why the external texture tool did not produce a texture. Never fatal.
#[derive(thiserror::Error, Debug)]
pub enum ConversionFailure {
    #[error("failed to run texture tool '{}': {source}", tool.display())]
    Spawn {
        tool: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("texture tool '{}' exited with {status}", tool.display())]
    ExitStatus { tool: PathBuf, status: ExitStatus },
}

/// Invokes the external PNG-to-texture converter as `<tool> <png>`.
#[derive(Debug, Clone)]
pub struct TextureConverter {
    tool: PathBuf,
}

impl TextureConverter {
    pub fn new(tool: impl Into<PathBuf>) -> Self {
        Self { tool: tool.into() }
    }

    /// Converts `png` and returns the path of the texture the tool writes next to it.
    ///
    /// The PNG is removed once the tool exits successfully; failing to remove it is
    /// only logged.
    pub fn convert(&self, png: &Path) -> Result<PathBuf, ConversionFailure> {
        debug!(tool = %self.tool.display(), png = %png.display(), "Running texture tool");

        let status = Command::new(&self.tool)
            .arg(png)
            .status()
            .map_err(|source| ConversionFailure::Spawn { tool: self.tool.clone(), source })?;

        if !status.success() {
            return Err(ConversionFailure::ExitStatus { tool: self.tool.clone(), status });
        }

        if let Err(e) = fs::remove_file(png) {
            warn!(png = %png.display(), error = %e, "Failed to delete converted PNG");
        }

        Ok(png.with_extension("dds"))
    }
}

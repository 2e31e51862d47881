//! Loader for the RON movement content file at startup.

use ron::Options;
use std::fs;
use std::io;
use std::path::Path;

use thiserror::Error;

use super::data::MovementConfig;

/// Error type for content loading failures.
#[derive(Debug, Error)]
pub enum ContentLoadError {
    #[error("Failed to load {file}: IO error: {source}")]
    Io {
        file: String,
        #[source]
        source: io::Error,
    },
    #[error("Failed to load {file}: Parse error: {message}")]
    Parse { file: String, message: String },
}

impl ContentLoadError {
    pub fn is_missing_file(&self) -> bool {
        matches!(
            self,
            ContentLoadError::Io { source, .. } if source.kind() == io::ErrorKind::NotFound
        )
    }
}

/// Create RON options with extensions enabled for more flexible parsing.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

/// Parse movement content from RON text. `file` only labels errors.
pub fn parse_movement_config(
    contents: &str,
    file: &str,
) -> Result<MovementConfig, ContentLoadError> {
    ron_options()
        .from_str(contents)
        .map_err(|e| ContentLoadError::Parse {
            file: file.to_string(),
            message: e.to_string(),
        })
}

/// Load movement content from a RON file on disk.
pub fn load_movement_config(path: &Path) -> Result<MovementConfig, ContentLoadError> {
    let file_name = path.display().to_string();
    let contents = fs::read_to_string(path).map_err(|source| ContentLoadError::Io {
        file: file_name.clone(),
        source,
    })?;

    parse_movement_config(&contents, &file_name)
}

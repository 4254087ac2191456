//! Reading prompt documents from disk.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// File extension every prompt document carries
pub const PROMPT_EXTENSION: &str = "md";

/// Reasons a document could not be loaded
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("File not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("File must be a .md file, got: {suffix}")]
    WrongExtension { path: PathBuf, suffix: String },

    #[error("Failed to read file: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl LoadError {
    /// Path of the document that failed to load
    pub fn path(&self) -> &Path {
        match self {
            LoadError::NotFound { path }
            | LoadError::WrongExtension { path, .. }
            | LoadError::Read { path, .. } => path,
        }
    }
}

/// Read a document as UTF-8 text
pub fn read_document(path: &Path) -> Result<String, LoadError> {
    std::fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Read a document after checking it exists and has the prompt extension
pub fn load_document(path: &Path) -> Result<String, LoadError> {
    if !path.exists() {
        return Err(LoadError::NotFound {
            path: path.to_path_buf(),
        });
    }

    if path.extension().and_then(|e| e.to_str()) != Some(PROMPT_EXTENSION) {
        let suffix = path
            .extension()
            .map(|e| format!(".{}", e.to_string_lossy()))
            .unwrap_or_default();
        return Err(LoadError::WrongExtension {
            path: path.to_path_buf(),
            suffix,
        });
    }

    read_document(path)
}

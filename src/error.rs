use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by the build helpers.
#[derive(Debug, Error)]
pub enum Error {
    #[error("source manifest not found with path: {}", .0.display())]
    SourceManifestNotFound(PathBuf),

    #[error("build directory not found with path: {}", .0.display())]
    BuildDirNotFound(PathBuf),

    #[error("invalid directory: {}", .0.display())]
    InvalidDirectory(PathBuf),

    #[error("manifest is not a JSON object: {}", .0.display())]
    MalformedManifest(PathBuf),

    #[error("manifest has no version field: {}", .0.display())]
    MissingVersion(PathBuf),

    #[error("invalid version string: {0}")]
    InvalidVersion(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("walk error: {0}")]
    Walk(#[from] walkdir::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

//! Error types for gitroot-core
//!
//! Missing or unusable markers are not errors; see [`crate::Lookup`] and
//! [`crate::Classification`]. These variants cover caller mistakes and
//! configuration loading only.

use gitroot_fs::NormalizedPath;

/// Result type for gitroot-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in gitroot-core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Expected an absolute path, got '{path}'")]
    RelativePath { path: NormalizedPath },

    #[error("Invalid resolver config: {message}")]
    InvalidConfig { message: String },

    #[error("Filesystem error: {0}")]
    Fs(#[from] gitroot_fs::Error),
}

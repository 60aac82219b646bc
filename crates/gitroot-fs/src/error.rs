//! Error types for gitroot-fs

use std::path::PathBuf;

/// Result type for gitroot-fs operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in gitroot-fs operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("File at {path} is not valid UTF-8")]
    InvalidUtf8 { path: PathBuf },

    #[error("Path {path} is not valid UTF-8")]
    NonUtf8Path { path: PathBuf },

    #[error("Failed to parse {format} config at {path}: {message}")]
    ConfigParse {
        path: PathBuf,
        format: String,
        message: String,
    },

    #[error("Unsupported config format: {extension}")]
    UnsupportedFormat { extension: String },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

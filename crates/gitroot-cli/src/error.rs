//! Error types for gitroot-cli

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Error from gitroot-core
    #[error(transparent)]
    Core(#[from] gitroot_core::Error),

    /// Error from gitroot-fs
    #[error(transparent)]
    Fs(#[from] gitroot_fs::Error),

    /// JSON output failed
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// User-facing error with a message
    #[error("{message}")]
    User { message: String },
}

impl CliError {
    /// Create a new user error with the given message
    pub fn user(message: impl Into<String>) -> Self {
        Self::User {
            message: message.into(),
        }
    }
}

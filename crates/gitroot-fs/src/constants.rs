//! Constants and enums for repository marker paths.

use std::path::Path;

/// Literal prefix of a redirect (`gitdir`) file, matched case-sensitively.
pub const REDIRECT_PREFIX: &str = "gitdir: ";

/// Standard git filesystem entries the resolver knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepoPath {
    /// The `.git` marker (a directory, or a redirect file for submodules)
    GitDir,
    /// The `modules` directory inside a superproject's metadata
    ModulesDir,
    /// The `config` file inside a metadata directory
    Config,
}

impl RepoPath {
    /// Get the string representation of the path.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::GitDir => ".git",
            Self::ModulesDir => "modules",
            Self::Config => "config",
        }
    }
}

impl AsRef<Path> for RepoPath {
    fn as_ref(&self) -> &Path {
        Path::new(self.as_str())
    }
}

impl AsRef<str> for RepoPath {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl std::fmt::Display for RepoPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

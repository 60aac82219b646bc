//! Values produced by a resolution.

use gitroot_fs::NormalizedPath;
use serde::Serialize;

/// What the caller's starting path refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    /// The walk starts at the file's containing directory.
    File,
    /// The walk starts at the directory itself.
    Directory,
}

/// How a marker entry identified its repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MarkerKind {
    /// An ordinary repository: the marker is the metadata directory.
    Directory,
    /// A linked repository (submodule, worktree): the marker is a file
    /// redirecting to the metadata directory.
    RedirectFile { redirect_target: NormalizedPath },
}

/// A marker entry found during the walk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepositoryMarker {
    pub marker_path: NormalizedPath,
    #[serde(flatten)]
    pub kind: MarkerKind,
}

/// A successfully resolved repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedRepository {
    /// Root of the working tree that owns the starting path. For a file
    /// inside a submodule this is the submodule's root.
    pub working_tree_root: NormalizedPath,
    pub marker: RepositoryMarker,
}

/// A file path expressed relative to its working-tree root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RelativeLocation {
    /// `/`-separated, no leading separator.
    pub relative_path: String,
    pub root: NormalizedPath,
}

/// Why a marker entry could not be used.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UnusableReason {
    #[error("marker entry does not exist")]
    Missing,

    #[error("marker is neither a directory nor a regular file")]
    UnsupportedEntry,

    #[error("redirect file is empty or spans several lines")]
    MalformedRedirect,

    #[error("redirect target {target} does not exist")]
    DanglingRedirect { target: NormalizedPath },

    #[error("redirect target {target} is not a directory")]
    RedirectNotDirectory { target: NormalizedPath },

    #[error("I/O failure: {message}")]
    Io { message: String },
}

/// Outcome of classifying one marker entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    Repository(ResolvedRepository),
    /// The walk skips this level and keeps going upward.
    Unusable(UnusableReason),
}

/// Outcome of a top-level lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup<T> {
    Found(T),
    NotFound,
}

impl<T> Lookup<T> {
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    pub fn found(self) -> Option<T> {
        match self {
            Self::Found(value) => Some(value),
            Self::NotFound => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Lookup<U> {
        match self {
            Self::Found(value) => Lookup::Found(f(value)),
            Self::NotFound => Lookup::NotFound,
        }
    }
}

impl<T> From<Option<T>> for Lookup<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::NotFound, Self::Found)
    }
}

//! Filesystem abstraction for gitroot
//!
//! Provides normalized path handling, the repository marker names, and the
//! narrow filesystem provider the resolver probes through.

pub mod config;
pub mod constants;
pub mod error;
pub mod fs;
pub mod path;

pub use config::ConfigStore;
pub use constants::{REDIRECT_PREFIX, RepoPath};
pub use error::{Error, Result};
pub use fs::{EntryKind, FileSystem, StdFileSystem, canonicalize};
pub use path::NormalizedPath;

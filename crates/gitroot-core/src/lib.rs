//! Submodule-aware repository root resolution
//!
//! Walks upward from a file or directory to the nearest repository marker,
//! follows `gitdir:` redirect files so that files inside a submodule resolve
//! to the submodule's own working tree, and expresses paths relative to the
//! resolved root.
//!
//! ```rust,no_run
//! use gitroot_core::{Lookup, Resolver};
//! use gitroot_fs::NormalizedPath;
//!
//! let resolver = Resolver::new();
//! let file = NormalizedPath::new("/repo/libs/sub/x.ts");
//! if let Lookup::Found(location) = resolver.resolve_file_location(&file).unwrap() {
//!     println!("{} in {}", location.relative_path, location.root);
//! }
//! ```

pub mod classifier;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod locator;
pub mod relativize;
pub mod resolver;
pub mod types;

pub use config::ResolverConfig;
pub use diagnostics::{Diagnostic, DiagnosticSink, RecordingSink, TracingSink};
pub use error::{Error, Result};
pub use relativize::relativize;
pub use resolver::Resolver;
pub use types::{
    Classification, ElementKind, Lookup, MarkerKind, RelativeLocation, RepositoryMarker,
    ResolvedRepository, UnusableReason,
};

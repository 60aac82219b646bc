//! Public entry points for repository resolution.

use std::path::Path;

use gitroot_fs::{FileSystem, NormalizedPath, StdFileSystem};

use crate::{
    Diagnostic, DiagnosticSink, ElementKind, Error, Lookup, RelativeLocation, ResolvedRepository,
    ResolverConfig, Result, TracingSink, relativize,
};

/// Resolves paths to the working-tree root of the repository that owns them.
///
/// Every call probes the filesystem afresh. Nothing is cached between calls,
/// so submodules initialised or removed in the meantime are picked up.
#[derive(Debug, Clone)]
pub struct Resolver<F = StdFileSystem, S = TracingSink> {
    pub(crate) fs: F,
    pub(crate) sink: S,
    pub(crate) config: ResolverConfig,
}

impl Resolver {
    /// Resolver over the local disk, reporting through `tracing`.
    pub fn new() -> Self {
        Self::with_config(ResolverConfig::default())
    }

    pub fn with_config(config: ResolverConfig) -> Self {
        Self::with_parts(StdFileSystem, TracingSink, config)
    }
}

impl Default for Resolver {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: FileSystem, S: DiagnosticSink> Resolver<F, S> {
    pub fn with_parts(fs: F, sink: S, config: ResolverConfig) -> Self {
        Self { fs, sink, config }
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Find the repository owning `path`.
    ///
    /// For [`ElementKind::File`] the walk starts at the containing directory.
    /// Emits one [`Diagnostic::RepositoryNotFound`] when nothing is found.
    ///
    /// # Errors
    /// Returns [`Error::RelativePath`] when `path` is not absolute, and
    /// [`Error::Fs`] when it is not valid UTF-8.
    pub fn resolve_repository(
        &self,
        path: impl AsRef<Path>,
        kind: ElementKind,
    ) -> Result<Lookup<ResolvedRepository>> {
        let path = NormalizedPath::try_new(path)?;
        if !path.is_absolute() {
            return Err(Error::RelativePath { path });
        }

        let start = match kind {
            ElementKind::File => path.parent().unwrap_or_else(|| path.clone()),
            ElementKind::Directory => path.clone(),
        };

        let found = self.locate_marker(&start);
        if found.is_none() {
            self.sink.warn(&Diagnostic::RepositoryNotFound {
                start: path.clone(),
            });
        }
        Ok(found.into())
    }

    /// Find the repository owning the file at `path` and express the file
    /// relative to its working-tree root.
    ///
    /// # Errors
    /// Same as [`Self::resolve_repository`].
    pub fn resolve_file_location(&self, path: impl AsRef<Path>) -> Result<Lookup<RelativeLocation>> {
        let path = NormalizedPath::try_new(path)?;
        let lookup = self.resolve_repository(&path, ElementKind::File)?;
        Ok(lookup.map(|repo| relativize(&path, &repo.working_tree_root)))
    }
}

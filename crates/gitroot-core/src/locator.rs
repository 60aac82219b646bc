//! Upward walk from a starting directory to the nearest usable marker.

use gitroot_fs::{FileSystem, NormalizedPath};

use crate::{Classification, Diagnostic, DiagnosticSink, ResolvedRepository, Resolver, UnusableReason};

impl<F: FileSystem, S: DiagnosticSink> Resolver<F, S> {
    /// Walk upward from `start` (a directory) and return the first marker
    /// that classifies as a repository.
    ///
    /// Unusable markers are reported to the sink and skipped. The root is
    /// probed exactly once before the walk ends.
    pub fn locate_marker(&self, start: &NormalizedPath) -> Option<ResolvedRepository> {
        let mut current = start.clone();

        loop {
            let marker = current.join(&self.config.marker_name);
            tracing::debug!(marker = %marker, "Probing for repository marker");

            match self.fs.entry_kind(&marker) {
                Ok(None) => {}
                Ok(Some(kind)) => match self.classify_entry(&marker, kind) {
                    Classification::Repository(repo) => {
                        tracing::debug!(root = %repo.working_tree_root, "Resolved repository");
                        return Some(repo);
                    }
                    Classification::Unusable(reason) => self.report_unusable(&marker, reason),
                },
                Err(e) => {
                    tracing::debug!(marker = %marker, error = ?e, "Failed to probe marker");
                    self.report_unusable(
                        &marker,
                        UnusableReason::Io {
                            message: e.to_string(),
                        },
                    );
                }
            }

            if current.is_root() {
                break;
            }
            match current.parent() {
                Some(parent) if parent != current => current = parent,
                _ => break,
            }
        }

        None
    }

    fn report_unusable(&self, marker: &NormalizedPath, reason: UnusableReason) {
        self.sink.warn(&Diagnostic::UnusableMarker {
            marker: marker.clone(),
            reason,
        });
    }
}

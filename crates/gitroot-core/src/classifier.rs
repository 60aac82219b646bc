//! Marker classification: directory markers, `gitdir:` redirect files and
//! the working-tree root each one implies.

use gitroot_fs::{EntryKind, FileSystem, NormalizedPath, REDIRECT_PREFIX, RepoPath};

use crate::{
    Classification, DiagnosticSink, MarkerKind, RepositoryMarker, ResolvedRepository, Resolver,
    UnusableReason,
};

impl<F: FileSystem, S: DiagnosticSink> Resolver<F, S> {
    /// Classify the marker entry at `marker`.
    ///
    /// Never fails: missing entries, unreadable files and broken redirects
    /// all come back as [`Classification::Unusable`].
    pub fn classify(&self, marker: &NormalizedPath) -> Classification {
        match self.fs.entry_kind(marker) {
            Ok(Some(kind)) => self.classify_entry(marker, kind),
            Ok(None) => Classification::Unusable(UnusableReason::Missing),
            Err(e) => {
                tracing::debug!(marker = %marker, error = ?e, "Failed to probe marker");
                Classification::Unusable(UnusableReason::Io {
                    message: e.to_string(),
                })
            }
        }
    }

    pub(crate) fn classify_entry(&self, marker: &NormalizedPath, kind: EntryKind) -> Classification {
        let Some(marker_parent) = marker.parent() else {
            return Classification::Unusable(UnusableReason::UnsupportedEntry);
        };

        match kind {
            EntryKind::Directory => Classification::Repository(ResolvedRepository {
                working_tree_root: marker_parent,
                marker: RepositoryMarker {
                    marker_path: marker.clone(),
                    kind: MarkerKind::Directory,
                },
            }),
            EntryKind::File => self.classify_redirect(marker, marker_parent),
            EntryKind::Other => Classification::Unusable(UnusableReason::UnsupportedEntry),
        }
    }

    fn classify_redirect(&self, marker: &NormalizedPath, marker_parent: NormalizedPath) -> Classification {
        let content = match self.fs.read_text(marker) {
            Ok(content) => content,
            Err(e) => {
                tracing::debug!(marker = %marker, error = ?e, "Failed to read redirect file");
                return Classification::Unusable(UnusableReason::Io {
                    message: e.to_string(),
                });
            }
        };

        let Some(raw_target) = parse_redirect(&content) else {
            return Classification::Unusable(UnusableReason::MalformedRedirect);
        };

        let target = NormalizedPath::new(raw_target);
        let target = if target.is_absolute() {
            target
        } else {
            marker_parent.join(raw_target)
        };

        match self.fs.entry_kind(&target) {
            Ok(Some(EntryKind::Directory)) => {}
            Ok(None) => return Classification::Unusable(UnusableReason::DanglingRedirect { target }),
            Ok(Some(_)) => {
                return Classification::Unusable(UnusableReason::RedirectNotDirectory { target });
            }
            Err(e) => {
                tracing::debug!(target = %target, error = ?e, "Failed to probe redirect target");
                return Classification::Unusable(UnusableReason::Io {
                    message: e.to_string(),
                });
            }
        }

        let working_tree_root = self
            .configured_worktree(&target)
            .filter(|worktree| {
                let contains_marker = marker_parent.is_within(worktree);
                if !contains_marker {
                    tracing::debug!(
                        worktree = %worktree,
                        marker = %marker,
                        "core.worktree does not contain the marker, using marker parent"
                    );
                }
                contains_marker
            })
            .unwrap_or(marker_parent);

        Classification::Repository(ResolvedRepository {
            working_tree_root,
            marker: RepositoryMarker {
                marker_path: marker.clone(),
                kind: MarkerKind::RedirectFile {
                    redirect_target: target,
                },
            },
        })
    }

    /// The `core.worktree` directory recorded in a metadata directory's
    /// config, when enabled, present and pointing at an existing directory.
    ///
    /// The caller still has to check that it contains the marker.
    fn configured_worktree(&self, metadata_dir: &NormalizedPath) -> Option<NormalizedPath> {
        if !self.config.follow_core_worktree {
            return None;
        }

        let config_path = metadata_dir.join(RepoPath::Config.as_str());
        if self.fs.entry_kind(&config_path).ok()?? != EntryKind::File {
            return None;
        }
        let content = match self.fs.read_text(&config_path) {
            Ok(content) => content,
            Err(e) => {
                tracing::debug!(config = %config_path, error = ?e, "Ignoring unreadable metadata config");
                return None;
            }
        };

        let raw = core_worktree(&content)?;
        let worktree = NormalizedPath::new(raw);
        let worktree = if worktree.is_absolute() {
            worktree
        } else {
            metadata_dir.join(raw)
        };

        match self.fs.entry_kind(&worktree) {
            Ok(Some(EntryKind::Directory)) => Some(worktree),
            _ => {
                tracing::debug!(worktree = %worktree, "core.worktree is not a directory, using marker parent");
                None
            }
        }
    }
}

/// Extract the target path from redirect file content.
///
/// Accepts `gitdir: <path>` or a bare `<path>`, after trimming surrounding
/// whitespace. The prefix is matched once, case-sensitively.
pub fn parse_redirect(content: &str) -> Option<&str> {
    let trimmed = content.trim();
    if trimmed == REDIRECT_PREFIX.trim_end() {
        return None;
    }
    let target = trimmed.strip_prefix(REDIRECT_PREFIX).unwrap_or(trimmed).trim();
    if target.is_empty() || target.contains(['\n', '\r']) {
        return None;
    }
    Some(target)
}

/// Find `worktree` in the `[core]` section of a git config file.
///
/// Section and key names are case-insensitive; a quoted value is unquoted.
fn core_worktree(config: &str) -> Option<&str> {
    let mut in_core = false;
    for line in config.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
            continue;
        }
        if let Some(header) = line.strip_prefix('[') {
            let name = header.split(']').next().unwrap_or("").trim();
            in_core = name.eq_ignore_ascii_case("core");
            continue;
        }
        if in_core
            && let Some((key, value)) = line.split_once('=')
            && key.trim().eq_ignore_ascii_case("worktree")
        {
            let value = value.trim();
            return Some(value.strip_prefix('"').and_then(|v| v.strip_suffix('"')).unwrap_or(value));
        }
    }
    None
}

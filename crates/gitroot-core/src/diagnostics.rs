//! Warning-level diagnostics emitted while resolving.
//!
//! The resolver never talks to a user directly. It reports what went wrong
//! to a [`DiagnosticSink`] and the caller decides how to surface it.

use std::fmt;
use std::sync::Mutex;

use gitroot_fs::NormalizedPath;

use crate::UnusableReason;

/// A warning produced by a resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// The walk reached the filesystem root without a usable marker.
    RepositoryNotFound { start: NormalizedPath },
    /// A marker existed but was skipped.
    UnusableMarker {
        marker: NormalizedPath,
        reason: UnusableReason,
    },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RepositoryNotFound { start } => {
                write!(f, "No repository found for {start}")
            }
            Self::UnusableMarker { marker, reason } => {
                write!(f, "Skipping repository marker {marker}: {reason}")
            }
        }
    }
}

/// Receiver for resolver warnings.
pub trait DiagnosticSink {
    fn warn(&self, diagnostic: &Diagnostic);
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for &S {
    fn warn(&self, diagnostic: &Diagnostic) {
        (**self).warn(diagnostic)
    }
}

/// Forwards diagnostics to `tracing` at warn level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn warn(&self, diagnostic: &Diagnostic) {
        match diagnostic {
            Diagnostic::RepositoryNotFound { start } => {
                tracing::warn!(start = %start, "No repository found");
            }
            Diagnostic::UnusableMarker { marker, reason } => {
                tracing::warn!(marker = %marker, reason = %reason, "Skipping unusable repository marker");
            }
        }
    }
}

/// Keeps every diagnostic in memory, in emission order.
#[derive(Debug, Default)]
pub struct RecordingSink {
    entries: Mutex<Vec<Diagnostic>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the diagnostics recorded so far.
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    pub fn clear(&self) {
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clear();
    }
}

impl DiagnosticSink for RecordingSink {
    fn warn(&self, diagnostic: &Diagnostic) {
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(diagnostic.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_sink_keeps_order() {
        let sink = RecordingSink::new();
        let first = Diagnostic::UnusableMarker {
            marker: NormalizedPath::new("/a/.git"),
            reason: UnusableReason::MalformedRedirect,
        };
        let second = Diagnostic::RepositoryNotFound {
            start: NormalizedPath::new("/a/b"),
        };

        sink.warn(&first);
        sink.warn(&second);

        assert_eq!(sink.diagnostics(), vec![first, second]);
        sink.clear();
        assert!(sink.diagnostics().is_empty());
    }

    #[test]
    fn test_display_messages() {
        let diagnostic = Diagnostic::UnusableMarker {
            marker: NormalizedPath::new("/repo/.git"),
            reason: UnusableReason::DanglingRedirect {
                target: NormalizedPath::new("/repo/.git/modules/x"),
            },
        };
        assert_eq!(
            diagnostic.to_string(),
            "Skipping repository marker /repo/.git: redirect target /repo/.git/modules/x does not exist"
        );
    }
}

//! Normalized path handling for cross-platform compatibility

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// A path normalized to use forward slashes internally.
///
/// Provides consistent path handling across platforms by normalizing
/// all paths to forward slashes internally and converting to
/// platform-native format only at I/O boundaries.
///
/// Construction also cleans the path lexically: repeated separators
/// collapse, `.` segments disappear and `..` pops the previous segment.
/// No filesystem access is involved, so symlinks are not resolved.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct NormalizedPath {
    /// Internal representation always uses forward slashes
    inner: String,
}

impl NormalizedPath {
    /// Create a new NormalizedPath from any path-like input.
    ///
    /// Converts backslashes to forward slashes for internal storage.
    /// Bytes that are not valid UTF-8 are replaced; use [`Self::try_new`]
    /// when the result is going to be probed on disk.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self::from_text(&path.as_ref().to_string_lossy())
    }

    /// Like [`Self::new`], but rejects paths that are not valid UTF-8
    /// instead of rewriting them.
    ///
    /// # Errors
    /// Returns [`Error::NonUtf8Path`] when `path` is not valid UTF-8.
    pub fn try_new(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let path_str = path.to_str().ok_or_else(|| Error::NonUtf8Path {
            path: path.to_path_buf(),
        })?;
        Ok(Self::from_text(path_str))
    }

    fn from_text(path_str: &str) -> Self {
        Self {
            inner: clean(&path_str.replace('\\', "/")),
        }
    }

    /// Get the internal normalized string representation.
    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// Convert to a platform-native PathBuf for I/O operations.
    pub fn to_native(&self) -> PathBuf {
        PathBuf::from(&self.inner)
    }

    /// Join this path with a segment.
    pub fn join(&self, segment: &str) -> Self {
        let segment_normalized = segment.replace('\\', "/");
        if matches!(clean(&segment_normalized).as_str(), "" | ".") {
            return self.clone();
        }
        if self.inner.is_empty() || self.inner == "." {
            return Self {
                inner: clean(&segment_normalized),
            };
        }
        let joined = if self.inner.ends_with('/') {
            format!("{}{}", self.inner, segment_normalized)
        } else {
            format!("{}/{}", self.inner, segment_normalized)
        };
        Self {
            inner: clean(&joined),
        }
    }

    /// Get the parent directory.
    ///
    /// Returns `None` for a root and for a single relative segment.
    pub fn parent(&self) -> Option<Self> {
        let (prefix, rest) = split_root(&self.inner);
        let mut segments: Vec<&str> = split_segments(rest).collect();
        if segments.is_empty() || (is_network_prefix(prefix) && segments.len() <= 1) {
            return None;
        }
        segments.pop();
        if segments.is_empty() && prefix.is_empty() {
            return None;
        }
        Some(Self {
            inner: assemble(prefix, &segments),
        })
    }

    /// Get the file name component.
    pub fn file_name(&self) -> Option<&str> {
        self.segments().last()
    }

    /// Iterate over the segments that follow the root prefix.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        split_segments(split_root(&self.inner).1)
    }

    /// Whether the path is anchored at a root (`/`, `C:/`, or `//server` on
    /// Windows).
    pub fn is_absolute(&self) -> bool {
        is_absolute_prefix(split_root(&self.inner).0)
    }

    /// Whether the path is a filesystem root with no parent.
    pub fn is_root(&self) -> bool {
        self.is_absolute() && self.parent().is_none()
    }

    /// Whether this path equals `base` or lies below it, segment-wise.
    pub fn is_within(&self, base: &NormalizedPath) -> bool {
        let (own_prefix, _) = split_root(&self.inner);
        let (base_prefix, _) = split_root(&base.inner);
        if !same_prefix(own_prefix, base_prefix) {
            return false;
        }
        let mut own = self.segments();
        base.segments().all(|segment| own.next() == Some(segment))
    }

    /// Express this path relative to `root`.
    ///
    /// The result uses `/` separators, never starts with a separator and
    /// preserves case. Paths outside `root` climb out with `..` segments.
    /// Equal paths yield `.`.
    pub fn relative_to(&self, root: &NormalizedPath) -> String {
        let (own_prefix, _) = split_root(&self.inner);
        let (root_prefix, _) = split_root(&root.inner);
        if !same_prefix(own_prefix, root_prefix) {
            // No shared anchor, e.g. another drive.
            return self.segments().collect::<Vec<_>>().join("/");
        }

        let target: Vec<&str> = self.segments().collect();
        let base: Vec<&str> = root.segments().collect();
        let common = target
            .iter()
            .zip(&base)
            .take_while(|(a, b)| a == b)
            .count();

        let mut parts: Vec<&str> = std::iter::repeat_n("..", base.len() - common).collect();
        parts.extend_from_slice(&target[common..]);

        if parts.is_empty() {
            ".".to_string()
        } else {
            parts.join("/")
        }
    }

    /// Check if this is a directory.
    pub fn is_dir(&self) -> bool {
        self.to_native().is_dir()
    }

    /// Check if this is a file.
    pub fn is_file(&self) -> bool {
        self.to_native().is_file()
    }

    /// Get the extension if present.
    pub fn extension(&self) -> Option<&str> {
        self.file_name().and_then(|name| {
            let idx = name.rfind('.')?;
            if idx == 0 {
                None
            } else {
                Some(&name[idx + 1..])
            }
        })
    }
}

/// Split a forward-slash path into its root prefix and the remainder.
///
/// Prefixes are `/`, `C:/`, a drive-relative `C:`, or `//server`. The
/// network prefix only exists on Windows; elsewhere a leading `//` is `/`.
fn split_root(s: &str) -> (&str, &str) {
    let bytes = s.as_bytes();
    if cfg!(windows) && s.starts_with("//") && !s.starts_with("///") {
        let server_end = s[2..].find('/').map_or(s.len(), |i| i + 2);
        return (&s[..server_end], &s[server_end..]);
    }
    if bytes.len() >= 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':' {
        if bytes.get(2) == Some(&b'/') {
            return (&s[..3], &s[3..]);
        }
        return (&s[..2], &s[2..]);
    }
    if s.starts_with('/') {
        return ("/", &s[1..]);
    }
    ("", s)
}

fn split_segments(rest: &str) -> impl Iterator<Item = &str> {
    rest.split('/').filter(|s| !s.is_empty())
}

fn is_network_prefix(prefix: &str) -> bool {
    prefix.starts_with("//")
}

fn is_absolute_prefix(prefix: &str) -> bool {
    prefix.ends_with('/') || is_network_prefix(prefix)
}

fn same_prefix(a: &str, b: &str) -> bool {
    // Drive letters compare case-insensitively, everything else exactly.
    if a.len() >= 2 && a.as_bytes()[1] == b':' {
        a.eq_ignore_ascii_case(b)
    } else {
        a == b
    }
}

fn assemble(prefix: &str, segments: &[&str]) -> String {
    let body = segments.join("/");
    if is_network_prefix(prefix) && !body.is_empty() {
        format!("{prefix}/{body}")
    } else {
        format!("{prefix}{body}")
    }
}

fn clean(unified: &str) -> String {
    let (prefix, rest) = split_root(unified);
    let absolute = is_absolute_prefix(prefix);

    let mut segments: Vec<&str> = Vec::new();
    for segment in split_segments(rest) {
        match segment {
            "." => {}
            // `..` at an absolute root stays at the root
            ".." => {
                if segments.last().is_some_and(|last| *last != "..") {
                    segments.pop();
                } else if !absolute {
                    segments.push("..");
                }
            }
            other => segments.push(other),
        }
    }

    if prefix.is_empty() && segments.is_empty() {
        return if unified.is_empty() {
            String::new()
        } else {
            ".".to_string()
        };
    }
    assemble(prefix, &segments)
}

impl AsRef<Path> for NormalizedPath {
    fn as_ref(&self) -> &Path {
        Path::new(&self.inner)
    }
}

impl std::fmt::Display for NormalizedPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.inner)
    }
}

impl From<&str> for NormalizedPath {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for NormalizedPath {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<PathBuf> for NormalizedPath {
    fn from(p: PathBuf) -> Self {
        Self::new(p)
    }
}

impl From<&Path> for NormalizedPath {
    fn from(p: &Path) -> Self {
        Self::new(p)
    }
}

impl From<NormalizedPath> for String {
    fn from(p: NormalizedPath) -> Self {
        p.inner
    }
}

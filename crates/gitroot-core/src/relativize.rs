//! Path relativization against a resolved root.

use gitroot_fs::NormalizedPath;

use crate::RelativeLocation;

/// Express `file` relative to `root`.
///
/// Purely lexical: segment-wise, case-preserving, always `/`-separated and
/// without a leading separator. A file outside `root` yields `..` segments
/// rather than an error.
pub fn relativize(file: &NormalizedPath, root: &NormalizedPath) -> RelativeLocation {
    RelativeLocation {
        relative_path: file.relative_to(root),
        root: root.clone(),
    }
}

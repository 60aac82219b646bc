//! [`TestTree`] builder for resolution scenarios.

use std::fs;
use std::path::Path;

use gitroot_fs::NormalizedPath;
use tempfile::TempDir;

/// A temporary directory with helpers for laying out files and reading back
/// normalized paths.
///
/// # Example
///
/// ```rust,no_run
/// use gitroot_test_utils::{TestTree, git};
///
/// let tree = TestTree::new();
/// git::fake_git_dir(&tree.dir("repo"));
/// tree.file("repo/src/a.ts", "");
/// assert!(tree.path("repo/src/a.ts").is_file());
/// ```
pub struct TestTree {
    temp_dir: TempDir,
}

impl Default for TestTree {
    fn default() -> Self {
        Self::new()
    }
}

impl TestTree {
    /// Create an empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().expect("TestTree::new: failed to create temp dir"),
        }
    }

    /// Root of the temporary directory.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Normalized path of `rel` under the root. Nothing is created.
    pub fn path(&self, rel: &str) -> NormalizedPath {
        NormalizedPath::new(self.root()).join(rel)
    }

    /// Create directory `rel` (and parents) and return its native path.
    pub fn dir(&self, rel: &str) -> std::path::PathBuf {
        let path = self.root().join(rel);
        fs::create_dir_all(&path)
            .unwrap_or_else(|e| panic!("TestTree::dir: failed to create {}: {e}", path.display()));
        path
    }

    /// Write file `rel` (creating parents) and return its normalized path.
    pub fn file(&self, rel: &str, content: &str) -> NormalizedPath {
        let path = self.root().join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap_or_else(|e| {
                panic!("TestTree::file: failed to create {}: {e}", parent.display())
            });
        }
        fs::write(&path, content)
            .unwrap_or_else(|e| panic!("TestTree::file: failed to write {}: {e}", path.display()));
        NormalizedPath::new(path)
    }

    /// Remove directory `rel` and everything under it.
    pub fn remove_dir(&self, rel: &str) {
        let path = self.root().join(rel);
        fs::remove_dir_all(&path)
            .unwrap_or_else(|e| panic!("TestTree::remove_dir: failed to remove {}: {e}", path.display()));
    }
}

//! Repository marker fixtures at two realism levels.
//!
//! Choose the lowest-realism fixture that satisfies your test's needs.
//! Fakes are faster and have fewer external dependencies.

use std::fs;
use std::path::{Path, PathBuf};

use gitroot_fs::RepoPath;

/// Creates a minimal `.git` directory **without** initialising a real git
/// repository.
///
/// Realism level: **FAKE** — directory structure only, no object store.
///
/// # Panics
/// Panics if the filesystem operations fail.
pub fn fake_git_dir(path: &Path) {
    let git = path.join(RepoPath::GitDir);
    fs::create_dir_all(git.join("refs/heads"))
        .unwrap_or_else(|e| panic!("fake_git_dir: failed to create {}: {e}", git.display()));
    fs::write(git.join("HEAD"), "ref: refs/heads/main\n")
        .unwrap_or_else(|e| panic!("fake_git_dir: failed to write HEAD: {e}"));
}

/// Writes a `.git` redirect file in `path` with the given raw content.
///
/// # Panics
/// Panics if the directory cannot be created or the file cannot be written.
pub fn redirect_file(path: &Path, content: &str) {
    fs::create_dir_all(path)
        .unwrap_or_else(|e| panic!("redirect_file: failed to create {}: {e}", path.display()));
    fs::write(path.join(RepoPath::GitDir), content)
        .unwrap_or_else(|e| panic!("redirect_file: failed to write .git file: {e}"));
}

/// Lays out a submodule the way `git submodule add` absorbs it.
///
/// Realism level: **FAKE** — creates `<superproject>/.git/modules/<name>`,
/// and a working tree at `<superproject>/<rel_path>` whose `.git` file holds
/// a relative `gitdir:` redirect to that metadata directory. When
/// `core_worktree` is set, the metadata `config` records it under `[core]`.
///
/// The superproject must already carry a `.git` directory.
///
/// Returns the submodule's working-tree root.
///
/// # Panics
/// Panics if the filesystem operations fail.
pub fn fake_submodule(
    superproject: &Path,
    rel_path: &str,
    name: &str,
    core_worktree: Option<&str>,
) -> PathBuf {
    let metadata = superproject
        .join(RepoPath::GitDir)
        .join(RepoPath::ModulesDir)
        .join(name);
    fs::create_dir_all(&metadata)
        .unwrap_or_else(|e| panic!("fake_submodule: failed to create {}: {e}", metadata.display()));
    if let Some(worktree) = core_worktree {
        fs::write(
            metadata.join(RepoPath::Config),
            format!("[core]\n\trepositoryformatversion = 0\n\tworktree = {worktree}\n"),
        )
        .unwrap_or_else(|e| panic!("fake_submodule: failed to write config: {e}"));
    }

    let depth = rel_path.split('/').filter(|s| !s.is_empty()).count();
    let up = "../".repeat(depth);
    let working_tree = superproject.join(rel_path);
    redirect_file(&working_tree, &format!("gitdir: {up}.git/modules/{name}\n"));
    working_tree
}

/// Initialises a real git repository using `git2` (no initial commit).
///
/// Realism level: **REAL** — valid git object store, empty history.
///
/// # Panics
/// Panics if `git2::Repository::init` fails.
pub fn real_git_repo(path: &Path) -> git2::Repository {
    git2::Repository::init(path).unwrap_or_else(|e| {
        panic!(
            "real_git_repo: failed to init repository at {}: {e}",
            path.display()
        )
    })
}

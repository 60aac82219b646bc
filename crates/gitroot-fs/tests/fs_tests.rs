use assert_fs::prelude::*;
use gitroot_fs::{EntryKind, FileSystem, NormalizedPath, RepoPath, StdFileSystem, canonicalize};
use predicates::prelude::*;

#[test]
fn entry_kind_distinguishes_marker_forms() {
    let temp = assert_fs::TempDir::new().unwrap();

    temp.child("dir-repo").child(RepoPath::GitDir.as_str())
        .create_dir_all()
        .unwrap();
    temp.child("file-repo").child(RepoPath::GitDir.as_str())
        .write_str("gitdir: ../x")
        .unwrap();

    let fs = StdFileSystem::new();
    let dir_marker = NormalizedPath::new(temp.path()).join("dir-repo/.git");
    let file_marker = NormalizedPath::new(temp.path()).join("file-repo/.git");
    let missing = NormalizedPath::new(temp.path()).join("nothing/.git");

    assert_eq!(fs.entry_kind(&dir_marker).unwrap(), Some(EntryKind::Directory));
    assert_eq!(fs.entry_kind(&file_marker).unwrap(), Some(EntryKind::File));
    assert_eq!(fs.entry_kind(&missing).unwrap(), None);
}

#[test]
fn read_text_returns_content() {
    let temp = assert_fs::TempDir::new().unwrap();
    let marker = temp.child(RepoPath::GitDir.as_str());
    marker.write_str("gitdir: ../../.git/modules/sub\n").unwrap();

    let content = StdFileSystem
        .read_text(&NormalizedPath::new(marker.path()))
        .unwrap();
    assert_eq!(content, "gitdir: ../../.git/modules/sub\n");
    marker.assert(predicate::str::starts_with("gitdir: "));
}

#[test]
fn read_text_on_directory_is_io_error() {
    let temp = assert_fs::TempDir::new().unwrap();
    temp.child("d").create_dir_all().unwrap();

    let err = StdFileSystem
        .read_text(&NormalizedPath::new(temp.path()).join("d"))
        .unwrap_err();
    assert!(matches!(err, gitroot_fs::Error::Io { .. }));
}

#[test]
fn canonicalize_resolves_parent_segments() {
    let temp = assert_fs::TempDir::new().unwrap();
    temp.child("a/b").create_dir_all().unwrap();

    let direct = canonicalize(temp.path().join("a")).unwrap();
    let via_parent = canonicalize(temp.path().join("a/b/..")).unwrap();
    assert_eq!(direct, via_parent);
    assert!(direct.is_absolute());
}

#[test]
fn canonicalize_missing_path_fails() {
    let temp = assert_fs::TempDir::new().unwrap();
    assert!(canonicalize(temp.path().join("missing")).is_err());
}

//! End-to-end tests for the gitroot binary.

use std::fs;

use assert_cmd::Command;
use gitroot_fs::canonicalize;
use gitroot_test_utils::{TestTree, git};
use predicates::prelude::*;

fn gitroot() -> Command {
    let mut cmd = Command::cargo_bin("gitroot").unwrap();
    cmd.env_remove("GITROOT_CONFIG")
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1");
    cmd
}

/// Config selecting a marker name nothing above the temp dir carries.
fn isolated_config(tree: &TestTree) -> std::path::PathBuf {
    let path = tree.root().join("gitroot.toml");
    fs::write(&path, "marker_name = \".gitroot-test-marker\"\n").unwrap();
    path
}

#[test]
fn test_root_of_ordinary_repository() {
    let tree = TestTree::new();
    git::fake_git_dir(&tree.dir("repo"));
    tree.file("repo/src/a.ts", "");
    let expected = canonicalize(tree.root().join("repo")).unwrap();

    gitroot()
        .current_dir(tree.root().join("repo/src"))
        .args(["root", "a.ts"])
        .assert()
        .success()
        .stdout(format!("{expected}\n"));
}

#[test]
fn test_root_of_directory_is_itself() {
    let tree = TestTree::new();
    git::fake_git_dir(&tree.dir("workspace"));
    let expected = canonicalize(tree.root().join("workspace")).unwrap();

    gitroot()
        .arg("root")
        .arg(tree.root().join("workspace"))
        .assert()
        .success()
        .stdout(format!("{expected}\n"));
}

#[test]
fn test_locate_inside_submodule() {
    let tree = TestTree::new();
    let repo = tree.dir("repo");
    git::fake_git_dir(&repo);
    git::fake_submodule(&repo, "libs/sub", "sub", None);
    tree.file("repo/libs/sub/x.ts", "");
    let expected_root = canonicalize(tree.root().join("repo/libs/sub")).unwrap();

    gitroot()
        .arg("locate")
        .arg(tree.root().join("repo/libs/sub/x.ts"))
        .assert()
        .success()
        .stdout(predicate::str::contains(expected_root.as_str()))
        .stdout(predicate::str::contains("path: x.ts"));
}

#[test]
fn test_locate_json_output() {
    let tree = TestTree::new();
    git::fake_git_dir(&tree.dir("repo"));
    tree.file("repo/src/deep/a.ts", "");
    let expected_root = canonicalize(tree.root().join("repo")).unwrap();

    let output = gitroot()
        .args(["locate", "--json"])
        .arg(tree.root().join("repo/src/deep/a.ts"))
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["relative_path"], "src/deep/a.ts");
    assert_eq!(value["root"], expected_root.as_str());
}

#[test]
fn test_root_json_reports_redirect_marker() {
    let tree = TestTree::new();
    let repo = tree.dir("repo");
    git::fake_git_dir(&repo);
    git::fake_submodule(&repo, "sub", "sub", None);

    let output = gitroot()
        .args(["root", "--json"])
        .arg(tree.root().join("repo/sub"))
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["marker"]["kind"], "redirect_file");
    let target = canonicalize(tree.root().join("repo/.git/modules/sub")).unwrap();
    assert_eq!(value["marker"]["redirect_target"], target.as_str());
}

#[test]
fn test_not_found_warns_and_exits_2() {
    let tree = TestTree::new();
    tree.file("plain/file.txt", "");
    let config = isolated_config(&tree);

    gitroot()
        .arg("--config")
        .arg(&config)
        .arg("root")
        .arg(tree.root().join("plain/file.txt"))
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("no repository found"));
}

#[test]
fn test_config_from_environment() {
    let tree = TestTree::new();
    tree.dir("proj/.gitroot-test-marker");
    tree.file("proj/a/b.txt", "");
    let config = isolated_config(&tree);

    gitroot()
        .env("GITROOT_CONFIG", &config)
        .arg("locate")
        .arg(tree.root().join("proj/a/b.txt"))
        .assert()
        .success()
        .stdout(predicate::str::contains("path: a/b.txt"));
}

#[test]
fn test_kind_file_starts_above_directory() {
    let tree = TestTree::new();
    tree.dir("proj/.gitroot-test-marker");
    let config = isolated_config(&tree);

    gitroot()
        .arg("--config")
        .arg(&config)
        .args(["root", "--kind", "file"])
        .arg(tree.root().join("proj"))
        .assert()
        .code(2);
}

#[test]
fn test_locate_rejects_directory() {
    let tree = TestTree::new();
    git::fake_git_dir(&tree.dir("repo"));

    gitroot()
        .arg("locate")
        .arg(tree.root().join("repo"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("is a directory"));
}

#[test]
fn test_missing_path_is_an_error() {
    let tree = TestTree::new();

    gitroot()
        .arg("root")
        .arg(tree.root().join("does/not/exist"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("error"));
}

#[test]
fn test_invalid_config_is_an_error() {
    let tree = TestTree::new();
    let config = tree.root().join("bad.json");
    fs::write(&config, r#"{"marker_name": "../x"}"#).unwrap();

    gitroot()
        .arg("--config")
        .arg(&config)
        .args(["root", "."])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("marker_name"));
}

//! Root command implementation

use std::path::Path;

use gitroot_core::{DiagnosticSink, ElementKind, Lookup, Resolver};
use gitroot_fs::FileSystem;

use super::{Outcome, absolute, warn_not_found};
use crate::cli::KindArg;
use crate::error::Result;

/// Print the working-tree root of the repository owning `path`.
pub fn run_root<F: FileSystem, S: DiagnosticSink>(
    resolver: &Resolver<F, S>,
    path: &Path,
    kind: KindArg,
    json: bool,
) -> Result<Outcome> {
    let path = absolute(path)?;
    let kind = match kind {
        KindArg::File => ElementKind::File,
        KindArg::Directory => ElementKind::Directory,
        KindArg::Auto if path.is_dir() => ElementKind::Directory,
        KindArg::Auto => ElementKind::File,
    };

    match resolver.resolve_repository(&path, kind)? {
        Lookup::Found(repo) => {
            if json {
                println!("{}", serde_json::to_string_pretty(&repo)?);
            } else {
                println!("{}", repo.working_tree_root);
            }
            Ok(Outcome::Resolved)
        }
        Lookup::NotFound => {
            warn_not_found(&path);
            Ok(Outcome::NotFound)
        }
    }
}

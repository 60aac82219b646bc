//! Locate command implementation

use std::path::Path;

use colored::Colorize;
use gitroot_core::{DiagnosticSink, Lookup, Resolver};
use gitroot_fs::FileSystem;

use super::{Outcome, absolute, warn_not_found};
use crate::error::{CliError, Result};

/// Print `file` relative to the root of the repository owning it.
pub fn run_locate<F: FileSystem, S: DiagnosticSink>(
    resolver: &Resolver<F, S>,
    file: &Path,
    json: bool,
) -> Result<Outcome> {
    let file = absolute(file)?;
    if file.is_dir() {
        return Err(CliError::user(format!(
            "'{}' is a directory. Use `gitroot root` for directories.",
            file
        )));
    }

    match resolver.resolve_file_location(&file)? {
        Lookup::Found(location) => {
            if json {
                println!("{}", serde_json::to_string_pretty(&location)?);
            } else {
                println!("{} {}", "root:".bold(), location.root);
                println!("{} {}", "path:".bold(), location.relative_path);
            }
            Ok(Outcome::Resolved)
        }
        Lookup::NotFound => {
            warn_not_found(&file);
            Ok(Outcome::NotFound)
        }
    }
}

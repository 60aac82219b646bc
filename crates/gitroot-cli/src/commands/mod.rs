//! Command implementations
//!
//! Each command is a thin caller of the core resolver: it turns the
//! argument into an absolute path, resolves, and prints.

mod locate;
mod root;

use std::path::Path;

use colored::Colorize;
use gitroot_core::ResolverConfig;
use gitroot_fs::{NormalizedPath, canonicalize};

pub use locate::run_locate;
pub use root::run_root;

use crate::error::Result;

/// How a command ended when it did not fail outright.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Resolved,
    NotFound,
}

/// Load the resolver config from an explicit path, or from the user config
/// directory when a file exists there, or fall back to defaults.
pub fn load_config(explicit: Option<&Path>) -> Result<ResolverConfig> {
    if let Some(path) = explicit {
        return Ok(ResolverConfig::load(&NormalizedPath::new(path))?);
    }

    if let Some(config_dir) = dirs::config_dir() {
        let candidate = config_dir.join("gitroot").join("config.toml");
        if candidate.is_file() {
            tracing::debug!(path = %candidate.display(), "Using user config");
            return Ok(ResolverConfig::load(&NormalizedPath::new(candidate))?);
        }
    }

    Ok(ResolverConfig::default())
}

/// Make a command-line path absolute, resolving symlinks and `..`.
fn absolute(path: &Path) -> Result<NormalizedPath> {
    Ok(canonicalize(path)?)
}

fn warn_not_found(path: &NormalizedPath) {
    eprintln!(
        "{}: no repository found for {}",
        "warning".yellow().bold(),
        path
    );
}

//! gitroot CLI
//!
//! Resolves the repository that owns a file or directory, treating
//! submodules as repositories of their own.

mod cli;
mod commands;
mod error;
mod logging;

use clap::Parser;
use colored::Colorize;
use gitroot_core::Resolver;

use cli::{Cli, Commands};
use commands::Outcome;
use error::Result;

/// Exit code when no repository owns the path.
const EXIT_NOT_FOUND: i32 = 2;

fn main() {
    match run() {
        Ok(Outcome::Resolved) => {}
        Ok(Outcome::NotFound) => std::process::exit(EXIT_NOT_FOUND),
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            std::process::exit(1);
        }
    }
}

fn run() -> Result<Outcome> {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.verbose) {
        eprintln!("{}: failed to initialize logging: {}", "warning".yellow().bold(), e);
    }
    tracing::debug!("Verbose mode enabled");

    let config = commands::load_config(cli.config.as_deref())?;
    let resolver = Resolver::with_config(config);

    match cli.command {
        Commands::Root { path, kind, json } => commands::run_root(&resolver, &path, kind, json),
        Commands::Locate { file, json } => commands::run_locate(&resolver, &file, json),
    }
}

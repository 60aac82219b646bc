//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// gitroot - Find the repository that owns a path, submodules included
#[derive(Parser, Debug)]
#[command(name = "gitroot")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Resolver config file (TOML, JSON or YAML)
    #[arg(long, global = true, env = "GITROOT_CONFIG")]
    pub config: Option<PathBuf>,

    /// The command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Print the working-tree root of the repository owning PATH
    ///
    /// Examples:
    ///   gitroot root .                   # Root for the current directory
    ///   gitroot root src/main.rs         # Root for a file
    ///   gitroot root vendor --kind file  # Start the walk above `vendor`
    Root {
        /// File or directory to resolve
        path: PathBuf,

        /// How to treat PATH (inferred from the filesystem by default)
        #[arg(short, long, value_enum, default_value_t = KindArg::Auto)]
        kind: KindArg,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Print a file's path relative to the root of the repository owning it
    Locate {
        /// File to locate
        file: PathBuf,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },
}

/// Element kind as given on the command line
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum KindArg {
    Auto,
    File,
    Directory,
}

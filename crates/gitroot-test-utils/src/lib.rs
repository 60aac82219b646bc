//! Shared test utilities for the gitroot workspace.
//!
//! This crate provides repository-layout fixtures so crate test suites do not
//! each rebuild them by hand. It is a dev-dependency only, never published.
//!
//! # Modules
//!
//! - [`git`] — marker fixtures: fake `.git` directories, redirect files,
//!   submodule layouts and real repositories
//! - [`tree`] — [`TestTree`] scratch directory builder

pub mod git;
pub mod tree;

pub use tree::TestTree;

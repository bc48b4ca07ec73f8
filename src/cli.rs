//! CLI argument definitions.

use std::path::PathBuf;

use clap::Parser;

/// Top-level CLI parser for `uselocalrequires`.
#[derive(Debug, Parser)]
#[command(
    name = "uselocalrequires",
    version,
    about = "Replace go.mod requirements with sibling modules found on disk"
)]
pub struct Cli {
    /// Directory where the go.mod to update is.
    #[arg(long, default_value = ".")]
    pub dir: PathBuf,

    /// Number of levels up to search for other modules.
    #[arg(long, default_value_t = 1)]
    pub depth: usize,

    /// Just print the new contents of go.mod.
    #[arg(long = "dry_run", alias = "dry-run")]
    pub dry_run: bool,
}

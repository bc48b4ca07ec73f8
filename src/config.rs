//! Run configuration built once from the parsed CLI.

use std::path::{Path, PathBuf};

use crate::cli::Cli;
use crate::manifest::MANIFEST_FILE;

/// Explicit configuration handed to every pipeline stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory holding the go.mod to rewrite; also the resolver's working directory.
    pub dir: PathBuf,
    /// Directory whose ancestors are scanned; the process working directory by default.
    pub scan_from: PathBuf,
    /// Number of ancestor levels to scan for sibling modules.
    pub depth: usize,
    /// Print the rewritten manifest instead of writing it and resolving.
    pub dry_run: bool,
    /// Program and arguments run after the manifest is written.
    pub resolve_command: Vec<String>,
}

impl Config {
    /// Path of the manifest this run reads and rewrites.
    #[must_use]
    pub fn manifest_path(&self) -> PathBuf {
        self.dir.join(MANIFEST_FILE)
    }

    /// Returns a copy with the given directory.
    #[must_use]
    pub fn with_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.dir = dir.as_ref().to_path_buf();
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("."),
            scan_from: PathBuf::from("."),
            depth: 1,
            dry_run: false,
            resolve_command: vec!["go".into(), "mod".into(), "tidy".into()],
        }
    }
}

impl From<&Cli> for Config {
    fn from(cli: &Cli) -> Self {
        Self { dir: cli.dir.clone(), depth: cli.depth, dry_run: cli.dry_run, ..Self::default() }
    }
}

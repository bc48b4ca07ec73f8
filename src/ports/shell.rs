//! Process executor port for running the dependency resolver.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::PortError;

/// The output of a finished process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShellOutput {
    /// The exit code of the process (`-1` when killed by a signal).
    pub exit_code: i32,
    /// The captured standard output.
    pub stdout: String,
    /// The captured standard error.
    pub stderr: String,
}

impl ShellOutput {
    /// Returns `true` when the process exited with status zero.
    #[must_use]
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }
}

/// Executes external programs.
///
/// Abstracting execution allows deterministic replay by recording
/// and replaying command outputs during cassette playback.
pub trait ShellExecutor: Send + Sync {
    /// Runs `program` with `args` in `dir` and waits for it to finish.
    ///
    /// # Errors
    ///
    /// Returns an error if the program cannot be spawned.
    fn run(&self, dir: &Path, program: &str, args: &[String]) -> Result<ShellOutput, PortError>;
}

//! Live process executor using `std::process::Command`.

use std::path::Path;
use std::process::Command;

use crate::error::PortError;
use crate::ports::shell::{ShellExecutor, ShellOutput};

/// Live executor that spawns programs directly, without a shell.
pub struct LiveShellExecutor;

impl ShellExecutor for LiveShellExecutor {
    fn run(&self, dir: &Path, program: &str, args: &[String]) -> Result<ShellOutput, PortError> {
        let output = Command::new(program).args(args).current_dir(dir).output()?;
        Ok(ShellOutput {
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

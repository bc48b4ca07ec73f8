//! Recording adapter for the `ShellExecutor` port.

use std::path::Path;
use std::sync::{Arc, Mutex};

use serde::Serialize;

use super::record_result;
use crate::cassette::recorder::CassetteRecorder;
use crate::error::PortError;
use crate::ports::{ShellExecutor, ShellOutput};

/// Records process runs while delegating to an inner implementation.
pub struct RecordingShellExecutor {
    inner: Box<dyn ShellExecutor>,
    recorder: Arc<Mutex<CassetteRecorder>>,
}

impl RecordingShellExecutor {
    /// Creates a new recording executor wrapping the given implementation.
    pub fn new(inner: Box<dyn ShellExecutor>, recorder: Arc<Mutex<CassetteRecorder>>) -> Self {
        Self { inner, recorder }
    }
}

#[derive(Serialize)]
struct RunInput<'a> {
    dir: &'a str,
    program: &'a str,
    args: &'a [String],
}

impl ShellExecutor for RecordingShellExecutor {
    fn run(&self, dir: &Path, program: &str, args: &[String]) -> Result<ShellOutput, PortError> {
        let result = self.inner.run(dir, program, args);
        let input = RunInput { dir: &dir.display().to_string(), program, args };
        record_result(&self.recorder, "shell", "run", &input, &result);
        result
    }
}

//! Recording session shared by the recording adapters.

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use chrono::Utc;

use super::recorder::CassetteRecorder;

/// Owns the recorder that every recording adapter of one run appends to.
///
/// All ports write into a single cassette so the interleaving of
/// filesystem and process calls is preserved.
pub struct RecordingSession {
    /// Shared recorder handed to the recording adapters.
    pub recorder: Arc<Mutex<CassetteRecorder>>,
}

impl RecordingSession {
    /// Create a session that will write its cassette to `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the parent directory of `path` cannot be created.
    pub fn new(path: impl Into<PathBuf>) -> Result<Self, String> {
        let path = path.into();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create cassette directory: {e}"))?;
        }
        let name = format!("uselocalrequires-{}", Utc::now().format("%Y-%m-%dT%H-%M-%S"));
        let recorder = CassetteRecorder::new(path, name, get_commit_hash());
        Ok(Self { recorder: Arc::new(Mutex::new(recorder)) })
    }

    /// Write the cassette to disk and return its path.
    ///
    /// Every adapter holding the recorder must be dropped first.
    ///
    /// # Errors
    ///
    /// Returns an error if adapters still hold the recorder or the file
    /// cannot be written.
    pub fn finish(self) -> Result<PathBuf, String> {
        let recorder = Arc::try_unwrap(self.recorder)
            .map_err(|_| "Recording adapters still hold the recorder".to_string())?
            .into_inner()
            .map_err(|e| format!("Recorder lock poisoned: {e}"))?;
        recorder.finish().map_err(|e| format!("Failed to write cassette: {e}"))
    }
}

/// Get the current git commit hash, or "unknown" with a warning if unavailable.
fn get_commit_hash() -> String {
    let hash = std::process::Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()
        .filter(|o| o.status.success())
        .and_then(|o| String::from_utf8(o.stdout).ok())
        .map(|s| s.trim().to_string());

    if let Some(h) = hash {
        h
    } else {
        tracing::warn!("could not get git commit hash, using 'unknown'");
        "unknown".to_string()
    }
}

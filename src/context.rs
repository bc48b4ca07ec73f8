//! Service context bundling the port trait objects.

use std::path::Path;

use crate::adapters::live::{LiveFileSystem, LiveShellExecutor};
use crate::adapters::recording::{RecordingFileSystem, RecordingShellExecutor};
use crate::adapters::replaying::{ReplayingFileSystem, ReplayingShellExecutor};
use crate::cassette::format::Cassette;
use crate::cassette::replayer::CassetteReplayer;
use crate::cassette::session::RecordingSession;
use crate::ports::filesystem::FileSystem;
use crate::ports::shell::ShellExecutor;

/// Bundles all port trait objects into a single context.
///
/// Constructors wire up different adapter implementations (live,
/// recording, replaying).
pub struct ServiceContext {
    /// Filesystem for scanning, reading and writing manifests.
    pub fs: Box<dyn FileSystem>,
    /// Executor for the dependency resolver.
    pub shell: Box<dyn ShellExecutor>,
}

impl ServiceContext {
    /// Creates a live context backed by the real disk and processes.
    #[must_use]
    pub fn live() -> Self {
        Self { fs: Box::new(LiveFileSystem), shell: Box::new(LiveShellExecutor) }
    }

    /// Creates a live context whose calls are also written to `session`.
    #[must_use]
    pub fn recording(session: &RecordingSession) -> Self {
        Self {
            fs: Box::new(RecordingFileSystem::new(
                Box::new(LiveFileSystem),
                session.recorder.clone(),
            )),
            shell: Box::new(RecordingShellExecutor::new(
                Box::new(LiveShellExecutor),
                session.recorder.clone(),
            )),
        }
    }

    /// Creates a context that answers every call from a cassette file.
    ///
    /// Each port gets its own replayer so the per-port cursors are independent.
    ///
    /// # Errors
    ///
    /// Returns an error if the cassette file cannot be read or parsed.
    pub fn replaying(path: &Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read cassette file {}: {e}", path.display()))?;
        let cassette = Cassette::from_yaml(&content)
            .map_err(|e| format!("{e} ({})", path.display()))?;
        Ok(Self {
            fs: Box::new(ReplayingFileSystem::new(CassetteReplayer::new(&cassette))),
            shell: Box::new(ReplayingShellExecutor::new(CassetteReplayer::new(&cassette))),
        })
    }
}

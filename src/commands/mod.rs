//! Command dispatch.

pub mod apply;

use std::env;
use std::path::PathBuf;

use crate::cassette::session::RecordingSession;
use crate::config::Config;
use crate::context::ServiceContext;

/// Environment variable naming a cassette file to record the run into.
pub const RECORD_ENV: &str = "USELOCALREQUIRES_RECORD";

/// Run the pipeline for `config` against the live filesystem.
///
/// When `USELOCALREQUIRES_RECORD` is set to a file path, every port
/// interaction is recorded to that cassette file.
///
/// # Errors
///
/// Returns an error string if the pipeline or the recording fails.
pub fn dispatch(config: &Config) -> Result<(), String> {
    let session = match env::var(RECORD_ENV) {
        Ok(path) => Some(RecordingSession::new(PathBuf::from(path))?),
        Err(_) => None,
    };
    let ctx = session.as_ref().map_or_else(ServiceContext::live, ServiceContext::recording);

    let result = apply::run(&ctx, config).map(|_| ()).map_err(|e| e.to_string());

    // Finish recording after the run completes (even on error)
    if let Some(session) = session {
        // Drop context first to release Arc references
        drop(ctx);
        let path = session.finish()?;
        eprintln!("Recording saved to: {}", path.display());
    }

    result
}

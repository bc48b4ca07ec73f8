//! Error type shared by the pipeline stages.

use std::path::PathBuf;

use thiserror::Error;

/// Boxed error returned by port implementations.
pub type PortError = Box<dyn std::error::Error + Send + Sync>;

/// Failures surfaced by a run. Every variant is fatal.
#[derive(Debug, Error)]
pub enum UseLocalError {
    /// The target directory has no go.mod.
    #[error("no go.mod file: {} doesn't exist", .0.display())]
    MissingManifest(PathBuf),

    /// A manifest could not be read.
    #[error("error reading {}: {source}", path.display())]
    Read {
        /// File that failed.
        path: PathBuf,
        /// Underlying port error.
        source: PortError,
    },

    /// An ancestor directory could not be listed.
    #[error("error listing dir {}: {source}", path.display())]
    List {
        /// Directory that failed.
        path: PathBuf,
        /// Underlying port error.
        source: PortError,
    },

    /// The rewritten manifest could not be written.
    #[error("error writing {}: {source}", path.display())]
    Write {
        /// File that failed.
        path: PathBuf,
        /// Underlying port error.
        source: PortError,
    },

    /// The resolver could not be spawned or exited non-zero.
    #[error("error running {command}: {reason}")]
    Resolve {
        /// Command line that was run.
        command: String,
        /// Spawn error or exit status with captured stderr.
        reason: String,
    },
}

/// Result alias for pipeline stages.
pub type Result<T, E = UseLocalError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_manifest_message_names_path() {
        let err = UseLocalError::MissingManifest(PathBuf::from("svc/go.mod"));
        assert_eq!(err.to_string(), "no go.mod file: svc/go.mod doesn't exist");
    }

    #[test]
    fn resolve_message_includes_reason() {
        let err = UseLocalError::Resolve {
            command: "go mod tidy".into(),
            reason: "exit status 1: missing go.sum entry".into(),
        };
        assert_eq!(err.to_string(), "error running go mod tidy: exit status 1: missing go.sum entry");
    }
}

//! Replaying adapter for the `FileSystem` port.

use std::path::Path;
use std::sync::Mutex;

use super::extract_result;
use crate::cassette::replayer::CassetteReplayer;
use crate::error::PortError;
use crate::ports::filesystem::FileSystem;

/// Replays recorded filesystem operations from a cassette.
///
/// Writes are answered from the cassette and never reach the disk.
pub struct ReplayingFileSystem {
    replayer: Mutex<CassetteReplayer>,
}

impl ReplayingFileSystem {
    /// Creates a new replaying filesystem from a cassette replayer.
    #[must_use]
    pub fn new(replayer: CassetteReplayer) -> Self {
        Self { replayer: Mutex::new(replayer) }
    }

    fn next_output(&self, method: &str) -> serde_json::Value {
        let mut replayer = self.replayer.lock().expect("replayer lock poisoned");
        replayer.next_interaction("fs", method).output.clone()
    }
}

impl FileSystem for ReplayingFileSystem {
    fn read_to_string(&self, _path: &Path) -> Result<String, PortError> {
        extract_result(&self.next_output("read_to_string"), "fs::read_to_string")
    }

    fn write(&self, _path: &Path, _contents: &str) -> Result<(), PortError> {
        let output = self.next_output("write");
        if let Some(err) = output.get("err") {
            let msg = err.as_str().unwrap_or("unknown error").to_string();
            return Err(msg.into());
        }
        Ok(())
    }

    fn exists(&self, _path: &Path) -> bool {
        self.next_output("exists").as_bool().expect("fs::exists: expected boolean output")
    }

    fn is_dir(&self, _path: &Path) -> bool {
        self.next_output("is_dir").as_bool().expect("fs::is_dir: expected boolean output")
    }

    fn list_dir(&self, _path: &Path) -> Result<Vec<String>, PortError> {
        extract_result(&self.next_output("list_dir"), "fs::list_dir")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cassette::format::{Cassette, Interaction};
    use chrono::Utc;
    use serde_json::json;

    fn make_replayer(interactions: Vec<(&str, serde_json::Value)>) -> CassetteReplayer {
        let cassette = Cassette {
            name: "test".into(),
            recorded_at: Utc::now(),
            commit: "abc".into(),
            interactions: interactions
                .into_iter()
                .zip(0..)
                .map(|((method, output), seq)| Interaction {
                    seq,
                    port: "fs".into(),
                    method: method.into(),
                    input: json!({}),
                    output,
                })
                .collect(),
        };
        CassetteReplayer::new(&cassette)
    }

    #[test]
    fn replays_read_and_listing() {
        let fs = ReplayingFileSystem::new(make_replayer(vec![
            ("read_to_string", json!({"ok": "module example.com/a\n"})),
            ("list_dir", json!({"ok": ["a", "b"]})),
        ]));
        assert_eq!(fs.read_to_string(Path::new("go.mod")).unwrap(), "module example.com/a\n");
        assert_eq!(fs.list_dir(Path::new("..")).unwrap(), ["a", "b"]);
    }

    #[test]
    fn replays_errors() {
        let fs = ReplayingFileSystem::new(make_replayer(vec![
            ("read_to_string", json!({"err": "file not found"})),
            ("write", json!({"err": "permission denied"})),
        ]));
        let err = fs.read_to_string(Path::new("/missing")).unwrap_err();
        assert!(err.to_string().contains("file not found"));
        assert!(fs.write(Path::new("go.mod"), "x").is_err());
    }

    #[test]
    fn replays_predicates() {
        let fs = ReplayingFileSystem::new(make_replayer(vec![
            ("exists", json!(true)),
            ("is_dir", json!(false)),
        ]));
        assert!(fs.exists(Path::new("go.mod")));
        assert!(!fs.is_dir(Path::new("go.mod")));
    }
}

//! Cassettes: YAML transcripts of port calls for record and replay.

pub mod format;
pub mod recorder;
pub mod replayer;
pub mod session;

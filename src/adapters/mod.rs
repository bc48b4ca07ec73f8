//! Adapters implementing the port traits.
//!
//! - `live`: real disk and processes.
//! - `recording`: wraps another adapter and writes every call to a cassette.
//! - `replaying`: answers calls from a cassette.

pub mod live;
pub mod recording;
pub mod replaying;

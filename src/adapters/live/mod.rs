//! Live adapters for real external interactions.

pub mod filesystem;
pub mod shell;

pub use filesystem::LiveFileSystem;
pub use shell::LiveShellExecutor;

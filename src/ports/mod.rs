//! Port traits defining external boundaries.
//!
//! The pipeline touches the outside world only through these traits: the
//! filesystem it scans and rewrites, and the process it spawns to resolve
//! dependencies afterwards. Implementations live in `src/adapters/`.

pub mod filesystem;
pub mod shell;

pub use filesystem::FileSystem;
pub use shell::{ShellExecutor, ShellOutput};

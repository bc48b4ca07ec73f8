//! go.mod parsing and rewriting.
//!
//! The manifest is handled as plain lines split on `\n`; nothing here
//! understands the full go.mod grammar. Only the handful of line shapes
//! in [`line`] are recognised and everything else passes through.

pub mod line;
pub mod requires;
pub mod rewrite;

pub use requires::{extract_requires, find_requires};
pub use rewrite::{existing_replacements, find_new_content, render, Rewrite};

/// File name of a Go module manifest.
pub const MANIFEST_FILE: &str = "go.mod";

//! Splicing replace directives into a manifest.

use std::collections::HashSet;
use std::path::Path;

use super::line;
use crate::error::{Result, UseLocalError};
use crate::local::Replacement;
use crate::ports::FileSystem;

/// Result of rendering a manifest with new directives.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Rewrite {
    /// Full manifest text after insertion.
    pub text: String,
    /// Directives that were inserted, in insertion order.
    pub added: Vec<Replacement>,
    /// Modules skipped because the manifest already replaces them.
    pub skipped: Vec<String>,
}

impl Rewrite {
    /// Returns `true` when no directive was inserted.
    #[must_use]
    pub fn is_unchanged(&self) -> bool {
        self.added.is_empty()
    }
}

/// Module paths already covered by a `replace <path> => <target>` line.
#[must_use]
pub fn existing_replacements(content: &str) -> HashSet<&str> {
    content.split('\n').filter_map(line::replaced_module).collect()
}

/// Copies `content` line by line and inserts a blank line plus one
/// `replace` line per new directive right after the `go` version line.
///
/// Directives for modules the manifest already replaces are skipped. When
/// nothing is left to insert, or there is no `go` line, the text comes back
/// unchanged.
#[must_use]
pub fn render(content: &str, replacements: &[Replacement]) -> Rewrite {
    let existing = existing_replacements(content);
    let mut rewrite = Rewrite::default();

    let mut fresh = Vec::new();
    for repl in replacements {
        if existing.contains(repl.module.as_str()) {
            tracing::info!("skipping existing module: {}", repl.module);
            rewrite.skipped.push(repl.module.clone());
        } else {
            fresh.push(repl);
        }
    }

    let mut out: Vec<String> = Vec::new();
    let mut anchored = false;
    if !fresh.is_empty() {
        for text in content.split('\n') {
            out.push(text.to_string());
            if line::is_go_version(text) {
                anchored = true;
                out.push(String::new());
                out.extend(fresh.iter().map(ToString::to_string));
            }
        }
    }

    if !anchored {
        rewrite.text = content.to_string();
        return rewrite;
    }
    for repl in fresh {
        tracing::info!("adding {} => {}", repl.module, repl.rel_dir);
        rewrite.added.push(repl.clone());
    }
    rewrite.text = out.join("\n");
    rewrite
}

/// Reads the manifest at `path` and renders it with `replacements`.
///
/// # Errors
///
/// Returns [`UseLocalError::Read`] if the manifest cannot be read.
pub fn find_new_content(
    fs: &dyn FileSystem,
    path: &Path,
    replacements: &[Replacement],
) -> Result<Rewrite> {
    let content = fs
        .read_to_string(path)
        .map_err(|source| UseLocalError::Read { path: path.to_path_buf(), source })?;
    Ok(render(&content, replacements))
}

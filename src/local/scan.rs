//! Scanning ancestor directories for sibling Go modules.
//!
//! Pass `i` (counting from zero) lists the directory `i + 1` levels above
//! the scan origin, so `depth` passes cover ancestors `1..=depth`. Paths
//! are recorded in the relative form written into `replace` lines
//! (`../name`, `../../name`, ...).

use std::path::Path;

use crate::error::{Result, UseLocalError};
use crate::manifest::{line, MANIFEST_FILE};
use crate::ports::FileSystem;

/// A module found next to the working tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalModule {
    /// Module path from its `module` line.
    pub name: String,
    /// Directory of the module, relative to the scan origin.
    pub rel_dir: String,
}

/// Relative path of the ancestor visited by pass `level`.
///
/// ```
/// assert_eq!(uselocalrequires::local::ancestor(0), "..");
/// assert_eq!(uselocalrequires::local::ancestor(2), "../../..");
/// ```
#[must_use]
pub fn ancestor(level: usize) -> String {
    vec![".."; level + 1].join("/")
}

/// Collects every module in the immediate subdirectories of the first
/// `depth` ancestors of `origin`.
///
/// # Errors
///
/// Returns [`UseLocalError::List`] if an ancestor cannot be listed and
/// [`UseLocalError::Read`] if a candidate go.mod cannot be read.
pub fn find_modules(fs: &dyn FileSystem, origin: &Path, depth: usize) -> Result<Vec<LocalModule>> {
    let mut modules = Vec::new();
    for level in 0..depth {
        search_dir(fs, origin, &ancestor(level), &mut modules)?;
    }
    Ok(modules)
}

fn search_dir(
    fs: &dyn FileSystem,
    origin: &Path,
    rel: &str,
    modules: &mut Vec<LocalModule>,
) -> Result<()> {
    let dir = origin.join(rel);
    let entries = fs
        .list_dir(&dir)
        .map_err(|source| UseLocalError::List { path: dir.clone(), source })?;

    for entry in entries {
        let mod_dir = dir.join(&entry);
        if !fs.is_dir(&mod_dir) {
            continue;
        }
        let go_mod = mod_dir.join(MANIFEST_FILE);
        if !fs.exists(&go_mod) {
            continue;
        }
        let content = fs
            .read_to_string(&go_mod)
            .map_err(|source| UseLocalError::Read { path: go_mod.clone(), source })?;
        if let Some(name) = content.split('\n').find_map(line::module_path) {
            let module = LocalModule { name: name.to_string(), rel_dir: format!("{rel}/{entry}") };
            tracing::debug!(module = %module.name, dir = %module.rel_dir, "found local module");
            modules.push(module);
        }
    }
    Ok(())
}

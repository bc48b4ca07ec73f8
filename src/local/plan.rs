//! Matching requirements against local modules.

use std::fmt;

use super::scan::LocalModule;

/// A planned `replace <module> => <rel_dir>` directive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Replacement {
    /// Module path being replaced.
    pub module: String,
    /// Local directory the module is replaced with.
    pub rel_dir: String,
}

impl fmt::Display for Replacement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "replace {} => {}", self.module, self.rel_dir)
    }
}

/// Pairs each requirement with every local module of the same name.
///
/// Output follows requirement order, then discovery order. Nothing is
/// deduplicated.
#[must_use]
pub fn plan_replacements(requires: &[String], modules: &[LocalModule]) -> Vec<Replacement> {
    requires
        .iter()
        .flat_map(|req| {
            modules.iter().filter(move |m| m.name == *req).map(|m| Replacement {
                module: m.name.clone(),
                rel_dir: m.rel_dir.clone(),
            })
        })
        .collect()
}

//! Requirement extraction.

use std::path::Path;

use super::line;
use crate::error::{Result, UseLocalError};
use crate::ports::FileSystem;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BlockState {
    Outside,
    Inside,
}

/// Returns every required module path in file order.
///
/// Both `require <path> <version>` lines and `require ( ... )` blocks are
/// read. Duplicates are kept.
#[must_use]
pub fn extract_requires(content: &str) -> Vec<String> {
    let mut requires = Vec::new();
    let mut state = BlockState::Outside;
    for text in content.split('\n') {
        match state {
            BlockState::Inside => {
                if line::is_require_end(text) {
                    state = BlockState::Outside;
                } else if let Some(path) = line::require_entry(text) {
                    requires.push(path.to_string());
                }
            }
            BlockState::Outside => {
                if line::is_require_start(text) {
                    state = BlockState::Inside;
                } else if let Some(path) = line::single_require(text) {
                    requires.push(path.to_string());
                }
            }
        }
    }
    requires
}

/// Reads the manifest at `path` and extracts its requirements.
///
/// # Errors
///
/// Returns [`UseLocalError::Read`] if the file cannot be read.
pub fn find_requires(fs: &dyn FileSystem, path: &Path) -> Result<Vec<String>> {
    let content = fs
        .read_to_string(path)
        .map_err(|source| UseLocalError::Read { path: path.to_path_buf(), source })?;
    let requires = extract_requires(&content);
    tracing::debug!(count = requires.len(), manifest = %path.display(), "found requires");
    Ok(requires)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::live::filesystem::LiveFileSystem;

    #[test]
    fn no_requirements_yields_empty() {
        let content = "module example.com/app\n\ngo 1.21\n";
        assert!(extract_requires(content).is_empty());
        assert!(extract_requires("").is_empty());
    }

    #[test]
    fn mixed_forms_keep_file_order() {
        let content = "\
module example.com/app

go 1.21

require example.com/one v1.0.0

require (
\texample.com/two v0.2.0
\texample.com/three v0.3.0 // indirect
\texample.com/four v0.4.0
)

require example.com/five v5.0.0
";
        assert_eq!(
            extract_requires(content),
            ["example.com/one", "example.com/two", "example.com/four", "example.com/five"]
        );
    }

    #[test]
    fn duplicates_pass_through() {
        let content = "require example.com/a v1.0.0\nrequire example.com/a v1.1.0\n";
        assert_eq!(extract_requires(content), ["example.com/a", "example.com/a"]);
    }

    #[test]
    fn single_line_form_inside_block_is_ignored() {
        let content = "require (\nrequire example.com/a v1.0.0\n)\n";
        assert!(extract_requires(content).is_empty());
    }

    #[test]
    fn indented_lines_outside_block_are_ignored() {
        let content = "replace (\n\texample.com/a v1.0.0\n)\n";
        assert!(extract_requires(content).is_empty());
    }

    #[test]
    fn unterminated_block_keeps_collecting() {
        let content = "require (\n\texample.com/a v1.0.0\n\texample.com/b v1.0.0";
        assert_eq!(extract_requires(content), ["example.com/a", "example.com/b"]);
    }

    #[test]
    fn find_requires_reports_read_errors() {
        let path = std::env::temp_dir().join("uselocal_requires_missing/go.mod");
        let err = find_requires(&LiveFileSystem, &path).unwrap_err();
        assert!(matches!(err, UseLocalError::Read { .. }));
        assert!(err.to_string().starts_with("error reading"));
    }
}

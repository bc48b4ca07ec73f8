//! Line classifiers for the go.mod shapes the tool cares about.
//!
//! Each function matches a whole line and returns the captured module
//! path, or `None`/`false` when the line has a different shape. Whitespace
//! means space, tab, newline, form feed or carriage return, so a line
//! still carrying a `\r` never ends in a token.

/// `module <path>`
#[must_use]
pub fn module_path(line: &str) -> Option<&str> {
    let rest = line.strip_prefix("module")?;
    let path = skip_spaces(rest)?;
    is_token(path).then_some(path)
}

/// `require <path> <version>` on a single line.
#[must_use]
pub fn single_require(line: &str) -> Option<&str> {
    let rest = line.strip_prefix("require ")?;
    path_and_version(rest)
}

/// `require (` opening a block.
#[must_use]
pub fn is_require_start(line: &str) -> bool {
    line == "require ("
}

/// `<ws><path> <version>` inside a require block.
///
/// Entries carrying a trailing comment (`// indirect`) have more than two
/// tokens and do not match.
#[must_use]
pub fn require_entry(line: &str) -> Option<&str> {
    path_and_version(skip_spaces(line)?)
}

/// `)` closing a block.
#[must_use]
pub fn is_require_end(line: &str) -> bool {
    line == ")"
}

/// `go <digits and dots>`
#[must_use]
pub fn is_go_version(line: &str) -> bool {
    line.strip_prefix("go ")
        .is_some_and(|v| !v.is_empty() && v.chars().all(|c| c.is_ascii_digit() || c == '.'))
}

/// `replace <path> => <target>` with a single-token target.
///
/// Versioned forms such as `replace a v1.2.3 => ../a` do not match.
#[must_use]
pub fn replaced_module(line: &str) -> Option<&str> {
    let body = skip_spaces(line.strip_prefix("replace")?)?;
    // Longest module path wins when `=>` appears more than once.
    body.rmatch_indices("=>").find_map(|(at, arrow)| {
        let module = body[..at].trim_end_matches(is_space);
        let target = body[at + arrow.len()..].trim_start_matches(is_space);
        (is_token(module) && is_token(target)).then_some(module)
    })
}

fn is_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0c' | '\r')
}

fn is_token(s: &str) -> bool {
    !s.is_empty() && !s.contains(is_space)
}

/// Strips at least one leading whitespace character.
fn skip_spaces(s: &str) -> Option<&str> {
    let rest = s.trim_start_matches(is_space);
    (rest.len() < s.len()).then_some(rest)
}

/// `<path> <version>` separated by exactly one space.
fn path_and_version(s: &str) -> Option<&str> {
    let (path, version) = s.split_once(' ')?;
    (is_token(path) && is_token(version)).then_some(path)
}

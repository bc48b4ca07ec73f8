//! Integration tests for top-level CLI behavior.

use std::path::{Path, PathBuf};
use std::process::Command;

fn run_tool(cwd: &Path, args: &[&str]) -> std::process::Output {
    let bin = env!("CARGO_BIN_EXE_uselocalrequires");
    Command::new(bin)
        .args(args)
        .current_dir(cwd)
        .env_remove("RUST_LOG")
        .env_remove("USELOCALREQUIRES_RECORD")
        .env("NO_COLOR", "1")
        .output()
        .expect("failed to run uselocalrequires binary")
}

const APP_MANIFEST: &str = "\
module example.com/app

go 1.21

require example.com/liba v1.0.0
require (
\texample.com/libb v0.2.0
\texample.com/remote v0.3.0
)
";

/// Lays out `<tmp>/<name>/{app,liba,libb,docs}` and returns (root, app).
fn workspace(name: &str) -> (PathBuf, PathBuf) {
    let root = std::env::temp_dir().join(name);
    let _ = std::fs::remove_dir_all(&root);
    for dir in ["app", "liba", "libb", "docs"] {
        std::fs::create_dir_all(root.join(dir)).unwrap();
    }
    std::fs::write(root.join("app/go.mod"), APP_MANIFEST).unwrap();
    std::fs::write(root.join("liba/go.mod"), "module example.com/liba\n\ngo 1.21\n").unwrap();
    std::fs::write(root.join("libb/go.mod"), "module example.com/libb\n\ngo 1.20\n").unwrap();
    (root.clone(), root.join("app"))
}

#[test]
fn help_lists_flags() {
    let output = run_tool(Path::new("."), &["--help"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(stdout.contains("--dir"));
    assert!(stdout.contains("--depth"));
    assert!(stdout.contains("--dry_run"));
}

#[test]
fn version_prints_to_stdout_and_succeeds() {
    let output = run_tool(Path::new("."), &["--version"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
    assert!(output.stderr.is_empty());
}

#[test]
fn missing_manifest_exits_with_error() {
    let dir = std::env::temp_dir().join("uselocal_cli_no_manifest");
    std::fs::create_dir_all(&dir).unwrap();

    let output = run_tool(&dir, &[]);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!output.status.success());
    assert!(stderr.contains("no go.mod file"));

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn dry_run_prints_rewritten_manifest() {
    let (root, app) = workspace("uselocal_cli_dry_run");

    let output = run_tool(&app, &["--dry_run"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let expected = APP_MANIFEST.replace(
        "go 1.21\n",
        "go 1.21\n\nreplace example.com/liba => ../liba\nreplace example.com/libb => ../libb\n",
    );
    assert_eq!(stdout, format!("{expected}\n"));
    assert_eq!(std::fs::read_to_string(app.join("go.mod")).unwrap(), APP_MANIFEST);

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("adding example.com/liba => ../liba"));

    let _ = std::fs::remove_dir_all(&root);
}

#[test]
fn no_match_exits_cleanly_without_changes() {
    let (root, app) = workspace("uselocal_cli_no_match");
    std::fs::write(app.join("go.mod"), "module example.com/app\n\ngo 1.21\n").unwrap();

    let output = run_tool(&app, &[]);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(output.status.success());
    assert!(stderr.contains("no replacements found"));
    assert_eq!(
        std::fs::read_to_string(app.join("go.mod")).unwrap(),
        "module example.com/app\n\ngo 1.21\n"
    );

    let _ = std::fs::remove_dir_all(&root);
}

#[test]
fn existing_replacement_is_left_alone() {
    let (root, app) = workspace("uselocal_cli_existing");
    let manifest = "\
module example.com/app

go 1.21

require example.com/liba v1.0.0

replace example.com/liba => ../liba
";
    std::fs::write(app.join("go.mod"), manifest).unwrap();

    let output = run_tool(&app, &["--dry_run"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(output.status.success());
    assert_eq!(stdout, format!("{manifest}\n"));
    assert!(stderr.contains("skipping existing module: example.com/liba"));

    let _ = std::fs::remove_dir_all(&root);
}

#[test]
fn depth_zero_never_scans() {
    let (root, app) = workspace("uselocal_cli_depth_zero");

    let output = run_tool(&app, &["--depth", "0", "--dry_run"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(stdout.is_empty());

    let _ = std::fs::remove_dir_all(&root);
}

#[test]
fn scan_starts_from_working_directory_not_dir_flag() {
    let (root, app) = workspace("uselocal_cli_dir_flag");
    let elsewhere = root.join("nested/deeper");
    std::fs::create_dir_all(&elsewhere).unwrap();

    // Scanning from `nested/deeper` only sees `nested`, which has no modules.
    let app_arg = app.display().to_string();
    let output = run_tool(&elsewhere, &["--dir", app_arg.as_str(), "--dry_run"]);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(output.status.success());
    assert!(stderr.contains("no replacements found"));

    let _ = std::fs::remove_dir_all(&root);
}

#[test]
fn invalid_depth_exits_with_error() {
    let output = run_tool(Path::new("."), &["--depth", "many"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("--depth"));
}

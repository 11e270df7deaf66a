//! CLI surface: default build, exit codes, and command output.

use crate::integration::test_utils::{read, reference_workspace, run_cli, workspace_with};
use macrobundle::bundle::DEFAULT_BANNER;
use tempfile::TempDir;

#[test]
fn no_arguments_builds_reference_layout() {
    let ws = reference_workspace();
    let home = TempDir::new().unwrap();

    let output = run_cli(ws.path(), home.path(), &[]);
    assert!(
        output.status.success(),
        "build should succeed: stderr={}",
        String::from_utf8_lossy(&output.stderr)
    );

    for name in [
        "compilebase.sas",
        "compilemeta.sas",
        "compilexcmd.sas",
        "compileviya.sas",
        "compileall.sas",
    ] {
        assert!(ws.path().join(name).exists(), "{} should be written", name);
    }
    assert!(read(ws.path(), "compileall.sas").starts_with(DEFAULT_BANNER));
    assert_eq!(read(ws.path(), "compileviya.sas"), "");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("compileall.sas"));
}

#[test]
fn missing_folder_exits_nonzero() {
    let ws = workspace_with(&["base", "meta", "xcmd"], &[]);
    let home = TempDir::new().unwrap();

    let output = run_cli(ws.path(), home.path(), &["build"]);
    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("viya"), "stderr should name the folder: {}", stderr);
}

#[test]
fn check_exit_code_follows_output_state() {
    let ws = reference_workspace();
    let home = TempDir::new().unwrap();

    let before = run_cli(ws.path(), home.path(), &["check"]);
    assert_eq!(before.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&before.stdout).contains("missing"));

    assert!(run_cli(ws.path(), home.path(), &["build"]).status.success());

    let after = run_cli(ws.path(), home.path(), &["check", "--format", "json"]);
    assert!(after.status.success());
    let value: serde_json::Value = serde_json::from_slice(&after.stdout).unwrap();
    assert_eq!(value["up_to_date"], true);
}

#[test]
fn workspace_flag_points_at_another_directory() {
    let ws = reference_workspace();
    let home = TempDir::new().unwrap();
    let elsewhere = TempDir::new().unwrap();

    let workspace = ws.path().to_string_lossy().to_string();
    let output = run_cli(
        elsewhere.path(),
        home.path(),
        &["--workspace", &workspace, "plan", "--format", "json"],
    );
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["folders"][0]["folder"], "base");
    assert_eq!(value["folders"][0]["members"][0]["name"], "mf_abort.sas");
    assert!(!ws.path().join("compileall.sas").exists(), "plan must not write");
}

#[test]
fn json_build_report_is_stable_across_runs() {
    let ws = reference_workspace();
    let home = TempDir::new().unwrap();

    let first = run_cli(ws.path(), home.path(), &["build", "--format", "json"]);
    let second = run_cli(ws.path(), home.path(), &["build", "--format", "json"]);
    assert!(first.status.success() && second.status.success());

    let first: serde_json::Value = serde_json::from_slice(&first.stdout).unwrap();
    let second: serde_json::Value = serde_json::from_slice(&second.stdout).unwrap();
    assert_eq!(first, second);
}

#[test]
fn quiet_build_writes_nothing_to_stderr() {
    let ws = reference_workspace();
    let home = TempDir::new().unwrap();

    let output = run_cli(ws.path(), home.path(), &["--quiet", "--log-level", "trace"]);
    assert!(output.status.success());
    assert!(output.stderr.is_empty());
}

#[test]
fn verbose_build_logs_folders_to_stderr() {
    let ws = reference_workspace();
    let home = TempDir::new().unwrap();

    let output = run_cli(ws.path(), home.path(), &["--verbose"]);
    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Folder bundled"), "stderr: {}", stderr);
}

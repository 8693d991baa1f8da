//! End-to-end checks of the `copilot` binary.

use std::io::Write;
use std::process::{Command, Output};

use tempfile::NamedTempFile;

fn env_file(lines: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    for line in lines {
        writeln!(file, "{line}").unwrap();
    }
    file
}

fn copilot(args: &[&str], file: &NamedTempFile) -> Output {
    Command::new(env!("CARGO_BIN_EXE_copilot"))
        .env_clear()
        .arg("--env-file")
        .arg(file.path())
        .args(args)
        .output()
        .unwrap()
}

fn error_line(output: &Output) -> String {
    let stderr = String::from_utf8_lossy(&output.stderr);
    stderr
        .lines()
        .find(|line| line.starts_with("Error:"))
        .unwrap_or_else(|| panic!("no Error line in stderr:\n{stderr}"))
        .to_string()
}

const COMPLETE: [&str; 3] = [
    "GOOGLE_API_KEY=abc123",
    "MONGO_URI=mongodb://localhost:27017/",
    "MONGO_DB_NAME=system_design_copilot",
];

#[test]
fn check_fails_naming_every_missing_var() {
    let file = env_file(&[]);
    let output = copilot(&["check"], &file);

    assert!(!output.status.success());
    assert_eq!(
        error_line(&output),
        "Error: missing required configuration: GOOGLE_API_KEY, MONGO_URI, MONGO_DB_NAME"
    );
}

#[test]
fn check_names_only_the_vars_still_missing() {
    let file = env_file(&["MONGO_DB_NAME=system_design_copilot"]);
    let output = copilot(&["check"], &file);

    assert!(!output.status.success());
    assert_eq!(
        error_line(&output),
        "Error: missing required configuration: GOOGLE_API_KEY, MONGO_URI"
    );
}

#[test]
fn check_succeeds_with_complete_env() {
    let file = env_file(&COMPLETE);
    let output = copilot(&["check"], &file);

    assert!(
        output.status.success(),
        "stderr:\n{}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(!stdout.contains("abc123"));
}

#[test]
fn check_json_reports_readiness() {
    let file = env_file(&COMPLETE);
    let output = copilot(&["check", "--json"], &file);
    assert!(output.status.success());
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["ready"], true);

    let file = env_file(&["GOOGLE_API_KEY=abc123"]);
    let output = copilot(&["check", "--json"], &file);
    assert!(!output.status.success());
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["ready"], false);
}

#[test]
fn env_template_prints_template() {
    let file = env_file(&[]);
    let output = copilot(&["env-template"], &file);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("MONGO_DB_NAME="));
}

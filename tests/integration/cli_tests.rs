//! Integration tests for the CLI binary.
//!
//! Drives the `phc` binary end to end with the password on stdin.
//!
//! This test is registered as a [[test]] in the argon-phc-cli crate
//! so that CARGO_BIN_EXE_phc is available.

use std::io::Write;
use std::process::{Command, Output, Stdio};

/// Get a Command pointing to the `phc` binary.
fn phc_binary() -> Command {
    Command::new(env!("CARGO_BIN_EXE_phc"))
}

/// Run `phc` with `args`, feeding `stdin` to the process.
fn run_with_stdin(args: &[&str], stdin: &str) -> Output {
    let mut child = phc_binary()
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn phc");
    child
        .stdin
        .take()
        .expect("stdin should be piped")
        .write_all(stdin.as_bytes())
        .expect("failed to write stdin");
    child.wait_with_output().expect("failed to wait for phc")
}

const FAST: [&str; 6] = ["--time-cost", "1", "--memory-cost", "1024", "--parallelism", "1"];

fn hash_fast(password: &str) -> String {
    let mut args = vec!["hash"];
    args.extend_from_slice(&FAST);
    let output = run_with_stdin(&args, &format!("{password}\n"));
    assert!(
        output.status.success(),
        "phc hash should succeed, stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

#[test]
fn cli_responds_to_help() {
    let output = phc_binary()
        .arg("--help")
        .output()
        .expect("failed to execute phc --help");

    assert!(
        output.status.success(),
        "phc --help should exit with success, stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("phc") || stdout.contains("Usage"),
        "phc --help output should contain usage information, got: {stdout}"
    );
}

#[test]
fn cli_responds_to_version() {
    let output = phc_binary()
        .arg("--version")
        .output()
        .expect("failed to execute phc --version");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("0.1") || stdout.contains("phc"),
        "phc --version should contain version info, got: {stdout}"
    );
}

#[test]
fn cli_exits_with_error_on_unknown_flag() {
    let output = phc_binary()
        .arg("--nonexistent-flag")
        .output()
        .expect("failed to execute phc");

    assert!(!output.status.success());
}

#[test]
fn cli_hash_then_verify() {
    let record = hash_fast("correct horse battery staple");
    assert!(
        record.starts_with("$argon2id$v=19$m=1024,t=1,p=1$"),
        "unexpected record: {record}"
    );

    let ok = run_with_stdin(&["verify", &record], "correct horse battery staple\n");
    assert!(ok.status.success());
    assert_eq!(String::from_utf8_lossy(&ok.stdout).trim(), "match");

    let bad = run_with_stdin(&["verify", &record], "wrong\n");
    assert!(!bad.status.success());
    assert_eq!(String::from_utf8_lossy(&bad.stdout).trim(), "no match");
}

#[test]
fn cli_verify_malformed_record_is_no_match() {
    let output = run_with_stdin(&["verify", "not a valid record"], "pw\n");
    assert!(!output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "no match");

    let verbose = run_with_stdin(
        &["--verbose", "verify", "$argon2id$v=18$m=65536,t=3,p=2$AAAA$BBBB"],
        "pw\n",
    );
    assert!(!verbose.status.success());
    assert!(String::from_utf8_lossy(&verbose.stderr).contains("version"));
}

#[test]
fn cli_hash_rejects_empty_password() {
    let mut args = vec!["hash"];
    args.extend_from_slice(&FAST);
    let output = run_with_stdin(&args, "\n");
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("error"));
    assert!(output.stdout.is_empty());
}

#[test]
fn cli_hash_rejects_oversized_salt_length() {
    let max = usize::MAX.to_string();
    let mut args = vec!["hash"];
    args.extend_from_slice(&FAST);
    args.extend_from_slice(&["--salt-length", max.as_str()]);
    let output = run_with_stdin(&args, "pw\n");
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("error: "), "stderr: {stderr}");
    assert!(stderr.contains("salt_length"), "stderr: {stderr}");
    assert!(output.stdout.is_empty());
}

#[test]
fn cli_inspect_json() {
    let record = hash_fast("inspect-me");
    let output = phc_binary()
        .args(["inspect", &record, "--json"])
        .output()
        .expect("failed to execute phc inspect");
    assert!(output.status.success());

    let doc: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(doc["algorithm"], "argon2id");
    assert_eq!(doc["version"], 19);
    assert_eq!(doc["memory_cost_kib"], 1024);
    assert_eq!(doc["time_cost"], 1);
    assert_eq!(doc["parallelism"], 1);
    assert_eq!(doc["salt_length"], 16);
    assert_eq!(doc["output_length"], 32);
}

#[test]
fn cli_inspect_rejects_malformed_record() {
    let output = phc_binary()
        .args(["inspect", "$argon2id$v=19$m=0,t=3,p=2$AAAA$BBBB"])
        .output()
        .expect("failed to execute phc inspect");
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("error"));
}

#[test]
fn cli_params_from_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("params.json");
    std::fs::write(&path, r#"{"time_cost": 4, "parallelism": 1}"#).unwrap();

    let output = phc_binary()
        .args(["params", "--config", path.to_str().unwrap(), "--salt-length", "24"])
        .output()
        .expect("failed to execute phc params");
    assert!(output.status.success());

    let doc: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(doc["time_cost"], 4);
    assert_eq!(doc["parallelism"], 1);
    assert_eq!(doc["memory_cost_kib"], 131072);
    assert_eq!(doc["salt_length"], 24);
    assert_eq!(doc["output_length"], 32);
}

#[test]
fn cli_needs_rehash() {
    let record = hash_fast("rehash-me");

    let mut same = vec!["needs-rehash", record.as_str()];
    same.extend_from_slice(&FAST);
    let output = phc_binary().args(&same).output().unwrap();
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "no");

    let output = phc_binary()
        .args(["needs-rehash", record.as_str()])
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "yes");
}

//! End-to-end tests for the `breeds` binary, using an offline breed table.
#![cfg(feature = "cli")]

use std::io::Write;
use std::process::Command;

fn breeds_file() -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(br#"{"poodle": ["toy", "miniature", "standard"], "pug": []}"#)
        .unwrap();
    file
}

fn breeds() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_breeds"));
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn repeated_breeds_cost_one_call() {
    let file = breeds_file();

    let output = breeds()
        .arg("--offline")
        .arg(file.path())
        .args(["poodle", "Poodle", "pug"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(
        stdout,
        "poodle: toy, miniature, standard\n\
         Poodle: toy, miniature, standard\n\
         pug: (no sub-breeds)\n\
         provider calls: 2\n"
    );
}

#[test]
fn failed_lookup_sets_exit_code() {
    let file = breeds_file();

    let output = breeds()
        .arg("--offline")
        .arg(file.path())
        .args(["bogus", "bogus"])
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stdout.ends_with("provider calls: 2\n"));
    assert_eq!(stderr.matches("bogus: not found").count(), 2);
}

#[test]
fn missing_config_file_is_reported() {
    let dir = tempfile::tempdir().unwrap();

    let output = breeds()
        .arg("--config")
        .arg(dir.path().join("missing.toml"))
        .arg("poodle")
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Config file not found"));
}

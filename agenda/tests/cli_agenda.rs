//! CLI tests for the `agenda` binary.
//!
//! Spawns the binary against a temp root and checks stdout and exit codes.

use std::path::Path;
use std::process::{Command, Output};

use agenda::exit_codes;
use agenda::io::init::{InitOptions, init_agenda};

fn agenda(root: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_agenda"))
        .arg("--root")
        .arg(root)
        .args(args)
        .output()
        .expect("run agenda")
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).expect("utf8 stdout")
}

#[test]
fn insert_then_query_commands() {
    let temp = tempfile::tempdir().expect("tempdir");
    let root = temp.path();
    init_agenda(root, &InitOptions { force: false }).expect("init");

    assert!(
        agenda(root, &["insert", "Ana Maria", "111", "--email", "ana@x.io"])
            .status
            .success()
    );
    assert!(agenda(root, &["insert", "Beto", "222"]).status.success());

    let got = agenda(root, &["get", "Beto"]);
    assert_eq!(got.status.code(), Some(exit_codes::OK));
    assert_eq!(stdout(&got), "Beto\t222\t\n");

    let by_letter = agenda(root, &["find-by-letter", "a"]);
    assert_eq!(stdout(&by_letter), "Ana Maria\t111\tana@x.io\n");

    let by_fragment = agenda(root, &["find-by-substring", "MARIA"]);
    assert_eq!(stdout(&by_fragment), "Ana Maria\t111\tana@x.io\n");

    let all = agenda(root, &["list", "--json"]);
    let parsed: serde_json::Value = serde_json::from_str(&stdout(&all)).expect("json");
    assert_eq!(parsed.as_array().map(Vec::len), Some(2));
    assert_eq!(parsed[1]["name"], "Beto");
}

#[test]
fn update_patches_fields() {
    let temp = tempfile::tempdir().expect("tempdir");
    let root = temp.path();

    assert!(
        agenda(root, &["insert", "Ana", "111", "--email", "ana@x.io"])
            .status
            .success()
    );
    assert!(agenda(root, &["update", "Ana", "--phone", "222"]).status.success());
    assert_eq!(stdout(&agenda(root, &["get", "Ana"])), "Ana\t222\tana@x.io\n");

    assert!(agenda(root, &["update", "Ana", "--clear-email"]).status.success());
    assert_eq!(stdout(&agenda(root, &["get", "Ana"])), "Ana\t222\t\n");
}

#[test]
fn error_kinds_map_to_exit_codes() {
    let temp = tempfile::tempdir().expect("tempdir");
    let root = temp.path();

    assert!(agenda(root, &["insert", "Ana", "111"]).status.success());
    assert_eq!(
        agenda(root, &["insert", "Ana", "222"]).status.code(),
        Some(exit_codes::CONFLICT)
    );
    assert_eq!(
        agenda(root, &["get", "Nobody"]).status.code(),
        Some(exit_codes::NOT_FOUND)
    );
    assert_eq!(
        agenda(root, &["delete", "Nobody"]).status.code(),
        Some(exit_codes::NOT_FOUND)
    );
    assert_eq!(
        agenda(root, &["insert", "Beto", "  "]).status.code(),
        Some(exit_codes::INVALID)
    );

    std::fs::write(root.join(".agenda/contacts.txt"), "broken\n").expect("corrupt");
    assert_eq!(
        agenda(root, &["list"]).status.code(),
        Some(exit_codes::CORRUPT)
    );
}

#[test]
fn validate_reports_contact_count() {
    let temp = tempfile::tempdir().expect("tempdir");
    let root = temp.path();
    init_agenda(root, &InitOptions { force: false }).expect("init");
    assert!(agenda(root, &["insert", "Ana", "111"]).status.success());

    let output = agenda(root, &["validate"]);
    assert_eq!(output.status.code(), Some(exit_codes::OK));
    assert_eq!(stdout(&output), "ok: 1 contacts\n");
}

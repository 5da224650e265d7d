use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

fn document(json: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(json.as_bytes()).unwrap();
    file
}

fn cmd() -> Command {
    let mut cmd = Command::cargo_bin("container-get").unwrap();
    cmd.env_remove("CONTAINER_GET_JSON").env_remove("CONTAINER_GET_LOG");
    cmd
}

#[test]
fn test_reads_nested_value() {
    let file = document(r#"{"a": {"b": [10, 20]}}"#);
    cmd()
        .arg(file.path())
        .args(["a", "b", "1"])
        .assert()
        .success()
        .stdout("20\n");
}

#[test]
fn test_strings_print_raw() {
    let file = document(r#"{"name": "widget"}"#);
    cmd()
        .arg(file.path())
        .arg("name")
        .assert()
        .success()
        .stdout("widget\n");
}

#[test]
fn test_json_output() {
    let file = document(r#"{"name": "widget"}"#);
    cmd()
        .arg("--json")
        .arg(file.path())
        .arg("name")
        .assert()
        .success()
        .stdout("\"widget\"\n");
}

#[test]
fn test_json_output_from_env() {
    let file = document(r#"{"name": "widget"}"#);
    cmd()
        .env("CONTAINER_GET_JSON", "true")
        .arg(file.path())
        .arg("name")
        .assert()
        .success()
        .stdout("\"widget\"\n");
}

#[test]
fn test_empty_path_prints_document() {
    let file = document(r#"[1]"#);
    cmd()
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("1"));
}

#[test]
fn test_reads_stdin() {
    cmd()
        .arg("-")
        .arg("k")
        .write_stdin(r#"{"k": false}"#)
        .assert()
        .success()
        .stdout("false\n");
}

#[test]
fn test_missing_key_exits_2() {
    let file = document(r#"{}"#);
    cmd()
        .arg(file.path())
        .arg("missing")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("missing"));
}

#[test]
fn test_scalar_in_path_exits_1() {
    let file = document(r#"{"a": 1}"#);
    cmd()
        .arg(file.path())
        .args(["a", "b"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Not a valid container"));
}

#[test]
fn test_invalid_json() {
    let file = document("{not json");
    cmd()
        .arg(file.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("not valid JSON"));
}

#[test]
fn test_missing_file() {
    cmd()
        .arg("/definitely/not/here.json")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to read"));
}

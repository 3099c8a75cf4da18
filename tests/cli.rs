//! Command-line tests

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn write_input(dir: &TempDir, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_csv_to_stdout() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "people.csv", "id,name\n1,Ann\n2,\n");

    Command::cargo_bin("tablecsv")
        .unwrap()
        .arg(&input)
        .args(["--empty-value", "-"])
        .assert()
        .success()
        .stdout("\"id\",\"name\"\n\"1\",\"Ann\"\n\"2\",\"-\"\n");
}

#[test]
fn test_json_horizontal_with_nil() {
    let dir = TempDir::new().unwrap();
    let input = write_input(
        &dir,
        "people.json",
        r#"[{"id": 1, "name": "Ann"}, {"id": 2, "name": null}]"#,
    );

    Command::cargo_bin("tablecsv")
        .unwrap()
        .arg(&input)
        .args(["--direction", "horizontal", "--nil-value", "NIL"])
        .assert()
        .success()
        .stdout("\"id\",\"1\",\"2\"\n\"name\",\"Ann\",\"NIL\"\n");
}

#[test]
fn test_output_dir_uses_table_name() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "in.csv", "a\nx\n");
    let out = dir.path().join("out");
    fs::create_dir(&out).unwrap();

    Command::cargo_bin("tablecsv")
        .unwrap()
        .arg(&input)
        .args(["--name", "report", "--output-dir"])
        .arg(&out)
        .assert()
        .success()
        .stdout("");

    let written = fs::read_to_string(out.join("report.csv")).unwrap();
    assert_eq!(written, "\"a\"\n\"x\"\n");
}

#[test]
fn test_config_file_overridden_by_flags() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "in.csv", "a,b\n,\n");
    let config = write_input(
        &dir,
        "config.json",
        r#"{"empty_value": "E", "direction": "horizontal"}"#,
    );

    Command::cargo_bin("tablecsv")
        .unwrap()
        .arg(&input)
        .arg("--config")
        .arg(&config)
        .args(["--direction", "vertical"])
        .assert()
        .success()
        .stdout("\"a\",\"b\"\n\"E\",\"E\"\n");
}

#[test]
fn test_duplicate_columns_fail() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "in.csv", "a,b\n1,2\n");

    Command::cargo_bin("tablecsv")
        .unwrap()
        .arg(&input)
        .args(["--columns", "a,b,a"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("duplicate headings: a"));
}

#[test]
fn test_encoding_failure() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "in.csv", "name\nZoë\n");

    Command::cargo_bin("tablecsv")
        .unwrap()
        .arg(&input)
        .args(["--encoding", "ascii"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("cannot encode"));
}

#[test]
fn test_unsupported_input() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "in.xlsx", "");

    Command::cargo_bin("tablecsv")
        .unwrap()
        .arg(&input)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Unsupported file format"));
}

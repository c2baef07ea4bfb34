//! Integration tests for the `textmetrics` binary.

use assert_cmd::Command;
use indoc::indoc;
use serde_json::Value;
use std::fs;
use tempfile::TempDir;

fn textmetrics(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("textmetrics").expect("binary should be built");
    cmd.current_dir(dir.path());
    cmd
}

fn read_json(dir: &TempDir, relative: &str) -> Value {
    let content = fs::read_to_string(dir.path().join(relative)).unwrap();
    serde_json::from_str(&content).expect("summary should be valid JSON")
}

#[test]
fn test_writes_csv_and_json_into_output_directory() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("got.txt"),
        indoc! {"
            The king sits on the throne.
              Winter is coming!

            A Lannister always pays his debts.
        "},
    )
    .unwrap();

    textmetrics(&dir).arg("got.txt").assert().success();

    let csv = fs::read_to_string(dir.path().join("output/got.csv")).unwrap();
    let rows: Vec<&str> = csv.split("\r\n").filter(|r| !r.is_empty()).collect();
    assert_eq!(rows.len(), 5);
    assert_eq!(
        rows[0],
        "number_of_terms,number_of_signs,number_of_prepositions,average_vowels,\
         max_length,min_length,total_length,length_without_spaces"
    );
    assert_eq!(rows[1], "6,1,1,1.1666666666666667,6,2,28,23");
    assert_eq!(rows[3], "0,0,0,0,0,0,0,0");

    let json = read_json(&dir, "output/got.json");
    assert_eq!(json["total_number_of_lines"], 4);
    assert_eq!(json["most_frequent_word"], "the");
    assert_eq!(json["most_frequent_preposition"], "on");
    assert_eq!(json["csv_file_name"], "output/got.csv");
}

#[test]
fn test_missing_source_reports_and_writes_nothing() {
    let dir = TempDir::new().unwrap();

    let assert = textmetrics(&dir).arg("missing.txt").assert().success();
    let stderr = String::from_utf8_lossy(&assert.get_output().stderr);
    assert_eq!(stderr.trim(), "ERROR, FILE DOES NOT EXIST: missing.txt!");

    assert!(!dir.path().join("output/got.csv").exists());
    assert!(!dir.path().join("output/got.json").exists());
}

#[test]
fn test_empty_input_writes_nothing() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("empty.txt"), "").unwrap();

    textmetrics(&dir).arg("empty.txt").assert().success();

    assert!(dir.path().join("output").is_dir());
    assert!(!dir.path().join("output/got.csv").exists());
    assert!(!dir.path().join("output/got.json").exists());
}

#[test]
fn test_wrong_argument_count_prints_usage() {
    let dir = TempDir::new().unwrap();

    let no_args = textmetrics(&dir).assert().success();
    assert_eq!(
        String::from_utf8_lossy(&no_args.get_output().stdout).trim(),
        "Usage: textmetrics <INPUT>"
    );

    let extra = textmetrics(&dir).args(["a.txt", "b.txt"]).assert().success();
    assert_eq!(
        String::from_utf8_lossy(&extra.get_output().stdout).trim(),
        "Usage: textmetrics <INPUT>"
    );
    assert!(!dir.path().join("output").exists());
}

#[test]
fn test_config_file_redirects_output() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("got.txt"), "Hodor.\n").unwrap();
    fs::write(
        dir.path().join(".textmetrics.toml"),
        indoc! {r#"
            [output]
            directory = "reports"
            csv_file = "lines.csv"
            json_file = "summary.json"
        "#},
    )
    .unwrap();

    textmetrics(&dir).arg("got.txt").assert().success();

    assert!(dir.path().join("reports/lines.csv").is_file());
    let json = read_json(&dir, "reports/summary.json");
    assert_eq!(json["csv_file_name"], "reports/lines.csv");
    assert_eq!(json["most_frequent_preposition"], Value::Null);
}

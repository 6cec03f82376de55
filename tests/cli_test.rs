//! Binary-level tests: exit codes, diagnostics, and produced artifacts.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn logsift() -> Command {
    Command::cargo_bin("logsift").unwrap()
}

fn write_input(dir: &TempDir, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join("events.json");
    fs::write(&path, contents).unwrap();
    path
}

const SAMPLE: &str = concat!(
    r#"{"eventId":1,"user":"alice@example.com","ipAddr":"10.1.2.3","file":"/a/b/report.txt","activity":"createdDoc","timestamp":"01/02/20 03:04:05PM"}"#,
    "\n",
    r#"{"eventId":2,"user":"bob@example.com","ipAddr":"10.1.2.4","file":"/a/b/notes.txt","activity":"viewedDoc","timestamp":"01/03/20 09:00:00AM","timeOffset":"-05:00"}"#,
    "\n",
    r#"{"eventId":1,"user":"alice@example.com","activity":"createdDoc","timestamp":"01/02/20 03:04:05PM"}"#,
    "\n",
);

#[test]
fn no_arguments_exits_one() {
    logsift().assert().failure().code(1);
}

#[test]
fn one_argument_exits_one() {
    logsift().arg("only.json").assert().failure().code(1);
}

#[test]
fn three_arguments_exit_one() {
    logsift()
        .args(["a.json", "b.csv", "extra"])
        .assert()
        .failure()
        .code(1);
}

#[test]
fn help_exits_zero() {
    logsift()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("JSON"));
}

#[test]
fn missing_input_file_exits_one() {
    let dir = TempDir::new().unwrap();
    logsift()
        .arg(dir.path().join("nope.json"))
        .arg(dir.path().join("out.csv"))
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("doesn't exist"));
}

#[test]
fn missing_output_directory_exits_one() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, SAMPLE);
    logsift()
        .arg(&input)
        .arg(dir.path().join("no/such/dir/out.csv"))
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Can't write"));
}

#[test]
fn successful_run_is_exit_zero_and_writes_csv() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, SAMPLE);
    let output = dir.path().join("out.csv");

    logsift()
        .arg(&input)
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Metrics Output:"))
        .stdout(predicate::str::contains("\"linesRead\": 3"))
        .stdout(predicate::str::contains("\"Duplicates\": 1"));

    let csv = fs::read_to_string(&output).unwrap();
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines[0], "TIMESTP,ACTION,USER,FOLDER,FILENE,IP");
    assert_eq!(
        lines[1],
        r#""2020-01-02T15:04:05:000Z","ADD","alice","/a/b","report.txt","10.1.2.3""#
    );
    assert_eq!(
        lines[2],
        r#""2020-01-03T09:00:00:000-05:00","ACCESSED","bob","/a/b","notes.txt","10.1.2.4""#
    );
    assert_eq!(lines.len(), 3);
}

#[test]
fn overwrites_an_existing_csv() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, SAMPLE);
    let output = dir.path().join("out.csv");
    fs::write(&output, "stale contents\n").unwrap();

    logsift().arg(&input).arg(&output).assert().success();

    let csv = fs::read_to_string(&output).unwrap();
    assert!(csv.starts_with("TIMESTP,"));
    assert!(!csv.contains("stale"));
}

#[test]
fn malformed_line_fails_the_run() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "this is not json\n");
    let output = dir.path().join("out.csv");

    logsift()
        .arg(&input)
        .arg(&output)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Malformed input on line 1"));
}

#[test]
fn bad_timestamp_fails_the_run() {
    let dir = TempDir::new().unwrap();
    let input = write_input(
        &dir,
        r#"{"eventId":1,"activity":"createdDoc","timestamp":"not a time"}"#,
    );

    logsift()
        .arg(&input)
        .arg(dir.path().join("out.csv"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unparseable timestamp"));
}

use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;
use std::fs;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use std::process::Stdio;
use tempfile::TempDir;

const BIN: &str = env!("CARGO_BIN_EXE_csv-quiz");

fn cmd() -> Command {
    let mut cmd = Command::new(BIN);
    cmd.env_remove("QUIZ_FILENAME")
        .env_remove("QUIZ_SHUFFLE")
        .env_remove("QUIZ_TIMER")
        .env_remove("QUIZ_SEED")
        .env_remove("QUIZ_RETRIES");
    cmd
}

fn problems(dir: &Path, contents: &str) -> PathBuf {
    let path = dir.join("problems.csv");
    fs::write(&path, contents).expect("write problems");
    path
}

#[test]
fn answers_every_question() {
    let tmp = TempDir::new().unwrap();
    let file = problems(tmp.path(), "2+2,4\nsky color,blue\n");

    cmd()
        .arg("--filename")
        .arg(&file)
        .args(["--timer", "30"])
        .write_stdin("4\nblue\n")
        .assert()
        .code(3)
        .stdout(contains("Question 1\n2+2"))
        .stdout(contains("Total Questions in Quiz 2"))
        .stdout(contains("Total Answers Attempted 2"))
        .stdout(contains("Total Correct Answers 2"))
        .stdout(contains("Time limit").not());
}

#[test]
fn reads_problems_csv_from_the_working_directory_by_default() {
    let tmp = TempDir::new().unwrap();
    problems(tmp.path(), "2+2,4\n");

    cmd()
        .current_dir(tmp.path())
        .write_stdin("5\n")
        .assert()
        .code(3)
        .stdout(contains("Total Correct Answers 0"));
}

#[test]
fn filename_from_environment() {
    let tmp = TempDir::new().unwrap();
    let file = problems(tmp.path(), "2+2,4\n");

    cmd()
        .env("QUIZ_FILENAME", &file)
        .write_stdin("4\n")
        .assert()
        .code(3)
        .stdout(contains("Total Correct Answers 1"));
}

#[test]
fn json_summary() {
    let tmp = TempDir::new().unwrap();
    let file = problems(tmp.path(), "2+2,4\nsky color,blue\n");

    cmd()
        .arg("--filename")
        .arg(&file)
        .arg("--json")
        .write_stdin("4\nred\n")
        .assert()
        .code(3)
        .stdout(contains("\"attempted\": 2"))
        .stdout(contains("\"correct\": 1"));
}

#[test]
fn shuffle_is_announced() {
    let tmp = TempDir::new().unwrap();
    let file = problems(tmp.path(), "a,1\nb,2\nc,3\n");

    cmd()
        .arg("--filename")
        .arg(&file)
        .args(["--shuffle", "--seed", "3"])
        .write_stdin("1\n2\n3\n")
        .assert()
        .code(3)
        .stdout(contains("Shuffled!"))
        .stdout(contains("Total Answers Attempted 3"));
}

#[test]
fn missing_file_is_fatal() {
    let tmp = TempDir::new().unwrap();

    cmd()
        .arg("--filename")
        .arg(tmp.path().join("nope.csv"))
        .assert()
        .code(1)
        .stderr(contains("cannot open question file"))
        .stdout(contains("Total").not());
}

#[test]
fn malformed_row_is_fatal() {
    let tmp = TempDir::new().unwrap();
    let file = problems(tmp.path(), "2+2,4\n3+3,6,six\n");

    cmd()
        .arg("--filename")
        .arg(&file)
        .assert()
        .code(1)
        .stderr(contains("line 2: expected 2 fields, found 3"))
        .stdout(contains("Question").not());
}

#[test]
fn closed_input_is_fatal() {
    let tmp = TempDir::new().unwrap();
    let file = problems(tmp.path(), "2+2,4\nsky color,blue\n");

    cmd()
        .arg("--filename")
        .arg(&file)
        .write_stdin("4\n")
        .assert()
        .code(1)
        .stderr(contains("input closed"))
        .stdout(contains("Total").not());
}

#[test]
fn invalid_timer_is_a_usage_error() {
    cmd().args(["--timer", "soon"]).assert().code(2);
}

#[test]
fn time_limit_ends_the_quiz() {
    let tmp = TempDir::new().unwrap();
    let file = problems(tmp.path(), "2+2,4\nsky color,blue\n");

    let mut child = std::process::Command::new(BIN)
        .arg("--filename")
        .arg(&file)
        .args(["--timer", "1"])
        .env_remove("QUIZ_TIMER")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .expect("spawn quiz");

    // Answer the first question and leave stdin open on the second one.
    let mut stdin = child.stdin.take().expect("stdin");
    stdin.write_all(b"4\n").expect("answer");
    stdin.flush().expect("flush");

    let status = child.wait().expect("quiz exits on its own");
    let mut stdout = String::new();
    child
        .stdout
        .take()
        .expect("stdout")
        .read_to_string(&mut stdout)
        .expect("read stdout");
    drop(stdin);

    assert_eq!(status.code(), Some(3));
    assert!(stdout.contains("Time limit of 1s expired"));
    assert!(stdout.contains("Total Questions in Quiz 2"));
    assert!(stdout.contains("Total Answers Attempted 1"));
    assert!(stdout.contains("Total Correct Answers 1"));
    assert_eq!(stdout.matches("Total Questions in Quiz").count(), 1);
}

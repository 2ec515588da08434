use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn tutil() -> Command {
    let mut cmd = Command::cargo_bin("tutil").unwrap();
    cmd.env_remove("TUTIL_LOG");
    cmd
}

fn backups(dir: &Path) -> Vec<PathBuf> {
    match fs::read_dir(dir.join("tutil-log")) {
        Ok(entries) => entries.map(|e| e.unwrap().path()).collect(),
        Err(_) => Vec::new(),
    }
}

#[test]
fn lister_prints_every_operation() {
    tutil()
        .arg("lister")
        .assert()
        .success()
        .stdout(predicate::str::contains("separator"))
        .stdout(predicate::str::contains("uncommenter"))
        .stdout(predicate::str::contains("lister"))
        .stdout(predicate::str::contains("help"));
}

#[test]
fn help_flag_prints_usage() {
    tutil()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Usage: tutil <operation>"));
}

#[test]
fn missing_operation_fails_with_guidance() {
    tutil()
        .assert()
        .failure()
        .stderr(predicate::str::contains("You need to specify the name of an operation"));
}

#[test]
fn unknown_operation_fails_with_guidance() {
    tutil()
        .args(["frobnicate", "a.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("frobnicate is not a valid operation"));
}

#[test]
fn separator_rewrites_and_backs_up() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("paper.tex");
    fs::write(&file, "Hello world. This is great! Is it not?\n% Keep. This.\n").unwrap();

    tutil()
        .arg("separator")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("Adjustments made: 2"));

    assert_eq!(
        fs::read_to_string(&file).unwrap(),
        "Hello world.\nThis is great!\nIs it not?\n% Keep. This.\n"
    );
    let saved = backups(dir.path());
    assert_eq!(saved.len(), 1);
    assert_eq!(
        fs::read_to_string(&saved[0]).unwrap(),
        "Hello world. This is great! Is it not?\n% Keep. This.\n"
    );
    let name = saved[0].file_name().unwrap().to_string_lossy().into_owned();
    assert!(name.starts_with("paper-") && name.ends_with(".tex"), "{name}");
}

#[test]
fn invalid_files_are_skipped_and_the_batch_continues() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("missing.txt");
    let good = dir.path().join("good.txt");
    fs::write(&good, "A. B.\n").unwrap();

    tutil()
        .arg("separator")
        .arg(&missing)
        .arg(&good)
        .assert()
        .success()
        .stderr(predicate::str::contains("Skipped"))
        .stdout(predicate::str::contains("1 modified, 1 skipped, 0 failed"));

    assert_eq!(fs::read_to_string(&good).unwrap(), "A.\nB.\n");
}

#[test]
fn unexpected_extension_needs_confirmation() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("notes.md");
    fs::write(&file, "One. Two.\n").unwrap();

    tutil()
        .arg("separator")
        .arg(&file)
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("[y/N]"));
    assert_eq!(fs::read_to_string(&file).unwrap(), "One. Two.\n");
    assert!(backups(dir.path()).is_empty());

    tutil()
        .arg("separator")
        .arg(&file)
        .write_stdin("y\n")
        .assert()
        .success();
    assert_eq!(fs::read_to_string(&file).unwrap(), "One.\nTwo.\n");
}

#[test]
fn force_skips_the_extension_question() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("notes.md");
    fs::write(&file, "One. Two.\n").unwrap();

    tutil()
        .args(["separator", "-f"])
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("[y/N]").not());
    assert_eq!(fs::read_to_string(&file).unwrap(), "One.\nTwo.\n");
}

#[test]
fn uncommenter_removes_comment_lines() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("a.tex");
    fs::write(&file, "foo %bar\n%only comment\nrate 5\\% off\n").unwrap();

    tutil()
        .arg("uncommenter")
        .arg(&file)
        .write_stdin("r\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Adjustments made: 2"));
    assert_eq!(fs::read_to_string(&file).unwrap(), "foo \nrate 5\\% off\n");
}

#[test]
fn uncommenter_can_leave_blank_lines() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("a.tex");
    fs::write(&file, "foo %bar\n%only comment\nbaz\n").unwrap();

    tutil()
        .arg("uncommenter")
        .arg(&file)
        .write_stdin("l\n")
        .assert()
        .success();
    assert_eq!(fs::read_to_string(&file).unwrap(), "foo \n\nbaz\n");
}

#[test]
fn uncommenter_abort_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("a.tex");
    fs::write(&file, "foo %bar\n").unwrap();

    tutil()
        .arg("uncommenter")
        .arg(&file)
        .write_stdin("a\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Aborted"));
    assert_eq!(fs::read_to_string(&file).unwrap(), "foo %bar\n");
    assert!(backups(dir.path()).is_empty());
}

#[test]
fn quiet_mode_still_reports_the_outcome() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("a.txt");
    fs::write(&file, "A. B.\n").unwrap();

    tutil()
        .args(["separator", "-nv"])
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("Success!"))
        .stderr(predicate::str::contains("Backup of").not());
}

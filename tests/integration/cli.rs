//! Tests for the `fid-umd` binary.

use assert_cmd::Command;
use fid_umd::test_utils::{SourceFixture, TestProject};
use predicates::prelude::*;

fn fid_umd() -> Command {
    Command::cargo_bin("fid-umd").unwrap()
}

#[test]
fn test_help_exits_zero_with_note() {
    fid_umd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Update or add UMD to JavaScript files"))
        .stdout(predicate::str::contains("invalid JSON"));
}

#[test]
fn test_help_does_not_touch_files() {
    let project = TestProject::new().unwrap();
    let path = project.write_fixture(&SourceFixture::plain_body()).unwrap();

    fid_umd().arg("--help").arg(&path).assert().success();
    assert_eq!(project.read("plain.js").unwrap(), SourceFixture::plain_body().content);
}

#[test]
fn test_no_files_prints_usage_hint() {
    fid_umd()
        .assert()
        .success()
        .stderr(predicate::str::contains("Please pass filenames on the command line"))
        .stderr(predicate::str::contains("--help"));
}

#[test]
fn test_updates_file_in_place() {
    let project = TestProject::new().unwrap();
    let path = project.write_fixture(&SourceFixture::plain_body()).unwrap();

    fid_umd().arg(&path).assert().success();

    let updated = project.read("plain.js").unwrap();
    assert_eq!(updated, fid_umd::update(&SourceFixture::plain_body().content).unwrap());
}

#[test]
fn test_second_run_leaves_file_unchanged() {
    let project = TestProject::new().unwrap();
    let path = project.write_fixture(&SourceFixture::plain_body()).unwrap();

    fid_umd().arg(&path).assert().success();
    let first = project.read("plain.js").unwrap();
    fid_umd().arg(&path).assert().success();
    assert_eq!(project.read("plain.js").unwrap(), first);
}

#[test]
fn test_malformed_file_fails_but_others_update() {
    let project = TestProject::new().unwrap();
    let bad = project.write_fixture(&SourceFixture::malformed_marker()).unwrap();
    let good = project.write_fixture(&SourceFixture::plain_body()).unwrap();

    fid_umd()
        .arg(&bad)
        .arg(&good)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Unable to update"))
        .stderr(predicate::str::contains("Invalid JSON: {{}"));

    assert_eq!(project.read("malformed.js").unwrap(), SourceFixture::malformed_marker().content);
    assert!(project.read("plain.js").unwrap().starts_with("// fid-umd "));
}

#[test]
fn test_missing_file_fails() {
    let project = TestProject::new().unwrap();

    fid_umd()
        .arg(project.path().join("missing.js"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("missing.js"));
}

#[test]
fn test_stdin_to_stdout() {
    let expected = fid_umd::update("return 5;\n").unwrap();

    fid_umd().arg("-").write_stdin("return 5;\n").assert().success().stdout(expected);
}

#[test]
fn test_stdin_twice_fails_second_entry() {
    let expected = fid_umd::update("x\n").unwrap();

    fid_umd()
        .args(["-", "-"])
        .write_stdin("x\n")
        .assert()
        .code(1)
        .stdout(expected)
        .stderr(predicate::str::contains("Already read from stdin"));
}

#[test]
fn test_quiet_still_reports_failures() {
    let project = TestProject::new().unwrap();
    let bad = project.write_fixture(&SourceFixture::malformed_marker()).unwrap();

    fid_umd()
        .arg("--quiet")
        .arg(&bad)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Unable to update"));
}

#[test]
fn test_verbose_and_quiet_conflict() {
    fid_umd().args(["--verbose", "--quiet", "a.js"]).assert().failure();
}

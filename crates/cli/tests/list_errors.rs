use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::process::Command;
use tempfile::tempdir;

#[test]
fn missing_docs_dir_fails_without_report() {
    let tmp = tempdir().unwrap();

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("doclist"));
    cmd.current_dir(tmp.path());
    cmd.env("XDG_CONFIG_HOME", tmp.path().join("xdg"));
    cmd.assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("docs directory does not exist"));
}

#[test]
fn docs_path_that_is_a_file_fails() {
    let tmp = tempdir().unwrap();
    fs::write(tmp.path().join("docs"), "not a dir").unwrap();

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("doclist"));
    cmd.current_dir(tmp.path());
    cmd.env("XDG_CONFIG_HOME", tmp.path().join("xdg"));
    cmd.assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("not a directory"));
}

#[test]
fn missing_explicit_config_fails() {
    let tmp = tempdir().unwrap();
    fs::create_dir_all(tmp.path().join("docs")).unwrap();

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("doclist"));
    cmd.current_dir(tmp.path());
    cmd.args(["--config", "nope.toml"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("config file not found"));
}

#[test]
fn exclude_conflicts_with_no_exclude() {
    let tmp = tempdir().unwrap();

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("doclist"));
    cmd.current_dir(tmp.path());
    cmd.args(["--exclude", "x", "--no-exclude"]);
    cmd.assert().failure().code(2);
}

#[test]
fn docs_dir_before_list_subcommand_is_honored() {
    let tmp = tempdir().unwrap();
    fs::create_dir_all(tmp.path().join("docs")).unwrap();
    fs::write(tmp.path().join("docs/a.md"), "---\nsummary: A\n---\n").unwrap();

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("doclist"));
    cmd.current_dir(tmp.path());
    cmd.env("XDG_CONFIG_HOME", tmp.path().join("xdg"));
    cmd.args(["--json", "--docs-dir", "nope", "list"]);
    cmd.assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("docs directory does not exist: nope"));
}

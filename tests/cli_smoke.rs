//! CLI surface smoke tests (no network).

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn help_lists_subcommands() {
    Command::cargo_bin("taskbridge")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("tasks"))
        .stdout(predicate::str::contains("chat"))
        .stdout(predicate::str::contains("completions"));
}

#[test]
fn tasks_help_lists_operations() {
    Command::cargo_bin("taskbridge")
        .unwrap()
        .args(["tasks", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("add"))
        .stdout(predicate::str::contains("done"))
        .stdout(predicate::str::contains("rm"));
}

#[test]
fn completions_generate_for_bash() {
    Command::cargo_bin("taskbridge")
        .unwrap()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("taskbridge"));
}

#[test]
fn unknown_subcommand_fails() {
    Command::cargo_bin("taskbridge")
        .unwrap()
        .arg("frobnicate")
        .assert()
        .failure();
}

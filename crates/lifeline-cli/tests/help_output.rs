use assert_cmd::Command;
use predicates::prelude::*;

#[allow(deprecated)]
fn lifeline() -> Command {
    Command::cargo_bin("lifeline").unwrap()
}

#[test]
fn test_main_help_lists_commands() {
    let assert = lifeline().arg("--help").assert().success();
    let mut stdout = predicate::str::contains("show").boxed();
    for name in ["html", "print", "call", "log", "touch", "init", "tui"] {
        stdout = stdout.and(predicate::str::contains(name)).boxed();
    }
    assert.stdout(stdout);
}

#[test]
fn test_call_help_mentions_confirmation_flag() {
    lifeline()
        .args(["call", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--yes"))
        .stdout(predicate::str::contains("<NAME>"));
}

#[test]
fn test_rejects_unknown_format() {
    lifeline()
        .args(["--format", "xml", "show"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("xml"));
}

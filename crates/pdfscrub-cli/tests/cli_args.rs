use assert_cmd::Command;
use predicates::prelude::*;

fn cmd() -> Command {
    Command::cargo_bin("pdfscrub").unwrap()
}

#[test]
fn help_flag_prints_usage_with_subcommands() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("text"))
        .stdout(predicate::str::contains("redact"))
        .stdout(predicate::str::contains("--verbose"));
}

#[test]
fn text_subcommand_help() {
    cmd()
        .args(["text", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("FILE"))
        .stdout(predicate::str::contains("--pages"))
        .stdout(predicate::str::contains("--format"));
}

#[test]
fn redact_subcommand_help() {
    cmd()
        .args(["redact", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--term"))
        .stdout(predicate::str::contains("--keep-images"))
        .stdout(predicate::str::contains("--no-vector-marks"));
}

#[test]
fn no_subcommand_is_an_error() {
    cmd().assert().failure();
}

#[test]
fn missing_file_exits_with_error() {
    cmd()
        .args(["text", "/nonexistent/pdfscrub/missing.pdf"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("file not found"));
}

#[test]
fn invalid_pdf_exits_with_error() {
    let f = tempfile::NamedTempFile::new().unwrap();
    std::fs::write(f.path(), b"definitely not a pdf").unwrap();
    cmd()
        .args(["text", f.path().to_str().unwrap()])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("failed to open PDF"));
}

//! End-to-end tests for the `imohash-oracle` binary.

use assert_cmd::Command;
use imohash_oracle::REFERENCE_DIGEST;
use predicates::prelude::*;

fn oracle() -> Command {
    let mut cmd = Command::cargo_bin("imohash-oracle").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_default_run_prints_reference_digest() {
    oracle()
        .assert()
        .success()
        .stdout(format!("{REFERENCE_DIGEST}\n"))
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_custom_length_prints_single_hex_line() {
    oracle()
        .args(["--max-length", "1000"])
        .assert()
        .success()
        .stdout("79cf38693192c08e2836aca53dfd2d9253506aee5dede9034c4489b04df856ce\n");
}

#[test]
fn test_zero_length_prints_empty_sha256() {
    oracle()
        .args(["--max-length", "0"])
        .assert()
        .success()
        .stdout("e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855\n");
}

#[test]
fn test_verbose_logs_go_to_stderr() {
    oracle()
        .args(["--verbose", "--max-length", "10"])
        .assert()
        .success()
        .stdout(predicate::str::is_match("^[0-9a-f]{64}\n$").unwrap())
        .stderr(predicate::str::contains("generating conformance buffer"));
}

#[test]
fn test_oversized_length_fails_with_error_code() {
    oracle()
        .args(["--max-length", "2000000000"])
        .assert()
        .code(3)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("max_length"));
}

#[test]
fn test_unknown_argument_is_rejected() {
    oracle()
        .arg("--no-such-flag")
        .assert()
        .failure()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_help() {
    oracle()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("EXIT CODES"));
}

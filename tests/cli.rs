use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

#[test]
fn cli_shows_help() {
    let mut cmd = Command::cargo_bin("novapanel").unwrap();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("novapanel"));
}

#[test]
fn format_groups_pesos() {
    let mut cmd = Command::cargo_bin("novapanel").unwrap();
    cmd.args(["format", "--amount", "1000000"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("$ 1.000.000"));
}

#[test]
fn validate_accepts_good_inputs() {
    let mut cmd = Command::cargo_bin("novapanel").unwrap();
    cmd.args([
        "validate",
        "--document",
        "CC:1032456789",
        "--email",
        "cliente@novacapital.com.co",
        "--phone",
        "300 123 4567",
    ]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("document: ok"));
}

#[test]
fn validate_fails_on_bad_phone() {
    let mut cmd = Command::cargo_bin("novapanel").unwrap();
    cmd.args(["validate", "--phone", "2001234567"]);
    cmd.assert()
        .failure()
        .stdout(predicate::str::contains("phone: INVALID"));
}

#[test]
fn validate_requires_something_to_check() {
    let mut cmd = Command::cargo_bin("novapanel").unwrap();
    cmd.arg("validate");
    cmd.assert().failure();
}

#[test]
fn line_chart_emits_geometry_json() {
    let mut cmd = Command::cargo_bin("novapanel").unwrap();
    cmd.args(["chart", "--kind", "line"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"points\""))
        .stdout(predicate::str::contains("\"gridlines\""));
}

#[test]
fn bar_chart_from_custom_values() {
    let mut cmd = Command::cargo_bin("novapanel").unwrap();
    cmd.args(["chart", "--kind", "bar", "--values", "10, 20; 40"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"fraction\": 1.0"));
}

#[test]
fn export_infers_format_from_extension() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("clients.json");
    let mut cmd = Command::cargo_bin("novapanel").unwrap();
    cmd.args(["export", "--sample", "clients"])
        .arg("--out")
        .arg(&out);
    cmd.assert().success();
    assert!(out.exists());
}

#[test]
fn simulate_prints_the_installment() {
    let mut cmd = Command::cargo_bin("novapanel").unwrap();
    cmd.args([
        "simulate",
        "--principal",
        "1200000",
        "--months",
        "12",
        "--rate",
        "0",
    ]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("$ 100.000"));
}

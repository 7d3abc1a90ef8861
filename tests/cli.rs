//! End-to-end tests for the prescan binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

fn prescan() -> Command {
    let mut cmd = Command::cargo_bin("prescan").unwrap();
    cmd.env("NO_COLOR", "1");
    cmd
}

#[test]
fn balance_all_clear_lists_every_file() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.dart"), "void main() {}\n").unwrap();
    fs::write(dir.path().join("b.dart"), "class B { B(); }\n").unwrap();

    prescan()
        .current_dir(dir.path())
        .args(["balance", "a.dart", "b.dart"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("No delimiter imbalances found in:")
                .and(predicate::str::contains("✓ a.dart"))
                .and(predicate::str::contains("✓ b.dart")),
        );
}

#[test]
fn balance_flagged_file_is_listed_alone() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.dart"), "void main() {}\n").unwrap();
    fs::write(dir.path().join("b.dart"), "void b() {}\n").unwrap();
    fs::write(dir.path().join("c.dart"), "void c() {}\n").unwrap();
    fs::write(dir.path().join("bad.dart"), "}\n").unwrap();

    prescan()
        .current_dir(dir.path())
        .args(["balance", "a.dart", "b.dart", "c.dart", "bad.dart"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("bad.dart:")
                .and(predicate::str::contains("line 1: extra closing brace '}'"))
                .and(predicate::str::contains("No delimiter imbalances").not())
                .and(predicate::str::contains("a.dart").not()),
        );
}

#[test]
fn missing_file_reports_inline_and_batch_continues() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("ok.dart"), "class A {}\n").unwrap();

    prescan()
        .current_dir(dir.path())
        .args(["balance", "gone.dart", "ok.dart"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("error checking gone.dart")
                .and(predicate::str::contains("✓ ok.dart")),
        );
}

#[test]
fn patterns_reports_flagged_lines() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("form.dart"),
        "class Form {\n  int count = \"five\";\n  required String? name,\n}\n",
    )
    .unwrap();

    prescan()
        .current_dir(dir.path())
        .args(["patterns", "form.dart"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("form.dart:")
                .and(predicate::str::contains(
                    "line 2: possible type mismatch: string literal assigned to numeric binding",
                ))
                .and(predicate::str::contains(
                    "line 3: nullable type marked as required",
                )),
        );
}

#[test]
fn json_output_has_stable_shape() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("bad.dart"), "]\n[\n").unwrap();

    let assert = prescan()
        .current_dir(dir.path())
        .args(["balance", "--output", "json", "bad.dart", "gone.dart"])
        .assert()
        .success();
    let out: serde_json::Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();
    assert_eq!(out["check"], "balance");
    assert_eq!(out["results"][0]["file"], "bad.dart");
    assert_eq!(out["results"][0]["diagnostics"][0]["line"], 1);
    assert_eq!(out["errors"][0]["file"], "gone.dart");
    assert_eq!(out["summary"]["files"], 1);
    assert_eq!(out["summary"]["flagged"], 1);
    assert_eq!(out["summary"]["errors"], 1);
}

#[test]
fn files_from_config_when_no_positionals() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("prescan.toml"), "files = [\"lib/a.dart\"]\n").unwrap();
    fs::create_dir(dir.path().join("lib")).unwrap();
    fs::write(dir.path().join("lib/a.dart"), "int n = \"1\";\n").unwrap();

    prescan()
        .current_dir(dir.path())
        .args(["patterns"])
        .assert()
        .success()
        .stdout(predicate::str::contains("lib/a.dart:").and(predicate::str::contains("line 1")));
}

#[test]
fn no_files_is_a_usage_error() {
    let dir = tempdir().unwrap();

    prescan()
        .current_dir(dir.path())
        .args(["balance"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("No files to scan"));
}

#[test]
fn version_prints_package_version() {
    prescan()
        .args(["version"])
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

use std::fs;
use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::{NamedTempFile, TempDir};

fn fixture(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn decodes_end_to_end() {
    let map = fixture("1 wedge\n2 bridge\n");
    let data = fixture("1 0.75\n2 1.5\n0 2.25\n");
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("decoded.txt");

    let mut cmd = Command::cargo_bin("pattern-unmap").unwrap();
    cmd.arg("--infile")
        .arg(data.path())
        .arg("--outfile")
        .arg(&out)
        .arg("--mapfile")
        .arg(map.path());
    cmd.assert().success();

    assert_eq!(
        fs::read_to_string(&out).unwrap(),
        "wedge 0.75\nbridge 1.5\n2 2.25\n"
    );
}

#[test]
fn help_documents_the_three_file_flags() {
    let mut cmd = Command::cargo_bin("pattern-unmap").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--infile"))
        .stdout(predicate::str::contains("--outfile"))
        .stdout(predicate::str::contains("--mapfile"));
}

#[test]
fn missing_arguments_exit_nonzero() {
    let mut cmd = Command::cargo_bin("pattern-unmap").unwrap();
    cmd.assert()
        .code(2)
        .stderr(predicate::str::contains("required"));
}

#[test]
fn unknown_flag_exits_nonzero() {
    let mut cmd = Command::cargo_bin("pattern-unmap").unwrap();
    cmd.arg("--bogus")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unexpected argument"));
}

#[test]
fn missing_mapping_file_fails_the_run() {
    let data = fixture("1 x\n");
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("decoded.txt");

    let mut cmd = Command::cargo_bin("pattern-unmap").unwrap();
    cmd.arg("-i")
        .arg(data.path())
        .arg("-o")
        .arg(&out)
        .arg("-m")
        .arg(dir.path().join("absent.map"));
    cmd.assert()
        .code(1)
        .stdout(predicate::str::contains("cannot open"));
}

#[test]
fn malformed_data_line_fails_with_context() {
    let map = fixture("1 wedge\n");
    let data = fixture("1 ok\nbroken\n");
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("decoded.txt");

    let mut cmd = Command::cargo_bin("pattern-unmap").unwrap();
    cmd.arg("-i")
        .arg(data.path())
        .arg("-o")
        .arg(&out)
        .arg("-m")
        .arg(map.path());
    cmd.assert()
        .code(1)
        .stdout(predicate::str::contains("expected two whitespace-separated fields"));
}

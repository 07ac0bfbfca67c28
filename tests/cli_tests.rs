//! Command-line behavior of the `struct-provenance` binary

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};

const MODEL: &str = "\
EXPDTA    THEORETICAL MODEL, MODELLER 10.4 2023/01/01 00:00:00
REMARK   6 ALIGNMENT: model.ali
REMARK   6 TEMPLATE: 2xyzB 3:B - 88:B MODELS 10:A - 95:A AT 41%
REMARK   6 TEMPLATE: 1abcA 1:A - 40:A MODELS 1:A - 40:A AT 63.5%
ATOM      1  N   MET A   1      11.104  13.207   2.100  1.00  0.00           N
";

fn fixture(dir: &Path, name: &str, contents: &[u8]) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path
}

fn cmd() -> Command {
    Command::cargo_bin("struct-provenance").unwrap()
}

#[test]
fn test_extract_text() {
    let dir = tempfile::tempdir().unwrap();
    let path = fixture(dir.path(), "model.pdb", MODEL.as_bytes());

    cmd()
        .arg("extract")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Comparative model"))
        .stdout(predicate::str::contains("modeller 10.4"))
        .stdout(predicate::str::contains("PDB:1ABC chain A"))
        .stdout(predicate::str::contains("PDB:2XYZ chain B"));
}

#[test]
fn test_extract_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = fixture(dir.path(), "model.pdb", MODEL.as_bytes());

    let output = cmd()
        .args(["extract", "--format", "json"])
        .arg(&path)
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["format"], "PDB Structure");
    assert_eq!(json["software"]["modeller"]["known"], "10.4");
    assert_eq!(json["templates"].as_array().unwrap().len(), 2);
    assert_eq!(json["datasets"].as_array().unwrap().len(), 3);
    assert_eq!(json["templates"][0]["seq_id_range"][0], 1);
}

#[test]
fn test_extract_tsv() {
    let dir = tempfile::tempdir().unwrap();
    let path = fixture(dir.path(), "model.pdb", MODEL.as_bytes());

    cmd()
        .args(["extract", "--format", "tsv"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("template\tasym_id"))
        .stdout(predicate::str::contains("PDB:1ABC\tA\t1\t40\t1\t40\t63.50"));
}

#[test]
fn test_extract_unresolved_template_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = fixture(
        dir.path(),
        "model.pdb",
        b"EXPDTA    THEORETICAL MODEL, MODELLER 10.4\n\
          REMARK   6 TEMPLATE: custom 1:A - 40:A MODELS 1:A - 40:A AT 50%\n",
    );

    cmd()
        .arg("extract")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("custom"));
}

#[test]
fn test_extract_assume_experimental() {
    let dir = tempfile::tempdir().unwrap();
    let path = fixture(dir.path(), "local.pdb", b"REMARK   1 NOTHING\n");

    cmd()
        .args(["extract", "--assume-experimental"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Experimental model"));
}

#[test]
fn test_extract_density_map() {
    let dir = tempfile::tempdir().unwrap();
    let mut data = vec![0u8; 1024];
    data[220..224].copy_from_slice(&1i32.to_le_bytes());
    let label = b"EMDATABANK.org EMD-4321";
    data[224..224 + label.len()].copy_from_slice(label);
    let path = fixture(dir.path(), "emd_4321.map", &data);

    cmd()
        .arg("extract")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("3DEM volume"))
        .stdout(predicate::str::contains("EMDB:EMD-4321"));
}

#[test]
fn test_extract_compressed_map_fails() {
    let dir = tempfile::tempdir().unwrap();
    let mut data = vec![0x1f, 0x8b, 0x08, 0x00];
    data.resize(512, 0);
    let path = fixture(dir.path(), "emd_4321.map.gz", &data);

    cmd()
        .arg("extract")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Compressed input"));
}

#[test]
fn test_classify() {
    let dir = tempfile::tempdir().unwrap();
    let path = fixture(dir.path(), "model.pdb", MODEL.as_bytes());

    cmd()
        .arg("classify")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("MODELLER comparative model"));
}

#[test]
fn test_classify_forced_format() {
    let dir = tempfile::tempdir().unwrap();
    let path = fixture(
        dir.path(),
        "entry.txt",
        b"EXPDTA    DERIVED FROM PDB: 1ABC\n",
    );

    cmd()
        .args(["classify", "--input-format", "pdb"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Derived from PDB entry"));
}

#[test]
fn test_missing_input_fails() {
    cmd()
        .args(["extract", "/nonexistent/model.pdb"])
        .assert()
        .failure();
}

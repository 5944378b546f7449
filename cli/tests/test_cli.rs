use assert_cmd::Command;
use predicates::str::contains;
use std::fs;
use tempfile::TempDir;

const ROGUE_NATION: &str = include_str!("../../core/tests/data/rogue_nation.txt");

/// Command with HOME pointed at `home` so user preferences don't leak in.
fn acrostic(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("acrostic").unwrap();
    cmd.env("HOME", home.path()).env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_check_prints_summary() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("rogue.txt");
    fs::write(&file, ROGUE_NATION).unwrap();

    acrostic(&dir)
        .arg("check")
        .arg(&file)
        .assert()
        .success()
        .stdout(contains("Author: Billym"))
        .stdout(contains("Grid: 25x10"))
        .stdout(contains("Letters: 198"))
        .stdout(contains("Clues: 23"));
}

#[test]
fn test_check_with_labels() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("rogue.txt");
    fs::write(&file, ROGUE_NATION).unwrap();

    // first row of the grid is `####YES#...`; index 1 belongs to R
    acrostic(&dir)
        .args(["check", "--labels"])
        .arg(&file)
        .assert()
        .success()
        .stdout(contains("####R"));
}

#[test]
fn test_check_reports_invalid_file() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("broken.txt");
    fs::write(&file, ROGUE_NATION.replacen("[GRID]", "[GRIDS]", 1)).unwrap();

    acrostic(&dir)
        .arg("check")
        .arg(&file)
        .assert()
        .failure()
        .stderr(contains("missing required section 'grid'"));
}

#[test]
fn test_export_by_extension() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("rogue.txt");
    let out = dir.path().join("clues.csv");
    fs::write(&file, ROGUE_NATION).unwrap();

    acrostic(&dir)
        .arg("export")
        .arg(&file)
        .arg("-o")
        .arg(&out)
        .assert()
        .success();

    let csv = fs::read_to_string(&out).unwrap();
    assert!(csv.starts_with("label,hint,answer,mapping\n"));
    assert!(csv.contains("A,Having a rose-like pattern,ROSEATE,171 120 124 140 112 113 87"));
}

#[test]
fn test_prefs_save() {
    let dir = TempDir::new().unwrap();

    acrostic(&dir)
        .args(["prefs", "--save"])
        .assert()
        .success()
        .stdout(contains("\"export_format\": \"json\""));

    let saved = dir.path().join(".acrostic").join("preferences.json");
    assert!(saved.exists());
}

//! Integration tests for the passgen binary

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn passgen(config: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("passgen").unwrap();
    cmd.env("PASSGEN_CONFIG", config.path().join("settings"))
        .env_remove("PASSGEN_LOG");
    cmd
}

fn stdout_lines(cmd: &mut Command) -> Vec<String> {
    let output = cmd.output().unwrap();
    assert!(output.status.success(), "{:?}", output);
    String::from_utf8(output.stdout)
        .unwrap()
        .lines()
        .map(String::from)
        .collect()
}

#[test]
fn test_default_prints_one_password() {
    let config = TempDir::new().unwrap();
    let lines = stdout_lines(&mut passgen(&config));
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].chars().count(), 12);
}

#[test]
fn test_length_and_count() {
    let config = TempDir::new().unwrap();
    let lines = stdout_lines(passgen(&config).args(["-l", "20", "-n", "3"]));
    assert_eq!(lines.len(), 3);
    assert!(lines.iter().all(|l| l.chars().count() == 20));
}

#[test]
fn test_digits_only() {
    let config = TempDir::new().unwrap();
    let lines = stdout_lines(passgen(&config).args([
        "--no-upper",
        "--no-lower",
        "--no-symbols",
        "-l",
        "16",
    ]));
    assert!(lines[0].chars().all(|c| c.is_ascii_digit()));
}

#[test]
fn test_no_class_falls_back_to_lowercase() {
    let config = TempDir::new().unwrap();
    passgen(&config)
        .args(["--no-upper", "--no-lower", "--no-digits", "--no-symbols"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"^[a-z]{12}\n$").unwrap())
        .stderr(predicate::str::contains("At least one character type"));
}

#[test]
fn test_strict_rejects_empty_selection() {
    let config = TempDir::new().unwrap();
    passgen(&config)
        .args(["--strict", "--no-upper", "--no-lower", "--no-digits", "--no-symbols"])
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Invalid configuration"));
}

#[test]
fn test_length_out_of_range_is_clamped() {
    let config = TempDir::new().unwrap();
    passgen(&config)
        .args(["-l", "100"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"^\S{32}\n$").unwrap())
        .stderr(predicate::str::contains("out of range"));
}

#[test]
fn test_quiet_suppresses_warnings() {
    let config = TempDir::new().unwrap();
    passgen(&config)
        .args(["-q", "-l", "2"])
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_check_scores_argument() {
    let config = TempDir::new().unwrap();
    passgen(&config)
        .args(["--check", "Abcdefgh1"])
        .assert()
        .success()
        .stdout("2/4 (Medium)\n");
}

#[test]
fn test_check_reads_stdin() {
    let config = TempDir::new().unwrap();
    passgen(&config)
        .args(["--check", "-"])
        .write_stdin("Abcdefghijklmno1!\n")
        .assert()
        .success()
        .stdout("3/4 (Strong)\n");
}

#[test]
fn test_check_empty_is_very_weak() {
    let config = TempDir::new().unwrap();
    passgen(&config)
        .args(["--check", ""])
        .assert()
        .success()
        .stdout("0/4 (Very weak)\n");
}

#[test]
fn test_check_counts_astral_characters_twice() {
    let config = TempDir::new().unwrap();
    passgen(&config)
        .args(["--check", "😀😀😀😀"])
        .assert()
        .success()
        .stdout("1/4 (Weak)\n");
}

#[test]
fn test_check_rejects_generation_flags() {
    let config = TempDir::new().unwrap();
    passgen(&config)
        .args(["--check", "abc", "--save", "-n", "3"])
        .assert()
        .code(2)
        .stdout("");
    assert!(!config.path().join("settings").exists());
}

#[test]
fn test_large_count_is_streamed() {
    let config = TempDir::new().unwrap();
    let lines = stdout_lines(passgen(&config).args(["-l", "4", "-n", "200000"]));
    assert_eq!(lines.len(), 200_000);
    assert!(lines.iter().all(|l| l.chars().count() == 4));
}

#[test]
fn test_zero_count_is_usage_error() {
    let config = TempDir::new().unwrap();
    passgen(&config)
        .args(["-n", "0"])
        .assert()
        .code(2)
        .stdout("");
}

#[test]
fn test_score_column() {
    let config = TempDir::new().unwrap();
    let lines = stdout_lines(passgen(&config).args(["-S", "-n", "2"]));
    assert_eq!(lines.len(), 2);
    assert!(lines.iter().all(|l| l.contains("/4 (")));
}

#[test]
fn test_os_rng() {
    let config = TempDir::new().unwrap();
    let lines = stdout_lines(passgen(&config).args(["--os-rng", "-l", "8"]));
    assert_eq!(lines[0].chars().count(), 8);
}

#[test]
fn test_save_then_use_saved() {
    let config = TempDir::new().unwrap();
    passgen(&config)
        .args(["--save", "-l", "8", "--no-symbols", "--no-upper"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Settings saved"));

    let settings = std::fs::read_to_string(config.path().join("settings")).unwrap();
    assert_eq!(settings, "8,false,true,true,false\n");

    let lines = stdout_lines(passgen(&config).arg("--saved"));
    assert_eq!(lines[0].chars().count(), 8);
    assert!(
        lines[0]
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
    );
}

#[test]
fn test_invalid_length_is_usage_error() {
    let config = TempDir::new().unwrap();
    passgen(&config).args(["-l", "long"]).assert().code(2);
}

#[test]
fn test_version() {
    let config = TempDir::new().unwrap();
    passgen(&config)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("passgen"));
}

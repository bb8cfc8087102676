#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;

fn nanoid_cmd() -> Command {
    Command::new(cargo_bin("nanoid-partitioner"))
}

#[test]
fn test_default_alphabet_and_length() {
    let output = nanoid_cmd()
        .args(["-s", "3", "-t", "Users", "-y", "table"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let stdout = String::from_utf8(output).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();

    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], format!("TABLE Users ('{}')", "a".repeat(21)));
    for line in &lines {
        let boundary = line
            .strip_prefix("TABLE Users ('")
            .and_then(|rest| rest.strip_suffix("')"))
            .unwrap();
        assert_eq!(boundary.len(), 21);
    }
}

#[test]
fn test_custom_alphabet_is_sorted() {
    nanoid_cmd()
        .args(["-s", "3", "-t", "SpecialData", "-y", "index", "-l", "1", "-a", "ABC123"])
        .assert()
        .success()
        .stdout("INDEX SpecialData ('1')\nINDEX SpecialData ('3')\nINDEX SpecialData ('B')\n");
}

#[test]
fn test_numbers_alphabet_long_flags() {
    nanoid_cmd()
        .args([
            "--splits",
            "4",
            "--target",
            "Products",
            "--targettype",
            "table",
            "--length",
            "3",
            "--alphabet",
            "numbers",
        ])
        .assert()
        .success()
        .stdout(
            "TABLE Products ('000')\n\
             TABLE Products ('250')\n\
             TABLE Products ('500')\n\
             TABLE Products ('750')\n",
        );
}

#[test]
fn test_json_output() {
    nanoid_cmd()
        .args(["-s", "2", "-t", "Users", "-y", "index", "-l", "2", "-a", "numbers", "-o", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"boundary\": \"50\""))
        .stdout(predicate::str::contains("\"target_type\": \"INDEX\""));
}

#[test]
fn test_too_many_partitions_fails_without_output() {
    nanoid_cmd()
        .args(["-s", "101", "-t", "Users", "-y", "table", "-l", "2", "-a", "numbers"])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains(
            "Error: Number of partitions (101) cannot exceed total possible combinations (100)",
        ));
}

#[test]
fn test_non_positive_splits_fail() {
    for splits in ["0", "-3"] {
        nanoid_cmd()
            .args(["-s", splits, "-t", "Users", "-y", "table"])
            .assert()
            .code(1)
            .stdout(predicate::str::is_empty())
            .stderr(predicate::str::contains("Number of partitions must be positive"));
    }
}

#[test]
fn test_non_positive_length_fails() {
    nanoid_cmd()
        .args(["-s", "3", "-t", "Users", "-y", "table", "-l", "0"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("ID length must be positive"));
}

#[test]
fn test_empty_alphabet_fails() {
    nanoid_cmd()
        .args(["-s", "3", "-t", "Users", "-y", "table", "-a", ""])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Alphabet cannot be empty"));
}

#[test]
fn test_unknown_target_type_is_usage_error() {
    nanoid_cmd()
        .args(["-s", "3", "-t", "Users", "-y", "view"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_help_lists_examples() {
    nanoid_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Partition Nano ID ranges"))
        .stdout(predicate::str::contains("-a ABC123"));
}

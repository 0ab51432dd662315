use assert_cmd::Command;
use predicates::prelude::predicate::str;

#[test]
fn part1_output_right_answer() {
    let mut cmd = Command::cargo_bin("day01_part1").unwrap();
    cmd.arg("example.txt");

    cmd.assert().success().stdout(str::contains("is 142."));
}

#[test]
fn part1_reject_line_without_digit() {
    let mut cmd = Command::cargo_bin("day01_part1").unwrap();
    cmd.arg("example2.txt");

    cmd.assert().failure();
}

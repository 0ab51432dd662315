use assert_cmd::Command;
use predicates::prelude::predicate::str;

#[test]
fn part1_output_right_answer() {
    let mut cmd = Command::cargo_bin("day10_part1").unwrap();
    cmd.arg("example.txt");

    cmd.assert().success().stdout(str::contains("is 4."));
}

#[test]
fn part1_output_right_answer_in_complex_maze() {
    let mut cmd = Command::cargo_bin("day10_part1").unwrap();
    cmd.arg("example2.txt");

    cmd.assert().success().stdout(str::contains("is 8."));
}

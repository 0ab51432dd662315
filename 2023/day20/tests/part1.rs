use assert_cmd::Command;
use predicates::prelude::predicate::str;

#[test]
fn part1_output_right_answer() {
    let mut cmd = Command::cargo_bin("day20_part1").unwrap();
    cmd.arg("example.txt");

    cmd.assert().success().stdout(str::contains("is 32000000."));
}

#[test]
fn part1_output_right_answer_with_conjunctions() {
    let mut cmd = Command::cargo_bin("day20_part1").unwrap();
    cmd.arg("example2.txt");

    cmd.assert().success().stdout(str::contains("is 11687500."));
}

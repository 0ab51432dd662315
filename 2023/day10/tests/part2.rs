use assert_cmd::Command;
use predicates::prelude::predicate::str;

#[test]
fn part2_output_right_answer() {
    let mut cmd = Command::cargo_bin("day10_part2").unwrap();
    cmd.arg("example3.txt");

    cmd.assert().success().stdout(str::contains("is 4."));
}

#[test]
fn part2_output_right_answer_with_junk_pipes() {
    let mut cmd = Command::cargo_bin("day10_part2").unwrap();
    cmd.arg("example4.txt");

    cmd.assert().success().stdout(str::contains("is 10."));
}

use assert_cmd::Command;
use predicates::prelude::predicate::str;

#[test]
fn part2_output_right_answer_for_ten_times() {
    let mut cmd = Command::cargo_bin("day11_part2").unwrap();
    cmd.arg("example.txt").arg("10");

    cmd.assert().success().stdout(str::contains("is 1030."));
}

#[test]
fn part2_output_right_answer_for_hundred_times() {
    let mut cmd = Command::cargo_bin("day11_part2").unwrap();
    cmd.arg("example.txt").arg("100");

    cmd.assert().success().stdout(str::contains("is 8410."));
}

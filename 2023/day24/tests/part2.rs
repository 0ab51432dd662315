use assert_cmd::Command;
use predicates::prelude::predicate::str;

#[test]
fn part2_output_right_answer() {
    let mut cmd = Command::cargo_bin("day24_part2").unwrap();
    cmd.arg("example.txt");

    cmd.assert().success().stdout(str::contains("is 47."));
}

#[test]
fn part2_output_right_answer_when_first_stones_line_up_with_rock() {
    let mut cmd = Command::cargo_bin("day24_part2").unwrap();
    cmd.arg("example2.txt");

    cmd.assert().success().stdout(str::contains("is 47."));
}

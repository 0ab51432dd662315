use assert_cmd::Command;
use predicates::prelude::predicate::str;

#[test]
fn part2_output_right_answer() {
    let mut cmd = Command::cargo_bin("day23_part2").unwrap();
    cmd.arg("example.txt");

    cmd.assert().success().stdout(str::contains("is 154."));
}

#[test]
fn part2_climb_slope_inside_corridor() {
    let mut cmd = Command::cargo_bin("day23_part2").unwrap();
    cmd.arg("example2.txt");

    cmd.assert().success().stdout(str::contains("is 4."));
}

use assert_cmd::Command;
use predicates::prelude::predicate::str;

#[test]
fn part1_output_right_answer() {
    let mut cmd = Command::cargo_bin("day23_part1").unwrap();
    cmd.arg("example.txt");

    cmd.assert().success().stdout(str::contains("is 94."));
}

#[test]
fn part1_refuse_climbing_slope_inside_corridor() {
    let mut cmd = Command::cargo_bin("day23_part1").unwrap();
    cmd.arg("example2.txt");

    cmd.assert()
        .success()
        .stdout(str::is_empty())
        .stderr(str::contains("There's no hike"));
}

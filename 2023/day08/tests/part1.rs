use assert_cmd::Command;
use predicates::prelude::predicate::str;

#[test]
fn part1_output_right_answer() {
    let mut cmd = Command::cargo_bin("day08_part1").unwrap();
    cmd.arg("example.txt");

    cmd.assert().success().stdout(str::contains("is 2."));
}

#[test]
fn part1_output_right_answer_with_repeated_turns() {
    let mut cmd = Command::cargo_bin("day08_part1").unwrap();
    cmd.arg("example2.txt");

    cmd.assert().success().stdout(str::contains("is 6."));
}

#[test]
fn part1_report_unreachable_goal() {
    let mut cmd = Command::cargo_bin("day08_part1").unwrap();
    cmd.arg("example3.txt");

    cmd.assert().failure().stderr(str::contains("Node(AAA)"));
}

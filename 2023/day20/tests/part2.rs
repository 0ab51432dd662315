use assert_cmd::Command;
use predicates::prelude::predicate::str;

#[test]
fn part2_output_right_answer() {
    let mut cmd = Command::cargo_bin("day20_part2").unwrap();
    cmd.arg("example3.txt");

    cmd.assert().success().stdout(str::contains("is 7."));
}

#[test]
fn part2_report_missing_output() {
    let mut cmd = Command::cargo_bin("day20_part2").unwrap();
    cmd.arg("example.txt");

    cmd.assert()
        .failure()
        .stderr(str::contains("No module sends pulses to module(rx)."));
}

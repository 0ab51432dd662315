use assert_cmd::Command;
use predicates::prelude::predicate::str;

#[test]
fn part2_output_right_answer() {
    let mut cmd = Command::cargo_bin("day19_part2").unwrap();
    cmd.arg("example.txt");

    cmd.assert().success().stdout(str::contains("is 167409079868000."));
}

#[test]
fn part2_report_workflow_cycle() {
    let mut cmd = Command::cargo_bin("day19_part2").unwrap();
    cmd.arg("example2.txt");

    cmd.assert()
        .failure()
        .stderr(str::contains("through a cycle of workflows"));
}

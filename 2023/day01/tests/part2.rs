use assert_cmd::Command;
use predicates::prelude::predicate::str;

#[test]
fn part2_output_right_answer() {
    let mut cmd = Command::cargo_bin("day01_part2").unwrap();
    cmd.arg("example2.txt");

    cmd.assert().success().stdout(str::contains("is 281."));
}

#[test]
fn part2_report_missing_file() {
    let mut cmd = Command::cargo_bin("day01_part2").unwrap();
    cmd.arg("missing.txt");

    cmd.assert()
        .failure()
        .stderr(str::contains("Failed to open given file(missing.txt)."));
}

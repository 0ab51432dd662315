use assert_cmd::Command;
use predicates::prelude::predicate::str;

#[test]
fn part2_output_right_answer() {
    let mut cmd = Command::cargo_bin("day05_part2").unwrap();
    cmd.arg("example.txt");

    cmd.assert().success().stdout(str::contains("is 46."));
}

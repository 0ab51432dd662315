use assert_cmd::Command;
use predicates::prelude::predicate::str;

#[test]
fn part2_output_right_answer() {
    let mut cmd = Command::cargo_bin("day08_part2").unwrap();
    cmd.arg("example3.txt");

    cmd.assert().success().stdout(str::contains("is 6."));
}

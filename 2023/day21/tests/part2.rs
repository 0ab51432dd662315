use assert_cmd::Command;
use predicates::prelude::predicate::str;

#[test]
fn part2_output_right_answer_for_ten_steps() {
    let mut cmd = Command::cargo_bin("day21_part2").unwrap();
    cmd.arg("example.txt").arg("10");

    cmd.assert().success().stdout(str::contains("is 50."));
}

#[test]
fn part2_output_right_answer_for_fifty_steps() {
    let mut cmd = Command::cargo_bin("day21_part2").unwrap();
    cmd.arg("example.txt").arg("50");

    cmd.assert().success().stdout(str::contains("is 1594."));
}

#[test]
fn part2_output_right_answer_for_hundred_steps() {
    let mut cmd = Command::cargo_bin("day21_part2").unwrap();
    cmd.arg("example.txt").arg("100");

    cmd.assert().success().stdout(str::contains("is 6536."));
}

#[test]
fn part2_searched_and_extrapolated_counts_agree_on_open_garden() {
    // Every plot of matching parity is reachable, (steps + 1)^2 in total.
    for (steps, count) in [(500, 251001), (501, 252004), (1000, 1002001)] {
        let mut cmd = Command::cargo_bin("day21_part2").unwrap();
        cmd.arg("example2.txt").arg(steps.to_string());

        cmd.assert()
            .success()
            .stdout(str::contains(format!("is {}.", count)));
    }
}

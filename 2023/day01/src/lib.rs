use std::{error, fmt::Display, path::PathBuf};

use clap::Parser;
use log::debug;

#[derive(Debug)]
pub enum Error {
    NoDigitInLine(String),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::NoDigitInLine(s) => write!(f, "No digit found in calibration line({}).", s),
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
}

const DIGIT_WORDS: [&str; 9] = [
    "one", "two", "three", "four", "five", "six", "seven", "eight", "nine",
];

fn digit_at(line: &str, ind: usize, allow_spelled: bool) -> Option<u32> {
    let rest = &line[ind..];
    let c = rest.chars().next()?;
    if let Some(d) = c.to_digit(10) {
        return Some(d);
    }

    if allow_spelled {
        DIGIT_WORDS
            .iter()
            .position(|w| rest.starts_with(w))
            .map(|i| i as u32 + 1)
    } else {
        None
    }
}

/// First and last digit of `line` as a two-digit number. Spelled digits may
/// overlap, so `eightwo` holds 8 and then 2.
pub fn calibration_value(line: &str, allow_spelled: bool) -> Result<u32, Error> {
    let mut digits = line
        .char_indices()
        .filter_map(|(ind, _)| digit_at(line, ind, allow_spelled));
    let first = digits
        .next()
        .ok_or_else(|| Error::NoDigitInLine(line.to_string()))?;
    let last = digits.last().unwrap_or(first);
    debug!("Calibration line({}) gives {}{}.", line, first, last);

    Ok(first * 10 + last)
}

pub fn calibration_sum<S: AsRef<str>>(lines: &[S], allow_spelled: bool) -> Result<u32, Error> {
    lines
        .iter()
        .map(|line| calibration_value(line.as_ref(), allow_spelled))
        .sum()
}

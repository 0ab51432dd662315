use std::{
    error,
    fmt::Display,
    path::{Path, PathBuf},
};

use anyhow::Result;
use clap::Parser;
use log::debug;

#[derive(Debug)]
pub enum Error {
    MissingLine(&'static str),
    InvalidNumberText(String),
    InconsistentRaceCount(usize, usize),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::MissingLine(label) => {
                write!(f, "Expect a line labeled {} in race sheet.", label)
            }
            Error::InvalidNumberText(s) => write!(f, "Invalid text({}) for race number.", s),
            Error::InconsistentRaceCount(time_n, dist_n) => write!(
                f,
                "Given {} time(s) but {} record distance(s).",
                time_n, dist_n
            ),
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
}

#[derive(Debug, Clone, Copy)]
pub struct Race {
    time: u64,
    record: u64,
}

impl Race {
    pub fn new(time: u64, record: u64) -> Self {
        Self { time, record }
    }

    fn beats(&self, hold: u64) -> bool {
        hold * (self.time - hold) > self.record
    }

    /// Count of hold times whose distance beats the record.
    pub fn win_ways(&self) -> u64 {
        let (t, d) = (self.time as u128, self.record as u128);
        if t * t <= 4 * d {
            return 0;
        }

        // Start from the real root of h * (t - h) = d, then fix rounding.
        let disc = ((t * t - 4 * d) as f64).sqrt();
        let mut lo = (((t as f64) - disc) / 2.0).max(0.0) as u64;
        while lo > 0 && self.beats(lo - 1) {
            lo -= 1;
        }
        while lo <= self.time / 2 && !self.beats(lo) {
            lo += 1;
        }
        if lo > self.time / 2 {
            return 0;
        }

        // Winning holds are symmetric around time / 2.
        let ways = self.time - 2 * lo + 1;
        debug!("Race({}, {}) has {} winning way(s).", self.time, self.record, ways);
        ways
    }
}

fn numbers_of<'a>(lines: &'a [String], label: &'static str) -> Result<&'a str, Error> {
    lines
        .iter()
        .find_map(|line| line.strip_prefix(label))
        .ok_or(Error::MissingLine(label))
}

fn parse_number(s: &str) -> Result<u64, Error> {
    s.parse::<u64>()
        .map_err(|_| Error::InvalidNumberText(s.to_string()))
}

/// Races as separate columns.
pub fn read_races<P: AsRef<Path>>(path: P) -> Result<Vec<Race>> {
    let lines = advent::input::read_lines(path)?;
    let parse_all = |s: &str| {
        s.split_whitespace()
            .map(parse_number)
            .collect::<Result<Vec<_>, _>>()
    };
    let times = parse_all(numbers_of(&lines, "Time:")?)?;
    let records = parse_all(numbers_of(&lines, "Distance:")?)?;
    if times.len() != records.len() {
        return Err(Error::InconsistentRaceCount(times.len(), records.len()).into());
    }

    Ok(times
        .into_iter()
        .zip(records)
        .map(|(time, record)| Race::new(time, record))
        .collect())
}

/// One race with the digits of each line joined, ignoring the spaces.
pub fn read_joined_race<P: AsRef<Path>>(path: P) -> Result<Race> {
    let lines = advent::input::read_lines(path)?;
    let join = |s: &str| parse_number(&s.split_whitespace().collect::<String>());
    let time = join(numbers_of(&lines, "Time:")?)?;
    let record = join(numbers_of(&lines, "Distance:")?)?;

    Ok(Race::new(time, record))
}

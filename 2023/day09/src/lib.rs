use std::{
    error,
    fmt::Display,
    fs::File,
    io::{BufRead, BufReader},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::Parser;
use log::trace;

#[derive(Debug)]
pub enum Error {
    InvalidHistoryText(String),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidHistoryText(s) => write!(f, "Invalid text({}) for value history.", s),
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
}

#[derive(Debug)]
pub struct History {
    values: Vec<i64>,
}

impl TryFrom<&str> for History {
    type Error = Error;

    fn try_from(value: &str) -> std::result::Result<Self, Self::Error> {
        let values = value
            .split_whitespace()
            .map(|s| s.parse::<i64>())
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|_| Error::InvalidHistoryText(value.to_string()))?;
        if values.is_empty() {
            return Err(Error::InvalidHistoryText(value.to_string()));
        }

        Ok(History { values })
    }
}

impl History {
    /// Rows of successive differences, down to the first all-zero row.
    fn diff_table(&self) -> Vec<Vec<i64>> {
        let mut table = vec![self.values.clone()];
        while let Some(last) = table.last() {
            if last.len() <= 1 || last.iter().all(|v| *v == 0) {
                break;
            }
            let diffs = last.windows(2).map(|w| w[1] - w[0]).collect::<Vec<_>>();
            table.push(diffs);
        }
        trace!(
            "History of {} value(s) has {} difference row(s).",
            self.values.len(),
            table.len()
        );

        table
    }

    pub fn next_value(&self) -> i64 {
        self.diff_table()
            .iter()
            .filter_map(|row| row.last())
            .sum()
    }

    pub fn prev_value(&self) -> i64 {
        self.diff_table()
            .iter()
            .rev()
            .filter_map(|row| row.first())
            .fold(0, |below, first| first - below)
    }
}

pub fn read_histories<P: AsRef<Path>>(path: P) -> Result<Vec<History>> {
    let file = File::open(&path)
        .with_context(|| format!("Failed to open given file({}).", path.as_ref().display()))?;
    let reader = BufReader::new(file);
    reader
        .lines()
        .enumerate()
        .filter(|(_, line)| line.as_ref().map_or(true, |s| !s.trim().is_empty()))
        .map(|(ind, line)| {
            line.with_context(|| {
                format!(
                    "Failed to read line {} in given file({}).",
                    ind + 1,
                    path.as_ref().display()
                )
            })
            .and_then(|s| {
                History::try_from(s.as_str()).with_context(|| {
                    format!(
                        "Failed to read history from line {} in given file({}).",
                        ind + 1,
                        path.as_ref().display()
                    )
                })
            })
        })
        .collect()
}

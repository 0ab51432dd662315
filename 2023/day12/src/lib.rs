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
    InvalidRecordText(String),
    InvalidSpringChar(char),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidRecordText(s) => write!(f, "Invalid text({}) for condition record.", s),
            Error::InvalidSpringChar(c) => write!(f, "Invalid character({}) for spring.", c),
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Spring {
    Operational,
    Damaged,
    Unknown,
}

impl TryFrom<char> for Spring {
    type Error = Error;

    fn try_from(value: char) -> std::result::Result<Self, Self::Error> {
        match value {
            '.' => Ok(Spring::Operational),
            '#' => Ok(Spring::Damaged),
            '?' => Ok(Spring::Unknown),
            other => Err(Error::InvalidSpringChar(other)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Record {
    springs: Vec<Spring>,
    groups: Vec<usize>,
}

impl TryFrom<&str> for Record {
    type Error = Error;

    fn try_from(value: &str) -> std::result::Result<Self, Self::Error> {
        let (springs_text, groups_text) = value
            .split_once(' ')
            .ok_or_else(|| Error::InvalidRecordText(value.to_string()))?;
        let springs = springs_text
            .chars()
            .map(Spring::try_from)
            .collect::<std::result::Result<Vec<_>, _>>()?;
        let groups = groups_text
            .trim()
            .split(',')
            .map(|s| s.parse::<usize>())
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|_| Error::InvalidRecordText(value.to_string()))?;

        Ok(Record { springs, groups })
    }
}

impl Record {
    /// `n` copies of the springs joined by unknowns, and `n` copies of the groups.
    pub fn unfold(&self, n: usize) -> Record {
        let mut springs = Vec::with_capacity(self.springs.len() * n + n);
        for ind in 0..n {
            if ind > 0 {
                springs.push(Spring::Unknown);
            }
            springs.extend_from_slice(&self.springs);
        }

        Record {
            springs,
            groups: self.groups.repeat(n),
        }
    }

    /// Number of ways to fill the unknowns so that damaged runs match the groups.
    pub fn arrangement_n(&self) -> u64 {
        let spring_n = self.springs.len();
        let group_n = self.groups.len();
        // ways[i][j]: arrangements of springs[i..] against groups[j..].
        let mut ways = vec![vec![0u64; group_n + 1]; spring_n + 1];
        ways[spring_n][group_n] = 1;
        for i in (0..spring_n).rev() {
            for j in 0..=group_n {
                let spring = self.springs[i];
                let mut count = 0;
                if spring != Spring::Damaged {
                    count += ways[i + 1][j];
                }
                if spring != Spring::Operational && j < group_n {
                    let end = i + self.groups[j];
                    let fits = end <= spring_n
                        && self.springs[i..end]
                            .iter()
                            .all(|s| *s != Spring::Operational)
                        && self.springs.get(end) != Some(&Spring::Damaged);
                    if fits {
                        count += ways[(end + 1).min(spring_n)][j + 1];
                    }
                }
                ways[i][j] = count;
            }
        }
        trace!("Record {:?} has {} arrangement(s).", self.groups, ways[0][0]);

        ways[0][0]
    }
}

pub fn read_records<P: AsRef<Path>>(path: P) -> Result<Vec<Record>> {
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
                Record::try_from(s.as_str()).with_context(|| {
                    format!(
                        "Failed to read condition record from line {} in given file({}).",
                        ind + 1,
                        path.as_ref().display()
                    )
                })
            })
        })
        .collect()
}

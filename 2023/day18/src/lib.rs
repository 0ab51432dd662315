use std::{
    error,
    fmt::Display,
    fs::File,
    io::{BufRead, BufReader},
    path::{Path, PathBuf},
};

use advent::Direction;
use anyhow::{Context, Result};
use clap::Parser;
use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

#[derive(Debug)]
pub enum Error {
    InvalidStepText(String),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidStepText(s) => write!(f, "Invalid text({}) for dig plan step.", s),
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
}

#[derive(Debug, Clone, Copy)]
pub struct DigStep {
    dir: Direction,
    len: i64,
}

/// One plan line read both ways: as written, and decoded from the colour code.
#[derive(Debug, Clone, Copy)]
pub struct PlanLine {
    pub plain: DigStep,
    pub decoded: DigStep,
}

impl TryFrom<&str> for PlanLine {
    type Error = Error;

    fn try_from(value: &str) -> std::result::Result<Self, Self::Error> {
        static STEP_PATTERN: Lazy<Regex> = Lazy::new(|| {
            Regex::new(r"^([UDLR]) (\d+) \(#([0-9a-f]{5})([0-3])\)$").unwrap()
        });

        let invalid = || Error::InvalidStepText(value.to_string());
        let caps = STEP_PATTERN.captures(value.trim()).ok_or_else(invalid)?;
        let dir = match &caps[1] {
            "U" => Direction::North,
            "D" => Direction::South,
            "L" => Direction::West,
            _ => Direction::East,
        };
        let len = caps[2].parse::<i64>().map_err(|_| invalid())?;
        let hex_len = i64::from_str_radix(&caps[3], 16).map_err(|_| invalid())?;
        let hex_dir = match &caps[4] {
            "0" => Direction::East,
            "1" => Direction::South,
            "2" => Direction::West,
            _ => Direction::North,
        };

        Ok(PlanLine {
            plain: DigStep { dir, len },
            decoded: DigStep {
                dir: hex_dir,
                len: hex_len,
            },
        })
    }
}

/// Cubic meters of the dug trench plus its interior.
///
/// The shoelace formula gives the area inside the path through the cell
/// centres, the outer half of each boundary cell adds `perimeter / 2 + 1`.
pub fn lagoon_volume(steps: impl Iterator<Item = DigStep>) -> i64 {
    let (mut r, mut c) = (0i64, 0i64);
    let mut double_area = 0i64;
    let mut perimeter = 0i64;
    for step in steps {
        let (dr, dc) = step.dir.delta();
        let (next_r, next_c) = (r + dr as i64 * step.len, c + dc as i64 * step.len);
        double_area += r * next_c - next_r * c;
        perimeter += step.len;
        (r, c) = (next_r, next_c);
    }
    debug!("Trench has perimeter {} and double area {}.", perimeter, double_area);

    double_area.abs() / 2 + perimeter / 2 + 1
}

pub fn read_plan<P: AsRef<Path>>(path: P) -> Result<Vec<PlanLine>> {
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
                PlanLine::try_from(s.as_str()).with_context(|| {
                    format!(
                        "Failed to read dig plan step from line {} in given file({}).",
                        ind + 1,
                        path.as_ref().display()
                    )
                })
            })
        })
        .collect()
}

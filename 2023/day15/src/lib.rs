use std::{
    error,
    fmt::Display,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::Parser;
use log::trace;

#[derive(Debug)]
pub enum Error {
    InvalidStepText(String),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidStepText(s) => write!(f, "Invalid text({}) for initialization step.", s),
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
}

pub fn hash(s: &str) -> usize {
    s.bytes()
        .fold(0, |cur, b| (cur + b as usize) * 17 % 256)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    Remove(String),
    Insert(String, usize),
}

impl TryFrom<&str> for Operation {
    type Error = Error;

    fn try_from(value: &str) -> std::result::Result<Self, Self::Error> {
        if let Some(label) = value.strip_suffix('-') {
            return Ok(Operation::Remove(label.to_string()));
        }

        let (label, focal_text) = value
            .split_once('=')
            .ok_or_else(|| Error::InvalidStepText(value.to_string()))?;
        let focal = focal_text
            .parse::<usize>()
            .map_err(|_| Error::InvalidStepText(value.to_string()))?;
        Ok(Operation::Insert(label.to_string(), focal))
    }
}

impl Operation {
    pub fn label(&self) -> &str {
        match self {
            Operation::Remove(label) | Operation::Insert(label, _) => label,
        }
    }
}

/// The 256 boxes of lenses, each kept in insertion order.
pub struct Boxes {
    boxes: Vec<Vec<(String, usize)>>,
}

impl Default for Boxes {
    fn default() -> Self {
        Self {
            boxes: vec![Vec::new(); 256],
        }
    }
}

impl Boxes {
    pub fn apply(&mut self, op: &Operation) {
        let box_ind = hash(op.label());
        let lenses = &mut self.boxes[box_ind];
        match op {
            Operation::Remove(label) => lenses.retain(|(l, _)| l != label),
            Operation::Insert(label, focal) => {
                match lenses.iter_mut().find(|(l, _)| l == label) {
                    Some(lens) => lens.1 = *focal,
                    None => lenses.push((label.clone(), *focal)),
                }
            }
        }
        trace!("After {:?}, box {} holds {} lens(es).", op, box_ind, lenses.len());
    }

    pub fn focusing_power(&self) -> usize {
        self.boxes
            .iter()
            .enumerate()
            .flat_map(|(box_ind, lenses)| {
                lenses
                    .iter()
                    .enumerate()
                    .map(move |(slot, (_, focal))| (box_ind + 1) * (slot + 1) * focal)
            })
            .sum()
    }
}

/// The comma separated steps, line breaks ignored.
pub fn read_steps<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let text = advent::input::read_text(&path)?;
    Ok(text
        .replace(['\n', '\r'], "")
        .split(',')
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
        .collect())
}

pub fn parse_operations(steps: &[String]) -> Result<Vec<Operation>> {
    steps
        .iter()
        .enumerate()
        .map(|(ind, s)| {
            Operation::try_from(s.as_str())
                .with_context(|| format!("Failed to parse step {}.", ind + 1))
        })
        .collect()
}

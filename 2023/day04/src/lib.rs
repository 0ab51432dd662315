use std::{
    collections::HashSet,
    error,
    fmt::Display,
    fs::File,
    io::{BufRead, BufReader},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::Parser;
use log::debug;

#[derive(Debug)]
pub enum Error {
    InvalidCardText(String),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidCardText(s) => write!(f, "Invalid text({}) for scratchcard.", s),
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
}

#[derive(Debug)]
pub struct Card {
    winning: HashSet<usize>,
    owned: Vec<usize>,
}

impl TryFrom<&str> for Card {
    type Error = Error;

    fn try_from(value: &str) -> std::result::Result<Self, Self::Error> {
        let invalid = || Error::InvalidCardText(value.to_string());
        let (head, numbers) = value.split_once(':').ok_or_else(invalid)?;
        if !head.starts_with("Card") {
            return Err(invalid());
        }
        let (winning, owned) = numbers.split_once('|').ok_or_else(invalid)?;
        let parse_numbers = |s: &str| {
            s.split_whitespace()
                .map(|n| n.parse::<usize>().map_err(|_| invalid()))
                .collect::<std::result::Result<Vec<_>, _>>()
        };

        Ok(Card {
            winning: parse_numbers(winning)?.into_iter().collect(),
            owned: parse_numbers(owned)?,
        })
    }
}

impl Card {
    pub fn match_n(&self) -> usize {
        self.owned
            .iter()
            .filter(|n| self.winning.contains(*n))
            .count()
    }

    pub fn points(&self) -> usize {
        match self.match_n() {
            0 => 0,
            n => 1 << (n - 1),
        }
    }
}

/// Total cards held once every win has produced its copies of the following cards.
pub fn total_cards(cards: &[Card]) -> usize {
    let mut copies = vec![1usize; cards.len()];
    for (ind, card) in cards.iter().enumerate() {
        let won_end = (ind + 1 + card.match_n()).min(cards.len());
        for won_ind in (ind + 1)..won_end {
            copies[won_ind] += copies[ind];
        }
    }

    debug!("Copies per card: {:?}.", copies);
    copies.iter().sum()
}

pub fn read_cards<P: AsRef<Path>>(path: P) -> Result<Vec<Card>> {
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
                Card::try_from(s.as_str()).with_context(|| {
                    format!(
                        "Failed to read scratchcard from line {} in given file({}).",
                        ind + 1,
                        path.as_ref().display()
                    )
                })
            })
        })
        .collect()
}

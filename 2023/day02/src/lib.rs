use std::{
    error,
    fmt::Display,
    fs::File,
    io::{BufRead, BufReader},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::Parser;
use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

#[derive(Debug)]
pub enum Error {
    InvalidGameText(String),
    InvalidCubeText(String),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidGameText(s) => write!(f, "Invalid text({}) for game record.", s),
            Error::InvalidCubeText(s) => write!(f, "Invalid text({}) for cubes in a draw.", s),
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
}

/// Cube counts of one draw, or the maxima of a whole game.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cubes {
    pub red: usize,
    pub green: usize,
    pub blue: usize,
}

impl TryFrom<&str> for Cubes {
    type Error = Error;

    fn try_from(value: &str) -> std::result::Result<Self, Self::Error> {
        static CUBE_PATTERN: Lazy<Regex> =
            Lazy::new(|| Regex::new(r"^(\d+) (red|green|blue)$").unwrap());

        let mut cubes = Cubes::default();
        for part in value.split(',') {
            let caps = CUBE_PATTERN
                .captures(part.trim())
                .ok_or_else(|| Error::InvalidCubeText(part.to_string()))?;
            let count = caps[1]
                .parse::<usize>()
                .map_err(|_| Error::InvalidCubeText(part.to_string()))?;
            match &caps[2] {
                "red" => cubes.red += count,
                "green" => cubes.green += count,
                _ => cubes.blue += count,
            }
        }

        Ok(cubes)
    }
}

impl Cubes {
    pub fn new(red: usize, green: usize, blue: usize) -> Self {
        Self { red, green, blue }
    }

    pub fn fits_in(&self, bag: &Cubes) -> bool {
        self.red <= bag.red && self.green <= bag.green && self.blue <= bag.blue
    }

    pub fn max(&self, other: &Cubes) -> Cubes {
        Cubes::new(
            self.red.max(other.red),
            self.green.max(other.green),
            self.blue.max(other.blue),
        )
    }

    pub fn power(&self) -> usize {
        self.red * self.green * self.blue
    }
}

#[derive(Debug)]
pub struct Game {
    id: usize,
    draws: Vec<Cubes>,
}

impl TryFrom<&str> for Game {
    type Error = Error;

    fn try_from(value: &str) -> std::result::Result<Self, Self::Error> {
        static GAME_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^Game (\d+): (.+)$").unwrap());

        let caps = GAME_PATTERN
            .captures(value)
            .ok_or_else(|| Error::InvalidGameText(value.to_string()))?;
        let id = caps[1]
            .parse::<usize>()
            .map_err(|_| Error::InvalidGameText(value.to_string()))?;
        let draws = caps[2]
            .split(';')
            .map(Cubes::try_from)
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(Game { id, draws })
    }
}

impl Game {
    pub fn id(&self) -> usize {
        self.id
    }

    pub fn is_possible_with(&self, bag: &Cubes) -> bool {
        self.draws.iter().all(|d| d.fits_in(bag))
    }

    /// The fewest cubes of each colour that make every draw possible.
    pub fn min_bag(&self) -> Cubes {
        let bag = self
            .draws
            .iter()
            .fold(Cubes::default(), |bag, draw| bag.max(draw));
        debug!("Game {} needs at least {:?}.", self.id, bag);
        bag
    }
}

pub fn read_games<P: AsRef<Path>>(path: P) -> Result<Vec<Game>> {
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
                Game::try_from(s.as_str()).with_context(|| {
                    format!(
                        "Failed to read game from line {} in given file({}).",
                        ind + 1,
                        path.as_ref().display()
                    )
                })
            })
        })
        .collect()
}

use std::{
    collections::{HashMap, HashSet, VecDeque},
    error,
    fmt::Display,
    fs::File,
    io::{BufRead, BufReader},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use once_cell::sync::Lazy;
use regex::Regex;

#[derive(Debug)]
pub enum Error {
    InvalidBrickText(String),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidBrickText(s) => write!(f, "Invalid text({}) for brick.", s),
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
}

#[derive(Debug, Clone, Copy)]
pub struct Brick {
    lo: [usize; 3],
    hi: [usize; 3],
}

impl TryFrom<&str> for Brick {
    type Error = Error;

    fn try_from(value: &str) -> std::result::Result<Self, Self::Error> {
        static BRICK_PATTERN: Lazy<Regex> =
            Lazy::new(|| Regex::new(r"^(\d+),(\d+),(\d+)~(\d+),(\d+),(\d+)$").unwrap());

        let caps = BRICK_PATTERN
            .captures(value.trim())
            .ok_or_else(|| Error::InvalidBrickText(value.to_string()))?;
        let mut coords = [0usize; 6];
        for (ind, coord) in coords.iter_mut().enumerate() {
            *coord = caps[ind + 1]
                .parse::<usize>()
                .map_err(|_| Error::InvalidBrickText(value.to_string()))?;
        }
        let (a, b) = (&coords[..3], &coords[3..]);

        Ok(Brick {
            lo: [a[0].min(b[0]), a[1].min(b[1]), a[2].min(b[2])],
            hi: [a[0].max(b[0]), a[1].max(b[1]), a[2].max(b[2])],
        })
    }
}

impl Brick {
    fn columns(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (self.lo[0]..=self.hi[0]).flat_map(move |x| (self.lo[1]..=self.hi[1]).map(move |y| (x, y)))
    }
}

/// Bricks after falling, with who rests on whom.
#[derive(Debug)]
pub struct Stack {
    supporters: Vec<HashSet<usize>>,
    supported: Vec<HashSet<usize>>,
}

impl Stack {
    /// Drop every brick as far as it goes, lowest first.
    pub fn settle(bricks: &[Brick]) -> Self {
        let mut order = (0..bricks.len()).collect::<Vec<_>>();
        order.sort_by_key(|ind| bricks[*ind].lo[2]);

        // Top height and owner of each settled (x, y) column.
        let mut tops: HashMap<(usize, usize), (usize, usize)> = HashMap::new();
        let mut supporters = vec![HashSet::new(); bricks.len()];
        let mut supported = vec![HashSet::new(); bricks.len()];
        for ind in order {
            let brick = &bricks[ind];
            let rest_z = brick
                .columns()
                .filter_map(|col| tops.get(&col).map(|(z, _)| z + 1))
                .max()
                .unwrap_or(1);
            for col in brick.columns() {
                if let Some((z, below)) = tops.get(&col) {
                    if z + 1 == rest_z {
                        supporters[ind].insert(*below);
                        supported[*below].insert(ind);
                    }
                }
            }

            let top_z = rest_z + brick.hi[2] - brick.lo[2];
            for col in brick.columns() {
                tops.insert(col, (top_z, ind));
            }
        }

        Self {
            supporters,
            supported,
        }
    }

    /// Bricks whose removal makes nothing else fall.
    pub fn safe_n(&self) -> usize {
        let sole_supporters = self
            .supporters
            .iter()
            .filter(|s| s.len() == 1)
            .flatten()
            .collect::<HashSet<_>>();
        info!("{} brick(s) are the only support of another.", sole_supporters.len());

        self.supporters.len() - sole_supporters.len()
    }

    /// Count of other bricks falling once `ind` is removed.
    pub fn chain_n(&self, ind: usize) -> usize {
        let mut fallen = HashSet::from([ind]);
        let mut queue = VecDeque::from([ind]);
        while let Some(cur) = queue.pop_front() {
            for above in &self.supported[cur] {
                if !fallen.contains(above) && self.supporters[*above].is_subset(&fallen) {
                    fallen.insert(*above);
                    queue.push_back(*above);
                }
            }
        }

        fallen.len() - 1
    }

    pub fn chain_sum(&self) -> usize {
        (0..self.supporters.len()).map(|ind| self.chain_n(ind)).sum()
    }
}

pub fn read_bricks<P: AsRef<Path>>(path: P) -> Result<Vec<Brick>> {
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
                Brick::try_from(s.as_str()).with_context(|| {
                    format!(
                        "Failed to read brick from line {} in given file({}).",
                        ind + 1,
                        path.as_ref().display()
                    )
                })
            })
        })
        .collect()
}

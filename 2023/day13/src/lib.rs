use std::path::{Path, PathBuf};

use advent::{Grid, Position};
use anyhow::{Context, Result};
use clap::Parser;
use log::warn;

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mirror {
    /// Columns left of a vertical line.
    Vertical(usize),
    /// Rows above a horizontal line.
    Horizontal(usize),
}

impl Mirror {
    pub fn summary(&self) -> usize {
        match self {
            Mirror::Vertical(c) => *c,
            Mirror::Horizontal(r) => r * 100,
        }
    }
}

pub struct Pattern {
    grid: Grid<bool>,
}

impl Pattern {
    fn col_mismatch_n(&self, line: usize) -> usize {
        let width = line.min(self.grid.col_n() - line);
        (0..self.grid.row_n())
            .flat_map(|r| (0..width).map(move |k| (r, k)))
            .filter(|(r, k)| {
                self.grid[Position::new(*r, line - 1 - k)] != self.grid[Position::new(*r, line + k)]
            })
            .count()
    }

    fn row_mismatch_n(&self, line: usize) -> usize {
        let height = line.min(self.grid.row_n() - line);
        (0..height)
            .flat_map(|k| (0..self.grid.col_n()).map(move |c| (k, c)))
            .filter(|(k, c)| {
                self.grid[Position::new(line - 1 - k, *c)] != self.grid[Position::new(line + k, *c)]
            })
            .count()
    }

    /// The mirror line across which exactly `smudge_n` cells differ.
    pub fn mirror(&self, smudge_n: usize) -> Option<Mirror> {
        (1..self.grid.col_n())
            .find(|c| self.col_mismatch_n(*c) == smudge_n)
            .map(Mirror::Vertical)
            .or_else(|| {
                (1..self.grid.row_n())
                    .find(|r| self.row_mismatch_n(*r) == smudge_n)
                    .map(Mirror::Horizontal)
            })
    }
}

/// Sum of mirror summaries over all patterns, patterns without a mirror count 0.
pub fn summarize(patterns: &[Pattern], smudge_n: usize) -> usize {
    patterns
        .iter()
        .enumerate()
        .map(|(ind, p)| match p.mirror(smudge_n) {
            Some(m) => m.summary(),
            None => {
                warn!("Pattern {} has no mirror with {} smudge(s).", ind + 1, smudge_n);
                0
            }
        })
        .sum()
}

pub fn read_patterns<P: AsRef<Path>>(path: P) -> Result<Vec<Pattern>> {
    advent::input::read_blocks(&path)?
        .iter()
        .enumerate()
        .map(|(ind, block)| {
            Grid::parse(block, |c| match c {
                '#' => Some(true),
                '.' => Some(false),
                _ => None,
            })
            .map(|grid| Pattern { grid })
            .with_context(|| {
                format!(
                    "Failed to parse pattern {} in given file({}).",
                    ind + 1,
                    path.as_ref().display()
                )
            })
        })
        .collect()
}

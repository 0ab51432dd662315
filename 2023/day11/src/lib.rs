use std::path::{Path, PathBuf};

use advent::{Grid, Position};
use anyhow::{Context, Result};
use clap::Parser;
use log::debug;

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
}

#[derive(Debug, Parser)]
pub struct Part2CLIArgs {
    pub input_path: PathBuf,
    /// How many rows (or columns) every empty row (or column) becomes.
    #[arg(default_value_t = 1_000_000)]
    pub expansion: u64,
}

#[derive(Debug)]
pub struct Image {
    galaxies: Vec<Position>,
    empty_rows: Vec<usize>,
    empty_cols: Vec<usize>,
}

impl Image {
    fn new(grid: &Grid<bool>) -> Self {
        let galaxies = grid
            .iter()
            .filter(|(_, is_galaxy)| **is_galaxy)
            .map(|(pos, _)| pos)
            .collect::<Vec<_>>();
        let empty_rows = (0..grid.row_n())
            .filter(|r| grid.row(*r).is_some_and(|row| row.iter().all(|g| !g)))
            .collect::<Vec<_>>();
        let empty_cols = (0..grid.col_n())
            .filter(|c| grid.column(*c).all(|g| !g))
            .collect::<Vec<_>>();
        debug!(
            "Found {} empty row(s) and {} empty column(s).",
            empty_rows.len(),
            empty_cols.len()
        );

        Self {
            galaxies,
            empty_rows,
            empty_cols,
        }
    }

    /// Sum of Manhattan distances over every galaxy pair after expansion.
    pub fn distance_sum(&self, expansion: u64) -> u64 {
        let expanded = |v: usize, empties: &[usize]| {
            let before = empties.partition_point(|e| *e < v) as u64;
            v as u64 + before * (expansion.saturating_sub(1))
        };
        let coords = self
            .galaxies
            .iter()
            .map(|g| (expanded(g.r, &self.empty_rows), expanded(g.c, &self.empty_cols)))
            .collect::<Vec<_>>();

        let mut sum = 0;
        for (ind, (r0, c0)) in coords.iter().enumerate() {
            for (r1, c1) in &coords[(ind + 1)..] {
                sum += r0.abs_diff(*r1) + c0.abs_diff(*c1);
            }
        }

        sum
    }
}

pub fn read_image<P: AsRef<Path>>(path: P) -> Result<Image> {
    let lines = advent::input::read_lines(&path)?;
    let grid = Grid::parse(&lines, |c| match c {
        '#' => Some(true),
        '.' => Some(false),
        _ => None,
    })
    .with_context(|| {
        format!(
            "Failed to parse galaxy image in given file({}).",
            path.as_ref().display()
        )
    })?;

    Ok(Image::new(&grid))
}

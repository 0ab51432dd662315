use std::{
    error,
    fmt::Display,
    path::{Path, PathBuf},
};

use advent::{Grid, Offsets, Position};
use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, warn};

#[derive(Debug)]
pub enum Error {
    NoStart,
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::NoStart => write!(f, "There's no starting position(S) in given garden map."),
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
    #[arg(default_value_t = 64)]
    pub steps: usize,
}

#[derive(Debug, Parser)]
pub struct Part2CLIArgs {
    pub input_path: PathBuf,
    #[arg(default_value_t = 26501365)]
    pub steps: usize,
}

/// Step counts up to this are answered by searching the tiled map directly.
const DIRECT_STEP_LIMIT: usize = 500;

pub struct Garden {
    plots: Grid<bool>,
    start: Position,
}

impl Garden {
    fn plots_within(plots: &Grid<bool>, start: Position, steps: usize) -> usize {
        advent::distances(plots, start, Offsets::Cardinal, |_, is_plot| *is_plot)
            .iter()
            .filter(|(_, dist)| dist.is_some_and(|d| d <= steps && d % 2 == steps % 2))
            .count()
    }

    /// Plots where the elf can stand after exactly `steps` steps on the bounded map.
    pub fn reachable_n(&self, steps: usize) -> usize {
        Self::plots_within(&self.plots, self.start, steps)
    }

    /// The map repeated `2 * radius + 1` times in each direction, start in the middle tile.
    fn tiled(&self, radius: usize) -> (Grid<bool>, Position) {
        let (row_n, col_n) = (self.plots.row_n(), self.plots.col_n());
        let side = 2 * radius + 1;
        let mut tiled = Grid::new(row_n * side, col_n * side, false);
        for pos in tiled.positions().collect::<Vec<_>>() {
            tiled[pos] = self.plots[Position::new(pos.r % row_n, pos.c % col_n)];
        }
        let start = Position::new(
            radius * row_n + self.start.r,
            radius * col_n + self.start.c,
        );

        (tiled, start)
    }

    fn tiled_reachable_n(&self, steps: usize) -> usize {
        let size = self.plots.row_n().min(self.plots.col_n());
        let (tiled, start) = self.tiled(steps / size + 1);
        Self::plots_within(&tiled, start, steps)
    }

    /// Plots reachable in exactly `steps` steps on the infinitely repeated map.
    ///
    /// Large step counts are extrapolated: with the map size as period, the
    /// count grows quadratically in the number of periods walked.
    pub fn infinite_reachable_n(&self, steps: usize) -> usize {
        if steps <= DIRECT_STEP_LIMIT {
            return self.tiled_reachable_n(steps);
        }

        let size = self.plots.row_n();
        if size != self.plots.col_n() {
            warn!("Garden map isn't square, extrapolation may be off.");
        }
        let rest = steps % size;
        let samples = [0, 1, 2].map(|n| self.tiled_reachable_n(rest + n * size) as i128);
        debug!("Samples at {} + k * {} steps: {:?}.", rest, size, samples);

        let n = (steps / size) as i128;
        let [a0, a1, a2] = samples;
        let count = a0 + n * (a1 - a0) + n * (n - 1) / 2 * (a2 - 2 * a1 + a0);
        count as usize
    }
}

pub fn read_garden<P: AsRef<Path>>(path: P) -> Result<Garden> {
    let lines = advent::input::read_lines(&path)?;
    let grid = Grid::parse(&lines, |c| "S.#".contains(c).then_some(c)).with_context(|| {
        format!(
            "Failed to parse garden map in given file({}).",
            path.as_ref().display()
        )
    })?;
    let start = grid.find(|c| *c == 'S').ok_or(Error::NoStart)?;

    Ok(Garden {
        plots: grid.map(|c| *c != '#'),
        start,
    })
}

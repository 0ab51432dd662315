use std::{
    cmp::Reverse,
    collections::{BinaryHeap, HashMap},
    path::{Path, PathBuf},
};

use advent::{Direction, Grid, Position};
use anyhow::{Context, Result};
use clap::Parser;
use log::debug;

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
}

/// How far a crucible may go straight, from `min_run` to `max_run` blocks.
#[derive(Debug, Clone, Copy)]
pub struct Crucible {
    pub min_run: usize,
    pub max_run: usize,
}

impl Crucible {
    pub const NORMAL: Crucible = Crucible {
        min_run: 1,
        max_run: 3,
    };
    pub const ULTRA: Crucible = Crucible {
        min_run: 4,
        max_run: 10,
    };
}

pub struct City {
    grid: Grid<u32>,
}

impl City {
    /// Least heat loss from the top-left block to the bottom-right one.
    ///
    /// A state is a block plus the axis of the last run, every move is a whole
    /// straight run along the other axis.
    pub fn min_heat_loss(&self, crucible: Crucible) -> Option<u32> {
        let start = Position::new(0, 0);
        let goal = Position::new(self.grid.row_n() - 1, self.grid.col_n() - 1);
        let mut best = HashMap::new();
        let mut queue = BinaryHeap::new();
        for vertical in [true, false] {
            best.insert((start, vertical), 0);
            queue.push(Reverse((0, start, vertical)));
        }

        while let Some(Reverse((loss, pos, vertical))) = queue.pop() {
            if pos == goal {
                debug!("Reached {} with heat loss {}.", goal, loss);
                return Some(loss);
            }
            if best.get(&(pos, vertical)).is_some_and(|b| *b < loss) {
                continue;
            }

            let turns = if vertical {
                [Direction::East, Direction::West]
            } else {
                [Direction::North, Direction::South]
            };
            for dir in turns {
                let mut next_pos = pos;
                let mut next_loss = loss;
                for run in 1..=crucible.max_run {
                    let Some(p) = self.grid.step(&next_pos, dir) else {
                        break;
                    };
                    next_pos = p;
                    next_loss += self.grid[next_pos];
                    if run < crucible.min_run {
                        continue;
                    }

                    let state = (next_pos, dir.is_vertical());
                    if best.get(&state).map_or(true, |b| next_loss < *b) {
                        best.insert(state, next_loss);
                        queue.push(Reverse((next_loss, next_pos, state.1)));
                    }
                }
            }
        }

        None
    }
}

pub fn read_city<P: AsRef<Path>>(path: P) -> Result<City> {
    let lines = advent::input::read_lines(&path)?;
    let grid = Grid::parse(&lines, |c| c.to_digit(10)).with_context(|| {
        format!(
            "Failed to parse heat loss map in given file({}).",
            path.as_ref().display()
        )
    })?;

    Ok(City { grid })
}

use std::{
    collections::HashMap,
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

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Rock {
    Round,
    Cube,
    Empty,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Platform {
    grid: Grid<Rock>,
}

impl Platform {
    /// Positions of every lane along `dir`, each starting at the edge rocks roll toward.
    fn lanes(&self, dir: Direction) -> Vec<Vec<Position>> {
        let (row_n, col_n) = (self.grid.row_n(), self.grid.col_n());
        match dir {
            Direction::North => (0..col_n)
                .map(|c| (0..row_n).map(|r| Position::new(r, c)).collect())
                .collect(),
            Direction::South => (0..col_n)
                .map(|c| (0..row_n).rev().map(|r| Position::new(r, c)).collect())
                .collect(),
            Direction::West => (0..row_n)
                .map(|r| (0..col_n).map(|c| Position::new(r, c)).collect())
                .collect(),
            Direction::East => (0..row_n)
                .map(|r| (0..col_n).rev().map(|c| Position::new(r, c)).collect())
                .collect(),
        }
    }

    pub fn tilt(&mut self, dir: Direction) {
        for lane in self.lanes(dir) {
            let mut free = 0;
            for (ind, pos) in lane.iter().enumerate() {
                match self.grid[*pos] {
                    Rock::Cube => free = ind + 1,
                    Rock::Round => {
                        self.grid.swap(&lane[free], pos);
                        free += 1;
                    }
                    Rock::Empty => {}
                }
            }
        }
    }

    pub fn spin(&mut self) {
        for dir in [
            Direction::North,
            Direction::West,
            Direction::South,
            Direction::East,
        ] {
            self.tilt(dir);
        }
    }

    /// Load on the north support beams.
    pub fn north_load(&self) -> usize {
        self.grid
            .iter()
            .filter(|(_, rock)| **rock == Rock::Round)
            .map(|(pos, _)| self.grid.row_n() - pos.r)
            .sum()
    }

    /// Platform after `cycle_n` spin cycles, skipping ahead once a state repeats.
    pub fn spun(&self, cycle_n: usize) -> Platform {
        let mut seen = HashMap::new();
        let mut states: Vec<Platform> = Vec::new();
        let mut platform = self.clone();
        for ind in 0..cycle_n {
            if let Some(start) = seen.get(&platform) {
                let period = ind - start;
                debug!("Spin cycles repeat from {} with period {}.", start, period);
                return states[start + (cycle_n - start) % period].clone();
            }

            seen.insert(platform.clone(), ind);
            states.push(platform.clone());
            platform.spin();
        }

        platform
    }
}

pub fn read_platform<P: AsRef<Path>>(path: P) -> Result<Platform> {
    let lines = advent::input::read_lines(&path)?;
    let grid = Grid::parse(&lines, |c| match c {
        'O' => Some(Rock::Round),
        '#' => Some(Rock::Cube),
        '.' => Some(Rock::Empty),
        _ => None,
    })
    .with_context(|| {
        format!(
            "Failed to parse platform in given file({}).",
            path.as_ref().display()
        )
    })?;

    Ok(Platform { grid })
}

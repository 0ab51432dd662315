use std::{
    error,
    fmt::Display,
    path::{Path, PathBuf},
};

use advent::{Direction, Grid, Position};
use anyhow::{Context, Result};
use clap::Parser;
use log::info;

#[derive(Debug)]
pub enum Error {
    NoStart,
    NoLoop(Position),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::NoStart => write!(f, "There's no start tile(S) in given pipe maze."),
            Error::NoLoop(pos) => write!(f, "No pipe loop passes the start tile at {}.", pos),
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
}

const PIPE_CHARS: &str = "|-LJ7F.S";

fn connections(tile: char) -> &'static [Direction] {
    use Direction::*;

    match tile {
        '|' => &[North, South],
        '-' => &[East, West],
        'L' => &[North, East],
        'J' => &[North, West],
        '7' => &[South, West],
        'F' => &[East, South],
        'S' => &[North, East, South, West],
        _ => &[],
    }
}

pub struct Maze {
    grid: Grid<char>,
}

impl Maze {
    fn connects(&self, pos: &Position, dir: Direction) -> Option<Position> {
        self.grid
            .step(pos, dir)
            .filter(|next_pos| connections(self.grid[*next_pos]).contains(&dir.reverse()))
    }

    fn walk_from(&self, start: Position, start_dir: Direction) -> Option<Vec<Position>> {
        let mut tiles = vec![start];
        let mut pos = start;
        let mut dir = start_dir;
        loop {
            pos = self.connects(&pos, dir)?;
            if pos == start {
                return Some(tiles);
            }
            tiles.push(pos);

            let from = dir.reverse();
            dir = connections(self.grid[pos])
                .iter()
                .copied()
                .find(|d| *d != from)?;
        }
    }

    /// Every tile of the main loop, in walking order from the start tile.
    pub fn main_loop(&self) -> Result<Vec<Position>, Error> {
        let start = self.grid.find(|c| *c == 'S').ok_or(Error::NoStart)?;
        let tiles = Direction::all()
            .iter()
            .filter(|dir| self.connects(&start, **dir).is_some())
            .find_map(|dir| self.walk_from(start, *dir))
            .ok_or(Error::NoLoop(start))?;
        info!("Main loop has {} tile(s).", tiles.len());

        Ok(tiles)
    }
}

/// Tiles strictly inside the loop, by the shoelace formula and Pick's theorem.
pub fn enclosed_tile_n(tiles: &[Position]) -> usize {
    let double_area = tiles
        .iter()
        .zip(tiles.iter().cycle().skip(1))
        .map(|(a, b)| a.r as i64 * b.c as i64 - b.r as i64 * a.c as i64)
        .sum::<i64>()
        .unsigned_abs() as usize;

    (double_area + 2).saturating_sub(tiles.len()) / 2
}

pub fn read_maze<P: AsRef<Path>>(path: P) -> Result<Maze> {
    let lines = advent::input::read_lines(&path)?;
    let grid = Grid::parse(&lines, |c| PIPE_CHARS.contains(c).then_some(c)).with_context(|| {
        format!(
            "Failed to parse pipe maze in given file({}).",
            path.as_ref().display()
        )
    })?;

    Ok(Maze { grid })
}

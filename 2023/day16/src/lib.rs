use std::{
    collections::HashSet,
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

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tile {
    Empty,
    // `/`
    SlashMirror,
    // `\`
    BackslashMirror,
    VerticalSplitter,
    HorizontalSplitter,
}

impl Tile {
    fn out_dirs(&self, dir: Direction) -> Vec<Direction> {
        use Direction::*;

        match (self, dir) {
            (Tile::SlashMirror, East) => vec![North],
            (Tile::SlashMirror, North) => vec![East],
            (Tile::SlashMirror, West) => vec![South],
            (Tile::SlashMirror, South) => vec![West],
            (Tile::BackslashMirror, East) => vec![South],
            (Tile::BackslashMirror, South) => vec![East],
            (Tile::BackslashMirror, West) => vec![North],
            (Tile::BackslashMirror, North) => vec![West],
            (Tile::VerticalSplitter, East | West) => vec![North, South],
            (Tile::HorizontalSplitter, North | South) => vec![East, West],
            _ => vec![dir],
        }
    }
}

pub struct Contraption {
    grid: Grid<Tile>,
}

impl Contraption {
    /// Count of tiles a beam entering `start` heading `dir` passes through.
    pub fn energized_n(&self, start: Position, dir: Direction) -> usize {
        let mut visited = HashSet::new();
        let mut beams = vec![(start, dir)];
        while let Some((pos, dir)) = beams.pop() {
            if !visited.insert((pos, dir)) {
                continue;
            }

            for out_dir in self.grid[pos].out_dirs(dir) {
                if let Some(next_pos) = self.grid.step(&pos, out_dir) {
                    beams.push((next_pos, out_dir));
                }
            }
        }

        visited
            .iter()
            .map(|(pos, _)| *pos)
            .collect::<HashSet<_>>()
            .len()
    }

    /// Every way a beam can enter from the edge of the grid.
    pub fn edge_entries(&self) -> Vec<(Position, Direction)> {
        let (row_n, col_n) = (self.grid.row_n(), self.grid.col_n());
        let mut entries = Vec::with_capacity(2 * (row_n + col_n));
        for r in 0..row_n {
            entries.push((Position::new(r, 0), Direction::East));
            entries.push((Position::new(r, col_n - 1), Direction::West));
        }
        for c in 0..col_n {
            entries.push((Position::new(0, c), Direction::South));
            entries.push((Position::new(row_n - 1, c), Direction::North));
        }

        entries
    }

    pub fn max_energized_n(&self) -> usize {
        let (best_n, best_entry) = self
            .edge_entries()
            .into_iter()
            .map(|(pos, dir)| (self.energized_n(pos, dir), (pos, dir)))
            .max_by_key(|(n, _)| *n)
            .unwrap_or((0, (Position::new(0, 0), Direction::East)));
        debug!(
            "Best entry is at {} heading {:?} with {} tile(s).",
            best_entry.0, best_entry.1, best_n
        );

        best_n
    }
}

pub fn read_contraption<P: AsRef<Path>>(path: P) -> Result<Contraption> {
    let lines = advent::input::read_lines(&path)?;
    let grid = Grid::parse(&lines, |c| match c {
        '.' => Some(Tile::Empty),
        '/' => Some(Tile::SlashMirror),
        '\\' => Some(Tile::BackslashMirror),
        '|' => Some(Tile::VerticalSplitter),
        '-' => Some(Tile::HorizontalSplitter),
        _ => None,
    })
    .with_context(|| {
        format!(
            "Failed to parse contraption in given file({}).",
            path.as_ref().display()
        )
    })?;

    Ok(Contraption { grid })
}

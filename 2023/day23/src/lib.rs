use std::{
    collections::{HashMap, HashSet},
    error,
    fmt::Display,
    path::{Path, PathBuf},
};

use advent::{Direction, Grid, Offsets, Position, TargetSearch};
use anyhow::{Context, Result};
use clap::Parser;
use log::info;

#[derive(Debug)]
pub enum Error {
    NoEntrance,
    NoExit,
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::NoEntrance => write!(f, "There's no path tile in the top row of given map."),
            Error::NoExit => write!(f, "There's no path tile in the bottom row of given map."),
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tile {
    Path,
    Forest,
    Slope(Direction),
}

/// Junctions of the trail map and the walking distances between neighboring ones.
#[derive(Debug)]
pub struct JunctionGraph {
    junctions: Vec<Position>,
    edges: Vec<Vec<(usize, usize)>>,
}

impl JunctionGraph {
    pub fn junction_n(&self) -> usize {
        self.junctions.len()
    }

    /// Length of the longest path from junction `from` to junction `to` that
    /// never visits a junction twice.
    pub fn longest_path(&self, from: usize, to: usize) -> Option<usize> {
        fn walk(
            graph: &JunctionGraph,
            cur: usize,
            to: usize,
            visited: &mut [bool],
            len: usize,
            best: &mut Option<usize>,
        ) {
            if cur == to {
                *best = Some(best.map_or(len, |b| b.max(len)));
                return;
            }

            visited[cur] = true;
            for (next, dist) in &graph.edges[cur] {
                if !visited[*next] {
                    walk(graph, *next, to, visited, len + dist, best);
                }
            }
            visited[cur] = false;
        }

        let mut visited = vec![false; self.junctions.len()];
        let mut best = None;
        walk(self, from, to, &mut visited, 0, &mut best);
        best
    }
}

pub struct Trails {
    grid: Grid<Tile>,
    start: Position,
    end: Position,
}

impl Trails {
    fn open_neighbor_n(&self, pos: Position) -> usize {
        self.grid
            .neighbors(pos, Offsets::Cardinal)
            .filter(|p| self.grid[*p] != Tile::Forest)
            .count()
    }

    /// Whether the corridor leaving junction `from` through `exit` enters a
    /// slope against its direction before it reaches one of `targets`.
    fn climbs_slope(&self, from: Position, exit: Position, targets: &HashSet<Position>) -> bool {
        let (mut prev, mut cur) = (from, exit);
        while !targets.contains(&cur) {
            let next = Direction::all().iter().find_map(|dir| {
                self.grid
                    .step(&cur, *dir)
                    .filter(|pos| *pos != prev && self.grid[*pos] != Tile::Forest)
                    .map(|pos| (pos, *dir))
            });
            let Some((next, dir)) = next else {
                // Dead end.
                return false;
            };
            if self.grid[next] == Tile::Slope(dir.reverse()) {
                return true;
            }

            prev = cur;
            cur = next;
        }

        false
    }

    /// With `slippery`, a slope can't be entered against its direction.
    pub fn junction_graph(&self, slippery: bool) -> JunctionGraph {
        let mut junctions = vec![self.start, self.end];
        junctions.extend(self.grid.iter().filter_map(|(pos, tile)| {
            (*tile != Tile::Forest
                && pos != self.start
                && pos != self.end
                && self.open_neighbor_n(pos) >= 3)
                .then_some(pos)
        }));
        let junction_inds = junctions
            .iter()
            .enumerate()
            .map(|(ind, pos)| (*pos, ind))
            .collect::<HashMap<_, _>>();
        let targets = junctions.iter().copied().collect::<HashSet<_>>();

        let mut edges = vec![Vec::new(); junctions.len()];
        for (from_ind, from) in junctions.iter().enumerate() {
            for dir in Direction::all() {
                let Some(exit) = self.grid.step(from, *dir) else {
                    continue;
                };
                match self.grid[exit] {
                    Tile::Forest => continue,
                    Tile::Slope(slope_dir) if slippery && slope_dir == dir.reverse() => continue,
                    _ => {}
                }

                let reached = match junction_inds.get(&exit) {
                    Some(ind) => Some((*ind, 1)),
                    None if slippery && self.climbs_slope(*from, exit, &targets) => None,
                    None => TargetSearch::new(&self.grid, exit, &targets)
                        .passable(|pos, tile| *tile != Tile::Forest && pos != *from)
                        .next()
                        .and_then(|(to, dist)| junction_inds.get(&to).map(|ind| (*ind, dist + 1))),
                };
                if let Some(edge) = reached {
                    edges[from_ind].push(edge);
                }
            }
        }
        info!(
            "Trail map has {} junction(s) and {} edge(s).",
            junctions.len(),
            edges.iter().map(|e| e.len()).sum::<usize>()
        );

        JunctionGraph { junctions, edges }
    }

    /// Steps of the longest hike from the entrance to the exit.
    pub fn longest_hike(&self, slippery: bool) -> Option<usize> {
        let graph = self.junction_graph(slippery);
        // Start and end are always the first two junctions.
        graph.longest_path(0, 1)
    }
}

pub fn read_trails<P: AsRef<Path>>(path: P) -> Result<Trails> {
    let lines = advent::input::read_lines(&path)?;
    let grid = Grid::parse(&lines, |c| match c {
        '.' => Some(Tile::Path),
        '#' => Some(Tile::Forest),
        '^' => Some(Tile::Slope(Direction::North)),
        '>' => Some(Tile::Slope(Direction::East)),
        'v' => Some(Tile::Slope(Direction::South)),
        '<' => Some(Tile::Slope(Direction::West)),
        _ => None,
    })
    .with_context(|| {
        format!(
            "Failed to parse trail map in given file({}).",
            path.as_ref().display()
        )
    })?;

    let path_in_row = |r: usize| {
        (0..grid.col_n())
            .map(|c| Position::new(r, c))
            .find(|pos| grid[*pos] == Tile::Path)
    };
    let start = path_in_row(0).ok_or(Error::NoEntrance)?;
    let end = path_in_row(grid.row_n() - 1).ok_or(Error::NoExit)?;

    Ok(Trails { grid, start, end })
}

//! Breadth-first reachability over a [`Grid`].
//!
//! Two entry points share one notion of adjacency, an [`Offsets`] set:
//!
//! - [`neighbors`] enumerates the in-bounds cells around a position, lazily and
//!   in the fixed order of the offset set.
//! - [`TargetSearch`] walks outward from a source and yields every reachable
//!   target together with its shortest step count, nearest first.
//!
//! [`distances`] is the eager sibling of the search: one full distance map from
//! a single source.
//!
//! The grid is only borrowed. What counts as passable is decided by a caller
//! predicate, the toolkit never looks at cell contents itself.

use std::collections::{HashSet, VecDeque};

use log::trace;

use crate::grid::{Grid, Position};

/// Step offsets considered adjacent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Offsets {
    /// Up, left, right, down.
    #[default]
    Cardinal,
    /// All eight surrounding cells in row-major order.
    All,
}

impl Offsets {
    /// `(dr, dc)` pairs in enumeration order.
    ///
    /// | set | order |
    /// |---|---|
    /// | `Cardinal` | `(-1,0) (0,-1) (0,1) (1,0)` |
    /// | `All` | `(-1,-1) (-1,0) (-1,1) (0,-1) (0,1) (1,-1) (1,0) (1,1)` |
    pub fn deltas(&self) -> &'static [(isize, isize)] {
        static CARDINAL_DELTAS: [(isize, isize); 4] = [(-1, 0), (0, -1), (0, 1), (1, 0)];
        static ALL_DELTAS: [(isize, isize); 8] = [
            (-1, -1),
            (-1, 0),
            (-1, 1),
            (0, -1),
            (0, 1),
            (1, -1),
            (1, 0),
            (1, 1),
        ];

        match self {
            Offsets::Cardinal => &CARDINAL_DELTAS,
            Offsets::All => &ALL_DELTAS,
        }
    }
}

/// In-bounds neighbors of `pos` on a `row_n` x `col_n` grid, in the order of
/// [`Offsets::deltas`].
pub fn neighbors(
    pos: Position,
    row_n: usize,
    col_n: usize,
    offsets: Offsets,
) -> impl Iterator<Item = Position> {
    offsets.deltas().iter().filter_map(move |&(dr, dc)| {
        pos.offset(dr, dc)
            .filter(|next_pos| next_pos.r < row_n && next_pos.c < col_n)
    })
}

fn every_cell<T>(_: Position, _: &T) -> bool {
    true
}

/// Lazy multi-target breadth-first search.
///
/// Yields `(target, distance)` for every target reachable from the source,
/// each at its shortest distance and in non-decreasing distance order. The
/// source itself is never reported, unreachable targets are simply absent.
/// The iterator is one-shot: once exhausted it stays exhausted.
///
/// Configure it before the first call to `next`:
///
/// - [`passable`](Self::passable) decides whether a cell may be entered
///   (default: every cell).
/// - [`offsets`](Self::offsets) picks the adjacency (default: cardinal).
/// - [`expand_targets`](Self::expand_targets) lets the search continue past a
///   reported target (default: targets are terminal).
///
/// ```
/// use std::collections::HashSet;
/// use advent::{Grid, Position, TargetSearch};
///
/// let grid = Grid::parse(&["...", "..#", "..."], Some).unwrap();
/// let targets = HashSet::from([Position::new(2, 2), Position::new(1, 2)]);
/// let found = TargetSearch::new(&grid, Position::new(0, 0), &targets)
///     .passable(|_, cell| *cell != '#')
///     .collect::<Vec<_>>();
/// assert_eq!(found, vec![(Position::new(2, 2), 4)]);
/// ```
pub struct TargetSearch<'a, T, F = fn(Position, &T) -> bool> {
    grid: &'a Grid<T>,
    targets: &'a HashSet<Position>,
    passable: F,
    offsets: Offsets,
    expand_targets: bool,
    visited: Vec<bool>,
    frontier: VecDeque<(Position, usize)>,
}

impl<'a, T> TargetSearch<'a, T> {
    /// `source` must lie on `grid`.
    pub fn new(grid: &'a Grid<T>, source: Position, targets: &'a HashSet<Position>) -> Self {
        let mut visited = vec![false; grid.row_n() * grid.col_n()];
        if grid.contains(&source) {
            visited[source.r * grid.col_n() + source.c] = true;
        }

        Self {
            grid,
            targets,
            passable: every_cell::<T>,
            offsets: Offsets::default(),
            expand_targets: false,
            visited,
            frontier: VecDeque::from([(source, 0)]),
        }
    }
}

impl<'a, T, F> TargetSearch<'a, T, F>
where
    F: FnMut(Position, &T) -> bool,
{
    pub fn passable<G>(self, passable: G) -> TargetSearch<'a, T, G>
    where
        G: FnMut(Position, &T) -> bool,
    {
        TargetSearch {
            grid: self.grid,
            targets: self.targets,
            passable,
            offsets: self.offsets,
            expand_targets: self.expand_targets,
            visited: self.visited,
            frontier: self.frontier,
        }
    }

    pub fn offsets(mut self, offsets: Offsets) -> Self {
        self.offsets = offsets;
        self
    }

    pub fn expand_targets(mut self, expand_targets: bool) -> Self {
        self.expand_targets = expand_targets;
        self
    }
}

impl<'a, T, F> Iterator for TargetSearch<'a, T, F>
where
    F: FnMut(Position, &T) -> bool,
{
    type Item = (Position, usize);

    fn next(&mut self) -> Option<Self::Item> {
        let grid = self.grid;
        while let Some((pos, dist)) = self.frontier.pop_front() {
            let is_hit = dist > 0 && self.targets.contains(&pos);
            if !is_hit || self.expand_targets {
                for next_pos in grid.neighbors(pos, self.offsets) {
                    let ind = next_pos.r * grid.col_n() + next_pos.c;
                    if !self.visited[ind] && (self.passable)(next_pos, &grid[next_pos]) {
                        self.visited[ind] = true;
                        self.frontier.push_back((next_pos, dist + 1));
                    }
                }
            }

            if is_hit {
                trace!("Reached target {} after {} step(s).", pos, dist);
                return Some((pos, dist));
            }
        }

        None
    }
}

/// Shortest step count from `source` to every cell, `None` where unreachable.
pub fn distances<T, F>(
    grid: &Grid<T>,
    source: Position,
    offsets: Offsets,
    mut passable: F,
) -> Grid<Option<usize>>
where
    F: FnMut(Position, &T) -> bool,
{
    let mut dists = Grid::new(grid.row_n(), grid.col_n(), None);
    if !grid.contains(&source) {
        return dists;
    }

    dists[source] = Some(0);
    let mut frontier = VecDeque::from([(source, 0)]);
    while let Some((pos, dist)) = frontier.pop_front() {
        for next_pos in grid.neighbors(pos, offsets) {
            if dists[next_pos].is_none() && passable(next_pos, &grid[next_pos]) {
                dists[next_pos] = Some(dist + 1);
                frontier.push_back((next_pos, dist + 1));
            }
        }
    }

    dists
}

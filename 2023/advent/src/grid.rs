use std::{
    error,
    fmt::Display,
    ops::{Index, IndexMut},
};

use crate::reach::{self, Offsets};

#[derive(Debug)]
pub enum Error {
    EmptyGrid,
    InconsistentRow(usize, usize),
    InvalidCharForGrid(char, Position),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::EmptyGrid => write!(f, "Expect at least one non-empty row for grid."),
            Error::InconsistentRow(expect_col_n, this_col_n) => write!(
                f,
                "Expect {} column(s) in each row, given {}.",
                expect_col_n, this_col_n
            ),
            Error::InvalidCharForGrid(c, pos) => {
                write!(f, "Invalid character({}) at {} for grid.", c, pos)
            }
        }
    }
}

impl error::Error for Error {}

/// A cell coordinate, row first. Both parts are non-negative by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub r: usize,
    pub c: usize,
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.r, self.c)
    }
}

impl Position {
    pub fn new(r: usize, c: usize) -> Self {
        Self { r, c }
    }

    /// Shift by a signed delta, `None` when either coordinate would go negative.
    pub fn offset(&self, dr: isize, dc: isize) -> Option<Self> {
        Some(Self::new(
            self.r.checked_add_signed(dr)?,
            self.c.checked_add_signed(dc)?,
        ))
    }

    pub fn neighbor(&self, dir: Direction) -> Option<Self> {
        let (dr, dc) = dir.delta();
        self.offset(dr, dc)
    }

    pub fn manhattan(&self, other: &Position) -> usize {
        self.r.abs_diff(other.r) + self.c.abs_diff(other.c)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    pub fn all() -> &'static [Direction] {
        static ALL_DIRECTIONS: [Direction; 4] = [
            Direction::North,
            Direction::East,
            Direction::South,
            Direction::West,
        ];

        &ALL_DIRECTIONS
    }

    pub fn turn_clockwise(&self) -> Self {
        match self {
            Direction::North => Direction::East,
            Direction::East => Direction::South,
            Direction::South => Direction::West,
            Direction::West => Direction::North,
        }
    }

    pub fn turn_counterclockwise(&self) -> Self {
        match self {
            Direction::North => Direction::West,
            Direction::East => Direction::North,
            Direction::South => Direction::East,
            Direction::West => Direction::South,
        }
    }

    pub fn reverse(&self) -> Self {
        match self {
            Direction::North => Direction::South,
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
        }
    }

    pub fn delta(&self) -> (isize, isize) {
        match self {
            Direction::North => (-1, 0),
            Direction::East => (0, 1),
            Direction::South => (1, 0),
            Direction::West => (0, -1),
        }
    }

    pub fn is_vertical(&self) -> bool {
        matches!(self, Direction::North | Direction::South)
    }
}

/// Rectangular, row-major 2-D storage addressed by [`Position`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid<T> {
    cells: Vec<T>,
    row_n: usize,
    col_n: usize,
}

impl<T: Clone> Grid<T> {
    pub fn new(row_n: usize, col_n: usize, fill: T) -> Self {
        Self {
            cells: vec![fill; row_n * col_n],
            row_n,
            col_n,
        }
    }
}

impl<T> Grid<T> {
    /// Build a grid from text rows, translating every character with `cell_of`.
    ///
    /// Fails on an empty input, on rows of different widths and on any
    /// character `cell_of` rejects.
    pub fn parse<S, F>(lines: &[S], mut cell_of: F) -> Result<Self, Error>
    where
        S: AsRef<str>,
        F: FnMut(char) -> Option<T>,
    {
        let mut cells = Vec::new();
        let mut col_n = None;
        for (r, line) in lines.iter().enumerate() {
            let line = line.as_ref();
            let this_col_n = line.chars().count();
            let expect_col_n = *col_n.get_or_insert(this_col_n);
            if expect_col_n != this_col_n {
                return Err(Error::InconsistentRow(expect_col_n, this_col_n));
            }

            for (c, ch) in line.chars().enumerate() {
                cells.push(cell_of(ch).ok_or(Error::InvalidCharForGrid(ch, Position::new(r, c)))?);
            }
        }

        match col_n {
            Some(col_n) if col_n > 0 => Ok(Self {
                cells,
                row_n: lines.len(),
                col_n,
            }),
            _ => Err(Error::EmptyGrid),
        }
    }

    pub fn row_n(&self) -> usize {
        self.row_n
    }

    pub fn col_n(&self) -> usize {
        self.col_n
    }

    pub fn contains(&self, pos: &Position) -> bool {
        pos.r < self.row_n && pos.c < self.col_n
    }

    pub fn get(&self, pos: &Position) -> Option<&T> {
        self.pos_to_ind(pos).and_then(|ind| self.cells.get(ind))
    }

    pub fn get_mut(&mut self, pos: &Position) -> Option<&mut T> {
        self.pos_to_ind(pos).and_then(|ind| self.cells.get_mut(ind))
    }

    pub fn swap(&mut self, a: &Position, b: &Position) {
        if let (Some(a_ind), Some(b_ind)) = (self.pos_to_ind(a), self.pos_to_ind(b)) {
            self.cells.swap(a_ind, b_ind);
        }
    }

    /// Every position in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> {
        let col_n = self.col_n;
        (0..(self.row_n * col_n)).map(move |ind| Position::new(ind / col_n, ind % col_n))
    }

    pub fn iter(&self) -> impl Iterator<Item = (Position, &T)> + '_ {
        self.positions().zip(self.cells.iter())
    }

    pub fn row(&self, r: usize) -> Option<&[T]> {
        if r < self.row_n {
            Some(&self.cells[(r * self.col_n)..((r + 1) * self.col_n)])
        } else {
            None
        }
    }

    pub fn column(&self, c: usize) -> impl Iterator<Item = &T> + '_ {
        let row_n = if c < self.col_n { self.row_n } else { 0 };
        (0..row_n).map(move |r| &self.cells[r * self.col_n + c])
    }

    pub fn find<P>(&self, mut pred: P) -> Option<Position>
    where
        P: FnMut(&T) -> bool,
    {
        self.iter().find(|(_, cell)| pred(cell)).map(|(pos, _)| pos)
    }

    /// One move in `dir`, kept only when it stays on the grid.
    pub fn step(&self, pos: &Position, dir: Direction) -> Option<Position> {
        pos.neighbor(dir).filter(|next_pos| self.contains(next_pos))
    }

    pub fn neighbors(&self, pos: Position, offsets: Offsets) -> impl Iterator<Item = Position> {
        reach::neighbors(pos, self.row_n, self.col_n, offsets)
    }

    pub fn map<U, F>(&self, f: F) -> Grid<U>
    where
        F: FnMut(&T) -> U,
    {
        Grid {
            cells: self.cells.iter().map(f).collect(),
            row_n: self.row_n,
            col_n: self.col_n,
        }
    }

    fn pos_to_ind(&self, pos: &Position) -> Option<usize> {
        if self.contains(pos) {
            Some(pos.r * self.col_n + pos.c)
        } else {
            None
        }
    }
}

impl<T> Index<Position> for Grid<T> {
    type Output = T;

    fn index(&self, pos: Position) -> &Self::Output {
        match self.pos_to_ind(&pos) {
            Some(ind) => &self.cells[ind],
            None => panic!(
                "Position {} is outside of grid({}x{}).",
                pos, self.row_n, self.col_n
            ),
        }
    }
}

impl<T> IndexMut<Position> for Grid<T> {
    fn index_mut(&mut self, pos: Position) -> &mut Self::Output {
        match self.pos_to_ind(&pos) {
            Some(ind) => &mut self.cells[ind],
            None => panic!(
                "Position {} is outside of grid({}x{}).",
                pos, self.row_n, self.col_n
            ),
        }
    }
}

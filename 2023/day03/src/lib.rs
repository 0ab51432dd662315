use std::{
    collections::{HashMap, HashSet},
    path::{Path, PathBuf},
};

use advent::{Grid, Offsets, Position};
use anyhow::{Context, Result};
use clap::Parser;
use log::debug;

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
}

/// A maximal horizontal run of digits.
#[derive(Debug)]
pub struct PartNumber {
    value: usize,
    cells: Vec<Position>,
}

impl PartNumber {
    pub fn value(&self) -> usize {
        self.value
    }
}

pub struct Schematic {
    grid: Grid<char>,
    numbers: Vec<PartNumber>,
}

fn is_symbol(c: char) -> bool {
    c != '.' && !c.is_ascii_digit()
}

impl Schematic {
    pub fn new(grid: Grid<char>) -> Self {
        let mut numbers = Vec::new();
        for r in 0..grid.row_n() {
            let mut current: Option<PartNumber> = None;
            for c in 0..grid.col_n() {
                let pos = Position::new(r, c);
                match grid[pos].to_digit(10) {
                    Some(d) => {
                        let number = current.get_or_insert_with(|| PartNumber {
                            value: 0,
                            cells: Vec::new(),
                        });
                        number.value = number.value * 10 + d as usize;
                        number.cells.push(pos);
                    }
                    None => numbers.extend(current.take()),
                }
            }
            numbers.extend(current.take());
        }
        debug!("Found {} number(s) in schematic.", numbers.len());

        Self { grid, numbers }
    }

    fn adjacent_cells<'a>(&'a self, number: &'a PartNumber) -> impl Iterator<Item = Position> + 'a {
        number
            .cells
            .iter()
            .flat_map(|pos| self.grid.neighbors(*pos, Offsets::All))
    }

    /// Numbers with at least one symbol among their surrounding cells.
    pub fn part_numbers(&self) -> impl Iterator<Item = &PartNumber> + '_ {
        self.numbers.iter().filter(|n| {
            self.adjacent_cells(n)
                .any(|pos| is_symbol(self.grid[pos]))
        })
    }

    /// Products of the two numbers around every `*` touching exactly two numbers.
    pub fn gear_ratios(&self) -> Vec<usize> {
        let mut gear_numbers: HashMap<Position, HashSet<usize>> = HashMap::new();
        for (ind, number) in self.numbers.iter().enumerate() {
            for pos in self.adjacent_cells(number) {
                if self.grid[pos] == '*' {
                    gear_numbers.entry(pos).or_default().insert(ind);
                }
            }
        }

        gear_numbers
            .values()
            .filter(|inds| inds.len() == 2)
            .map(|inds| inds.iter().map(|ind| self.numbers[*ind].value).product())
            .collect()
    }
}

pub fn read_schematic<P: AsRef<Path>>(path: P) -> Result<Schematic> {
    let lines = advent::input::read_lines(&path)?;
    let grid = Grid::parse(&lines, Some).with_context(|| {
        format!(
            "Failed to parse schematic grid in given file({}).",
            path.as_ref().display()
        )
    })?;

    Ok(Schematic::new(grid))
}

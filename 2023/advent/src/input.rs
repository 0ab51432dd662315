use std::{
    fs::{self, File},
    io::{BufRead, BufReader},
    path::Path,
};

use anyhow::{Context, Result};

/// All lines of the file at `path`, trailing blank lines dropped.
pub fn read_lines<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let file = File::open(&path)
        .with_context(|| format!("Failed to open given file({}).", path.as_ref().display()))?;
    let reader = BufReader::new(file);
    let mut lines = reader
        .lines()
        .enumerate()
        .map(|(ind, line)| {
            line.with_context(|| {
                format!(
                    "Failed to read line {} in given file({}).",
                    ind + 1,
                    path.as_ref().display()
                )
            })
        })
        .collect::<Result<Vec<_>>>()?;
    while lines.last().is_some_and(|line| line.trim().is_empty()) {
        lines.pop();
    }

    Ok(lines)
}

/// Lines grouped into blocks separated by blank lines.
pub fn read_blocks<P: AsRef<Path>>(path: P) -> Result<Vec<Vec<String>>> {
    let mut blocks = Vec::new();
    let mut block = Vec::new();
    for line in read_lines(path)? {
        if line.trim().is_empty() {
            if !block.is_empty() {
                blocks.push(block);
                block = Vec::new();
            }
        } else {
            block.push(line);
        }
    }
    if !block.is_empty() {
        blocks.push(block);
    }

    Ok(blocks)
}

pub fn read_text<P: AsRef<Path>>(path: P) -> Result<String> {
    fs::read_to_string(&path)
        .with_context(|| format!("Failed to read given file({}).", path.as_ref().display()))
}

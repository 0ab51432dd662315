use std::{
    error,
    fmt::Display,
    ops::Range,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::Parser;
use log::debug;

#[derive(Debug)]
pub enum Error {
    NoSeeds,
    InvalidSeedsText(String),
    OddSeedCount(usize),
    InvalidMapHeader(String),
    InvalidMapEntry(String),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::NoSeeds => write!(f, "Expect a seeds line at the beginning of almanac."),
            Error::InvalidSeedsText(s) => write!(f, "Invalid text({}) for seeds.", s),
            Error::OddSeedCount(n) => write!(
                f,
                "Expect seeds in (start, length) pairs, given {} number(s).",
                n
            ),
            Error::InvalidMapHeader(s) => write!(f, "Invalid text({}) for map header.", s),
            Error::InvalidMapEntry(s) => write!(f, "Invalid text({}) for map entry.", s),
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
}

#[derive(Debug, Clone, Copy)]
struct MapEntry {
    dst: u64,
    src: u64,
    len: u64,
}

impl TryFrom<&str> for MapEntry {
    type Error = Error;

    fn try_from(value: &str) -> std::result::Result<Self, Self::Error> {
        let numbers = value
            .split_whitespace()
            .map(|s| s.parse::<u64>())
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|_| Error::InvalidMapEntry(value.to_string()))?;
        match numbers[..] {
            [dst, src, len] => Ok(MapEntry { dst, src, len }),
            _ => Err(Error::InvalidMapEntry(value.to_string())),
        }
    }
}

impl MapEntry {
    fn src_end(&self) -> u64 {
        self.src + self.len
    }

    fn translate(&self, v: u64) -> u64 {
        v - self.src + self.dst
    }
}

/// Piecewise translation over half-open source ranges, identity elsewhere.
#[derive(Debug)]
pub struct RangeMap {
    name: String,
    entries: Vec<MapEntry>,
}

impl RangeMap {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn map_value(&self, v: u64) -> u64 {
        self.entries
            .iter()
            .find(|e| e.src <= v && v < e.src_end())
            .map_or(v, |e| e.translate(v))
    }

    /// Push one range through the map, splitting it at every entry boundary.
    pub fn map_range(&self, range: &Range<u64>) -> Vec<Range<u64>> {
        let mut mapped = Vec::new();
        if range.is_empty() {
            return mapped;
        }

        let mut cur = range.start;
        for entry in &self.entries {
            if entry.src_end() <= cur {
                continue;
            }
            if entry.src >= range.end {
                break;
            }

            if entry.src > cur {
                mapped.push(cur..entry.src);
                cur = entry.src;
            }
            let end = entry.src_end().min(range.end);
            mapped.push(entry.translate(cur)..entry.translate(end));
            cur = end;
        }
        if cur < range.end {
            mapped.push(cur..range.end);
        }

        mapped
    }
}

#[derive(Debug)]
pub struct Almanac {
    seeds: Vec<u64>,
    maps: Vec<RangeMap>,
}

impl Almanac {
    pub fn seeds(&self) -> &[u64] {
        &self.seeds
    }

    /// Seeds read as `(start, length)` pairs.
    pub fn seed_ranges(&self) -> Result<Vec<Range<u64>>, Error> {
        if self.seeds.len() % 2 != 0 {
            return Err(Error::OddSeedCount(self.seeds.len()));
        }

        Ok(self
            .seeds
            .chunks(2)
            .map(|pair| pair[0]..(pair[0] + pair[1]))
            .collect())
    }

    pub fn location(&self, seed: u64) -> u64 {
        self.maps.iter().fold(seed, |v, m| m.map_value(v))
    }

    pub fn location_ranges(&self, seed_ranges: Vec<Range<u64>>) -> Vec<Range<u64>> {
        self.maps.iter().fold(seed_ranges, |ranges, m| {
            let mapped = ranges
                .iter()
                .flat_map(|r| m.map_range(r))
                .collect::<Vec<_>>();
            debug!("After map({}), got {} range(s).", m.name(), mapped.len());
            mapped
        })
    }
}

fn parse_seeds(line: &str) -> Result<Vec<u64>, Error> {
    let numbers = line
        .strip_prefix("seeds:")
        .ok_or_else(|| Error::InvalidSeedsText(line.to_string()))?;
    numbers
        .split_whitespace()
        .map(|s| {
            s.parse::<u64>()
                .map_err(|_| Error::InvalidSeedsText(line.to_string()))
        })
        .collect()
}

impl TryFrom<&[String]> for RangeMap {
    type Error = Error;

    fn try_from(block: &[String]) -> std::result::Result<Self, Self::Error> {
        let (header, entry_lines) = block
            .split_first()
            .ok_or_else(|| Error::InvalidMapHeader(String::new()))?;
        let name = header
            .strip_suffix(" map:")
            .ok_or_else(|| Error::InvalidMapHeader(header.to_string()))?;
        let mut entries = entry_lines
            .iter()
            .map(|s| MapEntry::try_from(s.as_str()))
            .collect::<std::result::Result<Vec<_>, _>>()?;
        entries.sort_by_key(|e| e.src);

        Ok(RangeMap {
            name: name.to_string(),
            entries,
        })
    }
}

pub fn read_almanac<P: AsRef<Path>>(path: P) -> Result<Almanac> {
    let blocks = advent::input::read_blocks(&path)?;
    let (seeds_block, map_blocks) = blocks.split_first().ok_or(Error::NoSeeds)?;
    let seeds = parse_seeds(&seeds_block[0])?;
    let maps = map_blocks
        .iter()
        .enumerate()
        .map(|(ind, block)| {
            RangeMap::try_from(block.as_slice()).with_context(|| {
                format!(
                    "Failed to read map {} in given file({}).",
                    ind + 1,
                    path.as_ref().display()
                )
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(Almanac { seeds, maps })
}

use std::{
    error,
    fmt::Display,
    fs::File,
    io::{BufRead, BufReader},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, info};
use once_cell::sync::Lazy;
use regex::Regex;

#[derive(Debug)]
pub enum Error {
    InvalidHailstoneText(String),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidHailstoneText(s) => write!(f, "Invalid text({}) for hailstone.", s),
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
}

#[derive(Debug, Parser)]
pub struct Part1CLIArgs {
    pub input_path: PathBuf,
    #[arg(default_value_t = 200_000_000_000_000)]
    pub area_min: i64,
    #[arg(default_value_t = 400_000_000_000_000)]
    pub area_max: i64,
}

/// Largest absolute rock velocity component tried along x and y.
pub const ROCK_SPEED_LIMIT: i128 = 1000;

#[derive(Debug, Clone, Copy)]
pub struct Hailstone {
    pos: [i128; 3],
    vel: [i128; 3],
}

impl TryFrom<&str> for Hailstone {
    type Error = Error;

    fn try_from(value: &str) -> std::result::Result<Self, Self::Error> {
        static HAILSTONE_PATTERN: Lazy<Regex> = Lazy::new(|| {
            Regex::new(r"^(-?\d+),\s*(-?\d+),\s*(-?\d+)\s*@\s*(-?\d+),\s*(-?\d+),\s*(-?\d+)$")
                .unwrap()
        });

        let caps = HAILSTONE_PATTERN
            .captures(value.trim())
            .ok_or_else(|| Error::InvalidHailstoneText(value.to_string()))?;
        let mut numbers = [0i128; 6];
        for (ind, n) in numbers.iter_mut().enumerate() {
            *n = caps[ind + 1]
                .parse::<i128>()
                .map_err(|_| Error::InvalidHailstoneText(value.to_string()))?;
        }

        Ok(Hailstone {
            pos: [numbers[0], numbers[1], numbers[2]],
            vel: [numbers[3], numbers[4], numbers[5]],
        })
    }
}

/// Times `(t, s)` as `(t_num / den, s_num / den)` with `den > 0` at which
/// `p1 + v1 * t` and `p2 + v2 * s` meet in the XY plane, `None` for parallel paths.
fn xy_meeting(
    p1: [i128; 2],
    v1: [i128; 2],
    p2: [i128; 2],
    v2: [i128; 2],
) -> Option<(i128, i128, i128)> {
    let (dx, dy) = (p2[0] - p1[0], p2[1] - p1[1]);
    let den = v2[0] * v1[1] - v1[0] * v2[1];
    if den == 0 {
        return None;
    }

    let t_num = v2[0] * dy - v2[1] * dx;
    let s_num = v1[0] * dy - v1[1] * dx;
    if den < 0 {
        Some((-t_num, -s_num, -den))
    } else {
        Some((t_num, s_num, den))
    }
}

impl Hailstone {
    fn xy_pos(&self) -> [i128; 2] {
        [self.pos[0], self.pos[1]]
    }

    fn xy_vel(&self) -> [i128; 2] {
        [self.vel[0], self.vel[1]]
    }

    /// Whether the future XY paths of both stones cross inside `[lo, hi]` on both axes.
    pub fn crosses_within(&self, other: &Hailstone, lo: i128, hi: i128) -> bool {
        let Some((t_num, s_num, den)) =
            xy_meeting(self.xy_pos(), self.xy_vel(), other.xy_pos(), other.xy_vel())
        else {
            return false;
        };
        if t_num < 0 || s_num < 0 {
            return false;
        }

        (0..2).all(|axis| {
            let scaled = self.pos[axis] * den + self.vel[axis] * t_num;
            lo * den <= scaled && scaled <= hi * den
        })
    }

    /// Exact time the stone is at `(x, y)` when moving at `vel` in the XY plane.
    fn time_at(&self, x: i128, y: i128, vel: [i128; 2]) -> Option<i128> {
        let t = if vel[0] != 0 {
            let dx = x - self.pos[0];
            (dx % vel[0] == 0).then(|| dx / vel[0])?
        } else if vel[1] != 0 {
            let dy = y - self.pos[1];
            (dy % vel[1] == 0).then(|| dy / vel[1])?
        } else {
            return None;
        };

        (t >= 0 && self.pos[0] + vel[0] * t == x && self.pos[1] + vel[1] * t == y).then_some(t)
    }
}

pub fn crossing_pair_n(stones: &[Hailstone], lo: i128, hi: i128) -> usize {
    stones
        .iter()
        .enumerate()
        .map(|(ind, a)| {
            stones[(ind + 1)..]
                .iter()
                .filter(|b| a.crosses_within(b, lo, hi))
                .count()
        })
        .sum()
}

/// Starting position of a rock thrown with XY velocity `(vx, vy)` that hits every stone.
///
/// Seen from the rock, every stone moves at its own velocity minus the rock's,
/// so all their paths pass the rock's starting point. The first two stones
/// whose paths aren't parallel fix that point, the Z velocity follows from two
/// stones hit at different times.
fn rock_with_xy_velocity(stones: &[Hailstone], vx: i128, vy: i128) -> Option<[i128; 3]> {
    let rel = |s: &Hailstone| [s.vel[0] - vx, s.vel[1] - vy];
    let (a, (t_num, s_num, den)) = stones.iter().enumerate().find_map(|(ind, a)| {
        stones[(ind + 1)..]
            .iter()
            .find_map(|b| xy_meeting(a.xy_pos(), rel(a), b.xy_pos(), rel(b)))
            .map(|meeting| (a, meeting))
    })?;
    if t_num < 0 || s_num < 0 || t_num % den != 0 || s_num % den != 0 {
        return None;
    }
    let ta = t_num / den;
    let x = a.pos[0] + rel(a)[0] * ta;
    let y = a.pos[1] + rel(a)[1] * ta;

    let times = stones
        .iter()
        .map(|s| s.time_at(x, y, rel(s)))
        .collect::<Option<Vec<_>>>()?;

    let (first, t_first) = (stones.first()?, *times.first()?);
    let (other, t_other) = stones
        .iter()
        .zip(&times)
        .find(|(_, t)| **t != t_first)
        .map(|(s, t)| (s, *t))?;
    let dz = first.pos[2] + t_first * first.vel[2] - other.pos[2] - t_other * other.vel[2];
    if dz % (t_first - t_other) != 0 {
        return None;
    }
    let vz = dz / (t_first - t_other);
    let z = first.pos[2] + t_first * (first.vel[2] - vz);
    stones
        .iter()
        .zip(&times)
        .all(|(s, t)| s.pos[2] + s.vel[2] * t == z + vz * t)
        .then_some([x, y, z])
}

/// Starting position of the rock that hits every stone, searching XY velocities
/// up to `speed_limit` in absolute value.
pub fn rock_position(stones: &[Hailstone], speed_limit: i128) -> Option<[i128; 3]> {
    for vx in -speed_limit..=speed_limit {
        for vy in -speed_limit..=speed_limit {
            if let Some(pos) = rock_with_xy_velocity(stones, vx, vy) {
                info!("Rock thrown with XY velocity ({}, {}) from {:?}.", vx, vy, pos);
                return Some(pos);
            }
        }
    }
    debug!("No rock velocity found within {}.", speed_limit);

    None
}

pub fn read_hailstones<P: AsRef<Path>>(path: P) -> Result<Vec<Hailstone>> {
    let file = File::open(&path)
        .with_context(|| format!("Failed to open given file({}).", path.as_ref().display()))?;
    let reader = BufReader::new(file);
    reader
        .lines()
        .enumerate()
        .filter(|(_, line)| line.as_ref().map_or(true, |s| !s.trim().is_empty()))
        .map(|(ind, line)| {
            line.with_context(|| {
                format!(
                    "Failed to read line {} in given file({}).",
                    ind + 1,
                    path.as_ref().display()
                )
            })
            .and_then(|s| {
                Hailstone::try_from(s.as_str()).with_context(|| {
                    format!(
                        "Failed to read hailstone from line {} in given file({}).",
                        ind + 1,
                        path.as_ref().display()
                    )
                })
            })
        })
        .collect()
}

use std::{
    collections::HashMap,
    error,
    fmt::Display,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, info};
use once_cell::sync::Lazy;
use regex::Regex;

#[derive(Debug)]
pub enum Error {
    EmptyDocument,
    InvalidInstruction(char),
    InvalidNodeText(String),
    UnknownNode(String),
    NoGoalReached(String, u64),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::EmptyDocument => write!(f, "Expect instructions and nodes in given document."),
            Error::InvalidInstruction(c) => write!(f, "Invalid character({}) for instruction.", c),
            Error::InvalidNodeText(s) => write!(f, "Invalid text({}) for node.", s),
            Error::UnknownNode(s) => write!(f, "Node({}) is referenced but not defined.", s),
            Error::NoGoalReached(s, steps) => write!(
                f,
                "Walk from node({}) doesn't reach any goal after {} step(s).",
                s, steps
            ),
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
}

#[derive(Debug, Clone, Copy)]
enum Turn {
    Left,
    Right,
}

impl TryFrom<char> for Turn {
    type Error = Error;

    fn try_from(value: char) -> std::result::Result<Self, Self::Error> {
        match value {
            'L' => Ok(Turn::Left),
            'R' => Ok(Turn::Right),
            other => Err(Error::InvalidInstruction(other)),
        }
    }
}

#[derive(Debug)]
pub struct Network {
    turns: Vec<Turn>,
    nodes: HashMap<String, (String, String)>,
}

impl Network {
    pub fn node_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.nodes.keys().map(|s| s.as_str())
    }

    /// Steps from `start` until `is_goal` holds, following the turns cyclically.
    /// Fails once the walk has gone longer than any path to a goal could be.
    pub fn steps_to<F>(&self, start: &str, is_goal: F) -> Result<u64, Error>
    where
        F: Fn(&str) -> bool,
    {
        let step_limit = (self.turns.len() * self.nodes.len()) as u64 + 1;
        let mut cur = start;
        let mut steps = 0u64;
        for turn in self.turns.iter().cycle() {
            if is_goal(cur) && steps > 0 {
                debug!("Walk from {} reaches {} after {} step(s).", start, cur, steps);
                return Ok(steps);
            }
            if steps > step_limit {
                break;
            }

            let (left, right) = self
                .nodes
                .get(cur)
                .ok_or_else(|| Error::UnknownNode(cur.to_string()))?;
            cur = match turn {
                Turn::Left => left.as_str(),
                Turn::Right => right.as_str(),
            };
            steps += 1;
        }

        Err(Error::NoGoalReached(start.to_string(), steps))
    }

    /// Steps until every `..A` node stands on a `..Z` node at the same time.
    pub fn ghost_steps(&self) -> Result<u64, Error> {
        let starts = self
            .node_names()
            .filter(|n| n.ends_with('A'))
            .collect::<Vec<_>>();
        info!("Walking from {} ghost start node(s).", starts.len());
        let cycles = starts
            .into_iter()
            .map(|s| self.steps_to(s, |n| n.ends_with('Z')))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(advent::math::lcm_all(cycles))
    }
}

fn parse_node(text: &str) -> Result<(String, (String, String)), Error> {
    static NODE_PATTERN: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"^(\w+) = \((\w+), (\w+)\)$").unwrap());

    let caps = NODE_PATTERN
        .captures(text.trim())
        .ok_or_else(|| Error::InvalidNodeText(text.to_string()))?;
    Ok((
        caps[1].to_string(),
        (caps[2].to_string(), caps[3].to_string()),
    ))
}

pub fn read_network<P: AsRef<Path>>(path: P) -> Result<Network> {
    let blocks = advent::input::read_blocks(&path)?;
    let (turns_block, node_blocks) = blocks.split_first().ok_or(Error::EmptyDocument)?;
    let turns = turns_block
        .concat()
        .trim()
        .chars()
        .map(Turn::try_from)
        .collect::<Result<Vec<_>, _>>()?;
    if turns.is_empty() {
        return Err(Error::EmptyDocument.into());
    }

    let nodes = node_blocks
        .iter()
        .flatten()
        .enumerate()
        .map(|(ind, line)| {
            parse_node(line).with_context(|| {
                format!(
                    "Failed to read node {} in given file({}).",
                    ind + 1,
                    path.as_ref().display()
                )
            })
        })
        .collect::<Result<HashMap<_, _>>>()?;

    Ok(Network { turns, nodes })
}

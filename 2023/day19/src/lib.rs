use std::{
    collections::HashMap,
    error,
    fmt::Display,
    ops::Range,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::Parser;
use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

#[derive(Debug)]
pub enum Error {
    MissingSection,
    InvalidWorkflowText(String),
    InvalidRuleText(String),
    InvalidPartText(String),
    UnknownWorkflow(String),
    WorkflowCycle(String),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::MissingSection => {
                write!(f, "Expect a workflows section and a parts section.")
            }
            Error::InvalidWorkflowText(s) => write!(f, "Invalid text({}) for workflow.", s),
            Error::InvalidRuleText(s) => write!(f, "Invalid text({}) for workflow rule.", s),
            Error::InvalidPartText(s) => write!(f, "Invalid text({}) for part ratings.", s),
            Error::UnknownWorkflow(s) => write!(f, "Workflow({}) is sent to but not defined.", s),
            Error::WorkflowCycle(s) => {
                write!(f, "Workflow({}) is reached again through a cycle of workflows.", s)
            }
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
}

const CATEGORIES: &str = "xmas";
const START_WORKFLOW: &str = "in";

#[derive(Debug, Clone, PartialEq, Eq)]
enum Target {
    Accept,
    Reject,
    Workflow(String),
}

impl From<&str> for Target {
    fn from(value: &str) -> Self {
        match value {
            "A" => Target::Accept,
            "R" => Target::Reject,
            name => Target::Workflow(name.to_string()),
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Condition {
    category: usize,
    less: bool,
    value: u64,
}

impl Condition {
    fn holds(&self, rating: u64) -> bool {
        if self.less {
            rating < self.value
        } else {
            rating > self.value
        }
    }

    /// Split `range` into the part passing the condition and the rest.
    fn split(&self, range: &Range<u64>) -> (Range<u64>, Range<u64>) {
        if self.less {
            let cut = self.value.clamp(range.start, range.end);
            (range.start..cut, cut..range.end)
        } else {
            let cut = (self.value + 1).clamp(range.start, range.end);
            (cut..range.end, range.start..cut)
        }
    }
}

#[derive(Debug, Clone)]
struct Rule {
    condition: Option<Condition>,
    target: Target,
}

impl TryFrom<&str> for Rule {
    type Error = Error;

    fn try_from(value: &str) -> std::result::Result<Self, Self::Error> {
        static RULE_PATTERN: Lazy<Regex> =
            Lazy::new(|| Regex::new(r"^([xmas])([<>])(\d+):(\w+)$").unwrap());

        if let Some(caps) = RULE_PATTERN.captures(value) {
            let category = CATEGORIES.find(&caps[1]).unwrap_or(0);
            let value_num = caps[3]
                .parse::<u64>()
                .map_err(|_| Error::InvalidRuleText(value.to_string()))?;
            Ok(Rule {
                condition: Some(Condition {
                    category,
                    less: &caps[2] == "<",
                    value: value_num,
                }),
                target: Target::from(&caps[4]),
            })
        } else if !value.is_empty() && value.chars().all(|c| c.is_ascii_alphabetic()) {
            Ok(Rule {
                condition: None,
                target: Target::from(value),
            })
        } else {
            Err(Error::InvalidRuleText(value.to_string()))
        }
    }
}

fn parse_workflow(text: &str) -> std::result::Result<(String, Vec<Rule>), Error> {
    static WORKFLOW_PATTERN: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"^(\w+)\{(.+)\}$").unwrap());

    let caps = WORKFLOW_PATTERN
        .captures(text.trim())
        .ok_or_else(|| Error::InvalidWorkflowText(text.to_string()))?;
    let rules = caps[2]
        .split(',')
        .map(Rule::try_from)
        .collect::<std::result::Result<Vec<_>, _>>()?;

    Ok((caps[1].to_string(), rules))
}

/// Ratings of x, m, a and s in that order.
#[derive(Debug, Clone, Copy)]
pub struct Part([u64; 4]);

impl TryFrom<&str> for Part {
    type Error = Error;

    fn try_from(value: &str) -> std::result::Result<Self, Self::Error> {
        static PART_PATTERN: Lazy<Regex> =
            Lazy::new(|| Regex::new(r"^\{x=(\d+),m=(\d+),a=(\d+),s=(\d+)\}$").unwrap());

        let caps = PART_PATTERN
            .captures(value.trim())
            .ok_or_else(|| Error::InvalidPartText(value.to_string()))?;
        let mut ratings = [0; 4];
        for (ind, rating) in ratings.iter_mut().enumerate() {
            *rating = caps[ind + 1]
                .parse::<u64>()
                .map_err(|_| Error::InvalidPartText(value.to_string()))?;
        }

        Ok(Part(ratings))
    }
}

impl Part {
    pub fn rating_sum(&self) -> u64 {
        self.0.iter().sum()
    }
}

#[derive(Debug)]
pub struct System {
    workflows: HashMap<String, Vec<Rule>>,
    parts: Vec<Part>,
}

impl System {
    pub fn parts(&self) -> &[Part] {
        &self.parts
    }

    fn rules_of(&self, name: &str) -> std::result::Result<&[Rule], Error> {
        self.workflows
            .get(name)
            .map(|rules| rules.as_slice())
            .ok_or_else(|| Error::UnknownWorkflow(name.to_string()))
    }

    pub fn accepts(&self, part: &Part) -> std::result::Result<bool, Error> {
        let mut name = START_WORKFLOW.to_string();
        // Each workflow is visited at most once on an acyclic system.
        for _ in 0..=self.workflows.len() {
            let target = self
                .rules_of(&name)?
                .iter()
                .find(|r| {
                    r.condition
                        .map_or(true, |c| c.holds(part.0[c.category]))
                })
                .map(|r| r.target.clone())
                .unwrap_or(Target::Reject);
            match target {
                Target::Accept => return Ok(true),
                Target::Reject => return Ok(false),
                Target::Workflow(next) => name = next,
            }
        }

        Err(Error::WorkflowCycle(name))
    }

    /// Number of rating combinations, each rating in `ratings`, the system accepts.
    pub fn accepted_combination_n(&self, ratings: Range<u64>) -> std::result::Result<u64, Error> {
        let mut count = 0;
        // Ranges with the number of workflows walked to reach their target.
        let mut pending = vec![(
            Target::Workflow(START_WORKFLOW.to_string()),
            [ratings.clone(), ratings.clone(), ratings.clone(), ratings],
            0,
        )];
        while let Some((target, mut ranges, walked_n)) = pending.pop() {
            let name = match target {
                Target::Accept => {
                    count += ranges.iter().map(|r| r.end - r.start).product::<u64>();
                    continue;
                }
                Target::Reject => continue,
                Target::Workflow(name) => name,
            };
            if walked_n >= self.workflows.len() {
                return Err(Error::WorkflowCycle(name));
            }

            for rule in self.rules_of(&name)? {
                if ranges.iter().any(|r| r.is_empty()) {
                    break;
                }
                match rule.condition {
                    Some(cond) => {
                        let (pass, rest) = cond.split(&ranges[cond.category]);
                        let mut passed = ranges.clone();
                        passed[cond.category] = pass;
                        pending.push((rule.target.clone(), passed, walked_n + 1));
                        ranges[cond.category] = rest;
                    }
                    None => {
                        pending.push((rule.target.clone(), ranges.clone(), walked_n + 1));
                        break;
                    }
                }
            }
        }
        debug!("Accepted {} rating combination(s).", count);

        Ok(count)
    }
}

pub fn read_system<P: AsRef<Path>>(path: P) -> Result<System> {
    let blocks = advent::input::read_blocks(&path)?;
    let [workflow_block, part_block] = blocks.as_slice() else {
        return Err(Error::MissingSection.into());
    };

    let workflows = workflow_block
        .iter()
        .enumerate()
        .map(|(ind, line)| {
            parse_workflow(line).with_context(|| {
                format!(
                    "Failed to read workflow {} in given file({}).",
                    ind + 1,
                    path.as_ref().display()
                )
            })
        })
        .collect::<Result<HashMap<_, _>>>()?;
    let parts = part_block
        .iter()
        .enumerate()
        .map(|(ind, line)| {
            Part::try_from(line.as_str()).with_context(|| {
                format!(
                    "Failed to read part {} in given file({}).",
                    ind + 1,
                    path.as_ref().display()
                )
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(System { workflows, parts })
}

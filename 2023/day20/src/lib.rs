use std::{
    collections::{HashMap, VecDeque},
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
    InvalidModuleText(String),
    NoBroadcaster,
    NoFeeder(String),
    FeederNotConjunction(String),
    CycleNotFound(String, usize),
    NoCommonPress,
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidModuleText(s) => write!(f, "Invalid text({}) for module.", s),
            Error::NoBroadcaster => write!(f, "There's no broadcaster in given circuit."),
            Error::NoFeeder(s) => write!(f, "No module sends pulses to module({}).", s),
            Error::FeederNotConjunction(s) => write!(
                f,
                "Expect a single conjunction module({}) feeding the output.",
                s
            ),
            Error::CycleNotFound(s, n) => write!(
                f,
                "Module({}) doesn't repeat its high pulse within {} press(es).",
                s, n
            ),
            Error::NoCommonPress => write!(f, "Cycles of feeder inputs never line up."),
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
}

const BROADCASTER: &str = "broadcaster";
const BUTTON: &str = "button";

#[derive(Debug, Clone)]
pub struct Pulse {
    pub from: String,
    pub to: String,
    pub high: bool,
}

#[derive(Debug, Clone)]
enum Kind {
    Broadcaster,
    /// On or off.
    FlipFlop(bool),
    /// Last pulse remembered from each input.
    Conjunction(HashMap<String, bool>),
}

#[derive(Debug, Clone)]
struct Module {
    kind: Kind,
    outputs: Vec<String>,
}

fn parse_module(text: &str) -> std::result::Result<(String, Module), Error> {
    static MODULE_PATTERN: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"^([%&]?)([a-z]+) -> ([a-z, ]+)$").unwrap());

    let caps = MODULE_PATTERN
        .captures(text.trim())
        .ok_or_else(|| Error::InvalidModuleText(text.to_string()))?;
    let name = caps[2].to_string();
    let kind = match &caps[1] {
        "%" => Kind::FlipFlop(false),
        "&" => Kind::Conjunction(HashMap::new()),
        _ if name == BROADCASTER => Kind::Broadcaster,
        _ => return Err(Error::InvalidModuleText(text.to_string())),
    };
    let outputs = caps[3]
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect();

    Ok((name, Module { kind, outputs }))
}

#[derive(Debug, Clone)]
pub struct Circuit {
    modules: HashMap<String, Module>,
}

impl Circuit {
    fn new(mut modules: HashMap<String, Module>) -> std::result::Result<Self, Error> {
        if !modules.contains_key(BROADCASTER) {
            return Err(Error::NoBroadcaster);
        }

        let links = modules
            .iter()
            .flat_map(|(name, m)| m.outputs.iter().map(move |out| (name.clone(), out.clone())))
            .collect::<Vec<_>>();
        for (from, to) in links {
            if let Some(Module {
                kind: Kind::Conjunction(memory),
                ..
            }) = modules.get_mut(&to)
            {
                memory.insert(from, false);
            }
        }

        Ok(Self { modules })
    }

    /// Names of modules with `name` among their outputs.
    pub fn inputs_of(&self, name: &str) -> Vec<String> {
        let mut inputs = self
            .modules
            .iter()
            .filter(|(_, m)| m.outputs.iter().any(|out| out == name))
            .map(|(n, _)| n.clone())
            .collect::<Vec<_>>();
        inputs.sort();
        inputs
    }

    /// Push the button once, delivering pulses in the order they were sent.
    /// Every pulse goes through `observe`. Returns the counts of low and high pulses.
    pub fn press<F>(&mut self, mut observe: F) -> (u64, u64)
    where
        F: FnMut(&Pulse),
    {
        let (mut low_n, mut high_n) = (0, 0);
        let mut queue = VecDeque::from([Pulse {
            from: BUTTON.to_string(),
            to: BROADCASTER.to_string(),
            high: false,
        }]);
        while let Some(pulse) = queue.pop_front() {
            if pulse.high {
                high_n += 1;
            } else {
                low_n += 1;
            }
            observe(&pulse);

            let Some(module) = self.modules.get_mut(&pulse.to) else {
                continue;
            };
            let out_high = match &mut module.kind {
                Kind::Broadcaster => Some(pulse.high),
                Kind::FlipFlop(on) => {
                    if pulse.high {
                        None
                    } else {
                        *on = !*on;
                        Some(*on)
                    }
                }
                Kind::Conjunction(memory) => {
                    memory.insert(pulse.from.clone(), pulse.high);
                    Some(!memory.values().all(|h| *h))
                }
            };
            if let Some(high) = out_high {
                for out in &module.outputs {
                    queue.push_back(Pulse {
                        from: pulse.to.clone(),
                        to: out.clone(),
                        high,
                    });
                }
            }
        }

        (low_n, high_n)
    }

    /// Product of low and high pulse counts over `press_n` presses.
    pub fn pulse_product(&mut self, press_n: usize) -> u64 {
        let (mut low_n, mut high_n) = (0, 0);
        for _ in 0..press_n {
            let (low, high) = self.press(|_| {});
            low_n += low;
            high_n += high;
        }
        debug!("Sent {} low and {} high pulse(s).", low_n, high_n);

        low_n * high_n
    }

    /// Presses until `output` receives a low pulse.
    ///
    /// The output is fed by one conjunction, which sends low only when all of
    /// its inputs have just sent it high. Each input's high pulses are taken
    /// to repeat with the gap between their first two presses.
    pub fn presses_until_low(&mut self, output: &str, press_limit: usize) -> Result<u64, Error> {
        let feeders = self.inputs_of(output);
        let feeder = match feeders.as_slice() {
            [] => return Err(Error::NoFeeder(output.to_string())),
            [feeder] => feeder.clone(),
            _ => return Err(Error::FeederNotConjunction(feeders.join(","))),
        };
        if !matches!(
            self.modules.get(&feeder).map(|m| &m.kind),
            Some(Kind::Conjunction(_))
        ) {
            return Err(Error::FeederNotConjunction(feeder));
        }

        let inputs = self.inputs_of(&feeder);
        let mut hits: HashMap<String, Vec<u64>> = HashMap::new();
        for press_ind in 1..=press_limit {
            self.press(|pulse| {
                if pulse.high && pulse.to == feeder {
                    let presses = hits.entry(pulse.from.clone()).or_default();
                    if presses.len() < 2 && presses.last() != Some(&(press_ind as u64)) {
                        presses.push(press_ind as u64);
                    }
                }
            });
            if inputs
                .iter()
                .all(|i| hits.get(i).is_some_and(|p| p.len() == 2))
            {
                break;
            }
        }

        let mut cycles = Vec::with_capacity(inputs.len());
        for input in &inputs {
            match hits.get(input).map(|p| p.as_slice()) {
                Some([first, second]) => {
                    info!(
                        "Input({}) first sends high at press {} with period {}.",
                        input,
                        first,
                        second - first
                    );
                    cycles.push((*first, second - first));
                }
                _ => return Err(Error::CycleNotFound(input.clone(), press_limit)),
            }
        }

        combine_cycles(&cycles).ok_or(Error::NoCommonPress)
    }
}

/// Smallest press `x` with `x = first + k * period` (k >= 0) for every cycle.
pub fn combine_cycles(cycles: &[(u64, u64)]) -> Option<u64> {
    let ((first, period), rest) = cycles.split_first()?;
    let (mut x, mut step) = (*first, *period);
    for (first, period) in rest {
        if *period == 0 {
            return None;
        }

        let mut tries = 0;
        while !(x >= *first && (x - first) % period == 0) {
            x += step;
            tries += 1;
            if tries > period + first / step.max(1) + 1 {
                return None;
            }
        }
        step = advent::math::lcm(step, *period);
    }

    Some(x)
}

pub fn read_circuit<P: AsRef<Path>>(path: P) -> Result<Circuit> {
    let file = File::open(&path)
        .with_context(|| format!("Failed to open given file({}).", path.as_ref().display()))?;
    let reader = BufReader::new(file);
    let modules = reader
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
                parse_module(&s).with_context(|| {
                    format!(
                        "Failed to read module from line {} in given file({}).",
                        ind + 1,
                        path.as_ref().display()
                    )
                })
            })
        })
        .collect::<Result<HashMap<_, _>>>()?;

    Ok(Circuit::new(modules)?)
}

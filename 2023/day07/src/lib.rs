use std::{
    cmp::Ordering,
    error,
    fmt::Display,
    fs::File,
    io::{BufRead, BufReader},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::Parser;
use log::debug;

#[derive(Debug)]
pub enum Error {
    InvalidHandText(String),
    InvalidCardChar(char),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidHandText(s) => write!(f, "Invalid text({}) for hand and bid.", s),
            Error::InvalidCardChar(c) => write!(f, "Invalid character({}) for card.", c),
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
}

const CARD_ORDER: &str = "23456789TJQKA";
const JOKER_CARD_ORDER: &str = "J23456789TQKA";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum HandType {
    HighCard,
    OnePair,
    TwoPair,
    ThreeOfAKind,
    FullHouse,
    FourOfAKind,
    FiveOfAKind,
}

#[derive(Debug, Clone)]
pub struct Hand {
    cards: [char; 5],
    bid: usize,
}

impl TryFrom<&str> for Hand {
    type Error = Error;

    fn try_from(value: &str) -> std::result::Result<Self, Self::Error> {
        let invalid = || Error::InvalidHandText(value.to_string());
        let (cards_text, bid_text) = value.split_once(' ').ok_or_else(invalid)?;
        if let Some(c) = cards_text.chars().find(|c| !CARD_ORDER.contains(*c)) {
            return Err(Error::InvalidCardChar(c));
        }
        let cards: [char; 5] = cards_text
            .chars()
            .collect::<Vec<_>>()
            .try_into()
            .map_err(|_| invalid())?;
        let bid = bid_text.trim().parse::<usize>().map_err(|_| invalid())?;

        Ok(Hand { cards, bid })
    }
}

impl Hand {
    pub fn bid(&self) -> usize {
        self.bid
    }

    /// With jokers, every `J` joins the most frequent other card.
    pub fn hand_type(&self, with_jokers: bool) -> HandType {
        let mut counts = [0usize; 13];
        let mut joker_n = 0;
        for c in self.cards {
            if with_jokers && c == 'J' {
                joker_n += 1;
            } else if let Some(ind) = CARD_ORDER.find(c) {
                counts[ind] += 1;
            }
        }
        counts.sort_unstable_by(|a, b| b.cmp(a));
        counts[0] += joker_n;

        match (counts[0], counts[1]) {
            (5, _) => HandType::FiveOfAKind,
            (4, _) => HandType::FourOfAKind,
            (3, 2) => HandType::FullHouse,
            (3, _) => HandType::ThreeOfAKind,
            (2, 2) => HandType::TwoPair,
            (2, _) => HandType::OnePair,
            _ => HandType::HighCard,
        }
    }

    fn strengths(&self, with_jokers: bool) -> [usize; 5] {
        let order = if with_jokers {
            JOKER_CARD_ORDER
        } else {
            CARD_ORDER
        };
        self.cards.map(|c| order.find(c).unwrap_or(0))
    }

    pub fn cmp_with(&self, other: &Hand, with_jokers: bool) -> Ordering {
        self.hand_type(with_jokers)
            .cmp(&other.hand_type(with_jokers))
            .then_with(|| self.strengths(with_jokers).cmp(&other.strengths(with_jokers)))
    }
}

/// Sum of each bid times the rank of its hand, weakest hand ranked 1.
pub fn total_winnings(hands: &[Hand], with_jokers: bool) -> usize {
    let mut hands = hands.to_vec();
    hands.sort_by(|a, b| a.cmp_with(b, with_jokers));
    if let Some(strongest) = hands.last() {
        debug!(
            "Strongest hand is {} of type {:?}.",
            strongest.cards.iter().collect::<String>(),
            strongest.hand_type(with_jokers)
        );
    }
    hands
        .iter()
        .enumerate()
        .map(|(ind, h)| (ind + 1) * h.bid())
        .sum()
}

pub fn read_hands<P: AsRef<Path>>(path: P) -> Result<Vec<Hand>> {
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
                Hand::try_from(s.as_str()).with_context(|| {
                    format!(
                        "Failed to read hand from line {} in given file({}).",
                        ind + 1,
                        path.as_ref().display()
                    )
                })
            })
        })
        .collect()
}

//! The replay document and its text and JSON forms.
//!
//! Text replays are one call per line:
//!
//! ```text
//! deck(Mage,Wisp)            ; a deck is written as its repeating pattern
//! deck(Warrior,Wisp,Chillwind Yeti)
//! keep(0,1,2)
//! keep(0,1,2,3)
//! start()
//! play(0,p2)
//! random(3)                  ; numbers drawn while the move above resolved
//! end()
//! ```
//!
//! `random(...)` lines before the first move hold the numbers drawn while
//! dealing the opening hands.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cards::CharacterClass;
use crate::core::{EngineError, Result};

use super::moves::ReplayMove;

/// The longest repeating deck pattern the text form looks for.
const MAX_PATTERN: usize = 15;

/// A deck as a class plus card names.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckList {
    pub class: CharacterClass,
    pub cards: Vec<String>,
}

impl DeckList {
    /// The shortest prefix that the whole list repeats, up to
    /// fifteen cards. Longer lists are kept whole.
    #[must_use]
    pub fn pattern(&self) -> &[String] {
        let cards = &self.cards;
        (1..=MAX_PATTERN.min(cards.len()))
            .find(|&len| cards.iter().enumerate().all(|(i, c)| *c == cards[i % len]))
            .map_or(cards.as_slice(), |len| &cards[..len])
    }

    /// Repeat the list until it holds `size` cards.
    pub fn expand(&self, size: usize) -> Result<Vec<String>> {
        if self.cards.is_empty() {
            return Err(EngineError::Replay(format!("{} deck has no cards", self.class)));
        }
        Ok(self.cards.iter().cycle().take(size).cloned().collect())
    }
}

/// A move with the random numbers drawn while it resolved.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordedMove {
    #[serde(flatten)]
    pub mv: ReplayMove,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub random: Vec<i32>,
}

impl RecordedMove {
    #[must_use]
    pub fn new(mv: ReplayMove) -> Self {
        Self { mv, random: Vec::new() }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplayHeader {
    pub decks: Vec<DeckList>,
    /// Kept opening-hand positions, first player first. Absent means the
    /// whole hand was kept.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub keeps: Vec<Vec<usize>>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub random: Vec<i32>,
}

/// A complete match: decks, card checks, every move and every random
/// number, enough to play it back exactly.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Replay {
    pub header: ReplayHeader,
    pub moves: Vec<RecordedMove>,
}

impl Replay {
    /// Every random number in the order it was drawn.
    pub fn randoms(&self) -> impl Iterator<Item = i32> + '_ {
        self.header
            .random
            .iter()
            .chain(self.moves.iter().flat_map(|m| m.random.iter()))
            .copied()
    }

    pub fn to_text(&self) -> String {
        self.to_string()
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse the text form. Errors name the offending line.
    pub fn parse(text: &str) -> Result<Self> {
        let mut replay = Self::default();
        for (number, line) in text.lines().enumerate() {
            replay
                .parse_line(line)
                .map_err(|e| EngineError::Replay(format!("line {}: {}", number + 1, message(e))))?;
        }
        Ok(replay)
    }

    fn parse_line(&mut self, line: &str) -> Result<()> {
        let line = line.split_once(';').map_or(line, |(code, _)| code).trim();
        if line.is_empty() {
            return Ok(());
        }
        let (name, rest) = line
            .split_once('(')
            .ok_or_else(|| EngineError::Replay(format!("expected a call, found {line:?}")))?;
        let args = rest
            .strip_suffix(')')
            .ok_or_else(|| EngineError::Replay(format!("unclosed call {line:?}")))?;
        let args: Vec<&str> = args.split(',').map(str::trim).filter(|a| !a.is_empty()).collect();
        match name.trim() {
            "deck" => {
                if self.header.decks.len() == 2 {
                    return Err(EngineError::Replay("more than two decks".to_string()));
                }
                let (class, cards) = args
                    .split_first()
                    .ok_or_else(|| EngineError::Replay("deck() needs a class".to_string()))?;
                if cards.is_empty() {
                    return Err(EngineError::Replay("deck() needs at least one card".to_string()));
                }
                self.header.decks.push(DeckList {
                    class: class.parse()?,
                    cards: cards.iter().map(|c| (*c).to_string()).collect(),
                });
            }
            "keep" => {
                if self.header.keeps.len() == 2 {
                    return Err(EngineError::Replay("more than two keeps".to_string()));
                }
                self.header.keeps.push(numbers(&args)?);
            }
            "random" => {
                let values: Vec<i32> = numbers(&args)?;
                match self.moves.last_mut() {
                    Some(last) => last.random.extend(values),
                    None => self.header.random.extend(values),
                }
            }
            name => self.moves.push(RecordedMove::new(ReplayMove::from_parts(name, &args)?)),
        }
        Ok(())
    }
}

fn numbers<T: std::str::FromStr>(args: &[&str]) -> Result<Vec<T>> {
    args.iter()
        .map(|a| a.parse().map_err(|_| EngineError::Replay(format!("bad number {a:?}"))))
        .collect()
}

fn message(err: EngineError) -> String {
    match err {
        EngineError::Replay(msg) => msg,
        other => other.to_string(),
    }
}

fn capitalized(class: CharacterClass) -> String {
    let name = class.as_str();
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn joined<T: fmt::Display>(values: &[T]) -> String {
    values.iter().map(ToString::to_string).collect::<Vec<_>>().join(",")
}

impl fmt::Display for Replay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for deck in &self.header.decks {
            writeln!(f, "deck({},{})", capitalized(deck.class), deck.pattern().join(","))?;
        }
        if !self.header.random.is_empty() {
            writeln!(f, "random({})", joined(&self.header.random))?;
        }
        for kept in &self.header.keeps {
            writeln!(f, "keep({})", joined(kept))?;
        }
        for recorded in &self.moves {
            writeln!(f, "{}", recorded.mv)?;
            if !recorded.random.is_empty() {
                writeln!(f, "random({})", joined(&recorded.random))?;
            }
        }
        Ok(())
    }
}

//! Die kinds, symbols, pools, and rolling.
//!
//! Seven narrative die kinds each carry a fixed list of faces. A face shows
//! zero, one, or two symbols. Rolling a pool draws one face per die and
//! tallies the symbols that come up.

pub mod faces;
pub mod pool;
pub mod roll;

pub use faces::{Face, faces};
pub use pool::{DicePool, parse_dice_pool};
pub use roll::{
    RollEntry, RollResult, Tally, roll_from_string, roll_from_string_default, roll_kinds,
    roll_pool, roll_pool_with,
};

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DiceError;

/// A narrative die type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DieKind {
    /// Green eight-sided die: success and advantage.
    Ability,
    /// Yellow twelve-sided die: success, advantage, and triumph.
    Proficiency,
    /// Purple eight-sided die: failure and threat.
    Difficulty,
    /// Red twelve-sided die: failure, threat, and despair.
    Challenge,
    /// Blue six-sided die.
    Boost,
    /// Black six-sided die.
    Setback,
    /// White twelve-sided die: light and dark side points.
    Force,
}

/// Short code to die kind. Several codes resolve to the same kind.
const ALIASES: &[(&str, DieKind)] = &[
    ("ca", DieKind::Ability),
    ("ab", DieKind::Ability),
    ("pe", DieKind::Proficiency),
    ("pr", DieKind::Proficiency),
    ("di", DieKind::Difficulty),
    ("de", DieKind::Challenge),
    ("ch", DieKind::Challenge),
    ("be", DieKind::Boost),
    ("bo", DieKind::Boost),
    ("co", DieKind::Setback),
    ("se", DieKind::Setback),
    ("fu", DieKind::Force),
    ("fo", DieKind::Force),
];

impl DieKind {
    /// All die kinds in canonical order.
    pub const ALL: [Self; 7] = [
        Self::Ability,
        Self::Proficiency,
        Self::Difficulty,
        Self::Challenge,
        Self::Boost,
        Self::Setback,
        Self::Force,
    ];

    /// Lowercase name of this kind.
    pub fn name(self) -> &'static str {
        match self {
            Self::Ability => "ability",
            Self::Proficiency => "proficiency",
            Self::Difficulty => "difficulty",
            Self::Challenge => "challenge",
            Self::Boost => "boost",
            Self::Setback => "setback",
            Self::Force => "force",
        }
    }

    /// Primary short code used when writing pool notation.
    pub fn code(self) -> &'static str {
        match self {
            Self::Ability => "ca",
            Self::Proficiency => "pe",
            Self::Difficulty => "di",
            Self::Challenge => "de",
            Self::Boost => "be",
            Self::Setback => "co",
            Self::Force => "fu",
        }
    }

    /// Every short code that resolves to this kind, primary code first.
    pub fn aliases(self) -> Vec<&'static str> {
        ALIASES
            .iter()
            .filter(|(_, kind)| *kind == self)
            .map(|(code, _)| *code)
            .collect()
    }

    /// Resolve a two-letter code through the alias table.
    pub fn from_code(code: &str) -> Option<Self> {
        ALIASES
            .iter()
            .find(|(c, _)| *c == code)
            .map(|(_, kind)| *kind)
    }

    /// Like [`DieKind::from_code`], but reports unknown codes as errors.
    pub fn from_code_strict(code: &str) -> Result<Self, DiceError> {
        Self::from_code(code).ok_or_else(|| DiceError::UnknownDieCode(code.to_string()))
    }

    /// The fixed face list of this kind.
    pub fn faces(self) -> &'static [Face] {
        faces(self)
    }
}

impl std::fmt::Display for DieKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DieKind {
    type Err = DiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == lower)
            .ok_or_else(|| DiceError::UnknownDieKind(s.to_string()))
    }
}

/// A symbol printed on a die face.
///
/// Declaration order is tally order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Symbol {
    /// Moves the check toward passing.
    Success,
    /// A positive side effect.
    Advantage,
    /// A critical success; also counts toward success.
    Triumph,
    /// Cancels one success.
    Failure,
    /// A negative side effect.
    Threat,
    /// A critical failure; also counts toward failure.
    Despair,
    /// A light side Force point.
    Light,
    /// A dark side Force point.
    Dark,
}

impl Symbol {
    /// All symbols in tally order.
    pub const ALL: [Self; 8] = [
        Self::Success,
        Self::Advantage,
        Self::Triumph,
        Self::Failure,
        Self::Threat,
        Self::Despair,
        Self::Light,
        Self::Dark,
    ];

    /// Lowercase name of this symbol, as it appears in face outcomes.
    pub fn name(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Advantage => "advantage",
            Self::Triumph => "triumph",
            Self::Failure => "failure",
            Self::Threat => "threat",
            Self::Despair => "despair",
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Whether this symbol favours the acting character.
    pub fn is_positive(self) -> bool {
        matches!(self, Self::Success | Self::Advantage | Self::Triumph)
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Symbol {
    type Err = DiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|symbol| symbol.name() == lower)
            .ok_or_else(|| DiceError::UnknownSymbol(s.to_string()))
    }
}

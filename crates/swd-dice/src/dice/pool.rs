//! Dice pool construction and notation parsing.

use std::convert::Infallible;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::DieKind;

/// A digit run immediately followed by two lowercase letters, e.g. `2ca`.
static DIE_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([0-9]+)([a-z]{2})").expect("valid regex"));

/// A collection of dice to be rolled together, counted per kind.
///
/// Kinds keep the order in which they were first added, and every stored
/// count is positive. Serialized as a list of `(kind, count)` pairs, which
/// are summed and filtered the same way on the way back in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<(DieKind, u32)>", into = "Vec<(DieKind, u32)>")]
pub struct DicePool {
    entries: Vec<(DieKind, u32)>,
}

impl DicePool {
    /// Create an empty dice pool.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Add `count` dice of the given kind.
    ///
    /// Counts for a kind already in the pool are summed. A zero count
    /// leaves the pool unchanged.
    pub fn add(mut self, kind: DieKind, count: u32) -> Self {
        self.push(kind, count);
        self
    }

    fn push(&mut self, kind: DieKind, count: u32) {
        if count == 0 {
            return;
        }
        match self.entries.iter_mut().find(|(k, _)| *k == kind) {
            Some((_, existing)) => *existing = existing.saturating_add(count),
            None => self.entries.push((kind, count)),
        }
    }

    /// How many dice of this kind are in the pool.
    pub fn get(&self, kind: DieKind) -> u32 {
        self.entries
            .iter()
            .find(|(k, _)| *k == kind)
            .map_or(0, |(_, count)| *count)
    }

    /// Whether the pool holds any dice of this kind.
    pub fn contains(&self, kind: DieKind) -> bool {
        self.get(kind) > 0
    }

    /// Total number of dice across all kinds.
    pub fn total_dice(&self) -> u64 {
        self.entries.iter().map(|(_, count)| u64::from(*count)).sum()
    }

    /// Number of distinct kinds in the pool.
    pub fn kinds(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the pool has no dice.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(kind, count)` in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (DieKind, u32)> + '_ {
        self.entries.iter().copied()
    }
}

impl std::fmt::Display for DicePool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parts: Vec<String> = self
            .entries
            .iter()
            .map(|(kind, count)| format!("{count}{}", kind.code()))
            .collect();
        f.write_str(&parts.join(","))
    }
}

impl FromStr for DicePool {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(parse_dice_pool(s))
    }
}

impl FromIterator<(DieKind, u32)> for DicePool {
    fn from_iter<I: IntoIterator<Item = (DieKind, u32)>>(iter: I) -> Self {
        let mut pool = Self::new();
        for (kind, count) in iter {
            pool.push(kind, count);
        }
        pool
    }
}

impl From<Vec<(DieKind, u32)>> for DicePool {
    fn from(entries: Vec<(DieKind, u32)>) -> Self {
        entries.into_iter().collect()
    }
}

impl From<DicePool> for Vec<(DieKind, u32)> {
    fn from(pool: DicePool) -> Self {
        pool.entries
    }
}

/// Extract a dice pool from free-form text.
///
/// Every non-overlapping `<digits><two lowercase letters>` occurrence is
/// read as a count and a die code; everything else in the input is
/// ignored. Unknown codes and counts too large to represent are logged
/// and skipped, so this never fails. Empty or unparseable input gives an
/// empty pool.
///
/// A kind takes its place in the pool the first time it is mentioned,
/// even with a zero count, but only kinds whose summed count is positive
/// end up in the pool.
pub fn parse_dice_pool(input: &str) -> DicePool {
    let mut seen: Vec<(DieKind, u32)> = Vec::new();

    for caps in DIE_TOKEN.captures_iter(input) {
        let (_, [digits, code]) = caps.extract();

        let Some(kind) = DieKind::from_code(code) else {
            tracing::warn!(code, "unknown dice type");
            continue;
        };

        match digits.parse::<u32>() {
            Ok(count) => match seen.iter_mut().find(|(k, _)| *k == kind) {
                Some((_, existing)) => *existing = existing.saturating_add(count),
                None => seen.push((kind, count)),
            },
            Err(_) => tracing::warn!(count = digits, %kind, "dice count out of range"),
        }
    }

    seen.into_iter().collect()
}

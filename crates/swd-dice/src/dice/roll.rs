//! Rolling a pool and aggregating the symbols that come up.

use std::collections::BTreeMap;

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::faces::Face;
use super::pool::{DicePool, parse_dice_pool};
use super::{DieKind, Symbol};

/// Symbol counts across a whole roll.
///
/// All eight symbols are always present; a symbol that never came up
/// counts as zero rather than being missing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "BTreeMap<Symbol, u32>", into = "BTreeMap<Symbol, u32>")]
pub struct Tally {
    counts: [u32; 8],
}

impl Tally {
    /// A tally with every symbol at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// How many times a symbol came up.
    pub fn get(&self, symbol: Symbol) -> u32 {
        self.counts[symbol.index()]
    }

    /// Count one more occurrence of a symbol.
    pub fn add(&mut self, symbol: Symbol) {
        let slot = &mut self.counts[symbol.index()];
        *slot = slot.saturating_add(1);
    }

    /// Count every symbol on a face.
    pub fn add_face(&mut self, face: &Face) {
        for symbol in face.symbols() {
            self.add(*symbol);
        }
    }

    /// Iterate over all eight `(symbol, count)` pairs in tally order.
    pub fn iter(&self) -> impl Iterator<Item = (Symbol, u32)> + '_ {
        Symbol::ALL.into_iter().map(|s| (s, self.get(s)))
    }

    /// Total symbols counted.
    pub fn total(&self) -> u64 {
        self.counts.iter().map(|c| u64::from(*c)).sum()
    }

    /// Successes left after failures cancel them. Triumph counts as a
    /// success and despair as a failure.
    pub fn net_success(&self) -> i64 {
        i64::from(self.get(Symbol::Success)) + i64::from(self.get(Symbol::Triumph))
            - i64::from(self.get(Symbol::Failure))
            - i64::from(self.get(Symbol::Despair))
    }

    /// Advantage left after threat cancels it; negative means net threat.
    pub fn net_advantage(&self) -> i64 {
        i64::from(self.get(Symbol::Advantage)) - i64::from(self.get(Symbol::Threat))
    }

    /// Whether at least one success survives cancellation.
    pub fn is_success(&self) -> bool {
        self.net_success() > 0
    }
}

impl From<BTreeMap<Symbol, u32>> for Tally {
    fn from(map: BTreeMap<Symbol, u32>) -> Self {
        let mut tally = Self::new();
        for (symbol, count) in map {
            tally.counts[symbol.index()] = count;
        }
        tally
    }
}

impl From<Tally> for BTreeMap<Symbol, u32> {
    fn from(tally: Tally) -> Self {
        tally.iter().collect()
    }
}

impl std::fmt::Display for Tally {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parts: Vec<String> = self.iter().map(|(s, n)| format!("{s}: {n}")).collect();
        f.write_str(&parts.join(", "))
    }
}

/// The outcome of one die.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollEntry {
    /// The kind of die that was rolled.
    pub kind: DieKind,
    /// The face outcome string, verbatim (empty for a blank face).
    pub face: String,
    /// Symbols the face contributed to the tally.
    pub symbols: Vec<Symbol>,
}

impl RollEntry {
    fn new(kind: DieKind, face: &Face) -> Self {
        Self {
            kind,
            face: face.label().to_string(),
            symbols: face.symbols().to_vec(),
        }
    }

    /// True when the die landed on a blank face.
    pub fn is_blank(&self) -> bool {
        self.face.is_empty()
    }
}

/// The result of rolling an entire dice pool.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollResult {
    /// Symbol totals across the pool.
    pub tally: Tally,
    /// One entry per die, in pool order and then draw order.
    pub log: Vec<RollEntry>,
}

impl RollResult {
    /// Number of dice rolled.
    pub fn count(&self) -> usize {
        self.log.len()
    }

    /// Whether nothing was rolled.
    pub fn is_empty(&self) -> bool {
        self.log.is_empty()
    }

    /// Log entries for a single die kind.
    pub fn by_kind(&self, kind: DieKind) -> Vec<&RollEntry> {
        self.log.iter().filter(|e| e.kind == kind).collect()
    }

    fn push(&mut self, kind: DieKind, face: &Face) {
        self.tally.add_face(face);
        self.log.push(RollEntry::new(kind, face));
    }
}

impl std::fmt::Display for RollResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let faces: Vec<String> = self
            .log
            .iter()
            .map(|e| {
                if e.is_blank() {
                    format!("{}: blank", e.kind)
                } else {
                    format!("{}: {}", e.kind, e.face)
                }
            })
            .collect();
        write!(f, "[{}] => {}", faces.join(", "), self.tally)
    }
}

/// Roll a pool, choosing faces with `pick`.
///
/// `pick(kind, sides)` must return an index below `sides`; out-of-range
/// indices wrap around. This is the seam for deterministic face
/// selection; [`roll_pool`] supplies a uniform random pick.
pub fn roll_pool_with<F>(pool: &DicePool, mut pick: F) -> RollResult
where
    F: FnMut(DieKind, usize) -> usize,
{
    let mut result = RollResult::default();
    for (kind, count) in pool.iter() {
        let faces = kind.faces();
        for _ in 0..count {
            let face = &faces[pick(kind, faces.len()) % faces.len()];
            result.push(kind, face);
        }
    }
    tracing::debug!(dice = result.count(), "rolled pool");
    result
}

/// Roll every die in the pool once, each face equally likely.
pub fn roll_pool<R: Rng + ?Sized>(pool: &DicePool, rng: &mut R) -> RollResult {
    roll_pool_with(pool, |_, sides| rng.random_range(0..sides))
}

/// Parse `input` as pool notation and roll it.
pub fn roll_from_string<R: Rng + ?Sized>(input: &str, rng: &mut R) -> RollResult {
    roll_pool(&parse_dice_pool(input), rng)
}

/// [`roll_from_string`] using the thread-local generator.
pub fn roll_from_string_default(input: &str) -> RollResult {
    roll_from_string(input, &mut rand::rng())
}

/// Roll dice given by kind name rather than by [`DieKind`].
///
/// Names that do not match a known kind are logged and skipped. Kinds
/// are rolled in the order given.
pub fn roll_kinds<'a, I, R>(dice: I, rng: &mut R) -> RollResult
where
    I: IntoIterator<Item = (&'a str, u32)>,
    R: Rng + ?Sized,
{
    let mut pool = DicePool::new();
    for (name, count) in dice {
        match name.parse::<DieKind>() {
            Ok(kind) => pool = pool.add(kind, count),
            Err(_) => tracing::warn!(kind = name, "unknown dice type"),
        }
    }
    roll_pool(&pool, rng)
}

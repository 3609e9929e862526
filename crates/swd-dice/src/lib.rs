//! Narrative dice engine for Star Wars: Edge of the Empire.
//!
//! Parses compact dice-pool notation (`"2ca,2pe,3di,1be,2co"`), rolls each
//! die against its fixed face table, and aggregates the symbols that come
//! up into a tally alongside an ordered per-die roll log.

pub mod config;
pub mod dice;
pub mod error;
pub mod roller;

pub use config::RollConfig;
pub use dice::{
    DicePool, DieKind, Face, RollEntry, RollResult, Symbol, Tally, faces, parse_dice_pool,
    roll_from_string, roll_from_string_default, roll_kinds, roll_pool, roll_pool_with,
};
pub use error::{DiceError, DiceResult};
pub use roller::Roller;

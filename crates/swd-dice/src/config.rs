//! Configuration for a [`crate::Roller`].

/// Default cap on dice per roll.
pub const DEFAULT_MAX_DICE: u32 = 100;

/// Configuration for a roller.
#[derive(Debug, Clone)]
pub struct RollConfig {
    /// RNG seed for reproducible rolls; `None` seeds from OS entropy.
    pub seed: Option<u64>,
    /// Most dice a single guarded roll may contain.
    pub max_dice: u32,
}

impl Default for RollConfig {
    fn default() -> Self {
        Self {
            seed: None,
            max_dice: DEFAULT_MAX_DICE,
        }
    }
}

impl RollConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the dice cap (at least 1).
    pub fn with_max_dice(mut self, max_dice: u32) -> Self {
        self.max_dice = max_dice.max(1);
        self
    }
}

//! A roller owning its random number generator.

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::RollConfig;
use crate::dice::{DicePool, RollResult, parse_dice_pool, roll_pool};
use crate::error::{DiceError, DiceResult};

/// Rolls pools with a seeded or entropy-seeded generator.
#[derive(Debug, Clone)]
pub struct Roller {
    rng: StdRng,
    max_dice: u32,
}

impl Roller {
    /// Create a roller from a configuration.
    pub fn new(config: &RollConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            rng,
            max_dice: config.max_dice,
        }
    }

    /// Create a roller with a fixed seed and default limits.
    pub fn seeded(seed: u64) -> Self {
        Self::new(&RollConfig::default().with_seed(seed))
    }

    /// The dice cap enforced by [`Roller::try_roll`].
    pub fn max_dice(&self) -> u32 {
        self.max_dice
    }

    /// Roll a pool without any size check.
    pub fn roll(&mut self, pool: &DicePool) -> RollResult {
        roll_pool(pool, &mut self.rng)
    }

    /// Roll a pool, refusing pools larger than the configured cap.
    pub fn try_roll(&mut self, pool: &DicePool) -> DiceResult<RollResult> {
        let count = pool.total_dice();
        if count > u64::from(self.max_dice) {
            return Err(DiceError::PoolTooLarge {
                count,
                max: self.max_dice,
            });
        }
        Ok(self.roll(pool))
    }

    /// Parse notation and roll it through [`Roller::try_roll`].
    pub fn roll_str(&mut self, input: &str) -> DiceResult<RollResult> {
        self.try_roll(&parse_dice_pool(input))
    }
}

//! Error types for the dice engine.

/// Errors raised by strict conversions and guarded rolls.
///
/// Parsing and rolling themselves never fail: unknown codes and kinds are
/// logged and skipped. These variants only surface from the strict
/// `FromStr` conversions and from [`crate::Roller::try_roll`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DiceError {
    /// A die kind name did not match any known kind.
    #[error("unknown die kind: {0}")]
    UnknownDieKind(String),

    /// A short die code did not match any entry in the alias table.
    #[error("unknown die code: {0}")]
    UnknownDieCode(String),

    /// A symbol name did not match any known symbol.
    #[error("unknown symbol: {0}")]
    UnknownSymbol(String),

    /// The pool holds more dice than the roller allows.
    #[error("pool has {count} dice, the limit is {max}")]
    PoolTooLarge {
        /// Dice in the rejected pool.
        count: u64,
        /// Configured limit.
        max: u32,
    },
}

/// Convenience result type for dice operations.
pub type DiceResult<T> = Result<T, DiceError>;

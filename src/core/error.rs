//! Errors raised when constructing validated rule values.

use thiserror::Error;

/// A value outside the closed domain of the rules.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuleError {
    /// Position outside `0..=30`.
    #[error("position {0} is outside the board (expected 0..=30)")]
    InvalidPosition(u8),

    /// Step count that does not correspond to any cast outcome.
    #[error("{0} is not a cast outcome (expected -1 or 1..=5)")]
    InvalidOutcome(i8),

    /// Outcome name that is not one of `backdo`, `do`, `gae`, `geol`, `yut`, `mo`.
    #[error("unknown cast outcome name '{0}'")]
    UnknownOutcomeName(String),
}

//! Board positions.
//!
//! A position is one of 31 values:
//! - `0`: off-board, the piece has not entered yet
//! - `1..=29`: track cells
//! - `30`: finished
//!
//! The type is a validated newtype so that every `Position` in the
//! engine is inside the state space by construction.

use serde::{Deserialize, Serialize};

use super::error::RuleError;

/// Number of distinct positions, including off-board and finished.
pub const POSITION_COUNT: usize = 31;

/// A position in the closed state space `0..=30`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Position(u8);

impl Position {
    /// The off-board position (piece not yet entered).
    pub const OFF_BOARD: Position = Position(0);

    /// The finished position.
    pub const FINISHED: Position = Position(30);

    /// Create a position, rejecting values outside `0..=30`.
    pub fn new(value: u8) -> Result<Self, RuleError> {
        if usize::from(value) < POSITION_COUNT {
            Ok(Self(value))
        } else {
            Err(RuleError::InvalidPosition(value))
        }
    }

    /// Create a position from a value known to be valid.
    ///
    /// # Panics
    ///
    /// Panics if `value > 30`. Use [`Position::new`] for untrusted input.
    #[must_use]
    pub fn at(value: u8) -> Self {
        assert!(
            usize::from(value) < POSITION_COUNT,
            "position {value} is outside the board"
        );
        Self(value)
    }

    /// Raw cell number.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Index for dense per-position tables.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Whether the piece has not entered the board.
    #[must_use]
    pub const fn is_off_board(self) -> bool {
        self.0 == 0
    }

    /// Whether the piece has completed the run.
    #[must_use]
    pub const fn is_finished(self) -> bool {
        self.0 == 30
    }

    /// Whether the piece sits on a track cell (neither off-board nor finished).
    #[must_use]
    pub const fn is_on_track(self) -> bool {
        self.0 > 0 && self.0 < 30
    }

    /// Iterate over every position, off-board first and finished last.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..POSITION_COUNT as u8).map(Position)
    }
}

impl TryFrom<u8> for Position {
    type Error = RuleError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Position> for u8 {
    fn from(position: Position) -> Self {
        position.0
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_accepts_state_space() {
        for value in 0..=30u8 {
            assert_eq!(Position::new(value).unwrap().get(), value);
        }
        assert_eq!(Position::new(31), Err(RuleError::InvalidPosition(31)));
        assert_eq!(Position::new(255), Err(RuleError::InvalidPosition(255)));
    }

    #[test]
    #[should_panic(expected = "outside the board")]
    fn test_at_panics_out_of_range() {
        let _ = Position::at(31);
    }

    #[test]
    fn test_classification() {
        assert!(Position::OFF_BOARD.is_off_board());
        assert!(!Position::OFF_BOARD.is_on_track());
        assert!(Position::FINISHED.is_finished());
        assert!(!Position::FINISHED.is_on_track());
        assert!(Position::at(1).is_on_track());
        assert!(Position::at(29).is_on_track());
    }

    #[test]
    fn test_all_covers_every_position() {
        let all: Vec<_> = Position::all().collect();
        assert_eq!(all.len(), POSITION_COUNT);
        assert_eq!(all[0], Position::OFF_BOARD);
        assert_eq!(all[30], Position::FINISHED);
    }

    #[test]
    fn test_serde_rejects_out_of_range() {
        let json = serde_json::to_string(&Position::at(15)).unwrap();
        assert_eq!(json, "15");
        assert!(serde_json::from_str::<Position>("31").is_err());
    }
}

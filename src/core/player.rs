//! Side identification.
//!
//! The game has exactly two sides. Turn ownership alternates strictly by
//! turn-number parity: side 0 moves on even turns, side 1 on odd turns.

use serde::{Deserialize, Serialize};

/// One of the two players.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// Moves first (even turns).
    First,
    /// Moves second (odd turns).
    Second,
}

impl Side {
    /// Both sides in seating order.
    pub const BOTH: [Side; 2] = [Side::First, Side::Second];

    /// The side to move on a given turn.
    #[must_use]
    pub const fn for_turn(turn: u32) -> Self {
        if turn % 2 == 0 {
            Side::First
        } else {
            Side::Second
        }
    }

    /// Winner index as used in game results (0 or 1).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Side::First => 0,
            Side::Second => 1,
        }
    }

    /// The other side.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Side::First => Side::Second,
            Side::Second => Side::First,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.index() + 1)
    }
}

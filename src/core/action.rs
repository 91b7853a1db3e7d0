//! Agent actions and their resolved results.

use serde::{Deserialize, Serialize};

use super::outcome::CastOutcome;
use super::pieces::PieceSet;

/// A decision returned by an agent.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Action {
    /// Index of the piece to move (0..4).
    pub piece: usize,

    /// Held outcome to spend on the move.
    pub outcome: CastOutcome,

    /// Take the diagonal at a junction (see the board module).
    pub shortcut: bool,

    /// Free-form debug note, shown by printing sinks.
    pub note: String,
}

impl Action {
    /// Create an action with an empty note.
    #[must_use]
    pub fn new(piece: usize, outcome: CastOutcome, shortcut: bool) -> Self {
        Self {
            piece,
            outcome,
            shortcut,
            note: String::new(),
        }
    }

    /// Attach a debug note.
    #[must_use]
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = note.into();
        self
    }
}

/// Outcome of resolving an action against the board.
///
/// `own` and `opponent` are always from the mover's perspective unless
/// the result has been [`mirrored`](MoveResult::mirrored).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveResult {
    /// Whether the move was legal. Illegal results carry the input positions.
    pub legal: bool,

    /// Mover's pieces after the move.
    pub own: PieceSet,

    /// Other side's pieces after the move.
    pub opponent: PieceSet,

    /// Number of opponent pieces sent back off-board.
    pub captured: u8,
}

impl MoveResult {
    /// A rejected move: positions unchanged, nothing captured.
    #[must_use]
    pub const fn illegal(own: PieceSet, opponent: PieceSet) -> Self {
        Self {
            legal: false,
            own,
            opponent,
            captured: 0,
        }
    }

    /// The same result seen from the other side.
    #[must_use]
    pub const fn mirrored(&self) -> Self {
        Self {
            legal: self.legal,
            own: self.opponent,
            opponent: self.own,
            captured: self.captured,
        }
    }
}

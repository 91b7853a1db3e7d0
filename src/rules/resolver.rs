//! Move legality and resolution.

use thiserror::Error;

use crate::board::TransitionTable;
use crate::core::{CastOutcome, MoveResult, PieceSet, N_PIECES};

/// Why a requested move was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum IllegalMove {
    /// Piece index outside `0..4`.
    #[error("piece {piece} does not exist")]
    NoSuchPiece {
        /// Requested index.
        piece: usize,
    },

    /// The outcome is not among the available throws.
    #[error("outcome '{outcome}' is not available")]
    OutcomeNotAvailable {
        /// Requested outcome.
        outcome: CastOutcome,
    },

    /// The piece has already finished.
    #[error("piece {piece} has already finished")]
    PieceFinished {
        /// Requested piece.
        piece: usize,
    },

    /// `backdo` on an off-board piece while another own piece is on the track.
    #[error("piece {piece} is off the board and cannot move backward while another piece is on the track")]
    BackdoFromStart {
        /// Requested piece.
        piece: usize,
    },
}

/// Resolves moves against a transition table.
#[derive(Clone, Copy, Debug)]
pub struct MoveResolver<'a> {
    table: &'a TransitionTable,
}

impl<'a> MoveResolver<'a> {
    /// Resolve against a specific table.
    #[must_use]
    pub const fn new(table: &'a TransitionTable) -> Self {
        Self { table }
    }

    /// The transition table this resolver uses.
    #[must_use]
    pub const fn table(&self) -> &'a TransitionTable {
        self.table
    }

    /// Check the rule conditions in order; the first failure wins.
    ///
    /// # Panics
    ///
    /// Panics if `piece >= 4`. Range-check agent input before calling.
    pub fn check(&self, own: &PieceSet, piece: usize, outcome: CastOutcome) -> Result<(), IllegalMove> {
        assert!(piece < N_PIECES, "piece index {piece} out of range");
        let current = own[piece];

        if current.is_finished() {
            return Err(IllegalMove::PieceFinished { piece });
        }
        if current.is_off_board() && outcome.is_backward() && own.any_on_track_except(piece) {
            return Err(IllegalMove::BackdoFromStart { piece });
        }
        Ok(())
    }

    /// Resolve a move: legality, both sides' new positions, and captures.
    ///
    /// Inputs are never modified. An illegal move returns the inputs with
    /// `legal == false`.
    ///
    /// # Panics
    ///
    /// Panics if `piece >= 4`.
    #[must_use]
    pub fn resolve(
        &self,
        own: &PieceSet,
        opponent: &PieceSet,
        piece: usize,
        outcome: CastOutcome,
        shortcut: bool,
    ) -> MoveResult {
        if self.check(own, piece, outcome).is_err() {
            return MoveResult::illegal(*own, *opponent);
        }

        let destination = self.table.next_position(own[piece], outcome, shortcut);
        let moved = own.with_moved(&own.group_of(piece), destination);

        if destination.is_finished() || destination.is_off_board() {
            return MoveResult {
                legal: true,
                own: moved,
                opponent: *opponent,
                captured: 0,
            };
        }

        let (opponent, captured) = opponent.with_captured_at(destination);
        MoveResult {
            legal: true,
            own: moved,
            opponent,
            captured,
        }
    }
}

impl Default for MoveResolver<'static> {
    fn default() -> Self {
        Self::new(TransitionTable::standard())
    }
}

/// Resolve a move on the standard board.
#[must_use]
pub fn resolve(
    own: &PieceSet,
    opponent: &PieceSet,
    piece: usize,
    outcome: CastOutcome,
    shortcut: bool,
) -> MoveResult {
    MoveResolver::default().resolve(own, opponent, piece, outcome, shortcut)
}

//! Per-side piece positions.
//!
//! A `PieceSet` is the ordered tuple of four positions owned by one side.
//! Indices are piece identities: they never change during a game and are
//! the addressing scheme for "which piece to move".

use std::ops::Index;

use serde::{Deserialize, Serialize};

use super::error::RuleError;
use super::position::Position;

/// Number of pieces per side.
pub const N_PIECES: usize = 4;

/// Positions of one side's four pieces.
///
/// Immutable by API: moves produce a new set via [`PieceSet::with_moved`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PieceSet([Position; N_PIECES]);

impl PieceSet {
    /// All four pieces off-board.
    #[must_use]
    pub const fn start() -> Self {
        Self([Position::OFF_BOARD; N_PIECES])
    }

    /// Build from explicit positions.
    #[must_use]
    pub const fn new(positions: [Position; N_PIECES]) -> Self {
        Self(positions)
    }

    /// Build from raw cell numbers, validating each.
    pub fn from_cells(cells: [u8; N_PIECES]) -> Result<Self, RuleError> {
        let mut positions = [Position::OFF_BOARD; N_PIECES];
        for (slot, cell) in positions.iter_mut().zip(cells) {
            *slot = Position::new(cell)?;
        }
        Ok(Self(positions))
    }

    /// Positions in piece order.
    #[must_use]
    pub const fn positions(&self) -> &[Position; N_PIECES] {
        &self.0
    }

    /// Raw cell numbers in piece order.
    #[must_use]
    pub fn cells(&self) -> [u8; N_PIECES] {
        self.0.map(Position::get)
    }

    /// Position of one piece, or `None` for an out-of-range index.
    #[must_use]
    pub fn get(&self, piece: usize) -> Option<Position> {
        self.0.get(piece).copied()
    }

    /// Whether every piece has finished.
    #[must_use]
    pub fn all_finished(&self) -> bool {
        self.0.iter().all(|p| p.is_finished())
    }

    /// Whether any piece other than `except` is on a track cell.
    #[must_use]
    pub fn any_on_track_except(&self, except: usize) -> bool {
        self.0
            .iter()
            .enumerate()
            .any(|(i, p)| i != except && p.is_on_track())
    }

    /// Number of pieces at a position.
    #[must_use]
    pub fn count_at(&self, position: Position) -> usize {
        self.0.iter().filter(|&&p| p == position).count()
    }

    /// Number of finished pieces.
    #[must_use]
    pub fn finished_count(&self) -> usize {
        self.count_at(Position::FINISHED)
    }

    /// Indices of the pieces that move together when `piece` is chosen.
    ///
    /// An off-board piece moves alone; a piece on the board carries every
    /// own piece stacked on the same cell.
    #[must_use]
    pub fn group_of(&self, piece: usize) -> [bool; N_PIECES] {
        let current = self.0[piece];
        let mut group = [false; N_PIECES];
        for (i, slot) in group.iter_mut().enumerate() {
            *slot = if current.is_off_board() {
                i == piece
            } else {
                self.0[i] == current
            };
        }
        group
    }

    /// A new set with every piece in `group` moved to `destination`.
    #[must_use]
    pub fn with_moved(&self, group: &[bool; N_PIECES], destination: Position) -> Self {
        let mut positions = self.0;
        for (position, &moves) in positions.iter_mut().zip(group) {
            if moves {
                *position = destination;
            }
        }
        Self(positions)
    }

    /// A new set with every piece at `cell` sent back off-board, plus how many were sent.
    #[must_use]
    pub fn with_captured_at(&self, cell: Position) -> (Self, u8) {
        let mut positions = self.0;
        let mut captured = 0;
        for position in &mut positions {
            if *position == cell {
                *position = Position::OFF_BOARD;
                captured += 1;
            }
        }
        (Self(positions), captured)
    }

    /// Iterate over positions in piece order.
    pub fn iter(&self) -> impl Iterator<Item = Position> + '_ {
        self.0.iter().copied()
    }
}

impl Index<usize> for PieceSet {
    type Output = Position;

    fn index(&self, piece: usize) -> &Position {
        &self.0[piece]
    }
}

impl std::fmt::Display for PieceSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [a, b, c, d] = self.cells();
        write!(f, "({a}, {b}, {c}, {d})")
    }
}

//! Precomputed transition table.
//!
//! The domain is tiny (31 positions, 6 outcomes, 2 flags), so every walk
//! is computed once and lookups are O(1). Agents call this for every
//! candidate move they consider.

use std::sync::OnceLock;

use crate::core::{CastOutcome, Position, POSITION_COUNT};

use super::topology::walk;

/// Dense `(position, outcome, shortcut) -> position` lookup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransitionTable {
    next: [[[Position; 2]; 6]; POSITION_COUNT],
}

impl TransitionTable {
    /// Build the table by walking every entry.
    #[must_use]
    pub fn new() -> Self {
        let mut next = [[[Position::OFF_BOARD; 2]; 6]; POSITION_COUNT];
        for position in Position::all() {
            for outcome in CastOutcome::ALL {
                for shortcut in [false, true] {
                    next[position.index()][outcome.index()][usize::from(shortcut)] =
                        walk(position, outcome, shortcut);
                }
            }
        }
        Self { next }
    }

    /// The shared, read-only table for the standard board.
    pub fn standard() -> &'static TransitionTable {
        static TABLE: OnceLock<TransitionTable> = OnceLock::new();
        TABLE.get_or_init(TransitionTable::new)
    }

    /// Destination of a cast from `position`.
    #[must_use]
    pub fn next_position(&self, position: Position, outcome: CastOutcome, shortcut: bool) -> Position {
        self.next[position.index()][outcome.index()][usize::from(shortcut)]
    }

    /// Whether the shortcut flag changes the destination.
    #[must_use]
    pub fn has_choice(&self, position: Position, outcome: CastOutcome) -> bool {
        self.next_position(position, outcome, false) != self.next_position(position, outcome, true)
    }
}

impl Default for TransitionTable {
    fn default() -> Self {
        Self::new()
    }
}

/// Destination of a cast on the standard board.
#[must_use]
pub fn next_position(position: Position, outcome: CastOutcome, shortcut: bool) -> Position {
    TransitionTable::standard().next_position(position, outcome, shortcut)
}

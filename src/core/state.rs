//! Decision-point snapshots.
//!
//! ## AvailableThrows
//!
//! The insertion-ordered multiset of cast outcomes a side still holds
//! within its turn. Only the turn engine consumes or extends it; agents
//! see a copy.
//!
//! ## GameState
//!
//! The immutable view handed to an agent at each decision point:
//! `(turn, own, opponent, available)`. It is built fresh for every
//! decision and never aliases engine-owned state.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::outcome::CastOutcome;
use super::pieces::PieceSet;
use super::player::Side;

/// Outcomes cast but not yet used within the current turn.
///
/// SmallVec keeps the common case (a handful of throws) off the heap.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AvailableThrows(SmallVec<[CastOutcome; 8]>);

impl AvailableThrows {
    /// No throws.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether at least one copy of `outcome` is held.
    #[must_use]
    pub fn contains(&self, outcome: CastOutcome) -> bool {
        self.0.contains(&outcome)
    }

    /// Number of throws held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no throws remain.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Throws in the order they were cast.
    #[must_use]
    pub fn as_slice(&self) -> &[CastOutcome] {
        &self.0
    }

    /// Iterate over held throws in cast order.
    pub fn iter(&self) -> impl Iterator<Item = CastOutcome> + '_ {
        self.0.iter().copied()
    }

    /// Held outcomes with duplicates removed, in first-cast order.
    #[must_use]
    pub fn distinct(&self) -> SmallVec<[CastOutcome; 6]> {
        let mut seen = SmallVec::new();
        for outcome in self.iter() {
            if !seen.contains(&outcome) {
                seen.push(outcome);
            }
        }
        seen
    }

    /// Remove the first copy of `outcome`; returns whether one was held.
    pub(crate) fn consume(&mut self, outcome: CastOutcome) -> bool {
        match self.0.iter().position(|&held| held == outcome) {
            Some(index) => {
                self.0.remove(index);
                true
            }
            None => false,
        }
    }

    /// Append a freshly cast chain.
    pub(crate) fn extend(&mut self, cast: &[CastOutcome]) {
        self.0.extend_from_slice(cast);
    }
}

impl FromIterator<CastOutcome> for AvailableThrows {
    fn from_iter<I: IntoIterator<Item = CastOutcome>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl From<&[CastOutcome]> for AvailableThrows {
    fn from(outcomes: &[CastOutcome]) -> Self {
        Self(SmallVec::from_slice(outcomes))
    }
}

/// Snapshot exposed to the acting agent.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameState {
    /// Turn number (starts at 0). Its parity selects the acting side.
    pub turn: u32,

    /// The acting side's pieces.
    pub own: PieceSet,

    /// The other side's pieces.
    pub opponent: PieceSet,

    /// Outcomes the acting side may still use this turn.
    pub available: AvailableThrows,
}

impl GameState {
    /// Create a snapshot.
    #[must_use]
    pub fn new(turn: u32, own: PieceSet, opponent: PieceSet, available: AvailableThrows) -> Self {
        Self {
            turn,
            own,
            opponent,
            available,
        }
    }

    /// The acting side.
    #[must_use]
    pub fn side(&self) -> Side {
        Side::for_turn(self.turn)
    }

    /// The same snapshot seen from the other side.
    #[must_use]
    pub fn mirrored(&self) -> Self {
        Self {
            turn: self.turn,
            own: self.opponent,
            opponent: self.own,
            available: self.available.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_consume_removes_first_copy() {
        let mut throws: AvailableThrows =
            [CastOutcome::Yut, CastOutcome::Do, CastOutcome::Yut].into_iter().collect();

        assert!(throws.consume(CastOutcome::Yut));
        assert_eq!(throws.as_slice(), &[CastOutcome::Do, CastOutcome::Yut]);
        assert!(!throws.consume(CastOutcome::Mo));
        assert_eq!(throws.len(), 2);
    }

    #[test]
    fn test_extend_appends_in_order() {
        let mut throws = AvailableThrows::from(&[CastOutcome::Gae][..]);
        throws.extend(&[CastOutcome::Mo, CastOutcome::Backdo]);
        assert_eq!(
            throws.as_slice(),
            &[CastOutcome::Gae, CastOutcome::Mo, CastOutcome::Backdo]
        );
    }

    #[test]
    fn test_distinct() {
        let throws: AvailableThrows = [CastOutcome::Yut, CastOutcome::Yut, CastOutcome::Do]
            .into_iter()
            .collect();
        assert_eq!(throws.distinct().as_slice(), &[CastOutcome::Yut, CastOutcome::Do]);
    }

    #[test]
    fn test_mirrored_swaps_sides() {
        let own = PieceSet::from_cells([1, 0, 0, 0]).unwrap();
        let opponent = PieceSet::from_cells([0, 2, 0, 0]).unwrap();
        let state = GameState::new(3, own, opponent, AvailableThrows::new());

        let mirrored = state.mirrored();
        assert_eq!(mirrored.own, opponent);
        assert_eq!(mirrored.opponent, own);
        assert_eq!(mirrored.turn, 3);
        assert_eq!(state.side(), Side::Second);
    }

    #[test]
    fn test_state_serialization() {
        let state = GameState::new(
            4,
            PieceSet::from_cells([5, 5, 0, 30]).unwrap(),
            PieceSet::start(),
            [CastOutcome::Mo, CastOutcome::Geol].into_iter().collect(),
        );
        let json = serde_json::to_string(&state).unwrap();
        let deserialized: GameState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, deserialized);
    }
}

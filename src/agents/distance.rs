//! Greedy agent driven by expected casts-to-goal.
//!
//! ## Distance table
//!
//! `expected_casts_to_goal` estimates, for every cell, how many casts a lone
//! piece needs to get home. It runs a fixed number of value-iteration sweeps
//! over cells 29 down to 0, averaging over every cast chain of depth 5 and
//! always taking the diagonal.
//!
//! ## Scoring
//!
//! A candidate move is scored from the resulting positions:
//! the opponent's weighted distance minus our own, plus one if the move
//! captured. Stacked pieces are discounted by [`STACK_MULTIPLIERS`], indexed
//! by how many pieces share the cell. Off-board pieces are never discounted.

use rustc_hash::FxHashMap;

use crate::board::TransitionTable;
use crate::cast::CastModel;
use crate::core::{Action, GameState, PieceSet, Position, POSITION_COUNT};
use crate::engine::{Agent, AgentError};
use crate::rules::MoveResolver;

use super::moves::legal_moves;

/// Discount for a piece sharing its cell with `n - 1` others, indexed by `n`.
pub const STACK_MULTIPLIERS: [f64; 5] = [1.0, 1.0, 0.7, 0.4, 0.3];

const SWEEPS: usize = 10;
const CHAIN_DEPTH: usize = 5;

/// Expected number of casts from each cell to the finish.
#[must_use]
pub fn expected_casts_to_goal(table: &TransitionTable, model: &CastModel) -> [f64; POSITION_COUNT] {
    let sequences = model.enumerate_sequences(CHAIN_DEPTH);
    let mut distance = [0.0; POSITION_COUNT];

    for _ in 0..SWEEPS {
        for start in (0..Position::FINISHED.get()).rev() {
            let start = Position::at(start);
            distance[start.index()] = sequences
                .iter()
                .map(|(chain, p)| {
                    let end = chain
                        .iter()
                        .fold(start, |pos, &outcome| table.next_position(pos, outcome, true));
                    (1.0 + distance[end.index()]) * p
                })
                .sum();
        }
    }
    distance
}

/// Greedy one-ply agent over [`expected_casts_to_goal`].
#[derive(Clone, Debug)]
pub struct DistanceAgent {
    distance: [f64; POSITION_COUNT],
    resolver: MoveResolver<'static>,
}

impl DistanceAgent {
    /// Agent for the standard board and sticks.
    #[must_use]
    pub fn new() -> Self {
        Self {
            distance: expected_casts_to_goal(TransitionTable::standard(), CastModel::standard()),
            resolver: MoveResolver::default(),
        }
    }

    /// Expected casts-to-goal for a cell.
    #[must_use]
    pub fn distance(&self, position: Position) -> f64 {
        self.distance[position.index()]
    }

    fn weighted_distance(&self, pieces: &PieceSet) -> f64 {
        let mut stacks: FxHashMap<Position, usize> = FxHashMap::default();
        for position in pieces.iter() {
            *stacks.entry(position).or_default() += 1;
        }

        pieces
            .iter()
            .map(|position| {
                let multiplier = if position.is_off_board() {
                    1.0
                } else {
                    STACK_MULTIPLIERS[stacks[&position]]
                };
                self.distance(position) * multiplier
            })
            .sum()
    }

    /// Score of the position reached by a move.
    #[must_use]
    pub fn score(&self, own: &PieceSet, opponent: &PieceSet, captured: bool) -> f64 {
        let bonus = if captured { 1.0 } else { 0.0 };
        self.weighted_distance(opponent) - self.weighted_distance(own) + bonus
    }
}

impl Default for DistanceAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl Agent for DistanceAgent {
    fn name(&self) -> String {
        "Distance".to_string()
    }

    fn action(&mut self, state: &GameState) -> Result<Action, AgentError> {
        // Ties go to the higher piece, then the longer outcome, then the diagonal.
        legal_moves(state, &self.resolver)
            .into_iter()
            .map(|(action, result)| {
                let score = self.score(&result.own, &result.opponent, result.captured > 0);
                (score, action)
            })
            .max_by(|(sa, a), (sb, b)| {
                sa.total_cmp(sb)
                    .then(a.piece.cmp(&b.piece))
                    .then(a.outcome.steps().cmp(&b.outcome.steps()))
                    .then(a.shortcut.cmp(&b.shortcut))
            })
            .map(|(score, action)| action.with_note(format!("score {score:.3}")))
            .ok_or(AgentError::NoMove)
    }
}

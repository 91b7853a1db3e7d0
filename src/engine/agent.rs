//! The agent contract.
//!
//! Agents are the pluggable decision makers. The engine calls `action`
//! once per decision point with a snapshot of the state, then notifies
//! both agents of the result, each from its own perspective.

use thiserror::Error;

use crate::core::{Action, GameRng, GameState, MoveResult};

/// A failed decision call. Any failure forfeits the game for that side.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AgentError {
    /// The agent could not produce an action.
    #[error("{0}")]
    Failed(String),

    /// The agent found no legal move for the state.
    #[error("no legal move available")]
    NoMove,

    /// The agent panicked; the payload message is kept.
    #[error("agent panicked: {0}")]
    Panicked(String),
}

/// A strategy that plays one side.
pub trait Agent {
    /// Display name.
    fn name(&self) -> String;

    /// Called once per game before play begins, with this side's stream.
    fn reset(&mut self, rng: GameRng) {
        let _ = rng;
    }

    /// Choose a move. The outcome must be one of `state.available`.
    fn action(&mut self, state: &GameState) -> Result<Action, AgentError>;

    /// Called after this agent's own move was resolved.
    fn on_my_action(&mut self, state: &GameState, action: &Action, result: &MoveResult) {
        let _ = (state, action, result);
    }

    /// Called after the opponent's move was resolved.
    ///
    /// `state` and `result` are mirrored so that `own` is always this agent's side.
    fn on_enemy_action(&mut self, state: &GameState, action: &Action, result: &MoveResult) {
        let _ = (state, action, result);
    }
}

impl<A: Agent + ?Sized> Agent for Box<A> {
    fn name(&self) -> String {
        (**self).name()
    }

    fn reset(&mut self, rng: GameRng) {
        (**self).reset(rng);
    }

    fn action(&mut self, state: &GameState) -> Result<Action, AgentError> {
        (**self).action(state)
    }

    fn on_my_action(&mut self, state: &GameState, action: &Action, result: &MoveResult) {
        (**self).on_my_action(state, action, result);
    }

    fn on_enemy_action(&mut self, state: &GameState, action: &Action, result: &MoveResult) {
        (**self).on_enemy_action(state, action, result);
    }
}

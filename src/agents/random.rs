//! Uniform random agent.

use crate::core::{Action, GameRng, GameState};
use crate::engine::{Agent, AgentError};
use crate::rules::MoveResolver;

use super::moves::legal_moves;

/// Picks uniformly among the legal moves, using the stream from `reset`.
#[derive(Clone, Debug)]
pub struct RandomAgent {
    rng: GameRng,
    resolver: MoveResolver<'static>,
}

impl RandomAgent {
    /// A random agent. It draws from entropy until the engine resets it.
    #[must_use]
    pub fn new() -> Self {
        Self {
            rng: GameRng::from_entropy(),
            resolver: MoveResolver::default(),
        }
    }

    /// A random agent with a fixed stream.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed),
            resolver: MoveResolver::default(),
        }
    }
}

impl Default for RandomAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl Agent for RandomAgent {
    fn name(&self) -> String {
        "Random".to_string()
    }

    fn reset(&mut self, rng: GameRng) {
        self.rng = rng;
    }

    fn action(&mut self, state: &GameState) -> Result<Action, AgentError> {
        let moves = legal_moves(state, &self.resolver);
        self.rng
            .choose(&moves)
            .map(|(action, _)| action.clone())
            .ok_or(AgentError::NoMove)
    }
}

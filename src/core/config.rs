//! Engine configuration.

use serde::{Deserialize, Serialize};

/// Game-level settings for the turn engine.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Game seed. `None` seeds both sides from OS entropy.
    /// Same seed and same agents produce an identical game.
    pub seed: Option<u64>,

    /// Stop after this many turns with no winner (`None` = play to completion).
    pub max_turns: Option<u32>,

    /// Convert panics inside agent calls into a forfeit instead of unwinding
    /// through the engine.
    pub catch_agent_panics: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            seed: None,
            max_turns: None,
            catch_agent_panics: true,
        }
    }
}

impl EngineConfig {
    /// Create a default config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the game seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set an optional game seed.
    pub fn with_optional_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Cap the number of turns.
    pub fn with_max_turns(mut self, turns: u32) -> Self {
        self.max_turns = Some(turns);
        self
    }

    /// Enable or disable panic capture around agent calls.
    pub fn with_catch_agent_panics(mut self, catch: bool) -> Self {
        self.catch_agent_panics = catch;
        self
    }
}

//! Core value types: positions, outcomes, pieces, sides, state, actions, RNG,
//! configuration.
//!
//! Everything here is a plain value. The rule and turn logic live in
//! `board`, `cast`, `rules` and `engine`.

pub mod action;
pub mod config;
pub mod error;
pub mod outcome;
pub mod pieces;
pub mod player;
pub mod position;
pub mod rng;
pub mod state;

pub use action::{Action, MoveResult};
pub use config::EngineConfig;
pub use error::RuleError;
pub use outcome::{outcome_names, CastOutcome};
pub use pieces::{PieceSet, N_PIECES};
pub use player::Side;
pub use position::{Position, POSITION_COUNT};
pub use rng::GameRng;
pub use state::{AvailableThrows, GameState};

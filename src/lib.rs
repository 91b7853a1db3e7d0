//! # yut-engine
//!
//! A rules engine for yut-nori, the traditional Korean race game, with a
//! pluggable agent interface for writing and testing strategies.
//!
//! ## Design Principles
//!
//! 1. **Pure rules**: the transition table and move resolver are pure
//!    functions of their inputs. Agents call the same resolver the engine
//!    uses to probe candidate moves.
//!
//! 2. **Engine owns the truth**: piece positions and random streams live in
//!    the engine. Agents only ever see snapshots from their own side.
//!
//! 3. **Reproducible**: a game seed fixes every cast and every agent
//!    stream, so seeded games replay move for move.
//!
//! ## Modules
//!
//! - `core`: positions, outcomes, pieces, sides, state, actions, RNG, config
//! - `board`: board topology, transition table, text rendering
//! - `cast`: stick-cast probability model and chain enumeration
//! - `rules`: move legality, stacking and capture
//! - `engine`: agent contract, turn engine, event sinks, game records
//! - `agents`: reference agents

pub mod agents;
pub mod board;
pub mod cast;
pub mod core;
pub mod engine;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    Action, AvailableThrows, CastOutcome, EngineConfig, GameRng, GameState, MoveResult, PieceSet,
    Position, RuleError, Side,
};

pub use crate::board::{next_position, render_positions, TransitionTable};

pub use crate::cast::{Cast, CastModel, CastSequences};

pub use crate::rules::{resolve, IllegalMove, MoveResolver};

pub use crate::engine::{
    play, Agent, AgentError, EndReason, EventPrinter, EventRecorder, EventSink, GameEngine,
    GameOutcome, GameRecord, NoOpSink, TracingSink,
};

pub use crate::agents::{DistanceAgent, RandomAgent};

//! Turn engine, agent contract and event sinks.
//!
//! ## Overview
//!
//! - **Agent**: the pluggable decision maker for one side
//! - **GameEngine / Match**: sequences casts, actions and results until a
//!   side wins
//! - **EventSink**: observer of every engine event; `NoOpSink`,
//!   `TracingSink`, `EventPrinter` and `EventRecorder` are provided
//!
//! ## Usage
//!
//! ```
//! use yut_engine::agents::DistanceAgent;
//! use yut_engine::engine::play;
//!
//! let mut a = DistanceAgent::new();
//! let mut b = DistanceAgent::new();
//! let outcome = play(&mut a, &mut b, Some(7), None);
//! assert!(outcome.winner.is_some());
//! ```

pub mod agent;
pub mod printer;
pub mod record;
pub mod sink;
pub mod turn;

pub use agent::{Agent, AgentError};
pub use printer::EventPrinter;
pub use record::{EventRecorder, GameRecord, RecordError, RecordedStep};
pub use sink::{EventSink, NoOpSink, Tee, TracingSink};
pub use turn::{play, EndReason, GameEngine, GameOutcome, Match, Verdict};

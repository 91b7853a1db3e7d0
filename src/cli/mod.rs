//! CLI command implementations for yut.

pub(crate) mod odds;
pub(crate) mod play;
pub(crate) mod replay;

use clap::ValueEnum;
use thiserror::Error;

use yut_engine::engine::RecordError;
use yut_engine::{Agent, DistanceAgent, RandomAgent};

/// Agents selectable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum AgentKind {
    /// Greedy expected-distance heuristic.
    Distance,
    /// Uniform over legal moves.
    Random,
}

impl AgentKind {
    /// Build a fresh agent of this kind.
    pub(crate) fn build(self) -> Box<dyn Agent> {
        match self {
            AgentKind::Distance => Box::new(DistanceAgent::new()),
            AgentKind::Random => Box::new(RandomAgent::new()),
        }
    }
}

/// CLI error type.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// Invalid combination of arguments.
    #[error("{0}")]
    Usage(String),

    /// Writing output failed.
    #[error("output failed: {0}")]
    Io(#[from] std::io::Error),

    /// Saving or loading a record failed.
    #[error(transparent)]
    Record(#[from] RecordError),
}

//! Game recording and replay.
//!
//! [`EventRecorder`] is a sink that turns the event stream into a
//! [`GameRecord`]: the two agent names, every `(turn, casts, state,
//! action, result)` step in order, the winner and the last error. A turn
//! whose agent failed before choosing keeps its state as
//! [`GameRecord::unanswered`]. A record can be saved with `bincode` and
//! replayed into any other sink.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::{Action, CastOutcome, GameState, MoveResult, Side};

use super::sink::EventSink;

/// Failure while saving or loading a record.
#[derive(Debug, Error)]
pub enum RecordError {
    /// File could not be opened or written.
    #[error("record I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// Bytes could not be encoded or decoded.
    #[error("record encoding failed: {0}")]
    Encoding(#[from] bincode::Error),
}

/// One resolved decision.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordedStep {
    /// Turn number.
    pub turn: u32,
    /// Casts drawn since the previous step (empty if none).
    pub casts: Vec<CastOutcome>,
    /// State shown to the agent.
    pub state: GameState,
    /// Action the agent chose.
    pub action: Action,
    /// How the action resolved.
    pub result: MoveResult,
}

/// A complete game, sufficient to replay or re-render it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    /// Agent names in seating order.
    pub names: [String; 2],
    /// Every resolved step in order.
    pub steps: Vec<RecordedStep>,
    /// Casts drawn after the last step: a capture on the winning move, or
    /// the casts of a turn that ended without an action.
    pub trailing_casts: Vec<CastOutcome>,
    /// State shown to an agent that failed to choose an action.
    pub unanswered: Option<GameState>,
    /// Winner, if the game was decided.
    pub winner: Option<Side>,
    /// Last error reported during the game.
    pub error: Option<String>,
}

impl GameRecord {
    /// Encode to bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>, RecordError> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode from bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, RecordError> {
        Ok(bincode::deserialize(bytes)?)
    }

    /// Write to a file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), RecordError> {
        let mut writer = BufWriter::new(File::create(path)?);
        writer.write_all(&self.to_bytes()?)?;
        writer.flush()?;
        Ok(())
    }

    /// Read from a file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, RecordError> {
        let mut bytes = Vec::new();
        BufReader::new(File::open(path)?).read_to_end(&mut bytes)?;
        Self::from_bytes(&bytes)
    }

    /// Re-emit the recorded game into a sink.
    pub fn replay(&self, sink: &mut dyn EventSink) {
        let [name_a, name_b] = &self.names;
        sink.on_game_start(name_a, name_b);

        let mut previous_turn = None;
        for step in &self.steps {
            if previous_turn != Some(step.turn) {
                sink.on_turn_begin(step.turn);
                previous_turn = Some(step.turn);
            }
            sink.on_yut_cast(&step.casts);
            sink.on_state(&step.state);
            sink.on_action(&step.action, &step.result);
        }

        if let Some(state) = &self.unanswered {
            if previous_turn != Some(state.turn) {
                sink.on_turn_begin(state.turn);
            }
        }
        if !self.trailing_casts.is_empty() {
            sink.on_yut_cast(&self.trailing_casts);
        }
        if let Some(state) = &self.unanswered {
            sink.on_state(state);
        }

        if let Some(error) = &self.error {
            sink.on_error(error);
        }
        sink.on_game_end(self.winner);
    }
}

/// Sink that builds a [`GameRecord`].
#[derive(Debug, Default)]
pub struct EventRecorder {
    record: GameRecord,
    turn: u32,
    pending_casts: Vec<CastOutcome>,
    state: Option<GameState>,
}

impl EventRecorder {
    /// Create an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The record so far.
    #[must_use]
    pub fn record(&self) -> &GameRecord {
        &self.record
    }

    /// Consume the recorder, returning the record.
    #[must_use]
    pub fn into_record(self) -> GameRecord {
        self.record
    }
}

impl EventSink for EventRecorder {
    fn on_game_start(&mut self, name_a: &str, name_b: &str) {
        *self = Self::default();
        self.record.names = [name_a.to_string(), name_b.to_string()];
    }

    fn on_turn_begin(&mut self, turn: u32) {
        self.turn = turn;
    }

    fn on_yut_cast(&mut self, cast: &[CastOutcome]) {
        self.pending_casts.extend_from_slice(cast);
    }

    fn on_state(&mut self, state: &GameState) {
        self.state = Some(state.clone());
    }

    fn on_action(&mut self, action: &Action, result: &MoveResult) {
        let Some(state) = self.state.take() else {
            return;
        };
        self.record.steps.push(RecordedStep {
            turn: self.turn,
            casts: std::mem::take(&mut self.pending_casts),
            state,
            action: action.clone(),
            result: *result,
        });
    }

    fn on_error(&mut self, message: &str) {
        self.record.error = Some(message.to_string());
    }

    fn on_game_end(&mut self, winner: Option<Side>) {
        self.record.trailing_casts = std::mem::take(&mut self.pending_casts);
        self.record.unanswered = self.state.take();
        self.record.winner = winner;
    }
}

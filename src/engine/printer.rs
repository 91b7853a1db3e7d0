//! Human-readable game narration.

use std::io::{self, Write};

use crate::board::render_positions;
use crate::core::{outcome_names, Action, CastOutcome, GameState, MoveResult, Side};

use super::sink::EventSink;

/// Sink that narrates a game to a writer.
///
/// The first write error is kept and returned by [`EventPrinter::finish`];
/// later events are dropped.
#[derive(Debug)]
pub struct EventPrinter<W: Write> {
    out: W,
    names: [String; 2],
    turn: u32,
    error: Option<io::Error>,
}

impl<W: Write> EventPrinter<W> {
    /// Narrate to `out`.
    pub fn new(out: W) -> Self {
        Self {
            out,
            names: [String::from("Player 1"), String::from("Player 2")],
            turn: 0,
            error: None,
        }
    }

    /// Flush and return the writer, or the first write error.
    pub fn finish(mut self) -> io::Result<W> {
        if let Some(err) = self.error.take() {
            return Err(err);
        }
        self.out.flush()?;
        Ok(self.out)
    }

    fn emit(&mut self, text: &str) {
        if self.error.is_some() {
            return;
        }
        if let Err(err) = self.out.write_all(text.as_bytes()) {
            self.error = Some(err);
        }
    }
}

impl<W: Write> EventSink for EventPrinter<W> {
    fn on_game_start(&mut self, name_a: &str, name_b: &str) {
        self.names = [name_a.to_string(), name_b.to_string()];
    }

    fn on_turn_begin(&mut self, turn: u32) {
        self.turn = turn;
        let side = Side::for_turn(turn);
        let line = format!("Turn #{turn}: {side} ({})'s turn\n", self.names[side.index()]);
        self.emit(&line);
    }

    fn on_yut_cast(&mut self, cast: &[CastOutcome]) {
        if cast.is_empty() {
            return;
        }
        let steps: Vec<i8> = cast.iter().map(|o| o.steps()).collect();
        let line = format!("\tcast outcome = {steps:?}: {}\n", outcome_names(cast));
        self.emit(&line);
    }

    fn on_state(&mut self, state: &GameState) {
        let available = state.available.as_slice();
        let steps: Vec<i8> = available.iter().map(|o| o.steps()).collect();
        let line = format!("\tavailable yut scores = {steps:?}: {}\n", outcome_names(available));
        self.emit(&line);
    }

    fn on_action(&mut self, action: &Action, result: &MoveResult) {
        let mut text = format!(
            "\taction = ({}, {}, {}): move mal {} using '{}' {} shortcut\n",
            action.piece,
            action.outcome.steps(),
            action.shortcut,
            action.piece,
            action.outcome,
            if action.shortcut { "with" } else { "without" }
        );
        if !action.note.is_empty() {
            text.push_str(&format!("\t\tdebug message: '{}'\n", action.note));
        }
        text.push_str("\tresult:\n");

        let (first, second) = match Side::for_turn(self.turn) {
            Side::First => (&result.own, &result.opponent),
            Side::Second => (&result.opponent, &result.own),
        };
        text.push_str(&render_positions(first, second, "Player 1", "Player 2", ""));
        if result.captured > 0 {
            text.push_str(&format!("\t{} mals caught\n", result.captured));
        }
        text.push('\n');
        self.emit(&text);
    }

    fn on_error(&mut self, message: &str) {
        let line = format!("{message}\n");
        self.emit(&line);
    }

    fn on_game_end(&mut self, winner: Option<Side>) {
        let line = match winner {
            Some(side) => format!("{side} ({}) won!\n", self.names[side.index()]),
            None => String::from("No winner.\n"),
        };
        self.emit(&line);
    }
}

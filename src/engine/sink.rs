//! Event sinks.
//!
//! The engine reports every step of a game to an [`EventSink`]. All
//! methods default to doing nothing, so [`NoOpSink`] is just the empty
//! implementation.

use tracing::{debug, info, warn};

use crate::core::{outcome_names, Action, CastOutcome, GameState, MoveResult, Side};

/// Observer of engine events.
pub trait EventSink {
    /// A game is starting between the named agents.
    fn on_game_start(&mut self, name_a: &str, name_b: &str) {
        let _ = (name_a, name_b);
    }

    /// A turn is starting.
    fn on_turn_begin(&mut self, turn: u32) {
        let _ = turn;
    }

    /// A cast chain was drawn (at turn start or after a capture).
    fn on_yut_cast(&mut self, cast: &[CastOutcome]) {
        let _ = cast;
    }

    /// The state about to be shown to the acting agent.
    fn on_state(&mut self, state: &GameState) {
        let _ = state;
    }

    /// An action was resolved (legal or not).
    fn on_action(&mut self, action: &Action, result: &MoveResult) {
        let _ = (action, result);
    }

    /// An illegal move, agent failure or turn limit.
    fn on_error(&mut self, message: &str) {
        let _ = message;
    }

    /// The game ended. `None` only when a turn limit stopped it.
    fn on_game_end(&mut self, winner: Option<Side>) {
        let _ = winner;
    }
}

/// Sink that ignores everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoOpSink;

impl EventSink for NoOpSink {}

/// Sink that forwards events to `tracing`.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;

impl EventSink for TracingSink {
    fn on_game_start(&mut self, name_a: &str, name_b: &str) {
        info!(name_a, name_b, "game start");
    }

    fn on_turn_begin(&mut self, turn: u32) {
        debug!(turn, side = %Side::for_turn(turn), "turn begin");
    }

    fn on_yut_cast(&mut self, cast: &[CastOutcome]) {
        debug!(cast = %outcome_names(cast), "cast");
    }

    fn on_state(&mut self, state: &GameState) {
        debug!(
            turn = state.turn,
            own = %state.own,
            opponent = %state.opponent,
            available = %outcome_names(state.available.as_slice()),
            home = state.own.finished_count(),
            "state"
        );
    }

    fn on_action(&mut self, action: &Action, result: &MoveResult) {
        debug!(
            piece = action.piece,
            outcome = %action.outcome,
            shortcut = action.shortcut,
            legal = result.legal,
            captured = result.captured,
            "action"
        );
    }

    fn on_error(&mut self, message: &str) {
        warn!("{message}");
    }

    fn on_game_end(&mut self, winner: Option<Side>) {
        match winner {
            Some(side) => info!(winner = %side, "game end"),
            None => info!("game end without winner"),
        }
    }
}

impl<S: EventSink + ?Sized> EventSink for &mut S {
    fn on_game_start(&mut self, name_a: &str, name_b: &str) {
        (**self).on_game_start(name_a, name_b);
    }

    fn on_turn_begin(&mut self, turn: u32) {
        (**self).on_turn_begin(turn);
    }

    fn on_yut_cast(&mut self, cast: &[CastOutcome]) {
        (**self).on_yut_cast(cast);
    }

    fn on_state(&mut self, state: &GameState) {
        (**self).on_state(state);
    }

    fn on_action(&mut self, action: &Action, result: &MoveResult) {
        (**self).on_action(action, result);
    }

    fn on_error(&mut self, message: &str) {
        (**self).on_error(message);
    }

    fn on_game_end(&mut self, winner: Option<Side>) {
        (**self).on_game_end(winner);
    }
}

impl<S: EventSink + ?Sized> EventSink for Box<S> {
    fn on_game_start(&mut self, name_a: &str, name_b: &str) {
        (**self).on_game_start(name_a, name_b);
    }

    fn on_turn_begin(&mut self, turn: u32) {
        (**self).on_turn_begin(turn);
    }

    fn on_yut_cast(&mut self, cast: &[CastOutcome]) {
        (**self).on_yut_cast(cast);
    }

    fn on_state(&mut self, state: &GameState) {
        (**self).on_state(state);
    }

    fn on_action(&mut self, action: &Action, result: &MoveResult) {
        (**self).on_action(action, result);
    }

    fn on_error(&mut self, message: &str) {
        (**self).on_error(message);
    }

    fn on_game_end(&mut self, winner: Option<Side>) {
        (**self).on_game_end(winner);
    }
}

/// Forwards every event to two sinks in order.
#[derive(Debug, Default)]
pub struct Tee<A, B>(pub A, pub B);

impl<A: EventSink, B: EventSink> EventSink for Tee<A, B> {
    fn on_game_start(&mut self, name_a: &str, name_b: &str) {
        self.0.on_game_start(name_a, name_b);
        self.1.on_game_start(name_a, name_b);
    }

    fn on_turn_begin(&mut self, turn: u32) {
        self.0.on_turn_begin(turn);
        self.1.on_turn_begin(turn);
    }

    fn on_yut_cast(&mut self, cast: &[CastOutcome]) {
        self.0.on_yut_cast(cast);
        self.1.on_yut_cast(cast);
    }

    fn on_state(&mut self, state: &GameState) {
        self.0.on_state(state);
        self.1.on_state(state);
    }

    fn on_action(&mut self, action: &Action, result: &MoveResult) {
        self.0.on_action(action, result);
        self.1.on_action(action, result);
    }

    fn on_error(&mut self, message: &str) {
        self.0.on_error(message);
        self.1.on_error(message);
    }

    fn on_game_end(&mut self, winner: Option<Side>) {
        self.0.on_game_end(winner);
        self.1.on_game_end(winner);
    }
}

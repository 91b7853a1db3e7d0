//! Turn engine integration tests.
//!
//! These tests drive complete games through the public engine API with
//! scripted and reference agents.

use std::io;
use std::sync::{Arc, Mutex};

use yut_engine::agents::{legal_moves, DistanceAgent, RandomAgent};
use yut_engine::core::{Action, CastOutcome, GameRng, GameState, MoveResult, PieceSet, Side};
use yut_engine::engine::{
    play, Agent, AgentError, EndReason, EventRecorder, EventSink, GameEngine, GameRecord, Tee,
    TracingSink,
};
use yut_engine::rules::MoveResolver;
use yut_engine::EngineConfig;

// =============================================================================
// Helpers
// =============================================================================

fn recorded_game(agent_a: &mut dyn Agent, agent_b: &mut dyn Agent, seed: u64) -> GameRecord {
    let mut recorder = EventRecorder::new();
    play(agent_a, agent_b, Some(seed), Some(&mut recorder));
    recorder.into_record()
}

/// Plays an outcome it does not hold.
struct Cheater;

impl Agent for Cheater {
    fn name(&self) -> String {
        "Cheater".to_string()
    }

    fn action(&mut self, state: &GameState) -> Result<Action, AgentError> {
        let outcome = CastOutcome::ALL
            .into_iter()
            .find(|o| !state.available.contains(*o))
            .ok_or_else(|| AgentError::Failed("holds every outcome".to_string()))?;
        Ok(Action::new(0, outcome, false))
    }
}

/// Moves a piece that does not exist.
struct OutOfRange;

impl Agent for OutOfRange {
    fn name(&self) -> String {
        "OutOfRange".to_string()
    }

    fn action(&mut self, state: &GameState) -> Result<Action, AgentError> {
        Ok(Action::new(7, state.available.as_slice()[0], false))
    }
}

/// Always gives up.
struct Quitter;

impl Agent for Quitter {
    fn name(&self) -> String {
        "Quitter".to_string()
    }

    fn action(&mut self, _state: &GameState) -> Result<Action, AgentError> {
        Err(AgentError::Failed("no idea".to_string()))
    }
}

/// Panics when asked to move.
struct Panicker;

impl Agent for Panicker {
    fn name(&self) -> String {
        "Panicker".to_string()
    }

    fn action(&mut self, _state: &GameState) -> Result<Action, AgentError> {
        panic!("boom");
    }
}

/// Plays like `DistanceAgent` but panics when told about the opponent's move.
struct BadListener(DistanceAgent);

impl Agent for BadListener {
    fn name(&self) -> String {
        "BadListener".to_string()
    }

    fn action(&mut self, state: &GameState) -> Result<Action, AgentError> {
        self.0.action(state)
    }

    fn on_enemy_action(&mut self, _state: &GameState, _action: &Action, _result: &MoveResult) {
        panic!("cannot listen");
    }
}

/// Tracks its own pieces from notifications and checks every snapshot against them.
struct Spy {
    inner: RandomAgent,
    known: PieceSet,
    parity: Option<u32>,
    reset_seed: Option<u64>,
    decisions: usize,
    enemy_moves: usize,
}

impl Spy {
    fn new() -> Self {
        Self {
            inner: RandomAgent::new(),
            known: PieceSet::start(),
            parity: None,
            reset_seed: None,
            decisions: 0,
            enemy_moves: 0,
        }
    }
}

impl Agent for Spy {
    fn name(&self) -> String {
        "Spy".to_string()
    }

    fn reset(&mut self, rng: GameRng) {
        self.reset_seed = Some(rng.seed());
        self.known = PieceSet::start();
        self.inner.reset(rng);
    }

    fn action(&mut self, state: &GameState) -> Result<Action, AgentError> {
        assert_eq!(state.own, self.known, "snapshot disagrees with notifications");
        let parity = *self.parity.get_or_insert(state.turn % 2);
        assert_eq!(state.turn % 2, parity, "asked to move on the opponent's turn");
        self.decisions += 1;
        self.inner.action(state)
    }

    fn on_my_action(&mut self, state: &GameState, _action: &Action, result: &MoveResult) {
        assert_eq!(state.own, self.known);
        self.known = result.own;
    }

    fn on_enemy_action(&mut self, state: &GameState, _action: &Action, result: &MoveResult) {
        assert_eq!(state.own, self.known, "mirrored state is not from my side");
        if let Some(parity) = self.parity {
            assert_ne!(state.turn % 2, parity);
        }
        self.enemy_moves += 1;
        self.known = result.own;
    }
}

/// Captures whenever it can, otherwise plays randomly.
struct Hunter(RandomAgent);

impl Agent for Hunter {
    fn name(&self) -> String {
        "Hunter".to_string()
    }

    fn reset(&mut self, rng: GameRng) {
        self.0.reset(rng);
    }

    fn action(&mut self, state: &GameState) -> Result<Action, AgentError> {
        let capture = legal_moves(state, &MoveResolver::default())
            .into_iter()
            .find(|(_, result)| result.captured > 0);
        match capture {
            Some((action, _)) => Ok(action),
            None => self.0.action(state),
        }
    }
}

/// Counts sink events.
#[derive(Default)]
struct Counter {
    starts: usize,
    ends: usize,
    errors: Vec<String>,
    actions: usize,
    illegal_actions: usize,
    winner: Option<Option<Side>>,
}

impl EventSink for Counter {
    fn on_game_start(&mut self, _name_a: &str, _name_b: &str) {
        self.starts += 1;
    }

    fn on_action(&mut self, _action: &Action, result: &MoveResult) {
        self.actions += 1;
        if !result.legal {
            self.illegal_actions += 1;
        }
    }

    fn on_error(&mut self, message: &str) {
        self.errors.push(message.to_string());
    }

    fn on_game_end(&mut self, winner: Option<Side>) {
        self.ends += 1;
        self.winner = Some(winner);
    }
}

/// Collects formatted log output.
#[derive(Clone, Default)]
struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

// =============================================================================
// Determinism
// =============================================================================

/// Test that a seed reproduces the same game move for move.
#[test]
fn test_seeded_games_are_identical() {
    let first = recorded_game(&mut DistanceAgent::new(), &mut RandomAgent::new(), 42);
    let second = recorded_game(&mut DistanceAgent::new(), &mut RandomAgent::new(), 42);
    assert_eq!(first, second);
    assert!(!first.steps.is_empty());
}

/// Test that different seeds give different games.
#[test]
fn test_different_seeds_diverge() {
    let first = recorded_game(&mut RandomAgent::new(), &mut RandomAgent::new(), 1);
    let second = recorded_game(&mut RandomAgent::new(), &mut RandomAgent::new(), 2);
    assert_ne!(first.steps, second.steps);
}

/// Test that agents are reset with the per-side streams of the game seed.
#[test]
fn test_agents_receive_side_streams() {
    let mut a = Spy::new();
    let mut b = Spy::new();
    play(&mut a, &mut b, Some(9), None);
    assert_eq!(a.reset_seed, Some(GameRng::side_seed(9, Side::First)));
    assert_eq!(b.reset_seed, Some(GameRng::side_seed(9, Side::Second)));
}

/// Test that unseeded games still complete.
#[test]
fn test_unseeded_game_completes() {
    let outcome = play(&mut RandomAgent::new(), &mut DistanceAgent::new(), None, None);
    assert!(outcome.winner.is_some());
    assert_eq!(outcome.reason, EndReason::Completed);
}

// =============================================================================
// Normal play
// =============================================================================

/// Test that games between legal agents always end with a finished side.
#[test]
fn test_games_complete_with_all_pieces_home() {
    for seed in 0..20 {
        let record = recorded_game(&mut DistanceAgent::new(), &mut RandomAgent::new(), seed);
        let winner = record.winner.expect("every game has a winner");
        let last = record.steps.last().expect("at least one move");

        assert_eq!(Side::for_turn(last.turn), winner, "seed {seed}");
        assert!(last.result.own.all_finished(), "seed {seed}");
        assert!(record.error.is_none(), "seed {seed}");
    }
}

/// Test that the outcome reports the turn count and winner index.
#[test]
fn test_outcome_fields() {
    let mut recorder = EventRecorder::new();
    let outcome = play(&mut DistanceAgent::new(), &mut DistanceAgent::new(), Some(5), Some(&mut recorder));
    let record = recorder.into_record();

    let last_turn = record.steps.last().map(|s| s.turn).unwrap_or_default();
    assert_eq!(outcome.turns, last_turn + 1);
    assert_eq!(outcome.winner_index(), outcome.winner.map(|s| s.index()));
    assert_eq!(outcome.winner, record.winner);
}

/// Test that every held throw comes from a cast and is spent once.
#[test]
fn test_available_throws_accounting() {
    for seed in 0..10 {
        let record = recorded_game(&mut DistanceAgent::new(), &mut RandomAgent::new(), seed);

        let mut held: Vec<CastOutcome> = Vec::new();
        let mut turn = None;
        for step in &record.steps {
            if turn != Some(step.turn) {
                assert!(held.is_empty(), "seed {seed}: throws left over at turn {}", step.turn);
                assert!(!step.casts.is_empty(), "turn starts with a cast");
                turn = Some(step.turn);
            }
            held.extend_from_slice(&step.casts);
            assert_eq!(step.state.available.as_slice(), held.as_slice(), "seed {seed}");

            let index = held.iter().position(|&o| o == step.action.outcome).expect("held outcome");
            held.remove(index);
        }
    }
}

/// Test that every cast chain ends with exactly one terminal outcome.
#[test]
fn test_cast_chains_are_well_formed() {
    let record = recorded_game(&mut RandomAgent::new(), &mut RandomAgent::new(), 77);
    for step in record.steps.iter().filter(|s| !s.casts.is_empty()) {
        let (last, rest) = step.casts.split_last().expect("non-empty");
        assert!(!last.needs_throw_again());
        assert!(rest.iter().all(|o| o.needs_throw_again()));
    }
}

/// Test that a capture draws a fresh cast unless it was made with yut or mo.
#[test]
fn test_capture_grants_cast_only_without_throw_again() {
    let mut after_terminal = 0;
    let mut after_throw_again = 0;

    for seed in 0..40 {
        let record = recorded_game(&mut Hunter(RandomAgent::new()), &mut Hunter(RandomAgent::new()), seed);
        for (i, step) in record.steps.iter().enumerate() {
            if step.result.captured == 0 {
                continue;
            }
            let next_casts = match record.steps.get(i + 1) {
                Some(next) => {
                    assert_eq!(next.turn, step.turn, "seed {seed}: turn ended right after a capture");
                    &next.casts
                }
                None => &record.trailing_casts,
            };

            if step.action.outcome.needs_throw_again() {
                assert!(next_casts.is_empty(), "seed {seed}: {} capture drew a cast", step.action.outcome);
                after_throw_again += 1;
            } else {
                assert!(!next_casts.is_empty(), "seed {seed}: {} capture drew nothing", step.action.outcome);
                after_terminal += 1;
            }
        }
    }

    assert!(after_terminal > 0);
    assert!(after_throw_again > 0);
}

/// Test that both agents see a consistent view from their own side.
#[test]
fn test_notifications_are_mirrored() {
    for seed in 0..5 {
        let mut a = Spy::new();
        let mut b = Spy::new();
        play(&mut a, &mut b, Some(seed), None);
        assert!(a.decisions > 0 && b.decisions > 0);
        assert!(a.enemy_moves > 0 && b.enemy_moves > 0);
    }
}

// =============================================================================
// Forfeits
// =============================================================================

/// Test that using an outcome that is not held forfeits the game.
#[test]
fn test_unavailable_outcome_forfeits() {
    let mut counter = Counter::default();
    let outcome = play(&mut Cheater, &mut DistanceAgent::new(), Some(3), Some(&mut counter));

    assert_eq!(outcome.winner, Some(Side::Second));
    assert_eq!(outcome.reason, EndReason::IllegalMove);
    assert_eq!(outcome.turns, 1);
    assert_eq!(counter.illegal_actions, 1);
    assert_eq!(counter.errors.len(), 1);
    assert!(counter.errors[0].contains("illegal move"));
    assert_eq!(counter.winner, Some(Some(Side::Second)));
}

/// Test that the second seat forfeits just the same.
#[test]
fn test_second_side_forfeits() {
    let outcome = play(&mut DistanceAgent::new(), &mut Cheater, Some(3), None);
    assert_eq!(outcome.winner, Some(Side::First));
    assert_eq!(outcome.reason, EndReason::IllegalMove);
}

/// Test that a piece index out of range forfeits instead of panicking.
#[test]
fn test_out_of_range_piece_forfeits() {
    let outcome = play(&mut OutOfRange, &mut DistanceAgent::new(), Some(1), None);
    assert_eq!(outcome.winner, Some(Side::Second));
    assert_eq!(outcome.reason, EndReason::IllegalMove);
}

/// Test that an agent error forfeits the game.
#[test]
fn test_agent_error_forfeits() {
    let mut counter = Counter::default();
    let outcome = play(&mut Quitter, &mut DistanceAgent::new(), Some(0), Some(&mut counter));

    assert_eq!(outcome.winner, Some(Side::Second));
    assert_eq!(outcome.reason, EndReason::AgentFailure);
    assert_eq!(counter.actions, 0);
    assert!(counter.errors[0].contains("no idea"));
}

/// Test that a panicking agent forfeits instead of unwinding the engine.
#[test]
fn test_agent_panic_forfeits() {
    let mut counter = Counter::default();
    let outcome = play(&mut DistanceAgent::new(), &mut Panicker, Some(0), Some(&mut counter));

    assert_eq!(outcome.winner, Some(Side::First));
    assert_eq!(outcome.reason, EndReason::AgentFailure);
    assert!(counter.errors[0].contains("boom"));
    assert_eq!(counter.ends, 1);
}

/// Test that a panic while being notified forfeits the notified side.
#[test]
fn test_notification_panic_forfeits_listener() {
    let outcome = play(&mut DistanceAgent::new(), &mut BadListener(DistanceAgent::new()), Some(4), None);
    assert_eq!(outcome.winner, Some(Side::First));
    assert_eq!(outcome.reason, EndReason::AgentFailure);
    assert_eq!(outcome.turns, 1);
}

// =============================================================================
// Configuration
// =============================================================================

/// Test that the turn limit stops a game without a winner.
#[test]
fn test_turn_limit() {
    let engine = GameEngine::new(EngineConfig::new().with_seed(11).with_max_turns(2));
    let mut counter = Counter::default();
    let outcome = engine.play(&mut DistanceAgent::new(), &mut DistanceAgent::new(), &mut counter);

    assert_eq!(outcome.winner, None);
    assert_eq!(outcome.reason, EndReason::TurnLimit);
    assert_eq!(outcome.turns, 2);
    assert_eq!(outcome.winner_index(), None);
    assert_eq!(counter.errors.len(), 1);
    assert_eq!(counter.winner, Some(None));
}

/// Test that a zero turn limit never asks an agent to move.
#[test]
fn test_zero_turn_limit() {
    let engine = GameEngine::new(EngineConfig::new().with_seed(1).with_max_turns(0));
    let outcome = engine.play(&mut Panicker, &mut Panicker, &mut Counter::default());
    assert_eq!(outcome.reason, EndReason::TurnLimit);
    assert_eq!(outcome.turns, 0);
}

/// Test that an engine can be reused and fans events out through a tee.
#[test]
fn test_engine_reuse_with_tee() {
    let engine = GameEngine::new(EngineConfig::new().with_seed(8));
    let mut a = DistanceAgent::new();
    let mut b = RandomAgent::new();

    let mut first = Tee(Counter::default(), EventRecorder::new());
    let outcome_1 = engine.play(&mut a, &mut b, &mut first);
    let mut second = Tee(Counter::default(), EventRecorder::new());
    let outcome_2 = engine.play(&mut a, &mut b, &mut second);

    assert_eq!(outcome_1, outcome_2);
    assert_eq!(first.1.record(), second.1.record());
    assert_eq!(first.0.starts, 1);
    assert_eq!(first.0.actions, first.1.record().steps.len());
}

// =============================================================================
// Logging
// =============================================================================

/// Test that a traced game logs each event once.
#[test]
fn test_tracing_sink_logs_each_event_once() {
    let logs = LogBuffer::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();

    let outcome = tracing::subscriber::with_default(subscriber, || {
        let mut sink = TracingSink;
        play(&mut DistanceAgent::new(), &mut Quitter, Some(3), Some(&mut sink))
    });

    let text = String::from_utf8(logs.0.lock().unwrap().clone()).unwrap();
    let count = |needle: &str| text.lines().filter(|line| line.contains(needle)).count();
    assert_eq!(outcome.turns, 2);
    assert_eq!(count("game start"), 1);
    assert_eq!(count("turn begin"), 2);
    assert_eq!(count("no idea"), 1);
    assert_eq!(count("game end"), 1);
}

//! Turn engine: drives two agents through a complete game.
//!
//! ## One turn
//!
//! 1. Draw a cast chain for the acting side; it seeds the available throws.
//! 2. While throws remain: show the agent a snapshot, take its action,
//!    adjudicate it, notify both agents and the sink, and consume the
//!    outcome. A capture with an outcome that did not already grant
//!    throw-again draws another cast chain.
//! 3. The turn ends when throws run out, the side finishes all four
//!    pieces (win), or the side makes an illegal move or its agent fails
//!    (forfeit: the other side wins).
//!
//! ## Ownership
//!
//! Both piece sets and both random streams live in the [`Match`]. Agents
//! only ever see snapshots.
//!
//! ## Logging
//!
//! Game events reach `tracing` only through the sink; attach
//! [`TracingSink`](super::TracingSink) to log them.

use std::panic::{catch_unwind, AssertUnwindSafe};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cast::CastModel;
use crate::core::{
    Action, AvailableThrows, EngineConfig, GameRng, GameState, MoveResult, PieceSet, Side, N_PIECES,
};
use crate::rules::{IllegalMove, MoveResolver};

use super::agent::{Agent, AgentError};
use super::sink::{EventSink, NoOpSink};

/// How a game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EndReason {
    /// The winner moved all four pieces home.
    Completed,
    /// The loser made an illegal move.
    IllegalMove,
    /// The loser's agent failed or panicked.
    AgentFailure,
    /// The configured turn limit was reached; there is no winner.
    TurnLimit,
}

/// Final result of [`GameEngine::play`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameOutcome {
    /// Winning side, `None` only for [`EndReason::TurnLimit`].
    pub winner: Option<Side>,

    /// Why the game ended.
    pub reason: EndReason,

    /// Number of turns played (the last turn number plus one).
    pub turns: u32,
}

impl GameOutcome {
    /// Winner as a 0/1 index.
    #[must_use]
    pub fn winner_index(&self) -> Option<usize> {
        self.winner.map(Side::index)
    }
}

/// Decisive end of a turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Verdict {
    /// Winning side.
    pub winner: Side,
    /// Why the game ended.
    pub reason: EndReason,
}

impl Verdict {
    fn completed(side: Side) -> Self {
        Self {
            winner: side,
            reason: EndReason::Completed,
        }
    }

    fn forfeit(loser: Side, reason: EndReason) -> Self {
        Self {
            winner: loser.opponent(),
            reason,
        }
    }
}

/// Immutable game rules plus configuration, shared by every game it plays.
#[derive(Clone, Debug)]
pub struct GameEngine<'r> {
    config: EngineConfig,
    model: &'r CastModel,
    resolver: MoveResolver<'r>,
}

impl GameEngine<'static> {
    /// Engine on the standard board and sticks.
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        Self::with_rules(config, CastModel::standard(), MoveResolver::default())
    }
}

impl Default for GameEngine<'static> {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl<'r> GameEngine<'r> {
    /// Engine with an explicit cast model and resolver.
    #[must_use]
    pub fn with_rules(config: EngineConfig, model: &'r CastModel, resolver: MoveResolver<'r>) -> Self {
        Self {
            config,
            model,
            resolver,
        }
    }

    /// Engine configuration.
    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Play a full game. `agent_a` moves on even turns.
    pub fn play(
        &self,
        agent_a: &mut dyn Agent,
        agent_b: &mut dyn Agent,
        sink: &mut dyn EventSink,
    ) -> GameOutcome {
        let mut game = Match::new(self, agent_a, agent_b);
        game.run(sink)
    }

    /// Adjudicate one action against the current positions and held throws.
    ///
    /// Range and availability are checked here; rule legality is the
    /// resolver's.
    pub fn adjudicate(&self, state: &GameState, action: &Action) -> Result<MoveResult, IllegalMove> {
        if action.piece >= N_PIECES {
            return Err(IllegalMove::NoSuchPiece { piece: action.piece });
        }
        if !state.available.contains(action.outcome) {
            return Err(IllegalMove::OutcomeNotAvailable {
                outcome: action.outcome,
            });
        }
        self.resolver.check(&state.own, action.piece, action.outcome)?;
        Ok(self.resolver.resolve(
            &state.own,
            &state.opponent,
            action.piece,
            action.outcome,
            action.shortcut,
        ))
    }

    /// Run an agent call, converting a panic into an error when configured to.
    fn guard<T>(&self, call: impl FnOnce() -> T) -> Result<T, String> {
        if !self.config.catch_agent_panics {
            return Ok(call());
        }
        catch_unwind(AssertUnwindSafe(call)).map_err(|payload| {
            payload
                .downcast_ref::<&str>()
                .map(|s| (*s).to_string())
                .or_else(|| payload.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "unknown panic payload".to_string())
        })
    }
}

/// One side's seat at the table.
struct Seat<'a> {
    agent: &'a mut dyn Agent,
    pieces: PieceSet,
    rng: GameRng,
}

/// A single game in progress.
pub struct Match<'e, 'r, 'a> {
    engine: &'e GameEngine<'r>,
    seats: [Seat<'a>; 2],
}

impl<'e, 'r, 'a> Match<'e, 'r, 'a> {
    /// Seat both agents and reset them with their per-side streams.
    pub fn new(engine: &'e GameEngine<'r>, agent_a: &'a mut dyn Agent, agent_b: &'a mut dyn Agent) -> Self {
        let streams = |side: Side| match engine.config.seed {
            Some(seed) => (GameRng::for_side(seed, side), GameRng::for_side(seed, side)),
            None => (GameRng::from_entropy(), GameRng::from_entropy()),
        };
        let (rng_a, agent_rng_a) = streams(Side::First);
        let (rng_b, agent_rng_b) = streams(Side::Second);

        agent_a.reset(agent_rng_a);
        agent_b.reset(agent_rng_b);

        Self {
            engine,
            seats: [
                Seat {
                    agent: agent_a,
                    pieces: PieceSet::start(),
                    rng: rng_a,
                },
                Seat {
                    agent: agent_b,
                    pieces: PieceSet::start(),
                    rng: rng_b,
                },
            ],
        }
    }

    /// Current pieces of a side.
    #[must_use]
    pub fn pieces(&self, side: Side) -> PieceSet {
        self.seats[side.index()].pieces
    }

    /// Agent names in seating order.
    #[must_use]
    pub fn names(&self) -> [String; 2] {
        [self.seats[0].agent.name(), self.seats[1].agent.name()]
    }

    /// Play turns until a winner emerges or the turn limit is reached.
    pub fn run(&mut self, sink: &mut dyn EventSink) -> GameOutcome {
        let [name_a, name_b] = self.names();
        debug!(seed = ?self.engine.config.seed, "match seeded");
        sink.on_game_start(&name_a, &name_b);

        let mut turn = 0;
        let outcome = loop {
            if self.engine.config.max_turns.is_some_and(|limit| turn >= limit) {
                let message = format!("Turn limit of {turn} turns reached without a winner");
                sink.on_error(&message);
                break GameOutcome {
                    winner: None,
                    reason: EndReason::TurnLimit,
                    turns: turn,
                };
            }
            if let Some(verdict) = self.play_turn(turn, sink) {
                break GameOutcome {
                    winner: Some(verdict.winner),
                    reason: verdict.reason,
                    turns: turn + 1,
                };
            }
            turn += 1;
        };

        sink.on_game_end(outcome.winner);
        outcome
    }

    /// Play a single turn. Returns a verdict if the game ended on it.
    pub fn play_turn(&mut self, turn: u32, sink: &mut dyn EventSink) -> Option<Verdict> {
        let engine = self.engine;
        let side = Side::for_turn(turn);
        let [first, second] = &mut self.seats;
        let (me, enemy) = match side {
            Side::First => (first, second),
            Side::Second => (second, first),
        };

        sink.on_turn_begin(turn);

        let cast = engine.model.cast(&mut me.rng);
        sink.on_yut_cast(&cast);
        let mut available = AvailableThrows::from(cast.as_slice());

        let mut own = me.pieces;
        let mut opponent = enemy.pieces;
        let mut verdict = None;

        while !available.is_empty() {
            let state = GameState::new(turn, own, opponent, available.clone());
            sink.on_state(&state);

            let decision = engine
                .guard(|| me.agent.action(&state))
                .unwrap_or_else(|detail| Err(AgentError::Panicked(detail)));
            let action = match decision {
                Ok(action) => action,
                Err(err) => {
                    let message = format!(
                        "{side} ({}) failed to choose an action on turn #{turn}: {err}",
                        me.agent.name()
                    );
                    sink.on_error(&message);
                    verdict = Some(Verdict::forfeit(side, EndReason::AgentFailure));
                    break;
                }
            };

            let adjudicated = engine.adjudicate(&state, &action);
            let result = match &adjudicated {
                Ok(result) => *result,
                Err(_) => MoveResult::illegal(own, opponent),
            };
            sink.on_action(&action, &result);

            if let Err(detail) = engine.guard(|| me.agent.on_my_action(&state, &action, &result)) {
                verdict = Some(notify_failure(sink, side, turn, &detail));
                break;
            }
            let (mirrored_state, mirrored_result) = (state.mirrored(), result.mirrored());
            if let Err(detail) =
                engine.guard(|| enemy.agent.on_enemy_action(&mirrored_state, &action, &mirrored_result))
            {
                verdict = Some(notify_failure(sink, side.opponent(), turn, &detail));
                break;
            }

            if let Err(illegal) = adjudicated {
                let message = format!(
                    "{side} ({}) made an illegal move on turn #{turn}: {illegal} (action: piece {}, '{}', shortcut {})",
                    me.agent.name(),
                    action.piece,
                    action.outcome,
                    action.shortcut
                );
                sink.on_error(&message);
                verdict = Some(Verdict::forfeit(side, EndReason::IllegalMove));
                break;
            }

            own = result.own;
            opponent = result.opponent;
            available.consume(action.outcome);

            if result.captured > 0 && !action.outcome.needs_throw_again() {
                let extra = engine.model.cast(&mut me.rng);
                sink.on_yut_cast(&extra);
                available.extend(&extra);
            }

            if own.all_finished() {
                verdict = Some(Verdict::completed(side));
                break;
            }
        }

        me.pieces = own;
        enemy.pieces = opponent;
        verdict
    }
}

fn notify_failure(sink: &mut dyn EventSink, loser: Side, turn: u32, detail: &str) -> Verdict {
    let message = format!("{loser} failed while being notified on turn #{turn}: agent panicked: {detail}");
    sink.on_error(&message);
    Verdict::forfeit(loser, EndReason::AgentFailure)
}

/// Play one game on the standard rules.
///
/// With `seed`, the game is fully reproducible. `sink` defaults to [`NoOpSink`].
pub fn play(
    agent_a: &mut dyn Agent,
    agent_b: &mut dyn Agent,
    seed: Option<u64>,
    sink: Option<&mut dyn EventSink>,
) -> GameOutcome {
    let engine = GameEngine::new(EngineConfig::default().with_optional_seed(seed));
    match sink {
        Some(sink) => engine.play(agent_a, agent_b, sink),
        None => engine.play(agent_a, agent_b, &mut NoOpSink),
    }
}

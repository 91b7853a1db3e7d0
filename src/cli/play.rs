//! Play command implementation.

use std::io;
use std::path::PathBuf;

use tracing::info;
use yut_engine::engine::{Tee, TracingSink};
use yut_engine::{EndReason, EngineConfig, EventPrinter, EventRecorder, GameEngine, GameOutcome, Side};

use super::{AgentKind, CliError};

/// Execute the play command.
///
/// # Errors
///
/// Returns an error if output cannot be written or the record cannot be saved.
pub(crate) fn execute(
    seed: Option<u64>,
    games: u64,
    agents: &[AgentKind],
    max_turns: Option<u32>,
    quiet: bool,
    save: Option<PathBuf>,
) -> Result<(), CliError> {
    let [kind_a, kind_b] = agents else {
        return Err(CliError::Usage(format!("expected 2 agents, got {}", agents.len())));
    };
    if save.is_some() && games != 1 {
        return Err(CliError::Usage("--save records a single game; use --games 1".to_string()));
    }

    let mut agent_a = kind_a.build();
    let mut agent_b = kind_b.build();
    let names = [agent_a.name(), agent_b.name()];

    let mut wins = [0u64; 2];
    let mut undecided = 0u64;

    for game in 0..games {
        let mut config = EngineConfig::new().with_optional_seed(seed.map(|s| s.wrapping_add(game)));
        if let Some(limit) = max_turns {
            config = config.with_max_turns(limit);
        }
        let engine = GameEngine::new(config);
        let mut recorder = EventRecorder::new();

        let outcome: GameOutcome = if quiet {
            engine.play(agent_a.as_mut(), agent_b.as_mut(), &mut Tee(TracingSink, &mut recorder))
        } else {
            let mut printer = EventPrinter::new(io::stdout().lock());
            let outcome = engine.play(
                agent_a.as_mut(),
                agent_b.as_mut(),
                &mut Tee(Tee(TracingSink, &mut printer), &mut recorder),
            );
            printer.finish()?;
            outcome
        };

        info!(game, winner = ?outcome.winner, reason = ?outcome.reason, turns = outcome.turns, "game finished");
        match outcome.winner {
            Some(side) => wins[side.index()] += 1,
            None => undecided += 1,
        }
        if !quiet && outcome.reason != EndReason::Completed {
            println!("Game #{game} ended early: {:?}", outcome.reason);
        }

        if let Some(path) = &save {
            recorder.into_record().save(path)?;
            if !quiet {
                println!("Record saved to: {}", path.display());
            }
        }
    }

    println!();
    println!("Results over {games} game(s):");
    for side in Side::BOTH {
        let i = side.index();
        let share = if games == 0 { 0.0 } else { wins[i] as f64 / games as f64 * 100.0 };
        println!("  {side} ({}): {} wins ({share:.1}%)", names[i], wins[i]);
    }
    if undecided > 0 {
        println!("  Undecided: {undecided}");
    }
    Ok(())
}

//! yut CLI - play, replay and inspect yut-nori games.

// Allow print in the CLI binary
#![allow(clippy::print_stdout, clippy::print_stderr)]

mod cli;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgAction, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

/// yut - a yut-nori rules engine
#[derive(Parser, Debug)]
#[command(name = "yut")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Raise log verbosity (-v debug, -vv trace). `RUST_LOG` takes precedence.
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Play one or more games between two agents
    Play {
        /// Random seed (default: random). Game `i` uses `seed + i`.
        #[arg(short, long)]
        seed: Option<u64>,

        /// Number of games to play
        #[arg(short, long, default_value = "1")]
        games: u64,

        /// The two agents, in seating order
        #[arg(short, long, value_delimiter = ',', num_args = 2, default_values = ["distance", "distance"])]
        agents: Vec<cli::AgentKind>,

        /// Stop a game without a winner after this many turns
        #[arg(short = 't', long)]
        max_turns: Option<u32>,

        /// Suppress turn-by-turn output
        #[arg(short, long)]
        quiet: bool,

        /// Save the game record to a file (single game only)
        #[arg(long)]
        save: Option<PathBuf>,
    },

    /// Print a saved game record
    Replay {
        /// Record file written by `play --save`
        #[arg(required = true)]
        record: PathBuf,
    },

    /// Print the cast probabilities and chain statistics
    Odds {
        /// Chain depth to enumerate
        #[arg(short, long, default_value = "5")]
        depth: usize,
    },
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    let result = match args.command {
        Commands::Play {
            seed,
            games,
            agents,
            max_turns,
            quiet,
            save,
        } => cli::play::execute(seed, games, &agents, max_turns, quiet, save),

        Commands::Replay { record } => cli::replay::execute(record),

        Commands::Odds { depth } => cli::odds::execute(depth),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

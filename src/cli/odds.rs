//! Odds command implementation.

use yut_engine::{CastModel, CastOutcome};

use super::CliError;

/// Execute the odds command.
///
/// # Errors
///
/// Returns an error if `depth` is zero.
pub(crate) fn execute(depth: usize) -> Result<(), CliError> {
    if depth == 0 {
        return Err(CliError::Usage("--depth must be at least 1".to_string()));
    }
    let model = CastModel::standard();

    println!("Single cast:");
    for outcome in CastOutcome::ALL {
        println!(
            "  {:<7} {:>2} steps  p = {:.4}{}",
            outcome.name(),
            outcome.steps(),
            model.probability(outcome),
            if outcome.needs_throw_again() { "  (throw again)" } else { "" }
        );
    }

    let sequences = model.enumerate_sequences(depth);
    println!();
    println!("Cast chains up to depth {depth}:");
    println!("  sequences: {}", sequences.len());
    println!("  total mass: {:.12}", sequences.total_probability());
    Ok(())
}

//! Replay command implementation.

use std::io;
use std::path::PathBuf;

use yut_engine::{EventPrinter, GameRecord};

use super::CliError;

/// Execute the replay command.
///
/// # Errors
///
/// Returns an error if the record cannot be loaded or printed.
pub(crate) fn execute(record: PathBuf) -> Result<(), CliError> {
    let record = GameRecord::load(&record)?;
    let mut printer = EventPrinter::new(io::stdout().lock());
    record.replay(&mut printer);
    printer.finish()?;
    Ok(())
}

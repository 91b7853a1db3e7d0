//! Legal move enumeration.

use crate::core::{Action, GameState, MoveResult, N_PIECES};
use crate::rules::MoveResolver;

/// Every legal `(action, result)` pair for the acting side.
///
/// Pieces are visited in index order, outcomes in the order they were first
/// cast. The shortcut flag is only varied where it changes the destination;
/// otherwise the move is listed once with `shortcut == true`.
#[must_use]
pub fn legal_moves(state: &GameState, resolver: &MoveResolver<'_>) -> Vec<(Action, MoveResult)> {
    let mut moves = Vec::new();
    let table = resolver.table();

    for piece in 0..N_PIECES {
        let position = state.own[piece];
        for outcome in state.available.distinct() {
            if resolver.check(&state.own, piece, outcome).is_err() {
                continue;
            }
            for shortcut in [true, false] {
                if !shortcut && !table.has_choice(position, outcome) {
                    continue;
                }
                let result = resolver.resolve(&state.own, &state.opponent, piece, outcome, shortcut);
                if result.legal {
                    moves.push((Action::new(piece, outcome, shortcut), result));
                }
            }
        }
    }
    moves
}

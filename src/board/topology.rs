//! Track layout and single-step motion.
//!
//! ## Layout
//!
//! Twenty cells form a square ring (1..=10, 18..=22, 25..=29) and two
//! diagonals cross at the hub, cell 15:
//!
//! ```text
//! 10  9  8  .  7  6  5
//! 18 11  .  .  . 13  4
//! 19  . 12  . 14  .  3
//!  .  .  . 15  .  .  .
//! 20  . 16  . 23  .  2
//! 21 17  .  .  . 24  1
//! 22 25 26  . 27 28 29
//! ```
//!
//! Pieces enter at 1 from off-board (0) and finish (30) by stepping past 29.
//!
//! ## Junctions
//!
//! Forward motion branches at 5, 10 and 15. A cast that starts on one of
//! these cells takes the diagonal when the shortcut flag is set. A walk
//! that passes through 5 or 10 stays on the ring; a walk that enters 15
//! from 12 is already on the diagonal toward the finish and must continue
//! to 23.
//!
//! Backward motion merges at 15, 22 and 29, where the shortcut flag picks
//! the diagonal predecessor.

use crate::core::{CastOutcome, Position, POSITION_COUNT};

/// Board layout, row-major from the top-left corner. `0` marks an empty square.
pub const GRID: [[u8; 7]; 7] = [
    [10, 9, 8, 0, 7, 6, 5],
    [18, 11, 0, 0, 0, 13, 4],
    [19, 0, 12, 0, 14, 0, 3],
    [0, 0, 0, 15, 0, 0, 0],
    [20, 0, 16, 0, 23, 0, 2],
    [21, 17, 0, 0, 0, 24, 1],
    [22, 25, 26, 0, 27, 28, 29],
];

/// Default forward edge of every position.
const SUCCESSOR: [u8; POSITION_COUNT] = [
    1, // off-board enters at 1
    2, 3, 4, 5, 6, 7, 8, 9, 10, // right side
    18, // corner 10 continues down the left side
    12, 15, // diagonal from 10
    14, 15, // diagonal from 5
    16, 17, 22, // hub toward corner 22
    19, 20, 21, 22, 25, // left side
    24, 29, // hub toward the finish
    26, 27, 28, 29, // bottom side
    30, 30, // finish is absorbing
];

/// A cell with a diagonal branch edge.
struct Junction {
    cell: u8,
    branch: u8,
    /// Predecessor that commits the walk to the branch.
    forced_from: Option<u8>,
}

const JUNCTIONS: [Junction; 3] = [
    Junction {
        cell: 5,
        branch: 13,
        forced_from: None,
    },
    Junction {
        cell: 10,
        branch: 11,
        forced_from: None,
    },
    Junction {
        cell: 15,
        branch: 23,
        forced_from: Some(12),
    },
];

/// A cell reached from two directions, for backward motion.
struct Merge {
    cell: u8,
    back: u8,
    back_with_shortcut: u8,
}

const MERGES: [Merge; 3] = [
    Merge {
        cell: 15,
        back: 12,
        back_with_shortcut: 14,
    },
    Merge {
        cell: 22,
        back: 21,
        back_with_shortcut: 17,
    },
    Merge {
        cell: 29,
        back: 28,
        back_with_shortcut: 24,
    },
];

fn junction(cell: Position) -> Option<&'static Junction> {
    JUNCTIONS.iter().find(|j| j.cell == cell.get())
}

/// Default forward successor.
#[must_use]
pub fn successor(cell: Position) -> Position {
    Position::at(SUCCESSOR[cell.index()])
}

/// Diagonal branch successor, if `cell` is a forward junction.
#[must_use]
pub fn branch(cell: Position) -> Option<Position> {
    junction(cell).map(|j| Position::at(j.branch))
}

/// Whether forward motion out of `cell` has two possible edges.
#[must_use]
pub fn is_junction(cell: Position) -> bool {
    junction(cell).is_some()
}

/// Cells whose default forward edge leads to `cell`, ascending.
pub fn forward_predecessors(cell: Position) -> impl Iterator<Item = Position> {
    Position::all().filter(move |&p| p != cell && successor(p) == cell)
}

/// One forward step.
///
/// `previous` is the cell the walk came from, `None` on the first step of a cast.
#[must_use]
pub fn step_forward(previous: Option<Position>, current: Position, shortcut: bool) -> Position {
    let Some(j) = junction(current) else {
        return successor(current);
    };

    let take_branch = match previous {
        None => shortcut,
        Some(prev) => j.forced_from == Some(prev.get()),
    };

    if take_branch {
        Position::at(j.branch)
    } else {
        successor(current)
    }
}

/// One backward step (`backdo`).
///
/// Off-board and finished are fixed points. Cell 1 steps back to 29.
/// Merge cells use the shortcut flag; every other cell returns to its
/// highest-numbered predecessor.
#[must_use]
pub fn step_backward(current: Position, shortcut: bool) -> Position {
    if current.is_off_board() || current.is_finished() {
        return current;
    }
    if current.get() == 1 {
        return Position::at(29);
    }
    if let Some(m) = MERGES.iter().find(|m| m.cell == current.get()) {
        return Position::at(if shortcut { m.back_with_shortcut } else { m.back });
    }
    if let Some(j) = JUNCTIONS.iter().find(|j| j.branch == current.get()) {
        return Position::at(j.cell);
    }
    forward_predecessors(current).max().unwrap_or(current)
}

/// Walk a full cast from `start`.
///
/// Forward outcomes step one cell at a time and stop early on reaching the
/// finish. `backdo` is a single backward step.
#[must_use]
pub fn walk(start: Position, outcome: CastOutcome, shortcut: bool) -> Position {
    if outcome.is_backward() {
        return step_backward(start, shortcut);
    }

    let mut previous = None;
    let mut current = start;
    for _ in 0..outcome.steps() {
        if current.is_finished() {
            break;
        }
        let next = step_forward(previous, current, shortcut);
        previous = Some(current);
        current = next;
    }
    current
}

//! Text rendering of the board.

use std::fmt::Write as _;

use crate::core::{PieceSet, Position};

use super::topology::GRID;

const SIDE_A_LABELS: [char; 4] = ['a', 'b', 'c', 'd'];
const SIDE_B_LABELS: [char; 4] = ['A', 'B', 'C', 'D'];

/// Draw the 7x7 layout with a per-cell annotation of `width` characters.
///
/// `trailer` lines are appended to the right of the bottom rows.
#[must_use]
pub fn render_board(
    annotate: impl Fn(Position) -> String,
    width: usize,
    trailer: &[String],
    indent: &str,
) -> String {
    let mut out = String::new();
    let first_trailer_row = GRID.len().saturating_sub(trailer.len());

    for (i, row) in GRID.iter().enumerate() {
        out.push_str(indent);
        for &cell in row {
            if cell == 0 {
                out.push_str(&" ".repeat(6 + width));
            } else {
                let label = annotate(Position::at(cell));
                let _ = write!(out, "[{cell:>2}:{label:<width$}] ");
            }
        }
        if i >= first_trailer_row {
            out.push_str(&trailer[i - first_trailer_row]);
        }
        out.push('\n');
    }
    out
}

/// Draw both sides' pieces: side A as `abcd`, side B as `ABCD`.
///
/// Off-board and finished pieces have no cell; the trailer lists every
/// position tuple.
#[must_use]
pub fn render_positions(
    side_a: &PieceSet,
    side_b: &PieceSet,
    name_a: &str,
    name_b: &str,
    indent: &str,
) -> String {
    let annotate = |cell: Position| {
        let labels = |pieces: &PieceSet, marks: &[char; 4]| -> String {
            pieces
                .iter()
                .zip(marks)
                .filter(|(p, _)| *p == cell)
                .map(|(_, &label)| label)
                .collect()
        };
        labels(side_a, &SIDE_A_LABELS) + &labels(side_b, &SIDE_B_LABELS)
    };
    let trailer = [format!("{name_a}={side_a}"), format!("{name_b}={side_b}")];
    render_board(annotate, 4, &trailer, indent)
}

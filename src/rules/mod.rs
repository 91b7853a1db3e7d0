//! Move legality, stacking and capture.
//!
//! [`MoveResolver`] is pure: it takes both sides' positions and a chosen
//! `(piece, outcome, shortcut)` and returns new positions. The turn engine
//! and agents both call it; agents use it to probe candidate moves.

pub mod resolver;

pub use resolver::{resolve, IllegalMove, MoveResolver};

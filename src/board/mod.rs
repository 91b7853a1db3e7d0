//! Board topology, the transition function and text rendering.
//!
//! - `topology`: the fixed layout and single-step forward/backward motion
//! - `table`: every `(position, outcome, shortcut)` walk, precomputed
//! - `render`: the 7x7 text board

pub mod render;
pub mod table;
pub mod topology;

pub use render::{render_board, render_positions};
pub use table::{next_position, TransitionTable};
pub use topology::{is_junction, walk, GRID};

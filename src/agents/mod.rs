//! Reference agents.
//!
//! - [`RandomAgent`]: uniform over legal moves
//! - [`DistanceAgent`]: greedy over expected casts-to-goal
//!
//! [`legal_moves`] is the shared move generator.

pub mod distance;
pub mod moves;
pub mod random;

pub use distance::{expected_casts_to_goal, DistanceAgent, STACK_MULTIPLIERS};
pub use moves::legal_moves;
pub use random::RandomAgent;

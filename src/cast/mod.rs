//! Cast probability model.
//!
//! The engine draws casts from [`CastModel`]; agents use
//! [`CastModel::enumerate_sequences`] for offline precomputation.

pub mod model;

pub use model::{needs_throw_again, Cast, CastModel, CastSequences, BACKDO_SHARE, FLAT_SIDE_UP_PROB};

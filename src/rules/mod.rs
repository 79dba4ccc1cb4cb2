//! Game rules: the `RulesEngine` trait and card selection policy.
//!
//! Games implement `RulesEngine` so they can be driven turn by turn or
//! run to completion without knowing which game is being played.

pub mod engine;
pub mod selection;

pub use engine::{GameResult, RulesEngine};
pub use selection::select_card;

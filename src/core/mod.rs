//! Core engine types: players, RNG, configuration, turn log, table state.
//!
//! Everything here is rule-agnostic bookkeeping. The rules that drive it
//! live in `rules`, `effects` and `games::uno`.

pub mod player;
pub mod rng;
pub mod config;
pub mod action;
pub mod state;

pub use player::{Direction, PlayerId, PlayerMap};
pub use rng::{GameRng, DEFAULT_SEED};
pub use config::{GameConfig, DEFAULT_HAND_SIZE, DEFAULT_MAX_TURNS, MAX_PLAYERS, MIN_PLAYERS};
pub use action::{TurnOutcome, TurnRecord};
pub use state::{Hand, TableState};

//! # rust-uno
//!
//! A deterministic, self-playing UNO engine, plus a small cursor text buffer.
//!
//! ## Design Principles
//!
//! 1. **Deterministic**: The deck is always shuffled from the configured seed,
//!    so a configuration fully determines the game.
//!
//! 2. **N-Player**: Every API takes the seat count from `GameConfig`.
//!    Two-player tables get no special-casing.
//!
//! 3. **Infallible Turns**: Empty decks, empty discard piles and empty hands
//!    degrade to defined no-ops or passes. Cards are only ever moved, never
//!    created or destroyed.
//!
//! ## Modules
//!
//! - `core`: Players, direction, RNG, configuration, turn log, table state
//! - `cards`: Card values and the canonical deck
//! - `rules`: RulesEngine trait and card selection policy
//! - `effects`: Skip, Reverse and Draw Two resolution
//! - `games`: The UNO game and its presenter
//! - `editor`: Cursor text buffer

pub mod core;
pub mod cards;
pub mod rules;
pub mod effects;
pub mod games;
pub mod editor;
pub mod error;

// Re-export commonly used types
pub use crate::core::{
    Direction, GameConfig, GameRng, Hand, PlayerId, PlayerMap, TableState, TurnOutcome, TurnRecord,
};

pub use crate::cards::{canonical_deck, ActionKind, Card, Color, Rank, DECK_SIZE};

pub use crate::rules::{select_card, GameResult, RulesEngine};

pub use crate::effects::{apply_effect, Effect};

pub use crate::games::uno::{TableView, UnoGame};

pub use crate::editor::CursorBuffer;

pub use crate::error::ConfigError;

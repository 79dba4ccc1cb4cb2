//! Self-playing UNO.
//!
//! A rule-simplified UNO with no wild cards and no player choices:
//! - 100-card deck, 7 cards dealt to each player
//! - Each turn the current player plays the first matching card, or draws
//! - Skip, Reverse and Draw Two change the turn order
//! - First player with an empty hand wins
//!
//! Supports 2-255 players.

mod game;
pub mod presenter;

pub use game::UnoGame;
pub use presenter::TableView;

//! Card values and the fixed card catalog.
//!
//! ## Key Types
//!
//! - `Color`: Red, Green, Blue, Yellow
//! - `ActionKind`: Skip, Reverse, Draw Two
//! - `Rank`: number 0-9 or an action
//! - `Card`: color + rank
//!
//! `catalog::canonical_deck` builds the unshuffled 100-card deck.

pub mod card;
pub mod catalog;

pub use card::{ActionKind, Card, Color, Rank};
pub use catalog::{canonical_deck, census, DECK_SIZE};

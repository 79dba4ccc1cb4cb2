//! Read-only rendering of a table.
//!
//! `TableView` is a detached copy of what a spectator can see. Its
//! `Display` impl produces the one-line status used by `UnoGame::state`:
//!
//! ```text
//! Player 1's turn, Direction: Clockwise, Top: Red 7, Players cards: P0:6, P1:7
//! ```

use serde::Serialize;

use crate::cards::Card;
use crate::core::{Direction, PlayerId, TableState};

/// Spectator view of a table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TableView {
    pub current: PlayerId,
    pub direction: Direction,
    pub top: Option<Card>,
    pub hand_sizes: Vec<usize>,
    pub deck_size: usize,
    pub discard_size: usize,
    pub game_over: bool,
    pub winner: Option<PlayerId>,
}

impl TableView {
    /// Capture the visible parts of `state`.
    #[must_use]
    pub fn capture(state: &TableState) -> Self {
        Self {
            current: state.current(),
            direction: state.direction(),
            top: state.top_card(),
            hand_sizes: state.hand_sizes().collect(),
            deck_size: state.deck().len(),
            discard_size: state.discard().len(),
            game_over: state.is_game_over(),
            winner: state.winner(),
        }
    }
}

impl std::fmt::Display for TableView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}'s turn, Direction: {}, Top: ", self.current.0, self.direction)?;
        match self.top {
            Some(card) => write!(f, "{}", card)?,
            None => f.write_str("None")?,
        }
        f.write_str(", Players cards: ")?;
        for (i, size) in self.hand_sizes.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "P{}:{}", i, size)?;
        }
        Ok(())
    }
}

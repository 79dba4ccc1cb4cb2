//! Turn log entries.
//!
//! Every resolved turn produces a `TurnOutcome` describing what the
//! active player did. The table keeps them as `TurnRecord`s for replay
//! and debugging.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::player::PlayerId;
use crate::cards::Card;

/// What happened during one resolved turn.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnOutcome {
    /// A card was played from the hand.
    Played { card: Card },
    /// Nothing in hand was playable; the drawn card was legal and played at once.
    DrewAndPlayed { card: Card },
    /// Nothing in hand was playable; the drawn card went into the hand.
    Drew { card: Card },
    /// Nothing playable and the deck was empty.
    Passed,
}

impl TurnOutcome {
    /// The card that reached the discard pile, if any.
    #[must_use]
    pub fn played_card(&self) -> Option<Card> {
        match self {
            TurnOutcome::Played { card } | TurnOutcome::DrewAndPlayed { card } => Some(*card),
            TurnOutcome::Drew { .. } | TurnOutcome::Passed => None,
        }
    }
}

impl std::fmt::Display for TurnOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TurnOutcome::Played { card } => write!(f, "played {}", card),
            TurnOutcome::DrewAndPlayed { card } => write!(f, "drew and played {}", card),
            TurnOutcome::Drew { card } => write!(f, "drew {}", card),
            TurnOutcome::Passed => f.write_str("passed"),
        }
    }
}

/// A recorded turn with metadata for history tracking.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnRecord {
    /// Turn number (starts at 1).
    pub turn: u32,

    /// The player whose turn it was.
    pub player: PlayerId,

    /// What the player did.
    pub outcome: TurnOutcome,

    /// Cards forced onto the next player by a Draw Two (0-2).
    pub penalty: SmallVec<[Card; 2]>,
}

impl TurnRecord {
    /// Create a new turn record with no penalty draws.
    #[must_use]
    pub fn new(turn: u32, player: PlayerId, outcome: TurnOutcome) -> Self {
        Self {
            turn,
            player,
            outcome,
            penalty: SmallVec::new(),
        }
    }
}

impl std::fmt::Display for TurnRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{} {} {}", self.turn, self.player, self.outcome)?;
        if !self.penalty.is_empty() {
            write!(f, " (+{} to next)", self.penalty.len())?;
        }
        Ok(())
    }
}

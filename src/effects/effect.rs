//! Effects triggered by landing a card on the discard pile.

use crate::cards::{ActionKind, Card, Rank};

/// Turn effect of a played card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Effect {
    /// Number card: pass to the next player.
    Advance,
    /// Skip: pass two seats on.
    Skip,
    /// Reverse: flip direction, then pass to the next player.
    Reverse,
    /// Draw Two: the next player draws up to two and loses their turn.
    DrawTwo,
}

impl Effect {
    /// Cards the victim of a Draw Two takes.
    pub const DRAW_TWO_PENALTY: usize = 2;

    /// The effect a card has when played.
    #[must_use]
    pub const fn of(card: Card) -> Self {
        match card.rank {
            Rank::Number(_) => Effect::Advance,
            Rank::Action(ActionKind::Skip) => Effect::Skip,
            Rank::Action(ActionKind::Reverse) => Effect::Reverse,
            Rank::Action(ActionKind::DrawTwo) => Effect::DrawTwo,
        }
    }
}

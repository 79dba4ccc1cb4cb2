//! Applies card effects to the table.
//!
//! The resolver is the only place that moves the turn after a card is
//! played. Cards played from hand and cards drawn and played at once go
//! through the same path.

use smallvec::SmallVec;

use super::effect::Effect;
use crate::cards::Card;
use crate::core::TableState;

/// Apply the effect of `card`, which has just been put on the discard pile
/// by the current player.
///
/// Returns the cards the next player was forced to draw (Draw Two only).
pub fn apply_effect(state: &mut TableState, card: Card) -> SmallVec<[Card; 2]> {
    match Effect::of(card) {
        Effect::Advance => {
            state.advance(1);
            SmallVec::new()
        }
        Effect::Skip => {
            state.advance(2);
            SmallVec::new()
        }
        Effect::Reverse => {
            state.reverse_direction();
            state.advance(1);
            SmallVec::new()
        }
        Effect::DrawTwo => {
            let victim = state.player_after(state.current(), 1);
            let drawn = state.draw_into_hand(victim, Effect::DRAW_TWO_PENALTY);
            if drawn.len() < Effect::DRAW_TWO_PENALTY {
                log::trace!("deck ran dry: {} drew {} of {}", victim, drawn.len(), Effect::DRAW_TWO_PENALTY);
            }
            state.set_current(state.player_after(victim, 1));
            drawn
        }
    }
}

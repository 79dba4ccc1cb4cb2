//! Automatic card selection.
//!
//! Players never choose; the hand is scanned in received order with a
//! strict priority:
//!
//! 1. first card matching the top card's color,
//! 2. else first card matching its rank,
//! 3. else, for Skip, Reverse, Draw Two in that order, the first card of
//!    that kind regardless of color.
//!
//! Step 3 can pick a card that is not legal on the top card. That is part
//! of the house rules: an action card in hand is always playable.

use crate::cards::{ActionKind, Card};

/// Index in `hand` of the card to play on `top`, or `None` if nothing fits.
///
/// ```
/// use rust_uno::cards::{ActionKind, Card, Color};
/// use rust_uno::rules::select_card;
///
/// let hand = [Card::action(Color::Red, ActionKind::Skip), Card::number(Color::Green, 7)];
/// assert_eq!(select_card(&hand, Card::number(Color::Blue, 3)), Some(0));
/// ```
#[must_use]
pub fn select_card(hand: &[Card], top: Card) -> Option<usize> {
    hand.iter()
        .position(|card| card.color == top.color)
        .or_else(|| hand.iter().position(|card| card.rank == top.rank))
        .or_else(|| {
            ActionKind::ALL
                .iter()
                .find_map(|&kind| hand.iter().position(|card| card.action_kind() == Some(kind)))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Color;

    #[test]
    fn test_empty_hand() {
        assert_eq!(select_card(&[], Card::number(Color::Red, 1)), None);
    }

    #[test]
    fn test_color_beats_rank() {
        let hand = [Card::number(Color::Blue, 5), Card::number(Color::Red, 9)];
        assert_eq!(select_card(&hand, Card::number(Color::Red, 5)), Some(1));
    }

    #[test]
    fn test_first_color_match_wins() {
        let hand = [
            Card::number(Color::Green, 1),
            Card::number(Color::Red, 2),
            Card::number(Color::Red, 3),
        ];
        assert_eq!(select_card(&hand, Card::number(Color::Red, 8)), Some(1));
    }

    #[test]
    fn test_rank_match_number() {
        let hand = [Card::number(Color::Green, 1), Card::number(Color::Yellow, 8)];
        assert_eq!(select_card(&hand, Card::number(Color::Red, 8)), Some(1));
    }

    #[test]
    fn test_rank_match_action() {
        let hand = [
            Card::action(Color::Green, ActionKind::Skip),
            Card::action(Color::Yellow, ActionKind::Reverse),
        ];
        let top = Card::action(Color::Red, ActionKind::Reverse);
        assert_eq!(select_card(&hand, top), Some(1));
    }

    #[test]
    fn test_action_fallback_skip_first() {
        let hand = [
            Card::number(Color::Green, 7),
            Card::action(Color::Yellow, ActionKind::DrawTwo),
            Card::action(Color::Red, ActionKind::Reverse),
            Card::action(Color::Green, ActionKind::Skip),
        ];
        assert_eq!(select_card(&hand, Card::number(Color::Blue, 3)), Some(3));
    }

    #[test]
    fn test_action_fallback_reverse_before_draw_two() {
        let hand = [
            Card::action(Color::Yellow, ActionKind::DrawTwo),
            Card::action(Color::Red, ActionKind::Reverse),
        ];
        assert_eq!(select_card(&hand, Card::number(Color::Blue, 3)), Some(1));
    }

    #[test]
    fn test_no_match() {
        let hand = [Card::number(Color::Green, 7), Card::number(Color::Yellow, 2)];
        assert_eq!(select_card(&hand, Card::number(Color::Blue, 3)), None);
    }
}

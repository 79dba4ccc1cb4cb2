//! The fixed card universe.
//!
//! Per color: one 0, two of each 1-9, two each of Skip, Reverse and
//! Draw Two. 25 cards per color, 100 in total. The enumeration order is
//! fixed because the shuffler permutes exactly this sequence.

use rustc_hash::FxHashMap;

use super::card::{ActionKind, Card, Color};

/// Cards in one complete deck.
pub const DECK_SIZE: usize = 100;

/// Cards of each color in one complete deck.
pub const CARDS_PER_COLOR: usize = 25;

/// Build the unshuffled deck in catalog order.
///
/// For each color: `0`, `1 1`, `2 2`, ... `9 9`, `Skip Skip`,
/// `Reverse Reverse`, `Draw Two Draw Two`.
#[must_use]
pub fn canonical_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(DECK_SIZE);

    for color in Color::ALL {
        deck.push(Card::number(color, 0));
        for value in 1..=9 {
            deck.push(Card::number(color, value));
            deck.push(Card::number(color, value));
        }
        for kind in ActionKind::ALL {
            deck.push(Card::action(color, kind));
            deck.push(Card::action(color, kind));
        }
    }

    deck
}

/// Count how many copies of each distinct card appear in `cards`.
pub fn census<'a>(cards: impl IntoIterator<Item = &'a Card>) -> FxHashMap<Card, usize> {
    let mut counts = FxHashMap::default();
    for card in cards {
        *counts.entry(*card).or_insert(0) += 1;
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Rank;

    #[test]
    fn test_deck_size() {
        let deck = canonical_deck();
        assert_eq!(deck.len(), DECK_SIZE);

        for color in Color::ALL {
            assert_eq!(deck.iter().filter(|c| c.color == color).count(), CARDS_PER_COLOR);
        }
    }

    #[test]
    fn test_catalog_order_first_color() {
        let deck = canonical_deck();

        assert_eq!(deck[0], Card::number(Color::Red, 0));
        assert_eq!(deck[1], Card::number(Color::Red, 1));
        assert_eq!(deck[2], Card::number(Color::Red, 1));
        assert_eq!(deck[3], Card::number(Color::Red, 2));
        assert_eq!(deck[18], Card::number(Color::Red, 9));
        assert_eq!(deck[19], Card::action(Color::Red, ActionKind::Skip));
        assert_eq!(deck[20], Card::action(Color::Red, ActionKind::Skip));
        assert_eq!(deck[21], Card::action(Color::Red, ActionKind::Reverse));
        assert_eq!(deck[23], Card::action(Color::Red, ActionKind::DrawTwo));
        assert_eq!(deck[24], Card::action(Color::Red, ActionKind::DrawTwo));
    }

    #[test]
    fn test_catalog_color_blocks() {
        let deck = canonical_deck();

        assert_eq!(deck[25], Card::number(Color::Green, 0));
        assert_eq!(deck[50], Card::number(Color::Blue, 0));
        assert_eq!(deck[75], Card::number(Color::Yellow, 0));
        assert_eq!(deck[99], Card::action(Color::Yellow, ActionKind::DrawTwo));
    }

    #[test]
    fn test_census_multiplicities() {
        let deck = canonical_deck();
        let counts = census(&deck);

        // 4 colors x (1 zero + 9 numbers + 3 actions)
        assert_eq!(counts.len(), 52);
        for (card, count) in &counts {
            let expected = if card.rank == Rank::Number(0) { 1 } else { 2 };
            assert_eq!(*count, expected, "{}", card);
        }
    }

    #[test]
    fn test_canonical_deck_is_pure() {
        assert_eq!(canonical_deck(), canonical_deck());
    }
}

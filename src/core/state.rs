//! Table state: hands, draw pile, discard pile, and turn bookkeeping.
//!
//! `TableState` is the only owner of cards during a game. Every mutation
//! moves a card from one pile to another, so the census of the table never
//! changes between `reset` calls.
//!
//! ## Pile orientation
//!
//! Both the deck and the discard pile keep their top at the END of the
//! vector. Drawing is `pop`, discarding is `push`.

use im::Vector;
use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use super::action::{TurnOutcome, TurnRecord};
use super::player::{Direction, PlayerId, PlayerMap};
use crate::cards::{census, Card};

/// A player's cards in the order received.
pub type Hand = SmallVec<[Card; 8]>;

/// Complete state of one table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableState {
    player_count: usize,

    hands: PlayerMap<Hand>,

    /// Draw pile (top = end of vec).
    deck: Vec<Card>,

    /// Discard pile (top = end of vec).
    discard: Vec<Card>,

    current: PlayerId,
    direction: Direction,

    game_over: bool,
    winner: Option<PlayerId>,

    /// Resolved turns so far (starts at 0).
    turn_number: u32,

    /// Turn log since the last reset.
    history: Vector<TurnRecord>,

    /// Passes recorded back to back.
    consecutive_passes: usize,
}

impl TableState {
    /// Create an empty table: no cards anywhere, player 0 to act, clockwise.
    #[must_use]
    pub fn new(player_count: usize) -> Self {
        Self {
            player_count,
            hands: PlayerMap::with_default(player_count),
            deck: Vec::new(),
            discard: Vec::new(),
            current: PlayerId::new(0),
            direction: Direction::Clockwise,
            game_over: false,
            winner: None,
            turn_number: 0,
            history: Vector::new(),
            consecutive_passes: 0,
        }
    }

    /// Get player count.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.player_count
    }

    // === Setup ===

    /// Clear every pile and flag, then install `deck` as the draw pile.
    pub fn reset(&mut self, deck: Vec<Card>) {
        *self = Self::new(self.player_count);
        self.deck = deck;
    }

    /// Deal `rounds` cards to each player round-robin, player 0 first.
    ///
    /// Stops silently when the deck runs out. Returns the number dealt.
    pub fn deal(&mut self, rounds: usize) -> usize {
        let mut dealt = 0;
        'rounds: for _ in 0..rounds {
            for player in PlayerId::all(self.player_count) {
                match self.deck.pop() {
                    Some(card) => {
                        self.hands[player].push(card);
                        dealt += 1;
                    }
                    None => break 'rounds,
                }
            }
        }
        dealt
    }

    /// Move the deck's top card onto the discard pile.
    ///
    /// Returns the flipped card, or `None` if the deck is empty.
    pub fn flip_to_discard(&mut self) -> Option<Card> {
        let card = self.deck.pop()?;
        self.discard.push(card);
        Some(card)
    }

    /// Replace a player's hand.
    pub fn set_hand(&mut self, player: PlayerId, cards: &[Card]) {
        self.hands[player] = SmallVec::from_slice(cards);
        self.consecutive_passes = 0;
    }

    /// Replace the draw pile (top = last element).
    pub fn set_deck(&mut self, cards: Vec<Card>) {
        self.deck = cards;
        self.consecutive_passes = 0;
    }

    /// Replace the discard pile (top = last element).
    pub fn set_discard(&mut self, cards: Vec<Card>) {
        self.discard = cards;
        self.consecutive_passes = 0;
    }

    // === Piles ===

    /// Get a player's hand.
    #[must_use]
    pub fn hand(&self, player: PlayerId) -> &[Card] {
        &self.hands[player]
    }

    /// Hand sizes in seat order.
    pub fn hand_sizes(&self) -> impl Iterator<Item = usize> + '_ {
        self.hands.values().map(|hand| hand.len())
    }

    /// Get the draw pile.
    #[must_use]
    pub fn deck(&self) -> &[Card] {
        &self.deck
    }

    /// Get the discard pile.
    #[must_use]
    pub fn discard(&self) -> &[Card] {
        &self.discard
    }

    /// The card legality is checked against.
    #[must_use]
    pub fn top_card(&self) -> Option<Card> {
        self.discard.last().copied()
    }

    /// Take the top card of the deck, if any.
    pub fn draw(&mut self) -> Option<Card> {
        self.deck.pop()
    }

    /// Draw up to `count` cards into a player's hand.
    ///
    /// Returns the cards actually drawn; fewer than `count` when the deck
    /// runs dry.
    pub fn draw_into_hand(&mut self, player: PlayerId, count: usize) -> SmallVec<[Card; 2]> {
        let mut drawn = SmallVec::new();
        for _ in 0..count {
            let Some(card) = self.deck.pop() else {
                break;
            };
            self.hands[player].push(card);
            drawn.push(card);
        }
        drawn
    }

    /// Append a card to the end of a player's hand.
    pub fn add_to_hand(&mut self, player: PlayerId, card: Card) {
        self.hands[player].push(card);
    }

    /// Remove and return the card at `index` in a player's hand.
    ///
    /// Panics if `index` is out of bounds.
    pub fn take_from_hand(&mut self, player: PlayerId, index: usize) -> Card {
        self.hands[player].remove(index)
    }

    /// Put a card on top of the discard pile.
    pub fn discard_card(&mut self, card: Card) {
        self.discard.push(card);
    }

    // === Seating ===

    /// Whose turn it is.
    #[must_use]
    pub fn current(&self) -> PlayerId {
        self.current
    }

    /// Direction of play.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// The seat `steps` ahead of `from` in the current direction.
    #[must_use]
    pub fn player_after(&self, from: PlayerId, steps: usize) -> PlayerId {
        self.direction.advance(from, steps, self.player_count)
    }

    /// Pass the turn `steps` seats onward.
    pub fn advance(&mut self, steps: usize) {
        self.current = self.player_after(self.current, steps);
    }

    /// Hand the turn to a specific seat.
    pub fn set_current(&mut self, player: PlayerId) {
        assert!(player.index() < self.player_count, "{} is not seated", player);
        self.current = player;
    }

    /// Flip the direction of play.
    pub fn reverse_direction(&mut self) {
        self.direction = self.direction.reversed();
    }

    /// Set the direction of play.
    pub fn set_direction(&mut self, direction: Direction) {
        self.direction = direction;
    }

    // === Terminal state ===

    /// Has someone won.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// The winner, once the game is over.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        self.winner
    }

    /// Latch the game as won by `player`.
    pub fn declare_winner(&mut self, player: PlayerId) {
        self.game_over = true;
        self.winner = Some(player);
    }

    /// First player in seat order holding no cards.
    #[must_use]
    pub fn first_empty_hand(&self) -> Option<PlayerId> {
        self.hands
            .iter()
            .find(|(_, hand)| hand.is_empty())
            .map(|(player, _)| player)
    }

    // === History ===

    /// Number of turns resolved since the last reset.
    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    /// Start a new turn and return its number.
    pub fn next_turn(&mut self) -> u32 {
        self.turn_number += 1;
        self.turn_number
    }

    /// Record a resolved turn.
    pub fn record(&mut self, record: TurnRecord) {
        if record.outcome == TurnOutcome::Passed {
            self.consecutive_passes += 1;
        } else {
            self.consecutive_passes = 0;
        }
        self.history.push_back(record);
    }

    /// True once every seat has passed in a row with the deck empty.
    ///
    /// Nothing can change after that: no card can be drawn, and each hand
    /// has already failed to match the unchanged top card.
    #[must_use]
    pub fn is_stalled(&self) -> bool {
        self.deck.is_empty() && self.consecutive_passes >= self.player_count
    }

    /// Turn log since the last reset.
    #[must_use]
    pub fn history(&self) -> &Vector<TurnRecord> {
        &self.history
    }

    // === Conservation ===

    /// Total cards on the table: hands, deck and discard.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.hand_sizes().sum::<usize>() + self.deck.len() + self.discard.len()
    }

    /// Multiplicity of every distinct card on the table.
    #[must_use]
    pub fn census(&self) -> FxHashMap<Card, usize> {
        census(
            self.hands
                .values()
                .flat_map(|hand| hand.iter())
                .chain(self.deck.iter())
                .chain(self.discard.iter()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{canonical_deck, ActionKind, Color};

    fn small_deck() -> Vec<Card> {
        (0..=9).map(|v| Card::number(Color::Red, v)).collect()
    }

    #[test]
    fn test_new_is_empty() {
        let state = TableState::new(3);

        assert_eq!(state.player_count(), 3);
        assert_eq!(state.card_count(), 0);
        assert_eq!(state.current(), PlayerId::new(0));
        assert_eq!(state.direction(), Direction::Clockwise);
        assert!(!state.is_game_over());
        assert_eq!(state.winner(), None);
        assert_eq!(state.top_card(), None);
    }

    #[test]
    fn test_deal_round_robin_from_top() {
        let mut state = TableState::new(2);
        state.reset(small_deck());

        let dealt = state.deal(2);

        // Top is Red 9, then 8, 7, 6
        assert_eq!(dealt, 4);
        assert_eq!(state.hand(PlayerId::new(0)), &[Card::number(Color::Red, 9), Card::number(Color::Red, 7)]);
        assert_eq!(state.hand(PlayerId::new(1)), &[Card::number(Color::Red, 8), Card::number(Color::Red, 6)]);
        assert_eq!(state.deck().len(), 6);
    }

    #[test]
    fn test_deal_stops_when_deck_runs_out() {
        let mut state = TableState::new(3);
        state.reset(small_deck());

        let dealt = state.deal(7);

        assert_eq!(dealt, 10);
        let sizes: Vec<_> = state.hand_sizes().collect();
        assert_eq!(sizes, vec![4, 3, 3]);
        assert!(state.deck().is_empty());
        assert_eq!(state.flip_to_discard(), None);
        assert!(state.discard().is_empty());
    }

    #[test]
    fn test_flip_to_discard() {
        let mut state = TableState::new(2);
        state.reset(small_deck());

        assert_eq!(state.flip_to_discard(), Some(Card::number(Color::Red, 9)));
        assert_eq!(state.top_card(), Some(Card::number(Color::Red, 9)));
        assert_eq!(state.deck().len(), 9);
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut state = TableState::new(2);
        state.reset(small_deck());
        state.deal(1);
        state.flip_to_discard();
        state.reverse_direction();
        state.advance(1);
        state.declare_winner(PlayerId::new(1));
        let turn = state.next_turn();
        state.record(TurnRecord::new(turn, PlayerId::new(0), TurnOutcome::Passed));

        state.reset(small_deck());

        assert_eq!(state, {
            let mut fresh = TableState::new(2);
            fresh.set_deck(small_deck());
            fresh
        });
    }

    #[test]
    fn test_draw_into_hand_partial() {
        let mut state = TableState::new(2);
        state.set_deck(vec![Card::number(Color::Blue, 1)]);

        let drawn = state.draw_into_hand(PlayerId::new(1), 2);

        assert_eq!(drawn.as_slice(), &[Card::number(Color::Blue, 1)]);
        assert_eq!(state.hand(PlayerId::new(1)).len(), 1);
        assert!(state.deck().is_empty());
    }

    #[test]
    fn test_take_from_hand_preserves_order() {
        let mut state = TableState::new(2);
        let cards = [
            Card::number(Color::Red, 1),
            Card::action(Color::Green, ActionKind::Skip),
            Card::number(Color::Blue, 2),
        ];
        state.set_hand(PlayerId::new(0), &cards);

        let taken = state.take_from_hand(PlayerId::new(0), 1);

        assert_eq!(taken, cards[1]);
        assert_eq!(state.hand(PlayerId::new(0)), &[cards[0], cards[2]]);
    }

    #[test]
    fn test_advance_respects_direction() {
        let mut state = TableState::new(4);

        state.advance(1);
        assert_eq!(state.current(), PlayerId::new(1));

        state.reverse_direction();
        state.advance(2);
        assert_eq!(state.current(), PlayerId::new(3));

        assert_eq!(state.player_after(PlayerId::new(0), 1), PlayerId::new(3));
    }

    #[test]
    #[should_panic(expected = "is not seated")]
    fn test_set_current_out_of_range() {
        let mut state = TableState::new(2);
        state.set_current(PlayerId::new(2));
    }

    #[test]
    fn test_first_empty_hand_in_seat_order() {
        let mut state = TableState::new(3);
        state.set_hand(PlayerId::new(0), &[Card::number(Color::Red, 1)]);

        assert_eq!(state.first_empty_hand(), Some(PlayerId::new(1)));

        state.set_hand(PlayerId::new(1), &[Card::number(Color::Red, 2)]);
        state.set_hand(PlayerId::new(2), &[Card::number(Color::Red, 3)]);
        assert_eq!(state.first_empty_hand(), None);
    }

    #[test]
    fn test_census_of_full_table() {
        let mut state = TableState::new(4);
        state.reset(canonical_deck());
        state.deal(7);
        state.flip_to_discard();

        assert_eq!(state.card_count(), 100);
        assert_eq!(state.census(), census(&canonical_deck()));
    }

    #[test]
    fn test_history_records_in_order() {
        let mut state = TableState::new(2);

        for player in [PlayerId::new(0), PlayerId::new(1)] {
            let turn = state.next_turn();
            state.record(TurnRecord::new(turn, player, TurnOutcome::Passed));
        }

        assert_eq!(state.turn_number(), 2);
        let turns: Vec<_> = state.history().iter().map(|r| (r.turn, r.player)).collect();
        assert_eq!(turns, vec![(1, PlayerId::new(0)), (2, PlayerId::new(1))]);
    }

    #[test]
    fn test_stalled_after_full_round_of_passes() {
        let mut state = TableState::new(3);

        for player in PlayerId::all(3) {
            assert!(!state.is_stalled());
            let turn = state.next_turn();
            state.record(TurnRecord::new(turn, player, TurnOutcome::Passed));
        }

        assert!(state.is_stalled());
    }

    #[test]
    fn test_stall_cleared_by_play_or_refill() {
        let mut state = TableState::new(2);
        for player in PlayerId::all(2) {
            let turn = state.next_turn();
            state.record(TurnRecord::new(turn, player, TurnOutcome::Passed));
        }
        assert!(state.is_stalled());

        state.set_deck(vec![Card::number(Color::Red, 1)]);
        assert!(!state.is_stalled());

        let card = Card::number(Color::Blue, 2);
        let turn = state.next_turn();
        state.record(TurnRecord::new(turn, PlayerId::new(0), TurnOutcome::Played { card }));
        state.set_deck(Vec::new());
        let turn = state.next_turn();
        state.record(TurnRecord::new(turn, PlayerId::new(1), TurnOutcome::Passed));
        assert!(!state.is_stalled());
    }
}

//! Self-playing UNO table.

use smallvec::SmallVec;

use super::presenter::TableView;
use crate::cards::canonical_deck;
use crate::core::{GameConfig, GameRng, PlayerId, TableState, TurnOutcome, TurnRecord};
use crate::effects::apply_effect;
use crate::rules::{select_card, RulesEngine};

/// One UNO table and the rules that drive it.
///
/// The game owns its table by value; independent games share nothing.
///
/// ## Example
///
/// ```
/// use rust_uno::games::uno::UnoGame;
///
/// let mut game = UnoGame::new(2);
/// game.initialize();
///
/// while !game.is_game_over() {
///     game.play_turn();
/// }
/// assert!(game.winner().is_some());
/// ```
#[derive(Clone, Debug)]
pub struct UnoGame {
    config: GameConfig,
    rng: GameRng,
    table: TableState,
}

impl UnoGame {
    /// Create a game for `player_count` seats (clamped to 2-255).
    ///
    /// The table starts empty; call `initialize` to shuffle and deal.
    #[must_use]
    pub fn new(player_count: usize) -> Self {
        Self::with_config(GameConfig::new(player_count))
    }

    /// Create a game from a full configuration.
    #[must_use]
    pub fn with_config(config: GameConfig) -> Self {
        let config = config.normalized();
        let rng = GameRng::new(config.seed);
        let table = TableState::new(config.player_count);
        Self { config, rng, table }
    }

    /// Get the configuration.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Number of seats.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.config.player_count
    }

    /// Read access to the table.
    #[must_use]
    pub fn table(&self) -> &TableState {
        &self.table
    }

    /// Direct access to the table, for arranging specific positions.
    pub fn table_mut(&mut self) -> &mut TableState {
        &mut self.table
    }

    /// Shuffle a fresh deck, deal, and flip the starting card.
    ///
    /// The RNG is reseeded from the configuration right before the
    /// shuffle, so every call produces the same deal. Safe to call again
    /// at any time.
    pub fn initialize(&mut self) {
        let mut deck = canonical_deck();
        self.rng.reseed(self.config.seed);
        self.rng.shuffle(&mut deck);

        self.table.reset(deck);
        let dealt = self.table.deal(self.config.hand_size);
        let start = self.table.flip_to_discard();

        match start {
            Some(card) => log::info!(
                "seed {}: dealt {} cards to {} players, starting card {}",
                self.rng.seed(),
                dealt,
                self.config.player_count,
                card
            ),
            None => log::warn!(
                "dealt {} cards to {} players, deck exhausted before a starting card",
                dealt,
                self.config.player_count
            ),
        }
    }

    /// Resolve one turn for the current player.
    ///
    /// Returns what the player did, or `None` when no turn was resolved:
    /// the game is already over, there is nothing to play against, or the
    /// current player turned out to hold no cards (and has just won).
    pub fn play_turn(&mut self) -> Option<TurnOutcome> {
        let table = &mut self.table;
        if table.is_game_over() {
            return None;
        }

        let top = match table.top_card() {
            Some(card) => card,
            None => match table.flip_to_discard() {
                Some(card) => card,
                None => {
                    log::trace!("no discard and no deck, nothing to resolve");
                    return None;
                }
            },
        };

        let player = table.current();
        if table.hand(player).is_empty() {
            table.declare_winner(player);
            log::info!("{} holds no cards and wins", player);
            return None;
        }

        // A stalled table only rotates; the log already holds a full round
        // of passes.
        if table.is_stalled() {
            table.advance(1);
            return Some(TurnOutcome::Passed);
        }

        let turn = table.next_turn();
        let mut penalty = SmallVec::new();
        let outcome = match select_card(table.hand(player), top) {
            Some(index) => {
                let card = table.take_from_hand(player, index);
                table.discard_card(card);
                penalty = apply_effect(table, card);
                TurnOutcome::Played { card }
            }
            None => match table.draw() {
                Some(card) if card.is_playable_on(top) => {
                    table.discard_card(card);
                    penalty = apply_effect(table, card);
                    TurnOutcome::DrewAndPlayed { card }
                }
                Some(card) => {
                    table.add_to_hand(player, card);
                    table.advance(1);
                    TurnOutcome::Drew { card }
                }
                None => {
                    table.advance(1);
                    TurnOutcome::Passed
                }
            },
        };

        let record = TurnRecord {
            turn,
            player,
            outcome: outcome.clone(),
            penalty,
        };
        log::debug!("{}", record);
        table.record(record);

        if let Some(winner) = table.first_empty_hand() {
            table.declare_winner(winner);
            log::info!("{} wins after {} turns", winner, turn);
        }

        Some(outcome)
    }

    /// Has someone won.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.table.is_game_over()
    }

    /// The winner once the game is over, `None` before that.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        self.table.winner()
    }

    /// One-line status of the table.
    #[must_use]
    pub fn state(&self) -> String {
        self.view().to_string()
    }

    /// Structured status of the table.
    #[must_use]
    pub fn view(&self) -> TableView {
        TableView::capture(&self.table)
    }

    /// Turns resolved since the last `initialize`.
    #[must_use]
    pub fn history(&self) -> &im::Vector<TurnRecord> {
        self.table.history()
    }
}

impl RulesEngine for UnoGame {
    fn config(&self) -> &GameConfig {
        &self.config
    }

    fn initialize(&mut self) {
        UnoGame::initialize(self);
    }

    fn play_turn(&mut self) {
        UnoGame::play_turn(self);
    }

    fn is_terminal(&self) -> Option<PlayerId> {
        self.winner()
    }
}

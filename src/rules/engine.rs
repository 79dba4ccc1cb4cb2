//! Rules engine trait for self-playing games.
//!
//! A game implementing `RulesEngine` resolves whole turns on its own:
//! callers only initialize, step, and check for a result.

use crate::core::config::GameConfig;
use crate::core::player::PlayerId;

/// Result of a driven game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameResult {
    /// A player emptied their hand.
    Winner(PlayerId),
    /// The turn cap was reached first.
    TurnLimit,
}

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `initialize`: Must be idempotent and fully reset the table
/// - `play_turn`: Must be deterministic and a no-op once terminal
/// - `is_terminal`: Return `None` while the game continues
pub trait RulesEngine {
    /// Get the game configuration.
    fn config(&self) -> &GameConfig;

    /// Shuffle, deal, and reset all turn state.
    fn initialize(&mut self);

    /// Resolve one turn.
    fn play_turn(&mut self);

    /// The winner, once someone has won.
    fn is_terminal(&self) -> Option<PlayerId>;

    // === Convenience Methods ===

    /// Play turns until someone wins or `max_turns` calls have been made.
    fn run_to_completion(&mut self, max_turns: usize) -> GameResult {
        for _ in 0..max_turns {
            if let Some(winner) = self.is_terminal() {
                return GameResult::Winner(winner);
            }
            self.play_turn();
        }
        match self.is_terminal() {
            Some(winner) => GameResult::Winner(winner),
            None => GameResult::TurnLimit,
        }
    }
}

//! Game configuration.
//!
//! `GameConfig` carries everything that varies between tables: seat count,
//! shuffle seed, opening hand size, and the turn cap used when running a
//! game to completion. It is built with chained setters or loaded from JSON.
//!
//! Out-of-range seat counts are clamped rather than rejected.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::rng::DEFAULT_SEED;
use crate::error::ConfigError;

/// Fewest seats a table can have.
pub const MIN_PLAYERS: usize = 2;

/// Most seats a table can have (the `PlayerId` range).
pub const MAX_PLAYERS: usize = 255;

/// Cards dealt to each player on `initialize`.
pub const DEFAULT_HAND_SIZE: usize = 7;

/// Turn cap for `run_to_completion` and the driver.
pub const DEFAULT_MAX_TURNS: usize = 10_000;

/// Complete table configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Number of seats (2-255 after normalization).
    pub player_count: usize,

    /// Seed the deck is shuffled with on every `initialize`.
    pub seed: u64,

    /// Rounds dealt during `initialize`.
    pub hand_size: usize,

    /// Upper bound on turns for callers that loop until game over.
    pub max_turns: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_count: MIN_PLAYERS,
            seed: DEFAULT_SEED,
            hand_size: DEFAULT_HAND_SIZE,
            max_turns: DEFAULT_MAX_TURNS,
        }
    }
}

impl GameConfig {
    /// Create a configuration for `player_count` seats, clamped to 2-255.
    ///
    /// ```
    /// use rust_uno::core::GameConfig;
    ///
    /// assert_eq!(GameConfig::new(0).player_count, 2);
    /// assert_eq!(GameConfig::new(4).player_count, 4);
    /// ```
    #[must_use]
    pub fn new(player_count: usize) -> Self {
        Self {
            player_count: clamp_players(player_count),
            ..Self::default()
        }
    }

    /// Set the shuffle seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the opening hand size.
    #[must_use]
    pub fn with_hand_size(mut self, hand_size: usize) -> Self {
        self.hand_size = hand_size;
        self
    }

    /// Set the turn cap.
    #[must_use]
    pub fn with_max_turns(mut self, max_turns: usize) -> Self {
        self.max_turns = max_turns;
        self
    }

    /// Return a copy with the seat count clamped into range.
    ///
    /// Deserialized configs bypass `new`, so consumers normalize on entry.
    #[must_use]
    pub fn normalized(mut self) -> Self {
        self.player_count = clamp_players(self.player_count);
        self
    }

    /// Load a configuration from a JSON file.
    ///
    /// Missing fields take their defaults; the seat count is normalized.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&content)
    }

    /// Parse a configuration from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(json)?;
        Ok(config.normalized())
    }
}

fn clamp_players(player_count: usize) -> usize {
    player_count.clamp(MIN_PLAYERS, MAX_PLAYERS)
}

//! Player identification, seating direction, and per-player storage.
//!
//! ## PlayerId
//!
//! Type-safe seat index supporting 2-255 players.
//!
//! ## Direction
//!
//! Signed step around the table. All seat arithmetic goes through
//! [`Direction::advance`] so it wraps the same way everywhere.
//!
//! ## PlayerMap
//!
//! Per-player data backed by `Vec` for O(1) access, indexed by `PlayerId`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Seat index of a player.
///
/// Player indices are 0-based: the first player is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw seat index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all player IDs for a table with `player_count` seats.
    ///
    /// ```
    /// use rust_uno::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all(3).collect();
    /// assert_eq!(players, vec![PlayerId::new(0), PlayerId::new(1), PlayerId::new(2)]);
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Direction of play around the table.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Increasing seat index (+1).
    #[default]
    Clockwise,
    /// Decreasing seat index (-1).
    CounterClockwise,
}

impl Direction {
    /// Signed step: `+1` or `-1`.
    #[must_use]
    pub const fn step(self) -> isize {
        match self {
            Direction::Clockwise => 1,
            Direction::CounterClockwise => -1,
        }
    }

    /// The opposite direction.
    #[must_use]
    pub const fn reversed(self) -> Self {
        match self {
            Direction::Clockwise => Direction::CounterClockwise,
            Direction::CounterClockwise => Direction::Clockwise,
        }
    }

    /// Move `steps` seats from `from` in this direction, wrapping around
    /// a table of `player_count` seats.
    ///
    /// ```
    /// use rust_uno::core::{Direction, PlayerId};
    ///
    /// let p0 = PlayerId::new(0);
    /// assert_eq!(Direction::Clockwise.advance(p0, 2, 3), PlayerId::new(2));
    /// assert_eq!(Direction::CounterClockwise.advance(p0, 1, 3), PlayerId::new(2));
    /// ```
    #[must_use]
    pub fn advance(self, from: PlayerId, steps: usize, player_count: usize) -> PlayerId {
        debug_assert!(player_count > 0);
        let n = player_count as isize;
        let offset = (steps as isize * self.step()).rem_euclid(n);
        PlayerId(((from.index() as isize + offset).rem_euclid(n)) as u8)
    }

    /// Human-readable label used by the presenter.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Direction::Clockwise => "Clockwise",
            Direction::CounterClockwise => "Counter-clockwise",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Per-player data storage with O(1) access.
///
/// Backed by a `Vec<T>` with one entry per seat.
///
/// ## Example
///
/// ```
/// use rust_uno::core::{PlayerId, PlayerMap};
///
/// let mut counts: PlayerMap<usize> = PlayerMap::new(2, |_| 7);
/// counts[PlayerId::new(1)] -= 1;
/// assert_eq!(counts[PlayerId::new(0)], 7);
/// assert_eq!(counts[PlayerId::new(1)], 6);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    pub fn new(player_count: usize, factory: impl Fn(PlayerId) -> T) -> Self {
        assert!(player_count > 0, "Must have at least 1 player");
        assert!(player_count <= 255, "At most 255 players supported");

        let data = (0..player_count as u8).map(|i| factory(PlayerId(i))).collect();

        Self { data }
    }

    /// Create a new PlayerMap with default values.
    pub fn with_default(player_count: usize) -> Self
    where
        T: Default,
    {
        Self::new(player_count, |_| T::default())
    }

    /// Get a reference to a player's data.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (PlayerId, &T) pairs in seat order.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data.iter().enumerate().map(|(i, v)| (PlayerId(i as u8), v))
    }

    /// Iterate over the stored values in seat order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}

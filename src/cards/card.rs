//! Card values: color, rank, and action kind.
//!
//! Cards are plain `Copy` values. Two cards with the same color and rank
//! are indistinguishable, which is all the rules ever need.

use serde::{Deserialize, Serialize};

/// Card color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Color {
    Red,
    Green,
    Blue,
    Yellow,
}

impl Color {
    /// All colors in catalog order.
    pub const ALL: [Color; 4] = [Color::Red, Color::Green, Color::Blue, Color::Yellow];

    /// Display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Color::Red => "Red",
            Color::Green => "Green",
            Color::Blue => "Blue",
            Color::Yellow => "Yellow",
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Action card kinds.
///
/// Declaration order is the fallback priority used by card selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ActionKind {
    Skip,
    Reverse,
    DrawTwo,
}

impl ActionKind {
    /// All action kinds in priority order.
    pub const ALL: [ActionKind; 3] = [ActionKind::Skip, ActionKind::Reverse, ActionKind::DrawTwo];

    /// Display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            ActionKind::Skip => "Skip",
            ActionKind::Reverse => "Reverse",
            ActionKind::DrawTwo => "Draw Two",
        }
    }
}

impl std::fmt::Display for ActionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Face value of a card: a number 0-9 or an action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rank {
    Number(u8),
    Action(ActionKind),
}

impl Rank {
    /// The action kind, if this is an action rank.
    #[must_use]
    pub const fn action(self) -> Option<ActionKind> {
        match self {
            Rank::Action(kind) => Some(kind),
            Rank::Number(_) => None,
        }
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rank::Number(n) => write!(f, "{}", n),
            Rank::Action(kind) => write!(f, "{}", kind),
        }
    }
}

/// A single card.
///
/// ```
/// use rust_uno::cards::{ActionKind, Card, Color};
///
/// let top = Card::number(Color::Blue, 3);
/// assert!(Card::number(Color::Red, 3).is_playable_on(top));
/// assert!(!Card::action(Color::Red, ActionKind::Skip).is_playable_on(top));
/// assert_eq!(Card::action(Color::Green, ActionKind::DrawTwo).to_string(), "Green Draw Two");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Card {
    pub color: Color,
    pub rank: Rank,
}

impl Card {
    /// Create a card.
    #[must_use]
    pub const fn new(color: Color, rank: Rank) -> Self {
        Self { color, rank }
    }

    /// Create a number card.
    #[must_use]
    pub const fn number(color: Color, value: u8) -> Self {
        debug_assert!(value <= 9);
        Self::new(color, Rank::Number(value))
    }

    /// Create an action card.
    #[must_use]
    pub const fn action(color: Color, kind: ActionKind) -> Self {
        Self::new(color, Rank::Action(kind))
    }

    /// The action kind, if any.
    #[must_use]
    pub const fn action_kind(self) -> Option<ActionKind> {
        self.rank.action()
    }

    /// Legal on `top` when color or rank matches.
    #[must_use]
    pub fn is_playable_on(self, top: Card) -> bool {
        self.color == top.color || self.rank == top.rank
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.color, self.rank)
    }
}

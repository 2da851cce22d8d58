//! Players and hole occupants.
//!
//! Red always moves first. A hole holds at most one token, so its occupant is
//! either empty or one player's color.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the two sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Player {
    Red,
    Blue,
}

impl Default for Player {
    fn default() -> Self {
        Self::Red
    }
}

impl Player {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Blue => "blue",
        }
    }

    /// The other side.
    pub fn opponent(self) -> Self {
        match self {
            Self::Red => Self::Blue,
            Self::Blue => Self::Red,
        }
    }

    /// The occupant a token of this player leaves in a hole.
    pub fn occupant(self) -> Occupant {
        match self {
            Self::Red => Occupant::Red,
            Self::Blue => Occupant::Blue,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Red => write!(f, "Red"),
            Self::Blue => write!(f, "Blue"),
        }
    }
}

/// Contents of a single hole.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Occupant {
    #[default]
    Empty,
    Red,
    Blue,
}

impl Occupant {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::Red => "red",
            Self::Blue => "blue",
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Owner of the token in this hole, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Self::Empty => None,
            Self::Red => Some(Player::Red),
            Self::Blue => Some(Player::Blue),
        }
    }

    /// Check if this hole holds one of `player`'s tokens.
    pub fn is_owned_by(self, player: Player) -> bool {
        self.player() == Some(player)
    }
}

impl From<Player> for Occupant {
    fn from(player: Player) -> Self {
        player.occupant()
    }
}

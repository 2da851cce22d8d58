//! Game configuration.
//!
//! The board size is the only setting a game takes. It can be built in code or
//! loaded from JSON sent by the UI:
//!
//! ```json
//! { "board_size": "thirteen" }
//! ```

use serde::{Deserialize, Serialize};

use super::topology::{BoardSize, ParseBoardSizeError};

/// Settings for a new game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub board_size: BoardSize,
}

impl GameConfig {
    pub fn new(board_size: BoardSize) -> Self {
        Self { board_size }
    }

    /// Parse configuration from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Build configuration from a board size name such as `"9"` or `"thirteen"`.
    pub fn from_board_name(name: &str) -> Result<Self, ConfigError> {
        Ok(Self::new(name.parse()?))
    }

    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({ "board_size": self.board_size })
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid configuration JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    BoardSize(#[from] ParseBoardSizeError),
}

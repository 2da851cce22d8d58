//! State management module for Picaria.
//!
//! This module provides the core state types:
//!
//! - `player` - Players and hole occupants
//! - `topology` - Board sizes, hole identifiers, adjacency and win lines
//! - `game` - The game state machine
//! - `config` - Game configuration
//!
//! # Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────────┐
//! │                              Game                              │
//! │                                                                │
//! │   select(hole) ──▶ Drop ──(6th drop)──▶ Move ──▶ Won/Stalemate │
//! │                     │                    │                     │
//! │                     └──────(line)────────┴──▶ Won              │
//! │                                                                │
//! │  ┌──────────────────────────┐   ┌───────────────────────────┐  │
//! │  │ holes: [Occupant; 13]    │   │ topology (per BoardSize)  │  │
//! │  │ current player, phase    │──▶│   adjacent_holes(hole)    │  │
//! │  │ drop count, selection    │   │   win_lines()             │  │
//! │  └──────────────────────────┘   └───────────────────────────┘  │
//! └────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust
//! use picaria_state::state::{config::GameConfig, game::Game, topology::HoleId};
//!
//! let config = GameConfig::from_json(r#"{"board_size": "thirteen"}"#).unwrap();
//! let mut game = Game::from_config(&config);
//!
//! let transition = game.select(HoleId::new(6));
//! assert_eq!(game.drop_count(), 1);
//! println!("{}", transition.status);
//! ```

pub mod config;
pub mod game;
pub mod player;
pub mod topology;

// Re-export commonly used types
pub use config::{ConfigError, GameConfig};
pub use game::{Action, Game, GameStatus, HoleView, Phase, Transition, DROPS_BEFORE_MOVE};
pub use player::{Occupant, Player};
pub use topology::{
    active_holes, adjacent_holes, win_lines, BoardSize, HoleError, HoleId, ParseBoardSizeError,
    WinLine, HOLE_COUNT,
};

//! Picaria State Library
//!
//! This crate provides the rules engine for Picaria, a two-player board game
//! played on 9 or 13 holes.
//!
//! # Overview
//!
//! The state module provides:
//!
//! - **Board Topology** - Static adjacency and win-line tables for both board
//!   sizes.
//!
//! - **Game State Machine** - Occupancy, turns, the drop and move phases, and win
//!   detection behind a single `select` entry point.
//!
//! - **Configuration** - The board size, loadable from JSON.
//!
//! # Design Principles
//!
//! 1. **Illegal clicks are non-events** - Selecting an occupied hole, a stuck
//!    token, or a hole outside the pickable set leaves the game untouched.
//!
//! 2. **Tables, not branches** - Geometry lives in one place per board size.
//!
//! 3. **No UI** - This crate is pure state; rendering belongs to the caller.
//!
//! 4. **Serialization-ready** - All types can be converted to JSON for clients.
//!
//! # Example
//!
//! ```rust
//! use picaria_state::{Action, BoardSize, Game, GameStatus, HoleId, Player};
//!
//! let mut game = Game::new(BoardSize::Nine);
//!
//! // Red takes the top row while Blue plays elsewhere
//! game.select(HoleId::new(0));
//! game.select(HoleId::new(5));
//! game.select(HoleId::new(1));
//! game.select(HoleId::new(10));
//! let transition = game.select(HoleId::new(2));
//!
//! assert!(matches!(transition.action, Action::Dropped { .. }));
//! assert_eq!(transition.status, GameStatus::Won { winner: Player::Red });
//! ```

pub mod state;

// Re-export everything from state module at crate root
pub use state::*;

//! Game state management.
//!
//! Tracks a single Picaria game: hole occupancy, whose turn it is, the drop and
//! move phases, a pending token pick-up, and the final result.
//!
//! # State Diagram
//!
//! ```text
//!   reset
//!     │
//!     ▼
//! ┌────────┐  6th drop   ┌────────┐  no legal move  ┌───────────┐
//! │  Drop  │────────────▶│  Move  │────────────────▶│ Stalemate │
//! └───┬────┘             └───┬────┘                 └───────────┘
//!     │ line                 │ line
//!     ▼                      ▼
//! ┌──────────────────────────────┐
//! │          Won(player)         │
//! └──────────────────────────────┘
//! ```
//!
//! Every hole click goes through [`Game::select`]. Clicks that are not legal in
//! the current state are ignored and leave the game unchanged.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::config::GameConfig;
use super::player::{Occupant, Player};
use super::topology::{active_holes, adjacent_holes, win_lines, BoardSize, HoleId, HOLE_COUNT};

/// Successful drops before the game switches to the move phase.
pub const DROPS_BEFORE_MOVE: u8 = 6;

/// Game phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Players place new tokens on empty holes
    #[default]
    Drop,
    /// Players slide a token to an adjacent empty hole
    Move,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Drop => "drop",
            Self::Move => "move",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Drop => write!(f, "Drop"),
            Self::Move => write!(f, "Move"),
        }
    }
}

/// Overall game result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum GameStatus {
    /// Game still accepts clicks
    #[default]
    InProgress,
    /// A player completed a win line
    Won { winner: Player },
    /// The player to move has no token that can slide
    Stalemate { stuck: Player },
}

impl GameStatus {
    /// Check if game is terminal (cannot change until reset).
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::InProgress)
    }

    pub fn winner(&self) -> Option<Player> {
        match self {
            Self::Won { winner } => Some(*winner),
            _ => None,
        }
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InProgress => write!(f, "In progress"),
            Self::Won { winner } => write!(f, "{} wins", winner),
            Self::Stalemate { stuck } => write!(f, "Stalemate: {} has no legal move", stuck),
        }
    }
}

/// What a single click did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Action {
    /// Click had no effect
    Ignored,
    /// A new token was placed
    Dropped { hole: HoleId, player: Player },
    /// A token was picked up; its destinations are now selectable
    Selected { from: HoleId },
    /// A token slid to an adjacent hole
    Moved {
        from: HoleId,
        to: HoleId,
        player: Player,
    },
}

/// Result of [`Game::select`], enough for a UI to refresh its status display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transition {
    pub action: Action,
    pub phase: Phase,
    pub current_player: Player,
    pub status: GameStatus,
    /// Holes the picked-up token may move to (empty when nothing is picked up)
    pub selectable: Vec<HoleId>,
}

/// Render state of one hole.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HoleView {
    pub hole: HoleId,
    pub occupant: Occupant,
    pub selectable: bool,
}

/// Picaria game state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    /// Board variant, fixed until the next reset
    board_size: BoardSize,

    /// Occupant of every addressable hole
    holes: [Occupant; HOLE_COUNT],

    /// Side to play
    current_player: Player,

    /// Current phase
    phase: Phase,

    /// Non-winning drops so far
    drop_count: u8,

    /// Token picked up in the move phase, awaiting a destination
    selection: Option<HoleId>,

    /// Current result
    status: GameStatus,
}

impl Default for Game {
    fn default() -> Self {
        Self::new(BoardSize::default())
    }
}

impl Game {
    /// Create a new game on an empty board.
    pub fn new(board_size: BoardSize) -> Self {
        Self {
            board_size,
            holes: [Occupant::Empty; HOLE_COUNT],
            current_player: Player::Red,
            phase: Phase::Drop,
            drop_count: 0,
            selection: None,
            status: GameStatus::InProgress,
        }
    }

    /// Create a new game from configuration.
    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(config.board_size)
    }

    /// Start over on the given board size.
    pub fn reset(&mut self, board_size: BoardSize) {
        info!(board_size = board_size.as_str(), "game reset");
        *self = Self::new(board_size);
    }

    /// Change board size, resetting the game if it actually changed.
    ///
    /// Returns whether a reset happened.
    pub fn set_board_size(&mut self, board_size: BoardSize) -> bool {
        if self.board_size == board_size {
            return false;
        }
        self.reset(board_size);
        true
    }

    /// Handle a click on `hole`.
    pub fn select(&mut self, hole: HoleId) -> Transition {
        debug!(
            hole = hole.index(),
            phase = self.phase.as_str(),
            player = self.current_player.as_str(),
            "hole selected"
        );

        let action = if self.status.is_terminal() {
            self.ignore(hole, "game is over")
        } else if !self.board_size.is_active(hole) {
            self.ignore(hole, "hole is not on this board")
        } else {
            match self.phase {
                Phase::Drop => self.drop_token(hole),
                Phase::Move => self.pick(hole),
            }
        };

        self.transition(action)
    }

    fn drop_token(&mut self, hole: HoleId) -> Action {
        if !self.occupant(hole).is_empty() {
            return self.ignore(hole, "hole is occupied");
        }

        let player = self.current_player;
        self.holes[hole.index()] = player.occupant();

        if self.has_line(player) {
            self.finish(GameStatus::Won { winner: player });
        } else {
            self.drop_count += 1;
            if self.drop_count == DROPS_BEFORE_MOVE {
                self.phase = Phase::Move;
                info!("all tokens dropped, entering move phase");
            }
            self.end_turn();
        }

        Action::Dropped { hole, player }
    }

    fn pick(&mut self, hole: HoleId) -> Action {
        if let Some(from) = self.selection {
            // A pending pick-up stays open until a valid destination is clicked
            if self.destinations(from).contains(&hole) {
                return self.apply_move(from, hole);
            }
            return self.ignore(hole, "not a selectable destination");
        }

        if !self.occupant(hole).is_owned_by(self.current_player) {
            return self.ignore(hole, "not a token of the player to move");
        }

        match self.destinations(hole).as_slice() {
            [] => self.ignore(hole, "token has no empty neighbour"),
            [to] => self.apply_move(hole, *to),
            _ => {
                self.selection = Some(hole);
                Action::Selected { from: hole }
            }
        }
    }

    /// Slide the current player's token from `from` to `to`.
    fn apply_move(&mut self, from: HoleId, to: HoleId) -> Action {
        let player = self.current_player;
        debug_assert!(self.occupant(from).is_owned_by(player));
        debug_assert!(self.occupant(to).is_empty());

        self.selection = None;
        self.holes[from.index()] = Occupant::Empty;
        self.holes[to.index()] = player.occupant();

        if self.has_line(player) {
            self.finish(GameStatus::Won { winner: player });
        } else {
            self.end_turn();
        }

        Action::Moved { from, to, player }
    }

    fn end_turn(&mut self) {
        self.current_player = self.current_player.opponent();

        if self.phase == Phase::Move && self.legal_sources().is_empty() {
            self.finish(GameStatus::Stalemate {
                stuck: self.current_player,
            });
        }
    }

    fn finish(&mut self, status: GameStatus) {
        info!(result = %status, "game over");
        self.status = status;
    }

    fn ignore(&self, hole: HoleId, reason: &'static str) -> Action {
        debug!(hole = hole.index(), reason, "click ignored");
        Action::Ignored
    }

    fn transition(&self, action: Action) -> Transition {
        Transition {
            action,
            phase: self.phase,
            current_player: self.current_player,
            status: self.status,
            selectable: self.selectable_holes(),
        }
    }

    /// Check if every hole of some win line holds one of `player`'s tokens.
    fn has_line(&self, player: Player) -> bool {
        win_lines(self.board_size).iter().any(|line| {
            line.iter()
                .all(|hole| self.occupant(*hole).is_owned_by(player))
        })
    }

    /// Empty holes a token at `from` could slide to.
    fn destinations(&self, from: HoleId) -> Vec<HoleId> {
        adjacent_holes(self.board_size, from)
            .iter()
            .copied()
            .filter(|hole| self.occupant(*hole).is_empty())
            .collect()
    }

    // Accessors

    pub fn board_size(&self) -> BoardSize {
        self.board_size
    }

    /// Get the occupant of a hole.
    pub fn occupant(&self, hole: HoleId) -> Occupant {
        self.holes[hole.index()]
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn drop_count(&self) -> u8 {
        self.drop_count
    }

    /// Token currently picked up, if any.
    pub fn selection(&self) -> Option<HoleId> {
        self.selection
    }

    /// Holes the picked-up token may move to.
    pub fn selectable_holes(&self) -> Vec<HoleId> {
        self.selection
            .map(|from| self.destinations(from))
            .unwrap_or_default()
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn winner(&self) -> Option<Player> {
        self.status.winner()
    }

    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    /// Tokens of the player to move that have at least one empty neighbour.
    pub fn legal_sources(&self) -> Vec<HoleId> {
        active_holes(self.board_size)
            .filter(|hole| self.occupant(*hole).is_owned_by(self.current_player))
            .filter(|hole| !self.destinations(*hole).is_empty())
            .collect()
    }

    /// Render state of every hole on the board, hidden holes excluded.
    pub fn render(&self) -> Vec<HoleView> {
        let selectable = self.selectable_holes();
        active_holes(self.board_size)
            .map(|hole| HoleView {
                hole,
                occupant: self.occupant(hole),
                selectable: selectable.contains(&hole),
            })
            .collect()
    }

    /// Status bar text.
    pub fn status_message(&self) -> String {
        match self.status {
            GameStatus::InProgress => format!(
                "{} phase: {} to play",
                self.phase, self.current_player
            ),
            status => status.to_string(),
        }
    }

    /// Convert full game state to JSON snapshot.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "board_size": self.board_size,
            "phase": self.phase,
            "current_player": self.current_player,
            "drop_count": self.drop_count,
            "selection": self.selection,
            "status": self.status,
            "holes": self.render(),
            "message": self.status_message()
        })
    }
}

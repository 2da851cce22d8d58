//! Board topology.
//!
//! Both board sizes share a 13-slot addressing space laid out as
//!
//! ```text
//!  0 ─────── 1 ─────── 2
//!  │ ╲  3  ╱ │ ╲  4  ╱ │
//!  5 ─────── 6 ─────── 7
//!  │ ╱  8  ╲ │ ╱  9  ╲ │
//! 10 ────── 11 ────── 12
//! ```
//!
//! On the nine-hole board holes 3, 4, 8 and 9 are hidden and the diagonals run
//! straight through the centre. On the thirteen-hole board the diagonals are
//! routed through the extra holes instead, so neither table is a superset of the
//! other.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Number of addressable holes, shared by both board sizes.
pub const HOLE_COUNT: usize = 13;

/// Holes hidden on the nine-hole board.
const NINE_HIDDEN: [u8; 4] = [3, 4, 8, 9];

/// Board variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoardSize {
    #[default]
    Nine,
    Thirteen,
}

impl BoardSize {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Nine => "nine",
            Self::Thirteen => "thirteen",
        }
    }

    /// Number of holes in play.
    pub fn hole_count(&self) -> usize {
        match self {
            Self::Nine => 9,
            Self::Thirteen => HOLE_COUNT,
        }
    }

    /// Check if a hole is part of this board.
    pub fn is_active(&self, hole: HoleId) -> bool {
        match self {
            Self::Nine => !NINE_HIDDEN.contains(&hole.0),
            Self::Thirteen => true,
        }
    }
}

impl fmt::Display for BoardSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} holes", self.hole_count())
    }
}

/// Error when a board size name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown board size {0:?} (expected 9, nine, 13 or thirteen)")]
pub struct ParseBoardSizeError(pub String);

impl FromStr for BoardSize {
    type Err = ParseBoardSizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "9" | "nine" => Ok(Self::Nine),
            "13" | "thirteen" => Ok(Self::Thirteen),
            _ => Err(ParseBoardSizeError(s.to_string())),
        }
    }
}

/// Identifier of a hole, always in `[0, HOLE_COUNT)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct HoleId(u8);

impl HoleId {
    /// Create a hole ID.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not below [`HOLE_COUNT`]. An out-of-range hole is a
    /// bug in the caller, not a player mistake; use `HoleId::try_from` to
    /// validate untrusted input instead.
    pub fn new(index: usize) -> Self {
        assert!(
            index < HOLE_COUNT,
            "hole index {} out of range (0..{})",
            index,
            HOLE_COUNT
        );
        Self(index as u8)
    }

    /// Position in the 13-slot addressing space.
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over every addressable hole, hidden ones included.
    pub fn all() -> impl Iterator<Item = HoleId> {
        (0..HOLE_COUNT as u8).map(HoleId)
    }
}

impl fmt::Display for HoleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hole {}", self.0)
    }
}

/// Hole validation errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HoleError {
    #[error("hole index {0} out of range (0..13)")]
    OutOfRange(usize),
}

impl TryFrom<usize> for HoleId {
    type Error = HoleError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        if index < HOLE_COUNT {
            Ok(Self(index as u8))
        } else {
            Err(HoleError::OutOfRange(index))
        }
    }
}

impl TryFrom<u8> for HoleId {
    type Error = HoleError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        Self::try_from(index as usize)
    }
}

impl From<HoleId> for u8 {
    fn from(hole: HoleId) -> Self {
        hole.0
    }
}

/// Three holes that win when held by one player.
pub type WinLine = [HoleId; 3];

macro_rules! holes {
    ($($i:expr),* $(,)?) => {
        &[$(HoleId($i)),*]
    };
}

macro_rules! lines {
    ($([$a:expr, $b:expr, $c:expr]),* $(,)?) => {
        &[$([HoleId($a), HoleId($b), HoleId($c)]),*]
    };
}

const NINE_ADJACENCY: [&[HoleId]; HOLE_COUNT] = [
    holes![1, 5, 6],
    holes![0, 2, 5, 6, 7],
    holes![1, 6, 7],
    holes![],
    holes![],
    holes![0, 6, 10, 1, 11],
    holes![1, 5, 7, 11, 0, 12, 2, 10],
    holes![2, 6, 12, 1, 11],
    holes![],
    holes![],
    holes![5, 6, 11],
    holes![5, 6, 7, 10, 12],
    holes![7, 6, 11],
];

const THIRTEEN_ADJACENCY: [&[HoleId]; HOLE_COUNT] = [
    holes![1, 5, 3],
    holes![0, 2, 3, 6, 4],
    holes![1, 4, 7],
    holes![0, 1, 5, 6],
    holes![1, 2, 6, 7],
    holes![0, 3, 6, 8, 10],
    holes![1, 3, 5, 8, 11, 9, 7, 4],
    holes![2, 4, 6, 9, 12],
    holes![5, 6, 10, 11],
    holes![6, 7, 11, 12],
    holes![5, 8, 11],
    holes![10, 8, 6, 9, 12],
    holes![9, 7, 11],
];

const NINE_LINES: &[WinLine] = lines![
    // Rows
    [0, 1, 2],
    [5, 6, 7],
    [10, 11, 12],
    // Columns
    [0, 5, 10],
    [1, 6, 11],
    [2, 7, 12],
    // Diagonals
    [0, 6, 12],
    [2, 6, 10],
];

const THIRTEEN_LINES: &[WinLine] = lines![
    // Rows
    [0, 1, 2],
    [5, 6, 7],
    [10, 11, 12],
    // Columns
    [0, 5, 10],
    [1, 6, 11],
    [2, 7, 12],
    // Short diagonals around each inner hole
    [0, 3, 6],
    [1, 3, 5],
    [5, 8, 11],
    [10, 8, 6],
    [1, 4, 7],
    [2, 4, 6],
    [6, 9, 12],
    [7, 9, 11],
    // Diagonals through the centre
    [3, 6, 9],
    [8, 6, 4],
];

/// Holes reachable from `hole` by a single slide.
///
/// Hidden holes on the nine-hole board have no neighbours.
pub fn adjacent_holes(size: BoardSize, hole: HoleId) -> &'static [HoleId] {
    match size {
        BoardSize::Nine => NINE_ADJACENCY[hole.index()],
        BoardSize::Thirteen => THIRTEEN_ADJACENCY[hole.index()],
    }
}

/// Winning triples for a board size.
pub fn win_lines(size: BoardSize) -> &'static [WinLine] {
    match size {
        BoardSize::Nine => NINE_LINES,
        BoardSize::Thirteen => THIRTEEN_LINES,
    }
}

/// Holes that are in play on a board size, in index order.
pub fn active_holes(size: BoardSize) -> impl Iterator<Item = HoleId> {
    HoleId::all().filter(move |hole| size.is_active(*hole))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::BTreeSet;

    const SIZES: [BoardSize; 2] = [BoardSize::Nine, BoardSize::Thirteen];

    fn set(indices: &[usize]) -> BTreeSet<HoleId> {
        indices.iter().map(|i| HoleId::new(*i)).collect()
    }

    fn neighbours(size: BoardSize, hole: usize) -> BTreeSet<HoleId> {
        adjacent_holes(size, HoleId::new(hole)).iter().copied().collect()
    }

    #[test]
    fn test_adjacency_symmetric() {
        for size in SIZES {
            for a in HoleId::all() {
                for b in adjacent_holes(size, a) {
                    assert!(
                        adjacent_holes(size, *b).contains(&a),
                        "{}: {} lists {} but not the reverse",
                        size,
                        a,
                        b
                    );
                }
            }
        }
    }

    #[test]
    fn test_adjacency_has_no_self_loops_or_duplicates() {
        for size in SIZES {
            for hole in HoleId::all() {
                let list = adjacent_holes(size, hole);
                assert!(!list.contains(&hole));
                let unique: BTreeSet<_> = list.iter().collect();
                assert_eq!(unique.len(), list.len());
            }
        }
    }

    #[test]
    fn test_thirteen_centre_and_corner() {
        assert_eq!(
            neighbours(BoardSize::Thirteen, 6),
            set(&[1, 3, 5, 8, 11, 9, 7, 4])
        );
        assert_eq!(neighbours(BoardSize::Thirteen, 0), set(&[1, 5, 3]));
    }

    #[test]
    fn test_centre_differs_between_sizes() {
        assert_eq!(
            neighbours(BoardSize::Nine, 6),
            set(&[0, 1, 2, 5, 7, 10, 11, 12])
        );
        assert_ne!(neighbours(BoardSize::Nine, 6), neighbours(BoardSize::Thirteen, 6));
    }

    #[test]
    fn test_hidden_holes_unreachable_on_nine() {
        for hole in HoleId::all().filter(|h| !BoardSize::Nine.is_active(*h)) {
            assert!(adjacent_holes(BoardSize::Nine, hole).is_empty());
            for other in HoleId::all() {
                assert!(!adjacent_holes(BoardSize::Nine, other).contains(&hole));
            }
            for line in win_lines(BoardSize::Nine) {
                assert!(!line.contains(&hole));
            }
        }
    }

    #[test]
    fn test_win_line_counts() {
        assert_eq!(win_lines(BoardSize::Nine).len(), 8);
        assert_eq!(win_lines(BoardSize::Thirteen).len(), 16);
    }

    #[test]
    fn test_win_lines_distinct() {
        for size in SIZES {
            let lines: BTreeSet<BTreeSet<HoleId>> = win_lines(size)
                .iter()
                .map(|line| line.iter().copied().collect())
                .collect();
            assert_eq!(lines.len(), win_lines(size).len());
            assert!(lines.iter().all(|line| line.len() == 3));
        }
    }

    #[test]
    fn test_active_holes() {
        let nine: Vec<usize> = active_holes(BoardSize::Nine).map(HoleId::index).collect();
        assert_eq!(nine, vec![0, 1, 2, 5, 6, 7, 10, 11, 12]);
        assert_eq!(active_holes(BoardSize::Thirteen).count(), 13);
        assert_eq!(BoardSize::Nine.hole_count(), 9);
    }

    #[test]
    fn test_hole_id_validation() {
        assert_eq!(HoleId::try_from(12usize).map(HoleId::index), Ok(12));
        assert_eq!(HoleId::try_from(13usize), Err(HoleError::OutOfRange(13)));
        assert!(serde_json::from_str::<HoleId>("40").is_err());
        assert_eq!(serde_json::to_value(HoleId::new(7)).unwrap(), 7);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_hole_id_out_of_range_panics() {
        HoleId::new(13);
    }

    #[test]
    fn test_board_size_parse() {
        assert_eq!("9".parse::<BoardSize>(), Ok(BoardSize::Nine));
        assert_eq!("Thirteen".parse::<BoardSize>(), Ok(BoardSize::Thirteen));
        assert!("eleven".parse::<BoardSize>().is_err());
        assert_eq!(format!("{}", BoardSize::Thirteen), "13 holes");
    }
}

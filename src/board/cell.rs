//! Cell state and per-cell data.
//!
//! ## CellState
//!
//! A single closed variant replaces the original's string-tagged state plus
//! a separate queen-type side channel: a queen always carries its kind, and
//! nothing else can.
//!
//! ## Cell
//!
//! One record per board coordinate. A cell holding a valid queen also owns
//! the set of coordinates its placement auto-marked (`linked`), so removal
//! can reverse them atomically. Marked cells hold no back-pointer to the
//! queen that marked them.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::coord::Coord;
use crate::regions::RegionId;

/// Classification of a placed queen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QueenKind {
    /// No existing queen shares the row, column, or 8-neighborhood.
    Valid,
    /// Violates the row/column/adjacency rule against an existing queen.
    Conflicting,
}

/// State of a single cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellState {
    /// Untouched; shows its region color.
    #[default]
    Empty,
    /// Blocked out, by the player or by a valid queen's propagation.
    Marked,
    /// Holds a queen of the given kind.
    Queen(QueenKind),
}

impl CellState {
    /// Check if this is a queen state of either kind.
    #[must_use]
    pub const fn is_queen(self) -> bool {
        matches!(self, CellState::Queen(_))
    }

    /// The queen kind, if this cell holds a queen.
    #[must_use]
    pub const fn queen_kind(self) -> Option<QueenKind> {
        match self {
            CellState::Queen(kind) => Some(kind),
            _ => None,
        }
    }
}

/// Cells auto-marked by one valid queen's propagation.
///
/// A valid queen on a 6x6 board threatens at most its row, column, and
/// ring; 16 inline slots cover the common case without heap allocation.
pub type LinkedCells = SmallVec<[Coord; 16]>;

/// A single board cell.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    /// Current state.
    pub state: CellState,
    /// Region this cell belongs to; assigned once at setup.
    pub region: RegionId,
    /// Coordinates this cell's valid queen caused to become marked.
    ///
    /// Non-empty only while `state == Queen(QueenKind::Valid)`.
    pub linked: LinkedCells,
}

impl Cell {
    /// Create an empty cell in the given region.
    #[must_use]
    pub fn new(region: RegionId) -> Self {
        Self {
            state: CellState::Empty,
            region,
            linked: LinkedCells::new(),
        }
    }
}

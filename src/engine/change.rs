//! Observable state changes.
//!
//! Every mutating session call returns the batch of cells whose state
//! changed, so a presentation layer can update sprites without polling the
//! whole board.

use serde::{Deserialize, Serialize};

use crate::board::{CellState, Coord};

/// One cell's new state after a committed operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellChange {
    /// The cell that changed.
    pub coord: Coord,
    /// Its state after the operation.
    pub state: CellState,
}

impl CellChange {
    /// Create a change record.
    #[must_use]
    pub const fn new(coord: Coord, state: CellState) -> Self {
        Self { coord, state }
    }
}

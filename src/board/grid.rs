//! The board: a flat arena of cells.
//!
//! Cells live in a `Vec` indexed by `row * size + col`. The board owns
//! every cell exclusively; coordinates never change after creation.
//! Lookups by coordinate are bounds-checked at the public surface; the
//! crate-internal mutators take coordinates that have already been
//! validated and index the arena directly.

use serde::{Deserialize, Serialize};

use super::cell::{Cell, CellState, LinkedCells};
use super::coord::Coord;
use crate::error::EngineError;
use crate::regions::RegionPartition;

/// A `size x size` grid of cells.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    size: u8,
    cells: Vec<Cell>,
}

impl Board {
    /// Create a board with all cells empty.
    ///
    /// Region ids default to region 0 until a partition is applied with
    /// [`Board::apply_partition`].
    #[must_use]
    pub fn new(size: u8) -> Self {
        assert!(size > 0, "Board size must be positive");
        let cell_count = size as usize * size as usize;
        Self {
            size,
            cells: vec![Cell::new(crate::regions::RegionId::new(0)); cell_count],
        }
    }

    /// Board side length.
    #[must_use]
    pub const fn size(&self) -> u8 {
        self.size
    }

    /// Check whether a coordinate lies on this board.
    #[must_use]
    pub const fn contains(&self, coord: Coord) -> bool {
        coord.in_bounds(self.size)
    }

    /// Look up a cell by coordinate.
    pub fn cell(&self, coord: Coord) -> Result<&Cell, EngineError> {
        if self.contains(coord) {
            Ok(&self.cells[coord.index(self.size)])
        } else {
            Err(EngineError::OutOfBounds {
                row: coord.row,
                col: coord.col,
                size: self.size,
            })
        }
    }

    /// Coordinates of every cell currently holding a queen of either kind.
    ///
    /// Order-insensitive; consumers must not rely on it.
    pub fn queens(&self) -> impl Iterator<Item = Coord> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.state.is_queen())
            .map(|(index, _)| Coord::from_index(index, self.size))
    }

    /// Assign each cell its region id from a partition.
    ///
    /// Called once at session setup; the partition must match the board
    /// size.
    pub fn apply_partition(&mut self, partition: &RegionPartition) {
        assert_eq!(
            partition.size(),
            self.size,
            "Partition size must match board size"
        );
        for coord in Coord::all(self.size) {
            self.cells[coord.index(self.size)].region = partition.region_of(coord);
        }
    }

    // === Crate-internal access (pre-validated coordinates) ===

    pub(crate) fn state(&self, coord: Coord) -> CellState {
        self.cells[coord.index(self.size)].state
    }

    pub(crate) fn set_state(&mut self, coord: Coord, state: CellState) {
        self.cells[coord.index(self.size)].state = state;
    }

    pub(crate) fn take_linked(&mut self, coord: Coord) -> LinkedCells {
        std::mem::take(&mut self.cells[coord.index(self.size)].linked)
    }

    pub(crate) fn set_linked(&mut self, coord: Coord, linked: LinkedCells) {
        self.cells[coord.index(self.size)].linked = linked;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::cell::QueenKind;

    #[test]
    fn test_new_board_all_empty() {
        let board = Board::new(6);
        assert_eq!(board.size(), 6);
        for coord in Coord::all(6) {
            let cell = board.cell(coord).unwrap();
            assert_eq!(cell.state, CellState::Empty);
            assert!(cell.linked.is_empty());
        }
    }

    #[test]
    fn test_cell_out_of_bounds() {
        let board = Board::new(6);
        assert_eq!(
            board.cell(Coord::new(6, 0)),
            Err(EngineError::OutOfBounds {
                row: 6,
                col: 0,
                size: 6
            })
        );
        assert_eq!(
            board.cell(Coord::new(0, 255)),
            Err(EngineError::OutOfBounds {
                row: 0,
                col: 255,
                size: 6
            })
        );
    }

    #[test]
    fn test_queens_iterator() {
        let mut board = Board::new(6);
        assert_eq!(board.queens().count(), 0);

        board.set_state(Coord::new(0, 0), CellState::Queen(QueenKind::Valid));
        board.set_state(Coord::new(2, 2), CellState::Queen(QueenKind::Conflicting));
        board.set_state(Coord::new(5, 5), CellState::Marked);

        let mut queens: Vec<_> = board.queens().collect();
        queens.sort();
        assert_eq!(queens, vec![Coord::new(0, 0), Coord::new(2, 2)]);
    }

    #[test]
    fn test_apply_partition() {
        let partition = RegionPartition::standard();
        let mut board = Board::new(6);
        board.apply_partition(&partition);

        for coord in Coord::all(6) {
            assert_eq!(board.cell(coord).unwrap().region, partition.region_of(coord));
        }
    }

    #[test]
    #[should_panic(expected = "Board size must be positive")]
    fn test_zero_size_panics() {
        let _ = Board::new(0);
    }
}

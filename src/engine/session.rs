//! The puzzle session: explicit context for every engine operation.
//!
//! A `Session` owns the board, the region partition, and the undo history
//! for one active puzzle. All operations are synchronous and run to
//! completion inside the caller's event handler; an out-of-bounds
//! coordinate is rejected before anything mutates.
//!
//! ## State machine
//!
//! Activating a cell advances it through a fixed cycle:
//!
//! | Current | Next | Side effect |
//! |---|---|---|
//! | Empty | Marked | none |
//! | Marked | Queen(Valid / Conflicting) | valid: propagate onto threatened empty cells |
//! | Queen(Valid) | Empty | reset the cells it marked |
//! | Queen(Conflicting) | Empty | none |
//!
//! Every committed transition pushes a history snapshot; `undo` reverses
//! exactly one transition, propagation included.

use serde::{Deserialize, Serialize};

use crate::board::{Board, CellState, Coord, LinkedCells, QueenKind};
use crate::engine::change::CellChange;
use crate::error::EngineError;
use crate::history::{History, HistoryEntry, SideEffects};
use crate::regions::{RegionId, RegionPartition};
use crate::rules::{conflicts, threatens};

/// Side length of the standard board.
pub const GRID_SIZE: u8 = 6;

/// One active puzzle: board, regions, and undo history.
///
/// ```
/// use queens_engine::{CellState, Session};
///
/// let mut session = Session::new();
/// let changes = session.activate_cell(0, 0).unwrap();
/// assert_eq!(changes.len(), 1);
/// assert_eq!(session.state_of(0, 0), Ok(CellState::Marked));
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Session {
    board: Board,
    partition: RegionPartition,
    history: History,
}

impl Session {
    /// Create a session on the standard 6x6 board with its nine regions.
    #[must_use]
    pub fn new() -> Self {
        let partition = RegionPartition::standard();
        let mut board = Board::new(GRID_SIZE);
        board.apply_partition(&partition);
        Self {
            board,
            partition,
            history: History::new(),
        }
    }

    // === Operations ===

    /// Activate a cell, advancing it one step through the state cycle.
    ///
    /// Returns every cell whose state changed: the activated cell plus any
    /// cells touched by propagation or reset. Fails with `OutOfBounds`
    /// before mutating anything.
    pub fn activate_cell(&mut self, row: u8, col: u8) -> Result<Vec<CellChange>, EngineError> {
        let coord = Coord::new(row, col);
        let prev = self.board.cell(coord)?.clone();

        let mut changes = Vec::new();
        let mut side_effects = SideEffects::new();
        match prev.state {
            CellState::Empty => {
                self.board.set_state(coord, CellState::Marked);
                changes.push(CellChange::new(coord, CellState::Marked));
            }
            CellState::Marked => {
                // Classified against the queens already on the board, so a
                // queen is never compared against itself.
                let kind = if conflicts(coord, self.board.queens()) {
                    QueenKind::Conflicting
                } else {
                    QueenKind::Valid
                };
                self.board.set_state(coord, CellState::Queen(kind));
                changes.push(CellChange::new(coord, CellState::Queen(kind)));

                if kind == QueenKind::Valid {
                    let linked = self.propagate(coord, &mut changes);
                    // Propagation only touches empty cells.
                    for &cell in &linked {
                        side_effects.push((cell, CellState::Empty));
                    }
                    self.board.set_linked(coord, linked);
                }
            }
            CellState::Queen(QueenKind::Valid) => {
                let linked = self.board.take_linked(coord);
                for &cell in &linked {
                    let state = self.board.state(cell);
                    if state == CellState::Empty {
                        // Cycled back to empty since it was linked; the
                        // reset leaves it alone and the batch omits it.
                        continue;
                    }
                    side_effects.push((cell, state));
                    self.board.set_state(cell, CellState::Empty);
                    changes.push(CellChange::new(cell, CellState::Empty));
                }
                self.board.set_state(coord, CellState::Empty);
                changes.push(CellChange::new(coord, CellState::Empty));
            }
            CellState::Queen(QueenKind::Conflicting) => {
                // A conflicting queen never propagated, so only its own
                // cell clears.
                self.board.set_state(coord, CellState::Empty);
                changes.push(CellChange::new(coord, CellState::Empty));
            }
        }

        self.history
            .record(HistoryEntry::new(coord, prev.state, prev.linked, side_effects));
        Ok(changes)
    }

    /// Undo the most recent transition.
    ///
    /// Returns `None` (a defined no-op, not an error) when the history is
    /// empty. Otherwise replays the recorded snapshot verbatim: every
    /// side-effect cell returns to the state it held before the
    /// transition, then the activated cell's state and linked set are
    /// restored. Reports every cell touched.
    pub fn undo(&mut self) -> Option<Vec<CellChange>> {
        let entry = self.history.pop_last()?;
        let mut changes = Vec::new();

        for &(cell, state) in &entry.side_effects {
            self.board.set_state(cell, state);
            changes.push(CellChange::new(cell, state));
        }

        self.board.set_state(entry.coord, entry.prev_state);
        self.board.set_linked(entry.coord, entry.prev_linked.clone());
        changes.push(CellChange::new(entry.coord, entry.prev_state));

        Some(changes)
    }

    /// Mark a run of cells, as a drag gesture does.
    ///
    /// Applies the Empty -> Marked transition to each coordinate that is
    /// still empty, one history entry per marked cell; cells in any other
    /// state are skipped. All coordinates are validated before anything
    /// mutates.
    pub fn mark_cells<I>(&mut self, coords: I) -> Result<Vec<CellChange>, EngineError>
    where
        I: IntoIterator<Item = Coord>,
    {
        let coords: Vec<Coord> = coords.into_iter().collect();
        for &coord in &coords {
            if !self.board.contains(coord) {
                return Err(EngineError::OutOfBounds {
                    row: coord.row,
                    col: coord.col,
                    size: self.board.size(),
                });
            }
        }

        let mut changes = Vec::new();
        for coord in coords {
            if self.board.state(coord) == CellState::Empty {
                self.board.set_state(coord, CellState::Marked);
                self.history.record(HistoryEntry::new(
                    coord,
                    CellState::Empty,
                    LinkedCells::new(),
                    SideEffects::new(),
                ));
                changes.push(CellChange::new(coord, CellState::Marked));
            }
        }
        Ok(changes)
    }

    // === Read accessors ===

    /// State of a cell.
    pub fn state_of(&self, row: u8, col: u8) -> Result<CellState, EngineError> {
        Ok(self.board.cell(Coord::new(row, col))?.state)
    }

    /// Queen kind of a cell, if it holds a queen.
    pub fn queen_kind_of(&self, row: u8, col: u8) -> Result<Option<QueenKind>, EngineError> {
        Ok(self.board.cell(Coord::new(row, col))?.state.queen_kind())
    }

    /// Region of a cell.
    pub fn region_of(&self, row: u8, col: u8) -> Result<RegionId, EngineError> {
        Ok(self.board.cell(Coord::new(row, col))?.region)
    }

    /// Baseline (reset) color of a cell's region.
    pub fn region_color_of(&self, row: u8, col: u8) -> Result<u32, EngineError> {
        let coord = Coord::new(row, col);
        self.board.cell(coord)?;
        Ok(self.partition.color_of(coord))
    }

    /// Board side length.
    #[must_use]
    pub const fn size(&self) -> u8 {
        self.board.size()
    }

    /// The board itself, for read-only inspection.
    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// The region partition.
    #[must_use]
    pub const fn partition(&self) -> &RegionPartition {
        &self.partition
    }

    /// Number of undoable transitions.
    #[must_use]
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    // === Internals ===

    /// Mark every empty cell the new valid queen threatens.
    ///
    /// Full-board scan; O(size^2) per placement, which is fine at the
    /// board sizes in scope. The queen's own cell is already `Queen`, so
    /// the empty-state check excludes it.
    fn propagate(&mut self, queen: Coord, changes: &mut Vec<CellChange>) -> LinkedCells {
        let mut linked = LinkedCells::new();
        for target in Coord::all(self.board.size()) {
            if self.board.state(target) == CellState::Empty && threatens(queen, target) {
                self.board.set_state(target, CellState::Marked);
                linked.push(target);
                changes.push(CellChange::new(target, CellState::Marked));
            }
        }
        linked
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_all_empty() {
        let session = Session::new();
        assert_eq!(session.size(), GRID_SIZE);
        assert_eq!(session.history_len(), 0);
        for coord in Coord::all(GRID_SIZE) {
            assert_eq!(
                session.state_of(coord.row, coord.col),
                Ok(CellState::Empty)
            );
        }
    }

    #[test]
    fn test_activation_cycle() {
        let mut session = Session::new();

        session.activate_cell(3, 3).unwrap();
        assert_eq!(session.state_of(3, 3), Ok(CellState::Marked));

        session.activate_cell(3, 3).unwrap();
        assert_eq!(
            session.state_of(3, 3),
            Ok(CellState::Queen(QueenKind::Valid))
        );

        session.activate_cell(3, 3).unwrap();
        assert_eq!(session.state_of(3, 3), Ok(CellState::Empty));
    }

    #[test]
    fn test_every_transition_records_history() {
        let mut session = Session::new();
        session.activate_cell(0, 0).unwrap();
        session.activate_cell(0, 0).unwrap();
        session.activate_cell(0, 0).unwrap();
        assert_eq!(session.history_len(), 3);
    }

    #[test]
    fn test_out_of_bounds_rejected_before_mutation() {
        let mut session = Session::new();
        let err = session.activate_cell(GRID_SIZE, 0).unwrap_err();
        assert_eq!(
            err,
            EngineError::OutOfBounds {
                row: GRID_SIZE,
                col: 0,
                size: GRID_SIZE
            }
        );
        assert_eq!(session.history_len(), 0);
    }

    #[test]
    fn test_regions_assigned() {
        let session = Session::new();
        assert_eq!(session.region_of(0, 0), Ok(RegionId::new(0)));
        assert_eq!(session.region_of(5, 5), Ok(RegionId::new(8)));
        assert_eq!(session.region_color_of(0, 0), Ok(0xffcccc));
    }

    #[test]
    fn test_session_serialization() {
        let mut session = Session::new();
        session.activate_cell(0, 0).unwrap();
        session.activate_cell(0, 0).unwrap();

        let json = serde_json::to_string(&session).unwrap();
        let deserialized: Session = serde_json::from_str(&json).unwrap();
        assert_eq!(
            deserialized.state_of(0, 0),
            Ok(CellState::Queen(QueenKind::Valid))
        );
        assert_eq!(deserialized.history_len(), 2);
    }
}

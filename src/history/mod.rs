//! Undo history.
//!
//! Every committed transition pushes one `HistoryEntry`: a snapshot of the
//! activated cell plus the prior state of every other cell the transition
//! changed (propagation marks, reset clears). Undo replays the snapshot
//! verbatim, so a cell that had left the `Marked` state before its owning
//! queen's removal comes back exactly as it was. Entries are consumed
//! last-in-first-out and discarded once replayed.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::board::{CellState, Coord, LinkedCells};

/// Prior states of the cells a transition changed as a side effect.
///
/// Propagation touches at most a queen's row, column, and ring; 16 inline
/// slots cover the common case without heap allocation.
pub type SideEffects = SmallVec<[(Coord, CellState); 16]>;

/// Snapshot of one transition, taken just before it committed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// The activated cell.
    pub coord: Coord,
    /// Its state before the transition.
    pub prev_state: CellState,
    /// Its linked set before the transition.
    pub prev_linked: LinkedCells,
    /// Every other cell the transition changed, with its state before the
    /// transition. Empty for transitions without side effects.
    pub side_effects: SideEffects,
}

impl HistoryEntry {
    /// Create a snapshot entry.
    #[must_use]
    pub fn new(
        coord: Coord,
        prev_state: CellState,
        prev_linked: LinkedCells,
        side_effects: SideEffects,
    ) -> Self {
        Self {
            coord,
            prev_state,
            prev_linked,
            side_effects,
        }
    }
}

/// LIFO stack of transition snapshots. Unbounded.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    /// Create an empty history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a snapshot.
    pub fn record(&mut self, entry: HistoryEntry) {
        self.entries.push(entry);
    }

    /// Pop the most recent snapshot, if any.
    pub fn pop_last(&mut self) -> Option<HistoryEntry> {
        self.entries.pop()
    }

    /// Number of recorded transitions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if no transitions are recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

//! # queens-engine
//!
//! Rule engine for a Queens-style grid placement puzzle: a 6x6 board
//! partitioned into nine colored regions, where the player marks cells or
//! places queens, and the engine classifies each placement, propagates the
//! consequences of a valid queen, and can undo the last action.
//!
//! ## Design Principles
//!
//! 1. **Pure engine**: No rendering, input capture, or I/O. Callers invoke
//!    operations and receive the resulting [`CellChange`] batches.
//!
//! 2. **Explicit session**: All state lives in a [`Session`] passed to
//!    every operation. No globals, no hidden lifecycle.
//!
//! 3. **Closed states**: [`CellState`] is a tagged variant; a queen always
//!    carries its kind and nothing else can. Invalid states are
//!    unrepresentable, so the state machine's match is exhaustive.
//!
//! 4. **Atomic operations**: Every call either completes fully or fails
//!    with [`EngineError::OutOfBounds`] before mutating anything.
//!
//! ## Modules
//!
//! - `board`: coordinates, cell state, and the arena-backed grid
//! - `regions`: the fixed colored region partition
//! - `rules`: the pure conflict/threat predicates
//! - `engine`: the session, its state machine, and change reporting
//! - `history`: the undo stack
//! - `error`: error taxonomy

pub mod board;
pub mod engine;
pub mod error;
pub mod history;
pub mod regions;
pub mod rules;

// Re-export commonly used types
pub use crate::board::{Board, Cell, CellState, Coord, LinkedCells, QueenKind};

pub use crate::engine::{CellChange, Session, GRID_SIZE};

pub use crate::error::EngineError;

pub use crate::history::{History, HistoryEntry, SideEffects};

pub use crate::regions::{Region, RegionId, RegionPartition, MARKED_COLOR, REGION_CELLS};

pub use crate::rules::{conflicts, threatens};

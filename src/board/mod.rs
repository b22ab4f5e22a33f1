//! Board model: coordinates, cell state, and the cell arena.
//!
//! The board owns exactly one `Cell` per coordinate and exposes lookup by
//! coordinate and by state. All placement logic lives in `engine`; this
//! module only holds data and invariant-preserving accessors.

pub mod cell;
pub mod coord;
pub mod grid;

pub use cell::{Cell, CellState, LinkedCells, QueenKind};
pub use coord::Coord;
pub use grid::Board;

//! Engine error taxonomy.
//!
//! The only caller-facing failure is an out-of-bounds coordinate, and it is
//! rejected before any mutation. Everything else the original design treated
//! as an "error" is either unrepresentable here (a queen without a kind) or
//! a defined no-op (undo on an empty history).

use thiserror::Error;

/// Errors returned by engine operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum EngineError {
    /// A coordinate fell outside the `size x size` grid.
    ///
    /// The call is rejected before any cell is touched; the caller may
    /// simply ignore it and issue the next event.
    #[error("cell ({row}, {col}) is outside the {size}x{size} board")]
    OutOfBounds { row: u8, col: u8, size: u8 },
}

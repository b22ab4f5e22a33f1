//! Placement engine: the session context, the state machine, and the
//! change batches it reports to callers.

pub mod change;
pub mod session;

pub use change::CellChange;
pub use session::{Session, GRID_SIZE};

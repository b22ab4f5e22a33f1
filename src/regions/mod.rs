//! Region partition: the fixed colored blocks of the board.
//!
//! Used only to assign each cell's baseline color; not a placement
//! constraint.

pub mod partition;

pub use partition::{Region, RegionId, RegionPartition, MARKED_COLOR, REGION_CELLS};

//! Placement rules.

pub mod conflict;

pub use conflict::{conflicts, threatens};

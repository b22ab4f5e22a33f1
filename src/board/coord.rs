//! Board coordinates.
//!
//! A `Coord` is a `(row, col)` pair in `[0, size)`. The board stores cells
//! in a flat arena, so a coordinate also knows how to map itself to an
//! arena slot (`row * size + col`) and back.

use serde::{Deserialize, Serialize};

/// A cell coordinate on the board.
///
/// Components are `u8`: boards in scope are tens of cells, not thousands.
///
/// ```
/// use queens_engine::Coord;
///
/// let c = Coord::new(2, 3);
/// assert_eq!(c.row, 2);
/// assert_eq!(c.col, 3);
/// assert_eq!(c.index(6), 15);
/// assert_eq!(Coord::from_index(15, 6), c);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    pub row: u8,
    pub col: u8,
}

impl Coord {
    /// Create a coordinate.
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Arena slot for this coordinate on a `size x size` board.
    #[must_use]
    pub const fn index(self, size: u8) -> usize {
        self.row as usize * size as usize + self.col as usize
    }

    /// Coordinate for an arena slot on a `size x size` board.
    #[must_use]
    pub const fn from_index(index: usize, size: u8) -> Self {
        Self {
            row: (index / size as usize) as u8,
            col: (index % size as usize) as u8,
        }
    }

    /// Check that both components lie in `[0, size)`.
    #[must_use]
    pub const fn in_bounds(self, size: u8) -> bool {
        self.row < size && self.col < size
    }

    /// Chebyshev distance to another coordinate.
    ///
    /// Distance 1 means the two cells touch, diagonals included.
    #[must_use]
    pub fn chebyshev(self, other: Coord) -> u8 {
        self.row.abs_diff(other.row).max(self.col.abs_diff(other.col))
    }

    /// Iterate over every coordinate of a `size x size` board in row-major
    /// order.
    pub fn all(size: u8) -> impl Iterator<Item = Coord> {
        (0..size).flat_map(move |row| (0..size).map(move |col| Coord::new(row, col)))
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_round_trip() {
        for index in 0..36 {
            let coord = Coord::from_index(index, 6);
            assert_eq!(coord.index(6), index);
        }
    }

    #[test]
    fn test_in_bounds() {
        assert!(Coord::new(0, 0).in_bounds(6));
        assert!(Coord::new(5, 5).in_bounds(6));
        assert!(!Coord::new(6, 0).in_bounds(6));
        assert!(!Coord::new(0, 6).in_bounds(6));
    }

    #[test]
    fn test_chebyshev() {
        let origin = Coord::new(2, 2);
        assert_eq!(origin.chebyshev(origin), 0);
        assert_eq!(origin.chebyshev(Coord::new(1, 1)), 1);
        assert_eq!(origin.chebyshev(Coord::new(3, 1)), 1);
        assert_eq!(origin.chebyshev(Coord::new(2, 5)), 3);
        assert_eq!(origin.chebyshev(Coord::new(0, 2)), 2);
    }

    #[test]
    fn test_all_covers_board() {
        let coords: Vec<_> = Coord::all(6).collect();
        assert_eq!(coords.len(), 36);
        assert_eq!(coords[0], Coord::new(0, 0));
        assert_eq!(coords[35], Coord::new(5, 5));
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Coord::new(4, 1)), "(4, 1)");
    }

    #[test]
    fn test_serialization() {
        let coord = Coord::new(3, 4);
        let json = serde_json::to_string(&coord).unwrap();
        let deserialized: Coord = serde_json::from_str(&json).unwrap();
        assert_eq!(coord, deserialized);
    }
}

//! The conflict rule: pure predicates, no state, no side effects.
//!
//! A queen threatens every cell in its row, its column, and its
//! 8-neighborhood (Chebyshev distance 1). The same predicate is used in
//! both directions: to classify a candidate against existing queens, and
//! to find the cells a newly valid queen propagates onto.

use crate::board::Coord;

/// Check whether a queen at `queen` threatens the cell at `target`.
///
/// True on shared row, shared column, or Chebyshev distance <= 1. The
/// relation is symmetric, and trivially true for `queen == target`; the
/// engine never evaluates that degenerate case because a candidate is
/// classified before it becomes a queen.
///
/// ```
/// use queens_engine::{threatens, Coord};
///
/// let queen = Coord::new(0, 0);
/// assert!(threatens(queen, Coord::new(0, 5))); // same row
/// assert!(threatens(queen, Coord::new(5, 0))); // same column
/// assert!(threatens(queen, Coord::new(1, 1))); // diagonal neighbor
/// assert!(!threatens(queen, Coord::new(2, 2)));
/// ```
#[must_use]
pub fn threatens(queen: Coord, target: Coord) -> bool {
    queen.row == target.row || queen.col == target.col || queen.chebyshev(target) <= 1
}

/// Check whether placing a queen at `candidate` conflicts with any
/// existing queen.
///
/// The verdict does not depend on the order of `queens`.
#[must_use]
pub fn conflicts<I>(candidate: Coord, queens: I) -> bool
where
    I: IntoIterator<Item = Coord>,
{
    queens.into_iter().any(|queen| threatens(queen, candidate))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threatens_row_and_column() {
        let queen = Coord::new(3, 3);
        assert!(threatens(queen, Coord::new(3, 0)));
        assert!(threatens(queen, Coord::new(3, 5)));
        assert!(threatens(queen, Coord::new(0, 3)));
        assert!(threatens(queen, Coord::new(5, 3)));
    }

    #[test]
    fn test_threatens_neighborhood() {
        let queen = Coord::new(3, 3);
        for row in 2..=4 {
            for col in 2..=4 {
                assert!(threatens(queen, Coord::new(row, col)));
            }
        }
    }

    #[test]
    fn test_does_not_threaten_far_diagonal() {
        let queen = Coord::new(3, 3);
        // Two steps along a diagonal is legal in this puzzle.
        assert!(!threatens(queen, Coord::new(1, 1)));
        assert!(!threatens(queen, Coord::new(5, 1)));
        assert!(!threatens(queen, Coord::new(5, 5)));
    }

    #[test]
    fn test_threatens_is_symmetric() {
        let a = Coord::new(0, 4);
        let b = Coord::new(2, 4);
        assert_eq!(threatens(a, b), threatens(b, a));

        let c = Coord::new(1, 1);
        let d = Coord::new(4, 3);
        assert_eq!(threatens(c, d), threatens(d, c));
    }

    #[test]
    fn test_conflicts_any_queen() {
        let queens = [Coord::new(0, 0), Coord::new(4, 4)];
        assert!(conflicts(Coord::new(0, 5), queens)); // row of first
        assert!(conflicts(Coord::new(3, 3), queens)); // adjacent to second
        assert!(!conflicts(Coord::new(2, 5), queens));
    }

    #[test]
    fn test_conflicts_empty_queen_set() {
        assert!(!conflicts(Coord::new(2, 2), std::iter::empty()));
    }
}

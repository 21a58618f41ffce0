//! Board coordinates.

use core::fmt;

/// Offsets of the four orthogonal neighbours.
pub const ORTHOGONAL: [(isize, isize); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// Offsets of a cell and its eight surrounding neighbours.
pub const SURROUNDING: [(isize, isize); 9] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 0),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// A 0-indexed `(row, col)` position. Values outside any board are allowed so
/// that stray targets can be represented and rejected by the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    pub row: isize,
    pub col: isize,
}

impl Coordinate {
    pub const fn new(row: isize, col: isize) -> Self {
        Self { row, col }
    }

    /// Build from the 1-indexed pair typed by a human.
    pub fn from_one_based(row: i64, col: i64) -> Self {
        Self::new(row as isize - 1, col as isize - 1)
    }

    /// Shift by `(d_row, d_col)`.
    pub const fn offset(self, d_row: isize, d_col: isize) -> Self {
        Self::new(self.row + d_row, self.col + d_col)
    }

    /// The four orthogonal neighbours, in a fixed order.
    pub fn neighbors(self) -> [Coordinate; 4] {
        ORTHOGONAL.map(|(dr, dc)| self.offset(dr, dc))
    }

    /// This coordinate together with its eight surrounding cells.
    pub fn surrounding(self) -> impl Iterator<Item = Coordinate> {
        SURROUNDING
            .into_iter()
            .map(move |(dr, dc)| self.offset(dr, dc))
    }

    /// Row-major index on a board of `size`, if in range.
    pub fn index(self, size: usize) -> Option<usize> {
        let in_range = |v: isize| v >= 0 && (v as usize) < size;
        if in_range(self.row) && in_range(self.col) {
            Some(self.row as usize * size + self.col as usize)
        } else {
            None
        }
    }
}

/// Displays the 1-indexed form players type in.
impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.row + 1, self.col + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_rejects_negative_and_large() {
        assert_eq!(Coordinate::new(0, 0).index(6), Some(0));
        assert_eq!(Coordinate::new(5, 5).index(6), Some(35));
        assert_eq!(Coordinate::new(-1, 0).index(6), None);
        assert_eq!(Coordinate::new(0, 6).index(6), None);
    }

    #[test]
    fn one_based_conversion() {
        let c = Coordinate::from_one_based(1, 6);
        assert_eq!(c, Coordinate::new(0, 5));
        assert_eq!(alloc::format!("{}", c), "1 6");
    }

    #[test]
    fn surrounding_contains_self() {
        let c = Coordinate::new(2, 2);
        assert_eq!(c.surrounding().count(), 9);
        assert!(c.surrounding().any(|s| s == c));
    }
}

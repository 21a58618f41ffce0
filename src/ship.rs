//! Ship definitions: geometry and hit points.

use core::fmt;

use crate::coord::Coordinate;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Cells run along the row, column increasing.
    Horizontal,
    /// Cells run along the column, row increasing.
    Vertical,
}

impl Orientation {
    /// Step from one ship cell to the next.
    fn step(self) -> (isize, isize) {
        match self {
            Orientation::Horizontal => (0, 1),
            Orientation::Vertical => (1, 0),
        }
    }
}

/// A ship with its origin ("bow"), length and remaining hit points.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Ship {
    origin: Coordinate,
    length: usize,
    orientation: Orientation,
    hit_points: usize,
}

impl Ship {
    /// Create an undamaged ship. `length` must be at least 1.
    pub fn new(origin: Coordinate, length: usize, orientation: Orientation) -> Self {
        assert!(length >= 1, "ship length must be at least 1");
        Ship {
            origin,
            length,
            orientation,
            hit_points: length,
        }
    }

    /// Cells occupied by the ship, starting at the origin.
    pub fn cells(&self) -> impl Iterator<Item = Coordinate> {
        let origin = self.origin;
        let (dr, dc) = self.orientation.step();
        (0..self.length as isize).map(move |i| origin.offset(dr * i, dc * i))
    }

    /// The ship's cells and every cell touching them, including diagonals.
    /// Coordinates may lie outside the board and may repeat.
    pub fn contour(&self) -> impl Iterator<Item = Coordinate> {
        self.cells().flat_map(Coordinate::surrounding)
    }

    /// Whether the ship occupies `coord`.
    pub fn contains(&self, coord: Coordinate) -> bool {
        self.cells().any(|c| c == coord)
    }

    /// Register a shot at `coord`. Returns `true` if it landed on the ship;
    /// hit points are only decremented while the ship is still afloat.
    pub fn register_hit(&mut self, coord: Coordinate) -> bool {
        if !self.contains(coord) {
            return false;
        }
        self.hit_points = self.hit_points.saturating_sub(1);
        true
    }

    /// Check if the ship is destroyed (no hit points left).
    pub fn is_destroyed(&self) -> bool {
        self.hit_points == 0
    }

    pub fn hit_points(&self) -> usize {
        self.hit_points
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn origin(&self) -> Coordinate {
        self.origin
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ origin: ({}, {}), length: {}, orientation: {:?}, hit_points: {} }}",
            self.origin.row, self.origin.col, self.length, self.orientation, self.hit_points,
        )
    }
}

//! Board state: cells, placed ships, exclusion zone and fired cells.

use alloc::format;
use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

use crate::common::{PlacementError, ShotError, ShotOutcome};
use crate::coord::Coordinate;
use crate::mask::CellMask;
use crate::ship::Ship;

/// Visible state of one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Occupied,
    Hit,
    Miss,
}

impl Cell {
    /// Glyph used by [`Board::render`]. Concealed ships render as water.
    pub fn glyph(self, conceal: bool) -> char {
        match self {
            Cell::Empty => 'O',
            Cell::Occupied if conceal => 'O',
            Cell::Occupied => '■',
            Cell::Hit => 'X',
            Cell::Miss => 'T',
        }
    }
}

/// One player's board.
///
/// Placement and firing use two separate cell sets: `exclusion` holds every
/// ship cell and its 8-neighbourhood (no further ship may be placed there),
/// `fired` holds every cell already resolved as a shot, including the cells
/// revealed around a destroyed ship.
#[derive(Clone)]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
    ships: Vec<Ship>,
    exclusion: CellMask,
    fired: CellMask,
    destroyed: usize,
    concealed: bool,
}

impl Board {
    /// Create an empty `size × size` board.
    pub fn new(size: usize) -> Self {
        Board {
            size,
            cells: vec![Cell::Empty; size * size],
            ships: Vec::new(),
            exclusion: CellMask::new(size),
            fired: CellMask::new(size),
            destroyed: 0,
            concealed: false,
        }
    }

    /// Mark the board as hidden from the opposing viewer.
    pub fn concealed(mut self) -> Self {
        self.concealed = true;
        self
    }

    pub fn set_concealed(&mut self, concealed: bool) {
        self.concealed = concealed;
    }

    pub fn is_concealed(&self) -> bool {
        self.concealed
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn in_bounds(&self, coord: Coordinate) -> bool {
        coord.index(self.size).is_some()
    }

    /// State of the cell at `coord`, or `None` off the board.
    pub fn cell(&self, coord: Coordinate) -> Option<Cell> {
        coord.index(self.size).map(|idx| self.cells[idx])
    }

    /// Placed ships, in placement order. Destroyed ships stay in the list.
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    pub fn destroyed_count(&self) -> usize {
        self.destroyed
    }

    /// Ships still afloat.
    pub fn remaining_ships(&self) -> usize {
        self.ships.len() - self.destroyed
    }

    /// Whether `coord` was already fired upon or revealed.
    pub fn is_fired(&self, coord: Coordinate) -> bool {
        self.fired.contains(coord)
    }

    /// Whether `coord` is inside the placement exclusion zone.
    pub fn is_excluded(&self, coord: Coordinate) -> bool {
        self.exclusion.contains(coord)
    }

    /// Number of cells resolved as shots so far.
    pub fn fired_count(&self) -> usize {
        self.fired.count_ones()
    }

    /// Place `ship` on the board. Nothing changes on error.
    pub fn place(&mut self, ship: Ship) -> Result<(), PlacementError> {
        if ship.cells().any(|c| !self.in_bounds(c)) {
            return Err(PlacementError::OutOfBounds);
        }
        if ship.cells().any(|c| self.exclusion.contains(c)) {
            return Err(PlacementError::Overlap);
        }
        for c in ship.cells() {
            self.set_cell(c, Cell::Occupied);
        }
        for c in ship.contour() {
            self.exclusion.insert(c);
        }
        log::trace!("placed {:?}", ship);
        self.ships.push(ship);
        Ok(())
    }

    /// Reset shot bookkeeping before play starts. Ships and the exclusion
    /// zone are kept.
    pub fn begin(&mut self) {
        self.fired.clear_all();
    }

    /// Resolve a shot at `coord`.
    pub fn fire(&mut self, coord: Coordinate) -> Result<ShotOutcome, ShotError> {
        if !self.in_bounds(coord) {
            return Err(ShotError::OutOfRange(coord));
        }
        if !self.fired.insert(coord) {
            return Err(ShotError::AlreadyTargeted(coord));
        }

        let Some(idx) = self.ships.iter().position(|s| s.contains(coord)) else {
            self.set_cell(coord, Cell::Miss);
            return Ok(ShotOutcome::Missed);
        };

        let ship = &mut self.ships[idx];
        assert!(
            !ship.is_destroyed(),
            "destroyed ship {:?} hit again at {:?}",
            ship,
            coord
        );
        ship.register_hit(coord);
        let ship = *ship;
        self.set_cell(coord, Cell::Hit);

        if ship.is_destroyed() {
            self.destroyed += 1;
            self.reveal_contour(&ship);
            log::debug!("ship destroyed at {:?}, {} remaining", coord, self.remaining_ships());
            Ok(ShotOutcome::Destroyed)
        } else {
            Ok(ShotOutcome::Wounded {
                remaining: ship.hit_points(),
            })
        }
    }

    /// Returns `true` when every ship is destroyed.
    pub fn is_defeated(&self) -> bool {
        self.destroyed == self.ships.len()
    }

    /// Render the board as text rows: a header followed by one row per board
    /// row. Ships are hidden when the board is concealed, unless
    /// `reveal_hidden` is set.
    pub fn render(&self, reveal_hidden: bool) -> Vec<String> {
        let conceal = self.concealed && !reveal_hidden;
        let width = digits(self.size);
        let mut rows = Vec::with_capacity(self.size + 1);

        let mut header = format!("{:width$} |", "");
        for c in 1..=self.size {
            header.push_str(&format!(" {:>width$} |", c));
        }
        rows.push(header);

        for (r, row) in self.cells.chunks(self.size.max(1)).enumerate() {
            let mut line = format!("{:>width$} |", r + 1);
            for cell in row {
                line.push_str(&format!(" {:>width$} |", cell.glyph(conceal)));
            }
            rows.push(line);
        }
        rows
    }

    /// Mark every untouched cell around a destroyed ship as a miss.
    fn reveal_contour(&mut self, ship: &Ship) {
        for c in ship.contour() {
            if self.fired.insert(c) {
                self.set_cell(c, Cell::Miss);
            }
        }
    }

    fn set_cell(&mut self, coord: Coordinate, cell: Cell) {
        if let Some(idx) = coord.index(self.size) {
            self.cells[idx] = cell;
        }
    }
}

fn digits(mut n: usize) -> usize {
    let mut d = 1;
    while n >= 10 {
        n /= 10;
        d += 1;
    }
    d
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Board {{\n  size: {},\n  concealed: {},\n  destroyed: {},\n  ships: {:?},\n  exclusion: {:?},\n  fired: {:?}\n}}",
            self.size, self.concealed, self.destroyed, self.ships, self.exclusion, self.fired
        )
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.render(false) {
            writeln!(f, "{}", row)?;
        }
        Ok(())
    }
}

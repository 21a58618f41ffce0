//! A runtime-sized `size × size` occupancy mask.
//!
//! Boards track several independent cell sets (placement exclusion zone,
//! fired coordinates). Each is a `CellMask`: one flag per cell, addressed by
//! [`Coordinate`]. Out-of-range coordinates are never members.

use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

use crate::coord::Coordinate;

#[derive(Clone, PartialEq, Eq)]
pub struct CellMask {
    size: usize,
    bits: Vec<bool>,
}

impl CellMask {
    /// Create an empty mask for a `size × size` board.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            bits: vec![false; size * size],
        }
    }

    /// Whether `coord` is set. Out-of-range coordinates are never set.
    pub fn contains(&self, coord: Coordinate) -> bool {
        coord
            .index(self.size)
            .map(|idx| self.bits[idx])
            .unwrap_or(false)
    }

    /// Set `coord`. Returns `true` if it was newly inserted; out-of-range
    /// coordinates are ignored and return `false`.
    pub fn insert(&mut self, coord: Coordinate) -> bool {
        match coord.index(self.size) {
            Some(idx) if !self.bits[idx] => {
                self.bits[idx] = true;
                true
            }
            _ => false,
        }
    }

    /// Number of set cells.
    pub fn count_ones(&self) -> usize {
        self.bits.iter().filter(|&&b| b).count()
    }

    /// Clears every cell.
    pub fn clear_all(&mut self) {
        self.bits.iter_mut().for_each(|b| *b = false);
    }
}

impl fmt::Debug for CellMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "CellMask({}x{}):", self.size, self.size)?;
        for row in self.bits.chunks(self.size.max(1)) {
            for &b in row {
                write!(f, "{}", if b { '1' } else { '.' })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

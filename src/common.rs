//! Common types: shot outcomes and board errors.

use thiserror::Error;

use crate::coord::Coordinate;

/// Result of a resolved shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum ShotOutcome {
    /// No ship at the target.
    Missed,
    /// A ship was hit and is still afloat with `remaining` hit points.
    Wounded { remaining: usize },
    /// The shot took the last hit point of a ship.
    Destroyed,
}

impl ShotOutcome {
    /// Whether the shot landed on a ship. Hits keep the turn.
    pub fn is_hit(self) -> bool {
        !matches!(self, ShotOutcome::Missed)
    }
}

/// Errors returned by `Board::fire`. The board is unchanged on error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShotError {
    /// Target lies outside the board.
    #[error("target {0} is outside the board")]
    OutOfRange(Coordinate),
    /// Target was already fired upon (or revealed around a destroyed ship).
    #[error("cell {0} has already been targeted")]
    AlreadyTargeted(Coordinate),
}

/// Errors returned by ship placement and fleet layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlacementError {
    /// Some ship cell lies outside the board.
    #[error("ship placement is out of bounds")]
    OutOfBounds,
    /// Some ship cell is occupied by, or touches, another ship.
    #[error("ship placement overlaps or touches another ship")]
    Overlap,
    /// The placement attempt budget ran out. `restarts` counts the boards
    /// already discarded before giving up.
    #[error("placement attempts exhausted after {restarts} board restarts")]
    Exhausted { restarts: usize },
}

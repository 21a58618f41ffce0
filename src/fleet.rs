//! Random fleet layout.
//!
//! Ships are placed in fleet order by drawing random origins and
//! orientations. The attempt budget covers the whole fleet on one board; when
//! it runs out the partially filled board is thrown away and layout starts
//! over on a fresh one.

use rand::Rng;

use crate::board::Board;
use crate::common::PlacementError;
use crate::config::GameConfig;
use crate::coord::Coordinate;
use crate::ship::{Orientation, Ship};

/// Draw a random ship of `length` with origin in `[0,size)²`. The ship may
/// still stick out of the board; `Board::place` rejects those.
pub fn random_ship<R: Rng + ?Sized>(rng: &mut R, size: usize, length: usize) -> Ship {
    let orientation = if rng.random() {
        Orientation::Horizontal
    } else {
        Orientation::Vertical
    };
    let origin = Coordinate::new(
        rng.random_range(0..size) as isize,
        rng.random_range(0..size) as isize,
    );
    Ship::new(origin, length, orientation)
}

/// Try to lay out `fleet` on one fresh board within `attempts` placements.
/// Returns `PlacementError::Exhausted` when the budget runs out.
pub fn try_layout<R: Rng + ?Sized>(
    rng: &mut R,
    size: usize,
    fleet: &[usize],
    attempts: usize,
) -> Result<Board, PlacementError> {
    if size == 0 && !fleet.is_empty() {
        return Err(PlacementError::OutOfBounds);
    }
    let mut board = Board::new(size);
    let mut used = 0;
    for &length in fleet {
        loop {
            used += 1;
            if used > attempts {
                return Err(PlacementError::Exhausted { restarts: 0 });
            }
            match board.place(random_ship(rng, size, length)) {
                Ok(()) => break,
                Err(PlacementError::OutOfBounds | PlacementError::Overlap) => {}
                Err(e) => return Err(e),
            }
        }
    }
    board.begin();
    Ok(board)
}

/// Lay out the configured fleet, restarting on a fresh board whenever the
/// attempt budget runs out, up to `config.max_board_restarts` times.
pub fn random_layout<R: Rng + ?Sized>(
    rng: &mut R,
    config: &GameConfig,
) -> Result<Board, PlacementError> {
    let mut restarts = 0;
    loop {
        match try_layout(rng, config.size, config.fleet(), config.placement_attempts) {
            Ok(board) => {
                log::debug!("fleet laid out after {} restarts", restarts);
                return Ok(board);
            }
            Err(PlacementError::Exhausted { .. }) if restarts < config.max_board_restarts => {
                restarts += 1;
                log::debug!("placement budget exhausted, restarting board ({})", restarts);
            }
            Err(PlacementError::Exhausted { .. }) => {
                log::warn!("giving up fleet layout after {} restarts", restarts);
                return Err(PlacementError::Exhausted { restarts });
            }
            Err(e) => return Err(e),
        }
    }
}

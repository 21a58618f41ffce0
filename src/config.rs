//! Game defaults and the runtime configuration built from them.

use thiserror::Error;

/// Side length of the square board.
pub const DEFAULT_SIZE: usize = 6;

/// Ship lengths of the fleet, placed in this order.
pub const FLEET: [usize; 7] = [3, 2, 2, 1, 1, 1, 1];

/// Largest accepted board side; row and column labels stay two digits.
pub const MAX_SIZE: usize = 99;

/// Random placement attempts allowed for a whole fleet on one board.
pub const PLACEMENT_ATTEMPTS: usize = 2000;

/// How many times a board may be thrown away and laid out again.
pub const MAX_BOARD_RESTARTS: usize = 1000;

/// Total number of ship cells in the standard fleet.
pub const TOTAL_SHIP_CELLS: usize = 3 + 2 + 2 + 1 + 1 + 1 + 1;

/// Errors returned by [`GameConfig::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("board size must be at least 1")]
    ZeroSize,
    #[error("board size {size} exceeds the maximum of {max}")]
    TooLarge { size: usize, max: usize },
    #[error("board size {size} cannot hold a ship of length {length}")]
    ShipTooLong { size: usize, length: usize },
    #[error("the fleet cannot fit on a {size}x{size} board without ships touching")]
    FleetDoesNotFit { size: usize },
    #[error("placement attempt budget must be at least 1")]
    ZeroAttempts,
}

/// Parameters for laying out boards and running a match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub size: usize,
    pub placement_attempts: usize,
    pub max_board_restarts: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            placement_attempts: PLACEMENT_ATTEMPTS,
            max_board_restarts: MAX_BOARD_RESTARTS,
        }
    }
}

impl GameConfig {
    /// Default configuration on a board of `size`.
    pub fn with_size(size: usize) -> Self {
        Self {
            size,
            ..Self::default()
        }
    }

    /// The fleet every board is populated with.
    pub fn fleet(&self) -> &'static [usize] {
        &FLEET
    }

    /// Reject configurations the layout routine can never satisfy.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.size == 0 {
            return Err(ConfigError::ZeroSize);
        }
        if self.size > MAX_SIZE {
            return Err(ConfigError::TooLarge {
                size: self.size,
                max: MAX_SIZE,
            });
        }
        if self.placement_attempts == 0 {
            return Err(ConfigError::ZeroAttempts);
        }
        if let Some(&length) = self.fleet().iter().find(|&&len| len > self.size) {
            return Err(ConfigError::ShipTooLong {
                size: self.size,
                length,
            });
        }
        // A ship with the buffer to its right and below covers (len + 1) x 2
        // cells of a (size + 1)² grid, and those footprints never overlap.
        let footprint: usize = self.fleet().iter().map(|len| (len + 1) * 2).sum();
        if footprint > (self.size + 1) * (self.size + 1) {
            return Err(ConfigError::FleetDoesNotFit { size: self.size });
        }
        Ok(())
    }
}

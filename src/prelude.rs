//! Commonly used types and utilities for ease of import.

pub use crate::{
    random_layout, AiPlayer, Board, Coordinate, GameConfig, ManualPlayer, Match, MatchObserver,
    Orientation, Player, Ship, ShotError, ShotOutcome, Side,
};

#[cfg(feature = "std")]
pub use crate::cli::{Console, ConsoleObserver};

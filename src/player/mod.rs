//! Player trait and implementations
//!
//! This module defines the Player trait and provides concrete implementations:
//! - AiPlayer: random search plus hunting around a wounded ship
//! - ManualPlayer: targets supplied by a human through a `TargetSource`

use rand::rngs::SmallRng;

use crate::common::{ShotError, ShotOutcome};
use crate::coord::Coordinate;

/// Who is choosing the targets. Decides whether rejected shots are shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerKind {
    Manual,
    Automated,
}

/// Interface implemented by the different player types.
///
/// A Player is responsible for:
/// - Proposing the next coordinate to fire at
/// - Handling the outcome of a resolved shot
/// - Handling a shot the opposing board rejected
pub trait Player {
    fn kind(&self) -> PlayerKind;

    /// Choose the next target on an opposing board of `board_size`.
    fn next_target(&mut self, rng: &mut SmallRng, board_size: usize) -> anyhow::Result<Coordinate>;

    /// Inform the player of the outcome of its last shot.
    fn on_outcome(&mut self, _target: Coordinate, _outcome: ShotOutcome) {}

    /// Inform the player that the board rejected its last target.
    fn on_rejected(&mut self, _target: Coordinate, _error: &ShotError) {}
}

pub mod ai;
pub use ai::AiPlayer;

pub mod manual;
pub use manual::{ManualPlayer, TargetSource};

use rand::rngs::SmallRng;

use crate::common::{ShotError, ShotOutcome};
use crate::coord::Coordinate;

use super::{Player, PlayerKind};

/// Where a human's targets come from, e.g. a terminal prompt.
///
/// Implementations own input validation: `read_target` only returns once it
/// has a well-formed pair of 1-indexed integers, and blocks until then.
pub trait TargetSource {
    /// Read the next 1-indexed `(row, col)` pair.
    fn read_target(&mut self) -> anyhow::Result<(i64, i64)>;

    /// Show the operator why the last target was rejected.
    fn report_rejected(&mut self, target: Coordinate, error: &ShotError);

    /// Show the outcome of a resolved shot.
    fn report_outcome(&mut self, _target: Coordinate, _outcome: ShotOutcome) {}
}

/// Player whose targets are typed in by a human.
pub struct ManualPlayer<S> {
    source: S,
}

impl<S: TargetSource> ManualPlayer<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }
}

impl<S: TargetSource> Player for ManualPlayer<S> {
    fn kind(&self) -> PlayerKind {
        PlayerKind::Manual
    }

    fn next_target(&mut self, _rng: &mut SmallRng, _board_size: usize) -> anyhow::Result<Coordinate> {
        let (row, col) = self.source.read_target()?;
        Ok(Coordinate::from_one_based(row, col))
    }

    fn on_outcome(&mut self, target: Coordinate, outcome: ShotOutcome) {
        self.source.report_outcome(target, outcome);
    }

    fn on_rejected(&mut self, target: Coordinate, error: &ShotError) {
        self.source.report_rejected(target, error);
    }
}

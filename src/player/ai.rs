use alloc::collections::BTreeSet;
use alloc::vec::Vec;

use anyhow::bail;
use rand::rngs::SmallRng;
use rand::seq::IndexedRandom;
use rand::Rng;

use crate::common::{ShotError, ShotOutcome};
use crate::coord::Coordinate;

use super::{Player, PlayerKind};

/// Computer opponent: random search, then hunting around a wounded ship.
///
/// While hunting, every proposal is an orthogonal neighbour of the hit the
/// hunt is anchored on. Probes that miss leave the anchor in place; a new hit
/// moves it. Neighbours that were already resolved or rejected are skipped,
/// and when the anchor has none left the hunt moves to another hit on the
/// same ship, or gives up and returns to random search.
#[derive(Debug, Default)]
pub struct AiPlayer {
    hunt: Option<Coordinate>,
    chase: Vec<Coordinate>,
    tried: BTreeSet<Coordinate>,
}

impl AiPlayer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the player is chasing a wounded ship.
    pub fn is_hunting(&self) -> bool {
        self.hunt.is_some()
    }

    /// The hit the current hunt is anchored on.
    pub fn hunt_anchor(&self) -> Option<Coordinate> {
        self.hunt
    }

    fn untried_neighbors(&self, around: Coordinate) -> Vec<Coordinate> {
        around
            .neighbors()
            .into_iter()
            .filter(|c| !self.tried.contains(c))
            .collect()
    }

    /// Pick the anchor to probe around, moving it to another hit of the
    /// chase when the current one is exhausted.
    fn select_anchor(&mut self) -> Option<Coordinate> {
        let anchor = self.hunt?;
        if !self.untried_neighbors(anchor).is_empty() {
            return Some(anchor);
        }
        let next = self
            .chase
            .iter()
            .rev()
            .copied()
            .find(|&hit| !self.untried_neighbors(hit).is_empty());
        match next {
            Some(hit) => {
                log::trace!("hunt anchor {:?} exhausted, moving to {:?}", anchor, hit);
                self.hunt = Some(hit);
            }
            None => {
                log::debug!("hunt around {:?} exhausted, back to random search", anchor);
                self.stop_hunting();
            }
        }
        self.hunt
    }

    fn stop_hunting(&mut self) {
        self.hunt = None;
        self.chase.clear();
    }
}

impl Player for AiPlayer {
    fn kind(&self) -> PlayerKind {
        PlayerKind::Automated
    }

    fn next_target(&mut self, rng: &mut SmallRng, board_size: usize) -> anyhow::Result<Coordinate> {
        if board_size == 0 {
            bail!("cannot target an empty board");
        }
        if let Some(anchor) = self.select_anchor() {
            if let Some(&target) = self.untried_neighbors(anchor).choose(rng) {
                return Ok(target);
            }
        }
        Ok(Coordinate::new(
            rng.random_range(0..board_size) as isize,
            rng.random_range(0..board_size) as isize,
        ))
    }

    fn on_outcome(&mut self, target: Coordinate, outcome: ShotOutcome) {
        self.tried.insert(target);
        match outcome {
            ShotOutcome::Wounded { .. } => {
                self.hunt = Some(target);
                self.chase.push(target);
            }
            ShotOutcome::Destroyed => self.stop_hunting(),
            ShotOutcome::Missed => {}
        }
    }

    fn on_rejected(&mut self, target: Coordinate, error: &ShotError) {
        log::trace!("computer target rejected: {}", error);
        self.tried.insert(target);
    }
}

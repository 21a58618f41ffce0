//! Match controller: two boards, two players and the turn state machine.

use alloc::boxed::Box;
use core::fmt;

use anyhow::bail;
use rand::rngs::SmallRng;

use crate::board::Board;
use crate::common::ShotOutcome;
use crate::config::GameConfig;
use crate::coord::Coordinate;
use crate::fleet;
use crate::player::{Player, PlayerKind};

/// One of the two sides of a match. The human side moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    Human,
    Computer,
}

impl Side {
    /// The side across the table.
    pub fn opponent(self) -> Side {
        match self {
            Side::Human => Side::Computer,
            Side::Computer => Side::Human,
        }
    }

    fn index(self) -> usize {
        match self {
            Side::Human => 0,
            Side::Computer => 1,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Human => write!(f, "user"),
            Side::Computer => write!(f, "computer"),
        }
    }
}

/// Current state of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchState {
    /// `Side` holds control and is about to fire.
    AwaitingTurn(Side),
    /// `Side` is proposing targets until one resolves.
    Resolving(Side),
    /// The opposing fleet of `winner` is destroyed.
    Finished { winner: Side },
}

/// What happened during one resolved shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnReport {
    pub side: Side,
    pub target: Coordinate,
    pub outcome: ShotOutcome,
    /// Targets the board rejected before this one resolved.
    pub rejected: usize,
    /// Set when this shot ended the match.
    pub winner: Option<Side>,
}

/// Presentation hooks invoked while a match runs. All methods default to
/// doing nothing.
pub trait MatchObserver {
    fn turn_started(&mut self, _game: &Match, _side: Side) {}
    fn shot_resolved(&mut self, _game: &Match, _report: &TurnReport) {}
    fn finished(&mut self, _game: &Match, _winner: Side) {}
}

impl MatchObserver for () {}

/// Two boards and the players firing at them.
///
/// The human side fires at the computer's board and vice versa. A hit of
/// any kind keeps control with the firing side; a miss passes it over and
/// advances the turn counter.
pub struct Match {
    boards: [Board; 2],
    players: [Box<dyn Player>; 2],
    state: MatchState,
    turn: u64,
    shots: u64,
}

impl Match {
    /// Create a match from boards that are already populated.
    pub fn new(
        human_board: Board,
        computer_board: Board,
        human: Box<dyn Player>,
        computer: Box<dyn Player>,
    ) -> Self {
        Self {
            boards: [human_board, computer_board],
            players: [human, computer],
            state: MatchState::AwaitingTurn(Side::Human),
            turn: 0,
            shots: 0,
        }
    }

    /// Lay out both fleets at random and create the match. The computer's
    /// board is concealed.
    pub fn setup(
        config: &GameConfig,
        human: Box<dyn Player>,
        computer: Box<dyn Player>,
        rng: &mut SmallRng,
    ) -> anyhow::Result<Self> {
        config.validate()?;
        let human_board = fleet::random_layout(rng, config)?;
        let computer_board = fleet::random_layout(rng, config)?.concealed();
        log::info!(
            "boards ready, {}x{} with {} ships each",
            config.size,
            config.size,
            config.fleet().len()
        );
        Ok(Self::new(human_board, computer_board, human, computer))
    }

    pub fn state(&self) -> MatchState {
        self.state
    }

    /// Board owned by `side`.
    pub fn board(&self, side: Side) -> &Board {
        &self.boards[side.index()]
    }

    /// Number of times control has passed between the sides.
    pub fn turn(&self) -> u64 {
        self.turn
    }

    /// Number of resolved shots, both sides combined.
    pub fn shots(&self) -> u64 {
        self.shots
    }

    pub fn winner(&self) -> Option<Side> {
        match self.state {
            MatchState::Finished { winner } => Some(winner),
            _ => None,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.winner().is_some()
    }

    /// Let the side holding control fire one resolved shot.
    pub fn play_turn(
        &mut self,
        rng: &mut SmallRng,
        observer: &mut dyn MatchObserver,
    ) -> anyhow::Result<TurnReport> {
        let side = match self.state {
            MatchState::AwaitingTurn(side) | MatchState::Resolving(side) => side,
            MatchState::Finished { winner } => bail!("match is over, {} won", winner),
        };
        observer.turn_started(self, side);

        self.state = MatchState::Resolving(side);
        let (target, outcome, rejected) = match self.resolve_shot(rng, side) {
            Ok(resolved) => resolved,
            Err(e) => {
                self.state = MatchState::AwaitingTurn(side);
                return Err(e);
            }
        };
        self.shots += 1;
        log::debug!("{} fired at {:?}: {:?}", side, target, outcome);

        let winner = self.check_winner();
        self.state = match winner {
            Some(winner) => {
                log::info!("{} wins after {} shots", winner, self.shots);
                MatchState::Finished { winner }
            }
            None if outcome.is_hit() => MatchState::AwaitingTurn(side),
            None => {
                self.turn += 1;
                MatchState::AwaitingTurn(side.opponent())
            }
        };

        let report = TurnReport {
            side,
            target,
            outcome,
            rejected,
            winner,
        };
        observer.shot_resolved(self, &report);
        Ok(report)
    }

    /// Play turns until one fleet is destroyed and return the winner.
    pub fn run(
        &mut self,
        rng: &mut SmallRng,
        observer: &mut dyn MatchObserver,
    ) -> anyhow::Result<Side> {
        loop {
            if let Some(winner) = self.play_turn(rng, observer)?.winner {
                observer.finished(self, winner);
                return Ok(winner);
            }
        }
    }

    /// Propose targets until the opposing board accepts one.
    fn resolve_shot(
        &mut self,
        rng: &mut SmallRng,
        side: Side,
    ) -> anyhow::Result<(Coordinate, ShotOutcome, usize)> {
        let player = &mut self.players[side.index()];
        let board = &mut self.boards[side.opponent().index()];
        let mut rejected = 0;
        loop {
            let target = player.next_target(rng, board.size())?;
            match board.fire(target) {
                Ok(outcome) => {
                    player.on_outcome(target, outcome);
                    return Ok((target, outcome, rejected));
                }
                Err(err) => {
                    rejected += 1;
                    match player.kind() {
                        PlayerKind::Manual => log::debug!("{} shot rejected: {}", side, err),
                        PlayerKind::Automated => log::trace!("{} shot rejected: {}", side, err),
                    }
                    player.on_rejected(target, &err);
                }
            }
        }
    }

    /// The first defeated board decides the winner.
    fn check_winner(&self) -> Option<Side> {
        [Side::Computer, Side::Human]
            .into_iter()
            .find(|&side| self.board(side).is_defeated())
            .map(Side::opponent)
    }
}

impl fmt::Debug for Match {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Match")
            .field("state", &self.state)
            .field("turn", &self.turn)
            .field("shots", &self.shots)
            .field("boards", &self.boards)
            .finish()
    }
}

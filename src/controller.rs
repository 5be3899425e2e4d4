//! The iteration controller: capture, infer, act, settle, repeat.
//!
//! The controller never talks to a screen or a mouse itself. It is handed a [`SnapshotProvider`] that
//! turns the outside world into a [`Board`] plus a grid of actuation targets, and an [`Actuator`] that
//! clicks those targets. Both are called strictly in sequence and are never retried.

use std::collections::BTreeSet;
use std::error::Error;
use std::time::Duration;

use log::{debug, info, warn};
use strum::{Display, EnumIs};

use crate::board::Board;
use crate::change::ChangeMap;
use crate::config::{GameConfig, SolverConfig};
use crate::error::{RoundError, ShapeError};
use crate::geometry::CoordinateGrid;
use crate::location::Location;
use crate::probability::{recommend, Recommendation};
use crate::rules::propagate;

/// Rounds in a row the flag count must reach the mine count before the controller stops.
pub const CONFIRMATION_ROUNDS: usize = 2;

/// One capture of the outside world.
#[derive(Clone, Debug)]
pub struct Snapshot<T> {
    /// The classified tiles.
    pub board: Board,
    /// Where to act on each tile.
    pub targets: CoordinateGrid<T>,
}

/// Produces a fresh [`Snapshot`] each round.
pub trait SnapshotProvider {
    /// Actuation target type, e.g. a screen point.
    type Target: Clone;
    /// Why a capture failed.
    type Error: Error + Send + Sync + 'static;

    /// Capture the current state of the game described by `config`.
    fn capture(&mut self, config: &GameConfig) -> Result<Snapshot<Self::Target>, Self::Error>;
}

/// What to do to a tile.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Action {
    /// Uncover the tile.
    Reveal,
    /// Mark the tile as a mine.
    Flag,
}

/// Acts on targets produced by a [`SnapshotProvider`].
pub trait Actuator<T> {
    /// Why an actuation failed.
    type Error: Error + Send + Sync + 'static;

    /// Perform `action` on every target in `targets`, in order.
    fn apply(&mut self, targets: &[T], action: Action) -> Result<(), Self::Error>;

    /// Wait until the effects of the last batch are visible to the next capture.
    fn settle(&mut self, delay: Duration) {
        std::thread::sleep(delay)
    }
}

/// Where the controller is in a session.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Display, EnumIs)]
pub enum State {
    /// More rounds are needed.
    Running,
    /// Neither the rules nor the estimator found anything to do. The board may be solved or genuinely stuck;
    /// compare [`Summary::flags_found`] with the mine count to tell.
    Solved,
    /// A mine was uncovered.
    Lost,
    /// The flag count reached the mine count for [`CONFIRMATION_ROUNDS`] rounds in a row.
    StalledConfirmed,
}

impl State {
    /// Whether no further rounds will run.
    pub fn is_terminal(&self) -> bool {
        !self.is_running()
    }
}

/// What happened in one round.
#[derive(Clone, Debug)]
pub struct RoundReport {
    /// 1-based round number.
    pub round: usize,
    /// Deductions of this round, if inference ran.
    pub changes: Option<ChangeMap>,
    /// Locations flagged this round.
    pub flagged: Vec<Location>,
    /// Locations revealed this round.
    pub revealed: Vec<Location>,
    /// The estimator's output, if the rules deduced nothing.
    pub recommendation: Option<Recommendation>,
    /// State after the round.
    pub state: State,
}

/// Totals over a finished session.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Summary {
    /// The terminal state reached.
    pub state: State,
    /// Rounds run.
    pub rounds: usize,
    /// Rounds that fell back to the probability estimator.
    pub guesses: usize,
    /// Distinct flags seen or placed over the session.
    pub flags_found: usize,
}

/// Drives rounds until a terminal [`State`].
pub struct IterationController<P, A>
where
    P: SnapshotProvider,
    A: Actuator<P::Target>,
{
    provider: P,
    actuator: A,
    game: GameConfig,
    settle_delay: Duration,
    state: State,
    round: usize,
    guesses: usize,
    // only ever grows
    flags_found: BTreeSet<Location>,
    rounds_at_mine_count: usize,
    dims: Option<(usize, usize)>,
}

impl<P, A> IterationController<P, A>
where
    P: SnapshotProvider,
    A: Actuator<P::Target>,
{
    /// A controller for the game `game`, acting through `provider` and `actuator`.
    pub fn new(provider: P, actuator: A, game: GameConfig, solver: SolverConfig) -> Self {
        Self {
            provider,
            actuator,
            game,
            settle_delay: solver.settle_delay(),
            state: State::Running,
            round: 0,
            guesses: 0,
            flags_found: BTreeSet::new(),
            rounds_at_mine_count: 0,
            dims: None,
        }
    }

    /// The current state.
    pub fn state(&self) -> State {
        self.state
    }

    /// Every flag seen on a board or deduced so far.
    pub fn flags_found(&self) -> &BTreeSet<Location> {
        &self.flags_found
    }

    /// The snapshot provider.
    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// The actuator.
    pub fn actuator(&self) -> &A {
        &self.actuator
    }

    /// Totals so far.
    pub fn summary(&self) -> Summary {
        Summary {
            state: self.state,
            rounds: self.round,
            guesses: self.guesses,
            flags_found: self.flags_found.len(),
        }
    }

    /// Run rounds until a terminal state is reached.
    pub fn run(&mut self) -> Result<Summary, RoundError> {
        while self.state.is_running() {
            self.step()?;
        }

        let summary = self.summary();
        info!("finished as {} after {} rounds, {} of them guesses, {} flags found",
            summary.state, summary.rounds, summary.guesses, summary.flags_found);
        Ok(summary)
    }

    /// Run a single round.
    ///
    /// Fails with [`RoundError::Terminal`] if the controller has already finished.
    /// A round that fails leaves the controller as it was before the round began.
    pub fn step(&mut self) -> Result<RoundReport, RoundError> {
        if self.state.is_terminal() {
            return Err(RoundError::Terminal(self.state));
        }
        let round = self.round + 1;

        let Snapshot { board, targets } = self.provider
            .capture(&self.game)
            .map_err(|e| RoundError::Capture(Box::new(e)))?;
        self.check_shape(round, &board, &targets)?;

        let mut report = RoundReport {
            round,
            changes: None,
            flagged: Vec::new(),
            revealed: Vec::new(),
            recommendation: None,
            state: State::Running,
        };

        if board.contains_mine() {
            info!("round {}: mine uncovered", round);
            self.commit(round, &board, self.flags_found.clone(), false);
            self.state = State::Lost;
            report.state = self.state;
            return Ok(report);
        }

        let mut flags_found = self.flags_found.clone();
        flags_found.extend(board.flags());

        let changes = ChangeMap::between(&board, &propagate(&board))?;
        report.flagged = changes.flags();
        report.revealed = changes.safes();
        flags_found.extend(report.flagged.iter().copied());
        debug!("round {}: {} new flags, {} new safe cells\n{}",
            round, report.flagged.len(), report.revealed.len(), changes);
        report.changes = Some(changes);

        let mut guessed = false;
        if report.flagged.is_empty() && report.revealed.is_empty() {
            let recommendation = recommend(&board);
            let candidate = recommendation.candidate;
            report.recommendation = Some(recommendation);

            match candidate {
                Some(candidate) => {
                    debug!("round {}: no deductions, guessing {}", round, candidate);
                    guessed = true;
                    report.revealed.push(candidate);
                }
                None => {
                    info!("round {}: nothing left to deduce or guess", round);
                    self.commit(round, &board, flags_found, false);
                    self.state = State::Solved;
                    report.state = self.state;
                    return Ok(report);
                }
            }
        }

        self.act(&targets, &report.flagged, Action::Flag)?;
        self.act(&targets, &report.revealed, Action::Reveal)?;
        self.commit(round, &board, flags_found, guessed);

        self.actuator.settle(self.settle_delay);
        self.check_mine_count();

        report.state = self.state;
        Ok(report)
    }

    fn check_shape<T>(&self, round: usize, board: &Board, targets: &CoordinateGrid<T>) -> Result<(), RoundError> {
        board.ensure_same_shape(targets)?;
        match self.dims {
            Some(expected) if expected != board.dims() => {
                warn!("round {}: board changed shape from {:?} to {:?}", round, expected, board.dims());
                Err(ShapeError::Mismatch { expected, found: board.dims() }.into())
            }
            _ => Ok(()),
        }
    }

    // session state only moves once every collaborator call of the round has succeeded
    fn commit(&mut self, round: usize, board: &Board, flags_found: BTreeSet<Location>, guessed: bool) {
        self.round = round;
        self.dims.get_or_insert(board.dims());
        self.flags_found = flags_found;
        if guessed {
            self.guesses += 1;
        }
    }

    fn act(&mut self, targets: &CoordinateGrid<P::Target>, locations: &[Location], action: Action) -> Result<(), RoundError> {
        if locations.is_empty() {
            return Ok(());
        }

        let points: Vec<P::Target> = locations.iter().map(|location| targets[*location].clone()).collect();
        self.actuator
            .apply(&points, action)
            .map_err(|e| RoundError::Actuate(Box::new(e)))
    }

    // the count must hold on consecutive rounds, the last of them after a settle that lets a stale
    // capture catch up. the ledger never shrinks, so the reset below cannot fire once the threshold is reached
    fn check_mine_count(&mut self) {
        if self.flags_found.len() >= self.game.mines {
            self.rounds_at_mine_count += 1;
            debug!("round {}: {} flags found, mine count reached {} time(s)",
                self.round, self.flags_found.len(), self.rounds_at_mine_count);
        } else {
            self.rounds_at_mine_count = 0;
        }

        if self.rounds_at_mine_count >= CONFIRMATION_ROUNDS {
            info!("round {}: all {} mines accounted for", self.round, self.game.mines);
            self.state = State::StalledConfirmed;
        }
    }
}

//! An in-memory game of Minesweeper that can stand in for a screen and a mouse.
//!
//! [`Minefield`] holds the hidden mines and the tiles a player would see. [`SharedMinefield`] wraps it so the
//! same game can serve as both the [`SnapshotProvider`] and the [`Actuator`] of an
//! [`IterationController`](crate::controller::IterationController).

use std::cell::{Ref, RefCell};
use std::collections::{HashSet, VecDeque};
use std::fmt::{Display, Formatter};
use std::num::NonZero;
use std::rc::Rc;
use std::time::Duration;

use itertools::Itertools;
use log::trace;
use ndarray::Array2;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::board::Board;
use crate::cell::Tile;
use crate::config::GameConfig;
use crate::controller::{Action, Actuator, Snapshot, SnapshotProvider};
use crate::error::{ConfigError, MinefieldError, ShapeError};
use crate::geometry::identity_grid;
use crate::location::{Dimension, Location};
use crate::shape::{MooreStep, Step};

/// Hidden mines plus the player's view of them.
#[derive(Clone, Debug)]
pub struct Minefield {
    // rows, cols
    dims: (Dimension, Dimension),
    mines: Array2<bool>,
    view: Array2<Tile>,
    mine_count: usize,
    // mines are placed on the first reveal so that it is never a mine
    rng: Option<StdRng>,
    exploded: Option<Location>,
}

impl Minefield {
    /// A game of `config`'s shape whose mines are placed at random on the first reveal,
    /// away from the revealed cell and, if there is room, its neighbours.
    pub fn new(config: GameConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        let dims = match (NonZero::new(config.rows), NonZero::new(config.cols)) {
            (Some(rows), Some(cols)) => (rows, cols),
            _ => return Err(ShapeError::Empty.into()),
        };

        Ok(Self {
            dims,
            mines: Array2::from_elem((config.rows, config.cols), false),
            view: Array2::from_elem((config.rows, config.cols), Tile::Unknown),
            mine_count: config.mines,
            rng: Some(StdRng::seed_from_u64(seed)),
            exploded: None,
        })
    }

    /// A game of size `dims` with mines at exactly `mines`.
    pub fn with_mines(dims: (usize, usize), mines: impl IntoIterator<Item = Location>) -> Result<Self, MinefieldError> {
        let dims = match (NonZero::new(dims.0), NonZero::new(dims.1)) {
            (Some(rows), Some(cols)) => (rows, cols),
            _ => return Err(ShapeError::Empty.into()),
        };

        let mut field = Array2::from_elem((dims.0.get(), dims.1.get()), false);
        for mine in mines {
            match field.get_mut(mine.as_index()) {
                Some(cell) => *cell = true,
                None => return Err(MinefieldError::OutOfBounds(mine)),
            }
        }

        Ok(Self {
            dims,
            mine_count: field.iter().filter(|mine| **mine).count(),
            view: Array2::from_elem(field.raw_dim(), Tile::Unknown),
            mines: field,
            rng: None,
            exploded: None,
        })
    }

    /// `(rows, cols)`.
    pub fn dims(&self) -> (usize, usize) {
        (self.dims.0.get(), self.dims.1.get())
    }

    /// Number of mines hidden on the board.
    pub fn mine_count(&self) -> usize {
        self.mine_count
    }

    /// Whether a mine has been revealed.
    pub fn is_lost(&self) -> bool {
        self.exploded.is_some()
    }

    /// Whether every cell free of mines has been revealed without revealing a mine.
    pub fn is_won(&self) -> bool {
        !self.is_lost() && self.mines.iter().zip(self.view.iter()).all(|(mine, tile)| *mine || tile.is_revealed())
    }

    /// Whether `location` hides a mine. Mines are not placed until the first reveal of a random game.
    pub fn is_mine(&self, location: Location) -> bool {
        self.mines.get(location.as_index()).copied().unwrap_or(false)
    }

    /// What a player would see right now.
    pub fn view(&self) -> Board {
        Board { cells: self.view.clone(), dims: self.dims }
    }

    fn check(&self, location: Location) -> Result<(), MinefieldError> {
        if location.within(self.dims) {
            Ok(())
        } else {
            Err(MinefieldError::OutOfBounds(location))
        }
    }

    fn neighbors(&self, location: Location) -> Vec<Location> {
        MooreStep::neighbors_of(location, self.dims)
    }

    fn place_mines(&mut self, opening: Location) {
        let Some(mut rng) = self.rng.take() else { return };

        let mut excluded: HashSet<Location> = self.neighbors(opening).into_iter().collect();
        excluded.insert(opening);
        let cells = self.dims.0.get() * self.dims.1.get();
        if cells - excluded.len() < self.mine_count {
            // small boards cannot spare the whole neighbourhood
            excluded = HashSet::from([opening]);
        }

        let mut open = (0..self.dims.0.get())
            .cartesian_product(0..self.dims.1.get())
            .map(Location::from)
            .filter(|location| !excluded.contains(location))
            .collect_vec();
        open.shuffle(&mut rng);

        for mine in open.into_iter().take(self.mine_count) {
            self.mines[mine.as_index()] = true;
        }
    }

    fn adjacent_mines(&self, location: Location) -> u8 {
        self.neighbors(location).into_iter().filter(|neighbor| self.is_mine(*neighbor)).count() as u8
    }

    /// Uncover `location`. Uncovering a zero opens its neighbours in turn. Flagged and revealed cells are left alone.
    pub fn reveal(&mut self, location: Location) -> Result<(), MinefieldError> {
        self.check(location)?;
        self.place_mines(location);

        if self.is_mine(location) {
            if self.view[location.as_index()].is_unknown() {
                trace!("revealed mine at {}", location);
                self.view[location.as_index()] = Tile::Mine;
                self.exploded = Some(location);
            }
            return Ok(());
        }

        let mut queue = VecDeque::from([location]);
        while let Some(current) = queue.pop_front() {
            if !self.view[current.as_index()].is_unknown() || self.is_mine(current) {
                continue;
            }

            let count = self.adjacent_mines(current);
            self.view[current.as_index()] = Tile::Revealed(count);
            if count == 0 {
                queue.extend(self.neighbors(current));
            }
        }

        Ok(())
    }

    /// Flag `location` if it is still covered.
    pub fn flag(&mut self, location: Location) -> Result<(), MinefieldError> {
        self.check(location)?;

        let tile = &mut self.view[location.as_index()];
        if tile.is_unknown() {
            *tile = Tile::Flag;
        }
        Ok(())
    }
}

impl Display for Minefield {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let layout = Board { cells: self.mines.clone(), dims: self.dims };
        write!(f, "{}", layout.map(|mine| if *mine { '*' } else { '.' }))
    }
}

/// A [`Minefield`] shared between the snapshot and actuation sides of a controller.
#[derive(Clone, Debug)]
pub struct SharedMinefield(Rc<RefCell<Minefield>>);

impl SharedMinefield {
    /// Share `field`.
    pub fn new(field: Minefield) -> Self {
        Self(Rc::new(RefCell::new(field)))
    }

    /// Look at the underlying game.
    pub fn borrow(&self) -> Ref<'_, Minefield> {
        self.0.borrow()
    }
}

impl SnapshotProvider for SharedMinefield {
    type Target = Location;
    type Error = MinefieldError;

    fn capture(&mut self, config: &GameConfig) -> Result<Snapshot<Location>, Self::Error> {
        let field = self.0.borrow();
        if field.dims() != (config.rows, config.cols) {
            return Err(ShapeError::Mismatch { expected: (config.rows, config.cols), found: field.dims() }.into());
        }

        Ok(Snapshot { board: field.view(), targets: identity_grid(field.dims) })
    }
}

impl Actuator<Location> for SharedMinefield {
    type Error = MinefieldError;

    fn apply(&mut self, targets: &[Location], action: Action) -> Result<(), Self::Error> {
        let mut field = self.0.borrow_mut();
        for target in targets {
            trace!("{} {}", action, target);
            match action {
                Action::Reveal => field.reveal(*target)?,
                Action::Flag => field.flag(*target)?,
            }
        }
        Ok(())
    }

    // nothing to wait for in memory
    fn settle(&mut self, _delay: Duration) {}
}

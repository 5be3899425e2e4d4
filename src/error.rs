//! Error types shared across the crate.

use std::error::Error;

use thiserror::Error;

use crate::controller::State;
use crate::location::Location;

/// A board, or a pair of boards, does not have a usable shape.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShapeError {
    /// The board has zero rows or zero columns.
    #[error("board has no cells")]
    Empty,
    /// Some row is a different length from the first one.
    #[error("row {row} has {found} cells, expected {expected}")]
    Ragged {
        /// Index of the offending row.
        row: usize,
        /// Length of the first row.
        expected: usize,
        /// Length of the offending row.
        found: usize,
    },
    /// Two boards that must share a shape do not.
    #[error("expected a {}x{} board, found {}x{}", .expected.0, .expected.1, .found.0, .found.1)]
    Mismatch {
        /// `(rows, cols)` that was required.
        expected: (usize, usize),
        /// `(rows, cols)` that was supplied.
        found: (usize, usize),
    },
}

/// Text could not be read as a board.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TileParseError {
    /// The safe marker only exists in change maps and never on a board.
    #[error("safe marker at {0} cannot appear on a board")]
    TransientMarker(Location),
    /// The rows read do not form a rectangle.
    #[error(transparent)]
    Shape(#[from] ShapeError),
}

/// A game configuration could not be loaded or does not describe a playable board.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("could not read configuration: {0}")]
    Io(#[from] std::io::Error),
    /// The configuration file is not valid TOML for this schema.
    #[error("could not parse configuration: {0}")]
    Toml(#[from] toml::de::Error),
    /// The configured board has no cells.
    #[error(transparent)]
    Shape(#[from] ShapeError),
    /// The board is too large to address.
    #[error("a {rows}x{cols} board is too large")]
    TooLarge {
        /// Configured height.
        rows: usize,
        /// Configured width.
        cols: usize,
    },
    /// No cell would be left free of mines for the opening move.
    #[error("{mines} mines leave no safe cell on a board of {cells} cells")]
    TooManyMines {
        /// Configured mine count.
        mines: usize,
        /// Cells on the configured board.
        cells: usize,
    },
}

/// A round of the iteration controller could not complete.
#[derive(Error, Debug)]
pub enum RoundError {
    /// The snapshot provider failed. Nothing was actuated.
    #[error("capture failed: {0}")]
    Capture(#[source] Box<dyn Error + Send + Sync>),
    /// The actuator failed part way through a batch. The core does not retry.
    #[error("actuation failed: {0}")]
    Actuate(#[source] Box<dyn Error + Send + Sync>),
    /// The captured board does not match the session's shape.
    #[error(transparent)]
    Shape(#[from] ShapeError),
    /// The controller already reached a terminal state.
    #[error("controller already finished in state {0}")]
    Terminal(State),
}

/// An action on an in-memory [`Minefield`](crate::minefield::Minefield) could not be carried out.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MinefieldError {
    /// The target lies outside the board.
    #[error("{0} is off the board")]
    OutOfBounds(Location),
    /// The board does not match the requested game.
    #[error(transparent)]
    Shape(#[from] ShapeError),
}

//! Incremental construction of [`Board`]s.

use std::num::NonZero;

use ndarray::{Array2, AssignElem};

use crate::board::Board;
use crate::cell::{Tile, MAX_COUNT};
use crate::location::{Dimension, Location};

/// Reasons a builder may become invalid while building.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum BuilderInvalidReason {
    /// A tile was placed outside the bounds specified by `dims` on the builder.
    TileOutOfBounds,
    /// A revealed tile was given a count no tile can show.
    InvalidCount(u8),
}

/// A builder for boards, starting from a board of the given size covered entirely in [`Tile::Unknown`].
///
/// Builders mutate themselves while building but can be [`Clone`]d to save their state at some point.
/// Once a builder is invalid, every further placement does nothing.
#[derive(Clone, Debug)]
pub struct BoardBuilder {
    // rows, cols
    dims: (Dimension, Dimension),
    cells: Array2<Tile>,
    invalid_reasons: Vec<BuilderInvalidReason>,
}

impl Default for BoardBuilder {
    fn default() -> Self {
        Self::with_dims((NonZero::new(9).unwrap(), NonZero::new(9).unwrap()))
    }
}

impl BoardBuilder {
    /// Construct a new [`Self`] with the specified dimensions, specified in `(rows, cols)` order.
    pub fn with_dims(dims: (Dimension, Dimension)) -> Self {
        Self {
            dims,
            cells: Array2::from_elem((dims.0.get(), dims.1.get()), Tile::Unknown),
            invalid_reasons: Default::default(),
        }
    }

    /// Start from an existing board, e.g. to advance it by hand in a test.
    pub fn from_board(board: &Board) -> Self {
        Self {
            dims: board.dims,
            cells: board.cells.clone(),
            invalid_reasons: Default::default(),
        }
    }

    /// Place `tile` at `location`, replacing whatever was there.
    ///
    /// May cause the builder to enter a [`TileOutOfBounds`](BuilderInvalidReason::TileOutOfBounds) invalid state if `location` is out of bounds.
    /// If the builder is already in an invalid state, this function does nothing.
    pub fn place(&mut self, location: Location, tile: Tile) -> &mut Self {
        if !self.invalid_reasons.is_empty() {
            return self;
        }

        match self.cells.get_mut(location.as_index()) {
            Some(cell) => cell.assign_elem(tile),
            None => self.invalid_reasons.push(BuilderInvalidReason::TileOutOfBounds),
        }

        self
    }

    /// Reveal `location` showing `count`.
    ///
    /// May cause the builder to enter an [`InvalidCount`](BuilderInvalidReason::InvalidCount) invalid state if `count` exceeds 8.
    pub fn reveal(&mut self, location: Location, count: u8) -> &mut Self {
        if count > MAX_COUNT {
            if self.invalid_reasons.is_empty() {
                self.invalid_reasons.push(BuilderInvalidReason::InvalidCount(count));
            }
            return self;
        }

        self.place(location, Tile::Revealed(count))
    }

    /// Flag `location`.
    pub fn flag(&mut self, location: Location) -> &mut Self {
        self.place(location, Tile::Flag)
    }

    /// Shorthand for multiple calls to [`Self::flag`], with the same conditions.
    pub fn flag_all(&mut self, locations: impl IntoIterator<Item = Location>) -> &mut Self {
        for location in locations {
            self.flag(location);
        }

        self
    }

    /// Put an exploded mine at `location`.
    pub fn mine(&mut self, location: Location) -> &mut Self {
        self.place(location, Tile::Mine)
    }

    /// Check the validity of this builder, ensuring no [`BuilderInvalidReason`] condition has arisen.
    ///
    /// Returns `None` if the builder is valid, `Some(&Vec<BuilderInvalidReason>)` otherwise.
    pub fn is_valid(&self) -> Option<&Vec<BuilderInvalidReason>> {
        if self.invalid_reasons.is_empty() {
            None
        } else {
            Some(&self.invalid_reasons)
        }
    }

    /// Convert the state of this builder into a [`Board`].
    /// If the builder is invalid for any reason, a reference to a [`Vec`] of [`BuilderInvalidReason`] will indicate why.
    pub fn build(&self) -> Result<Board, &Vec<BuilderInvalidReason>> {
        if !self.invalid_reasons.is_empty() {
            return Err(&self.invalid_reasons);
        }

        Ok(Board {
            cells: self.cells.clone(),
            dims: self.dims,
        })
    }
}

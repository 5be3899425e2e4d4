//! Mapping grid cells to actuation targets on a screen.

use std::num::NonZero;

use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::error::ShapeError;
use crate::location::Location;

/// Per-cell actuation targets, in whatever coordinate space the collaborator uses.
pub type CoordinateGrid<T> = Board<T>;

/// An absolute pixel position.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct ScreenPoint {
    /// Horizontal position, growing rightwards.
    pub x: i32,
    /// Vertical position, growing downwards.
    pub y: i32,
}

/// Where a board sits on screen.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScreenGeometry {
    /// Top left corner of the board.
    pub origin: ScreenPoint,
    /// Edge length of a tile, in pixels.
    pub tile_size: u32,
}

impl Default for ScreenGeometry {
    fn default() -> Self {
        Self { origin: ScreenPoint { x: 260, y: 158 }, tile_size: 32 }
    }
}

impl ScreenGeometry {
    // offset within a tile, in sixteenths of the tile size
    fn offset(&self, index: usize, sixteenths: i32) -> i32 {
        let tile = self.tile_size as i32;
        index as i32 * tile + sixteenths * tile / 16
    }

    /// The point sampled to classify the tile at `location`, and clicked to act on it.
    ///
    /// It sits off centre, where the digit strokes of every count are present.
    pub fn sample_point(&self, location: Location) -> ScreenPoint {
        ScreenPoint {
            x: self.origin.x + self.offset(location.col(), 10),
            y: self.origin.y + self.offset(location.row(), 12),
        }
    }

    /// The point near the top left corner of the tile at `location`, used to tell raised tiles from pressed ones.
    pub fn corner_point(&self, location: Location) -> ScreenPoint {
        ScreenPoint {
            x: self.origin.x + self.offset(location.col(), 2),
            y: self.origin.y + self.offset(location.row(), 2),
        }
    }

    /// The actuation target of every cell of a `(rows, cols)` board.
    pub fn coordinate_grid(&self, dims: (usize, usize)) -> Result<CoordinateGrid<ScreenPoint>, ShapeError> {
        Board::from_array(Array2::from_shape_fn(dims, |index| self.sample_point(Location::from(index))))
    }

    /// The centre of the middle tile of a `(rows, cols)` board, where the opening move is made.
    pub fn opening_target(&self, dims: (usize, usize)) -> ScreenPoint {
        let tile = self.tile_size as i32;
        ScreenPoint {
            x: self.origin.x + (dims.1 / 2) as i32 * tile + tile / 2,
            y: self.origin.y + (dims.0 / 2) as i32 * tile + tile / 2,
        }
    }

    /// Pixel size `(width, height)` of a `(rows, cols)` board.
    pub fn extent(&self, dims: (usize, usize)) -> (u32, u32) {
        (dims.1 as u32 * self.tile_size, dims.0 as u32 * self.tile_size)
    }
}

/// A grid whose targets are the cells' own locations, for collaborators that act on the grid directly.
pub fn identity_grid(dims: (NonZero<usize>, NonZero<usize>)) -> CoordinateGrid<Location> {
    Board {
        cells: Array2::from_shape_fn((dims.0.get(), dims.1.get()), Location::from),
        dims,
    }
}

use std::hash::Hash;

use itertools::Itertools;
use strum::VariantArray;

use crate::location::{Dimension, Location};

/// A single step from one cell to one of its neighbours.
///
/// Implementors list every direction in [`VariantArray::VARIANTS`]; the neighbourhood of a cell is the set of
/// in-bounds cells reached by one step in each direction.
pub trait Step: Sized + Copy + VariantArray + PartialEq + Eq + Hash + Ord + PartialOrd {
    /// The `(row, col)` delta of this step.
    fn delta(&self) -> (isize, isize);

    /// Attempt the step from `location` in the direction specified by `self` and return the resultant [`Location`].
    /// The result may lie outside the board; see [`Self::neighbors_of`].
    fn attempt_from(&self, location: Location) -> Location {
        location.offset_by(self.delta())
    }

    /// Every in-bounds neighbour of `location` on a board of size `dims`, in [`VariantArray::VARIANTS`] order.
    /// Positions off the board are simply absent.
    fn neighbors_of(location: Location, dims: (Dimension, Dimension)) -> Vec<Location> {
        Self::VARIANTS.iter()
            .map(|dir| dir.attempt_from(location))
            .filter(|neighbor| neighbor.within(dims))
            .collect_vec()
    }
}

/// The eight king-move directions around a square cell, clockwise from the top left.
#[derive(Copy, Clone, VariantArray, Eq, PartialEq, Hash, Debug, Ord, PartialOrd)]
pub enum MooreStep {
    UpLeft,
    Up,
    UpRight,
    Right,
    DownRight,
    Down,
    DownLeft,
    Left,
}

impl Step for MooreStep {
    fn delta(&self) -> (isize, isize) {
        match self {
            Self::UpLeft => (-1, -1),
            Self::Up => (-1, 0),
            Self::UpRight => (-1, 1),
            Self::Right => (0, 1),
            Self::DownRight => (1, 1),
            Self::Down => (1, 0),
            Self::DownLeft => (1, -1),
            Self::Left => (0, -1),
        }
    }
}

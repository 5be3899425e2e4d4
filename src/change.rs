//! Differencing a board against the rule engine's output to isolate this round's deductions.

use std::fmt::{Display, Formatter};

use log::trace;

use crate::board::Board;
use crate::cell::{Inferred, Mark, Tile};
use crate::error::ShapeError;
use crate::location::Location;

/// Per-cell deductions made in a single round, the same shape as the board they came from.
///
/// A cell is either unchanged (`None`) or newly marked; a change map never carries a revealed value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChangeMap {
    marks: Board<Option<Mark>>,
}

impl ChangeMap {
    /// Compare `before` with `after` cell by cell, keeping the mark of every cell that differs.
    ///
    /// A differing cell that does not carry a mark in `after` is reported as unchanged.
    pub fn between(before: &Board, after: &Board<Inferred>) -> Result<Self, ShapeError> {
        before.ensure_same_shape(after)?;

        let mut marks = before.map(|_| None);
        for (location, tile) in before.iter() {
            let new = after[location];
            if new == *tile {
                continue;
            }
            match new.mark() {
                Some(mark) => marks.cells[location.as_index()] = Some(mark),
                None => trace!("{} changed from {} to {} without a mark", location, tile, new),
            }
        }

        Ok(Self { marks })
    }

    /// Whether this round deduced nothing.
    pub fn is_empty(&self) -> bool {
        self.marks.cells.iter().all(Option::is_none)
    }

    /// The mark at `location`, if any.
    pub fn get(&self, location: Location) -> Option<Mark> {
        self.marks.get(location).copied().flatten()
    }

    /// Every marked location with its mark, in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Location, Mark)> + '_ {
        self.marks.iter().filter_map(|(location, mark)| mark.map(|mark| (location, mark)))
    }

    /// Locations newly deduced to be mines, in row-major order.
    pub fn flags(&self) -> Vec<Location> {
        self.with_mark(Mark::Flag)
    }

    /// Locations newly deduced to be safe, in row-major order.
    pub fn safes(&self) -> Vec<Location> {
        self.with_mark(Mark::Safe)
    }

    fn with_mark(&self, wanted: Mark) -> Vec<Location> {
        self.iter().filter(|(_, mark)| *mark == wanted).map(|(location, _)| location).collect()
    }

    /// `(rows, cols)`.
    pub fn dims(&self) -> (usize, usize) {
        self.marks.dims()
    }
}

impl Display for ChangeMap {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        // unchanged cells print like unknown tiles
        write!(f, "{}", self.marks.map(|mark| match mark {
            Some(mark) => mark.to_string(),
            None => Tile::Unknown.to_string(),
        }))
    }
}

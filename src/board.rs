use std::fmt::{Display, Formatter};
use std::num::NonZero;
use std::ops::Index;
use std::str::FromStr;

use itertools::Itertools;
use ndarray::Array2;

use crate::cell::Tile;
use crate::error::{ShapeError, TileParseError};
use crate::location::{Dimension, Location};
use crate::shape::{MooreStep, Step};

/// A rectangular grid of cells, `rows x cols`, both nonzero.
///
/// A [`Board`] of [`Tile`]s is the snapshot every component consumes.
/// The rule engine produces a `Board<`[`Inferred`](crate::cell::Inferred)`>`, which can additionally hold safe markers.
///
/// Boards are values: once built they are never mutated, and every transformation yields a new board.
/// Build one with [`Board::from_rows`], by parsing the text format with [`str::parse`], or with a
/// [`BoardBuilder`](crate::builder::BoardBuilder).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board<C = Tile> {
    pub(crate) cells: Array2<C>,
    // rows, cols
    pub(crate) dims: (Dimension, Dimension),
}

impl<C> Board<C> {
    pub(crate) fn from_array(cells: Array2<C>) -> Result<Self, ShapeError> {
        let (rows, cols) = cells.dim();
        match (NonZero::new(rows), NonZero::new(cols)) {
            (Some(rows), Some(cols)) => Ok(Self { cells, dims: (rows, cols) }),
            _ => Err(ShapeError::Empty),
        }
    }

    /// Build a board from its rows, top to bottom.
    ///
    /// Fails with [`ShapeError::Empty`] if there are no rows or the rows are empty,
    /// and with [`ShapeError::Ragged`] if any row differs in length from the first.
    pub fn from_rows(rows: Vec<Vec<C>>) -> Result<Self, ShapeError> {
        let cols = rows.first().map_or(0, Vec::len);
        if cols == 0 {
            return Err(ShapeError::Empty);
        }
        if let Some((row, found)) = rows.iter().map(Vec::len).find_position(|len| *len != cols) {
            return Err(ShapeError::Ragged { row, expected: cols, found });
        }

        let height = rows.len();
        let flat = rows.into_iter().flatten().collect_vec();
        // lengths were checked above
        let cells = Array2::from_shape_vec((height, cols), flat).map_err(|_| ShapeError::Empty)?;
        Self::from_array(cells)
    }

    /// `(rows, cols)`.
    #[inline]
    pub fn dims(&self) -> (usize, usize) {
        (self.dims.0.get(), self.dims.1.get())
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.dims.0.get()
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> usize {
        self.dims.1.get()
    }

    /// Fails with [`ShapeError::Mismatch`] unless `other` has the same dimensions as `self`.
    pub fn ensure_same_shape<D>(&self, other: &Board<D>) -> Result<(), ShapeError> {
        if self.dims == other.dims {
            Ok(())
        } else {
            Err(ShapeError::Mismatch { expected: self.dims(), found: other.dims() })
        }
    }

    /// The cell at `location`, or `None` if it is off the board.
    pub fn get(&self, location: Location) -> Option<&C> {
        self.cells.get(location.as_index())
    }

    /// Every location on the board in row-major order.
    pub fn locations(&self) -> impl Iterator<Item = Location> {
        (0..self.rows()).cartesian_product(0..self.cols()).map(Location::from)
    }

    /// Every cell with its location, in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Location, &C)> {
        self.cells.indexed_iter().map(|(index, cell)| (Location::from(index), cell))
    }

    /// The in-bounds Moore neighbours of `location`.
    pub fn neighbors(&self, location: Location) -> Vec<Location> {
        MooreStep::neighbors_of(location, self.dims)
    }

    /// Apply `f` to every cell, producing a new board of the same shape.
    pub fn map<D>(&self, f: impl FnMut(&C) -> D) -> Board<D> {
        Board { cells: self.cells.map(f), dims: self.dims }
    }
}

impl<C> Index<Location> for Board<C> {
    type Output = C;

    fn index(&self, index: Location) -> &Self::Output {
        &self.cells[index.as_index()]
    }
}

/// Counts of what surrounds a single cell.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Neighborhood {
    /// Unknown neighbours, in step order.
    pub unknown: Vec<Location>,
    /// Number of flagged neighbours.
    pub flagged: usize,
    /// Number of revealed (numbered, including zero) neighbours.
    pub revealed: usize,
    /// Number of neighbours that are not unknown, whatever they are.
    pub open: usize,
}

impl Board<Tile> {
    /// Summarise the neighbours of `location`.
    pub fn neighborhood(&self, location: Location) -> Neighborhood {
        let mut out = Neighborhood::default();
        for neighbor in self.neighbors(location) {
            match self[neighbor] {
                Tile::Unknown => {
                    out.unknown.push(neighbor);
                    continue;
                }
                Tile::Flag => out.flagged += 1,
                Tile::Revealed(_) => out.revealed += 1,
                Tile::Mine | Tile::Unrecognized => {}
            }
            out.open += 1;
        }
        out
    }

    /// Whether an exploded mine is visible anywhere.
    pub fn contains_mine(&self) -> bool {
        self.cells.iter().any(Tile::is_mine)
    }

    /// The first unknown cell in row-major order.
    pub fn first_unknown(&self) -> Option<Location> {
        self.iter().find(|(_, tile)| tile.is_unknown()).map(|(location, _)| location)
    }

    /// Locations of every flag on the board, row-major.
    pub fn flags(&self) -> impl Iterator<Item = Location> + '_ {
        self.iter().filter(|(_, tile)| tile.is_flag()).map(|(location, _)| location)
    }
}

/// Reads the text format: one line per row, cells separated by whitespace.
/// A line without whitespace is read one character per cell.
///
/// `-` is unknown, `0` to `8` revealed, `F` a flag and `M` a mine. `S` is rejected.
/// Any other token reads as [`Tile::Unrecognized`]. Blank lines are skipped.
impl FromStr for Board<Tile> {
    type Err = TileParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows = s.lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .enumerate()
            .map(|(row, line)| {
                let tokens = if line.contains(char::is_whitespace) {
                    line.split_whitespace().map(str::to_owned).collect_vec()
                } else {
                    line.chars().map(String::from).collect_vec()
                };

                tokens.iter()
                    .enumerate()
                    .map(|(col, token)| Tile::from_token(token)
                        .ok_or(TileParseError::TransientMarker(Location(row, col))))
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self::from_rows(rows)?)
    }
}

impl<C: Display> Display for Board<C> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut out = String::with_capacity(self.rows() * (2 * self.cols()));

        for row in self.cells.rows() {
            out.push_str(&row.iter().map(ToString::to_string).join(" "));
            out.push('\n');
        }

        write!(f, "{}", out)
    }
}

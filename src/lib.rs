#![warn(missing_docs)]

//! # `minesight`
//!
//! Deduction and risk ranking for partially revealed [Minesweeper](https://en.wikipedia.org/wiki/Minesweeper_(video_game)) boards.
//! Hand a [`Board`] to [`propagate`](rules::propagate) to apply the two local saturation rules, diff the result against
//! the input with [`ChangeMap::between`] to see what was newly deduced, and fall back to [`recommend`](probability::recommend)
//! when nothing was.
//!
//! [`IterationController`](controller::IterationController) ties these together into rounds against an outside game:
//! a [`SnapshotProvider`](controller::SnapshotProvider) supplies each board and an [`Actuator`](controller::Actuator)
//! carries out the resulting flags and reveals. [`minefield`] provides an in-memory game implementing both.
//!
//! # Internals
//! A board is an [`ndarray::Array2`] of [`Tile`]s indexed by [`Location`] `(row, col)`. Neighbourhoods are the eight
//! surrounding cells, clipped at the edges.
//!
//! Each round makes exactly one pass of each rule:
//! 1. A tile showing `n` with exactly `n` covered or flagged neighbours has a mine under every covered neighbour.
//! 2. A tile showing `n` with `n` flagged neighbours has no mine under any other covered neighbour.
//!
//! Multi-step deductions surface over successive rounds, as the outside game catches up with each round's actions.
//! When neither rule fires, every covered cell next to a number gets the mean of the mine densities its numbered
//! neighbours imply, treating each number independently. This is a cheap local estimate, not a solver over joint
//! mine placements.

pub use board::{Board, Neighborhood};
pub use builder::BoardBuilder;
pub use cell::{Inferred, Mark, Tile};
pub use change::ChangeMap;
pub use location::Location;

pub mod board;
pub mod builder;
pub mod cell;
pub mod change;
pub mod config;
pub mod controller;
pub mod error;
pub mod geometry;
pub(crate) mod location;
pub mod minefield;
pub mod probability;
pub mod rules;
pub mod shape;
mod tests;

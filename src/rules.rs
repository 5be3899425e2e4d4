//! The deterministic rule engine.
//!
//! Two local saturation rules are applied once each, in order:
//!
//! 1. If a tile showing `n` has exactly `n` unknown or flagged neighbours, every unknown neighbour is a mine.
//! 2. If a tile showing `n` already has `n` flagged neighbours, every remaining unknown neighbour is safe.
//!
//! Rule 2 reads the board produced by rule 1. Neither rule is iterated to a fixed point within a call;
//! deductions that need another hop are picked up by the next round, once the actor has acted on this one.

use log::trace;

use crate::board::Board;
use crate::cell::{Inferred, Tile};

/// Run rule 1 then rule 2 over `board`, producing a new board holding every deduction.
///
/// The input is never modified.
pub fn propagate(board: &Board) -> Board<Inferred> {
    saturate_safes(&saturate_flags(board))
}

/// Rule 1: flag every unknown neighbour of a revealed tile whose unknown and flagged neighbours together equal its count.
///
/// Counts are read from `board` only, so flags placed by this pass never feed back into it.
pub fn saturate_flags(board: &Board) -> Board {
    let mut out = board.clone();

    for (location, tile) in board.iter() {
        let Some(count) = tile.count() else { continue };
        let neighborhood = board.neighborhood(location);

        if neighborhood.unknown.len() + neighborhood.flagged == usize::from(count) {
            for &unknown in &neighborhood.unknown {
                trace!("{} showing {} flags {}", location, count, unknown);
                out.cells[unknown.as_index()] = Tile::Flag;
            }
        }
    }

    out
}

/// Rule 2: mark safe every unknown neighbour of a revealed tile whose flagged neighbours already equal its count.
pub fn saturate_safes(board: &Board) -> Board<Inferred> {
    let mut out = board.map(|tile| Inferred::from(*tile));

    for (location, tile) in board.iter() {
        let Some(count) = tile.count() else { continue };
        let neighborhood = board.neighborhood(location);

        if neighborhood.flagged == usize::from(count) {
            for &unknown in &neighborhood.unknown {
                trace!("{} showing {} clears {}", location, count, unknown);
                out.cells[unknown.as_index()] = Inferred::Safe;
            }
        }
    }

    out
}

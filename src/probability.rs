//! The frontier probability estimator, used when the rule engine deduces nothing.
//!
//! Each revealed tile spreads its remaining mines evenly over its unknown neighbours, and a cell's
//! probability is the mean of everything it received. Constraints are treated as independent; this is
//! a local approximation, not a solver over joint mine placements.
//!
//! Candidates are then narrowed to cells with enough opened neighbours, scored with a penalty for
//! unknown neighbours, and the lowest score wins.

use std::collections::BTreeMap;

use log::debug;

use crate::board::Board;
use crate::location::Location;

/// Opened-neighbour thresholds tried in order when narrowing candidates.
pub const OPEN_NEIGHBOR_THRESHOLDS: [usize; 3] = [3, 2, 0];
/// Weight of the unknown-neighbour penalty in a candidate's score.
pub const UNKNOWN_PENALTY_WEIGHT: f64 = 0.4;
/// Scores closer than this are tied.
pub const TIE_EPSILON: f64 = 1e-9;

const MAX_NEIGHBORS: f64 = 8.0;

/// Estimated mine probability of each frontier cell, in `[0, 1]`.
pub type ProbabilityMap = BTreeMap<Location, f64>;
/// Composite score of each frontier cell; lower is better.
pub type ScoreMap = BTreeMap<Location, f64>;

/// The estimator's answer for one board.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Recommendation {
    /// The unknown cell judged least risky, if the board has any unknown cell.
    pub candidate: Option<Location>,
    /// Probability of every frontier cell.
    pub probabilities: ProbabilityMap,
    /// Score of every frontier cell.
    pub scores: ScoreMap,
}

/// Local mine probabilities for every frontier cell of `board`.
///
/// Cells that receive no contribution (not next to any revealed tile) are absent.
pub fn local_probabilities(board: &Board) -> ProbabilityMap {
    let mut contributions: BTreeMap<Location, Vec<f64>> = BTreeMap::new();

    for (location, tile) in board.iter() {
        let Some(count) = tile.count() else { continue };
        let neighborhood = board.neighborhood(location);

        let remaining = usize::from(count).checked_sub(neighborhood.flagged);
        if let (Some(remaining), false) = (remaining, neighborhood.unknown.is_empty()) {
            let share = remaining as f64 / neighborhood.unknown.len() as f64;
            for unknown in neighborhood.unknown {
                contributions.entry(unknown).or_default().push(share);
            }
        }
    }

    contributions.into_iter()
        .map(|(location, shares)| {
            let mean = shares.iter().sum::<f64>() / shares.len() as f64;
            (location, mean.clamp(0.0, 1.0))
        })
        .collect()
}

/// Pick the least risky unknown cell of `board`.
///
/// If no cell is on the frontier, e.g. before the opening move, the first unknown cell in row-major order is chosen.
/// The returned candidate, if any, is always an unknown cell.
pub fn recommend(board: &Board) -> Recommendation {
    let probabilities = local_probabilities(board);

    if probabilities.is_empty() {
        let candidate = board.first_unknown();
        debug!("no frontier, falling back to {:?}", candidate);
        return Recommendation { candidate, ..Default::default() };
    }

    let scores: ScoreMap = probabilities.iter()
        .map(|(&location, &probability)| {
            let unknown = board.neighborhood(location).unknown.len() as f64;
            (location, probability + UNKNOWN_PENALTY_WEIGHT * (unknown / MAX_NEIGHBORS))
        })
        .collect();

    let candidates = OPEN_NEIGHBOR_THRESHOLDS.iter()
        .map(|threshold| probabilities.keys()
            .copied()
            .filter(|location| board.neighborhood(*location).open >= *threshold)
            .collect::<Vec<_>>())
        .find(|candidates| !candidates.is_empty())
        .unwrap_or_default();

    let candidate = lowest_score(board, &scores, candidates)
        .filter(|location| board[*location].is_unknown());
    debug!("frontier of {} cells, recommending {:?}", probabilities.len(), candidate);

    Recommendation { candidate, probabilities, scores }
}

/// The candidate with the lowest score, visiting `candidates` in order.
///
/// Scores within [`TIE_EPSILON`] of the best so far are tied, and a tie goes to the candidate with strictly
/// fewer revealed neighbours. Candidates missing from `scores` are skipped.
pub fn lowest_score(board: &Board, scores: &ScoreMap, candidates: impl IntoIterator<Item = Location>) -> Option<Location> {
    let mut best: Option<(Location, f64)> = None;

    for location in candidates {
        let Some(&score) = scores.get(&location) else { continue };
        best = match best {
            None => Some((location, score)),
            Some((_, best_score)) if score < best_score - TIE_EPSILON => Some((location, score)),
            // the incumbent's score stays the reference for later ties
            Some((incumbent, best_score)) if (score - best_score).abs() < TIE_EPSILON
                && board.neighborhood(location).revealed < board.neighborhood(incumbent).revealed => Some((location, best_score)),
            keep => keep,
        };
    }

    best.map(|(location, _)| location)
}

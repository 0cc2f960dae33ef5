//! Weighted random tile assignment

use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::algorithm::evaluator::CellState;
use crate::io::error::{AlgorithmError, Result};
use crate::spatial::grid::TileGrid;
use crate::spatial::tiles::{TileType, kernel_to_string};

/// Seeded random selector for reproducible stochastic choices
#[derive(Clone, Debug)]
pub struct RandomSelector {
    rng: StdRng,
}

impl RandomSelector {
    /// Create a deterministic random selector
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Weighted choice by cumulative subtraction
    ///
    /// Draws `r` uniformly from `[0, total)` and subtracts weights in order;
    /// the entry that takes the remainder below zero wins, so index `i` is
    /// chosen with probability `weights[i] / total`. Returns `None` when the
    /// weights sum to zero.
    pub fn weighted_choice(&mut self, weights: &[u64]) -> Option<usize> {
        let total = weights
            .iter()
            .fold(0u64, |total, &weight| total.saturating_add(weight));
        if total == 0 {
            return None;
        }

        let mut remainder = self.rng.random_range(0..total);
        for (i, &weight) in weights.iter().enumerate() {
            if remainder < weight {
                return Some(i);
            }
            remainder -= weight;
        }
        None
    }

    /// Pick a concrete tile in proportion to the cell's weights
    pub fn choose_tile(&mut self, state: &CellState) -> Option<TileType> {
        let index = self.weighted_choice(&state.weights.concrete())?;
        TileType::CONCRETE.get(index).copied()
    }
}

/// Assign a tile to the cell described by `state` and write it to the grid
///
/// `step` is only used to label a contradiction.
///
/// # Errors
///
/// Returns [`AlgorithmError::Contradiction`] when the state carries no
/// weight, or a position error if the cell cannot be written.
pub fn resolve(
    grid: &mut TileGrid,
    state: &CellState,
    selector: &mut RandomSelector,
    step: usize,
) -> Result<TileType> {
    let tile = selector
        .choose_tile(state)
        .ok_or_else(|| AlgorithmError::Contradiction {
            position: state.position,
            step,
            kernel: kernel_to_string(&state.kernel),
        })?;

    let [x, y] = state.position;
    grid.set_tile(x, y, tile)?;
    Ok(tile)
}

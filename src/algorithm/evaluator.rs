//! Per-cell pattern matching and entropy scoring
//!
//! A cell's observed kernel is compared against every (pattern, rotation)
//! pair of the catalog. Each match adds the pattern's weight to its output
//! tile, so a pattern matching under several rotations counts several times.

use crate::algorithm::cache::KernelCache;
use crate::algorithm::catalog::PatternCatalog;
use crate::io::error::{AlgorithmError, Result};
use crate::math::probability::shannon_entropy;
use crate::spatial::grid::{BorderMatching, TileGrid};
use crate::spatial::tiles::{Kernel, TileType};

/// Accumulated weight per tile type
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct TileWeights {
    weights: [u64; TileType::COUNT],
}

impl TileWeights {
    /// Build weights from `(tile, weight)` pairs, summing repeated tiles
    pub fn from_pairs(pairs: &[(TileType, u64)]) -> Self {
        let mut weights = Self::default();
        for &(tile, weight) in pairs {
            weights.add(tile, weight);
        }
        weights
    }

    /// Add weight to a tile
    pub fn add(&mut self, tile: TileType, weight: u64) {
        if let Some(slot) = self.weights.get_mut(tile.index()) {
            *slot = slot.saturating_add(weight);
        }
    }

    /// Weight accumulated for a tile
    pub fn get(&self, tile: TileType) -> u64 {
        self.weights.get(tile.index()).copied().unwrap_or(0)
    }

    /// Sum over all tiles
    pub fn total(&self) -> u64 {
        self.weights
            .iter()
            .fold(0u64, |total, &weight| total.saturating_add(weight))
    }

    /// Weights of the concrete tiles in [`TileType::CONCRETE`] order
    pub fn concrete(&self) -> [u64; 4] {
        TileType::CONCRETE.map(|tile| self.get(tile))
    }

    /// Tiles with non-zero weight, in [`TileType::CONCRETE`] order
    pub fn candidates(&self) -> impl Iterator<Item = (TileType, u64)> + '_ {
        TileType::CONCRETE
            .into_iter()
            .map(|tile| (tile, self.get(tile)))
            .filter(|&(_, weight)| weight > 0)
    }

    /// Shannon entropy of the normalised weights, `None` when the total is zero
    pub fn entropy(&self) -> Option<f64> {
        shannon_entropy(&self.concrete())
    }
}

/// Evaluation result for one unresolved cell
#[derive(Clone, Debug, PartialEq)]
pub struct CellState {
    /// `[x, y]` of the cell
    pub position: [usize; 2],
    /// Neighbours observed when the cell was evaluated
    pub kernel: Kernel,
    /// Weight per output tile
    pub weights: TileWeights,
    /// Entropy of the weight distribution; `None` when nothing matched
    pub entropy: Option<f64>,
}

impl CellState {
    /// Sum of all matched weights
    pub fn total_weight(&self) -> u64 {
        self.weights.total()
    }

    /// Whether no pattern matched the observed neighbourhood
    pub fn is_contradiction(&self) -> bool {
        self.total_weight() == 0
    }
}

/// Accumulate matched weights for an observed kernel
pub fn accumulate_weights(catalog: &PatternCatalog, kernel: &Kernel) -> TileWeights {
    let mut weights = TileWeights::default();
    for pattern in catalog {
        let matches = pattern.match_count(kernel);
        if matches > 0 {
            weights.add(
                pattern.output,
                u64::from(pattern.weight) * u64::from(matches),
            );
        }
    }
    weights
}

/// Evaluate one cell without caching
///
/// # Errors
///
/// Returns an error if the position is not an interior `Unknown` cell
pub fn evaluate(
    grid: &TileGrid,
    catalog: &PatternCatalog,
    position: [usize; 2],
    border: BorderMatching,
) -> Result<CellState> {
    check_evaluable(grid, position)?;
    let kernel = grid.kernel_at(position, border);
    let weights = accumulate_weights(catalog, &kernel);
    Ok(cell_state(position, kernel, weights))
}

/// Cell evaluator bound to one catalog, memoising results per kernel
#[derive(Debug)]
pub struct CellEvaluator<'a> {
    catalog: &'a PatternCatalog,
    border: BorderMatching,
    cache: KernelCache,
}

impl<'a> CellEvaluator<'a> {
    /// Create an evaluator for a catalog and border policy
    pub fn new(catalog: &'a PatternCatalog, border: BorderMatching) -> Self {
        Self {
            catalog,
            border,
            cache: KernelCache::new(),
        }
    }

    /// Catalog patterns are matched against
    pub const fn catalog(&self) -> &'a PatternCatalog {
        self.catalog
    }

    /// Border policy used when reading kernels
    pub const fn border(&self) -> BorderMatching {
        self.border
    }

    /// Kernel cache, for statistics
    pub const fn cache(&self) -> &KernelCache {
        &self.cache
    }

    /// Evaluate one cell
    ///
    /// # Errors
    ///
    /// Returns an error if the position is not an interior `Unknown` cell
    pub fn evaluate(&mut self, grid: &TileGrid, position: [usize; 2]) -> Result<CellState> {
        check_evaluable(grid, position)?;
        let kernel = grid.kernel_at(position, self.border);
        let catalog = self.catalog;
        let weights = self
            .cache
            .get_or_compute(kernel, || accumulate_weights(catalog, &kernel));
        Ok(cell_state(position, kernel, weights))
    }
}

fn cell_state(position: [usize; 2], kernel: Kernel, weights: TileWeights) -> CellState {
    CellState {
        position,
        kernel,
        weights,
        entropy: weights.entropy(),
    }
}

fn check_evaluable(grid: &TileGrid, position: [usize; 2]) -> Result<()> {
    let [x, y] = position;
    if !grid.is_interior(x, y) {
        return Err(AlgorithmError::InvalidPosition {
            position,
            dimensions: (grid.width(), grid.height()),
            reason: "only interior cells are evaluated",
        });
    }
    if grid.tile_at(x, y).is_resolved() {
        return Err(AlgorithmError::InvalidPosition {
            position,
            dimensions: (grid.width(), grid.height()),
            reason: "cell is already resolved",
        });
    }
    Ok(())
}

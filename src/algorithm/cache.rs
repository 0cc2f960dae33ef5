use crate::algorithm::evaluator::TileWeights;
use crate::spatial::tiles::Kernel;
use std::collections::HashMap;

/// Memoization cache for per-kernel weight accumulation
///
/// Weight accumulation depends only on the observed kernel and the catalog,
/// so a cache must not be shared between generators using different catalogs.
#[derive(Default, Debug)]
pub struct KernelCache {
    /// Kernel to accumulated weights mapping
    weights: HashMap<Kernel, TileWeights>,

    /// Cache performance statistics
    pub stats: CacheStats,
}

/// Performance metrics for cache effectiveness
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheStats {
    /// Number of cache hits
    pub hits: usize,
    /// Number of cache misses
    pub misses: usize,
}

impl KernelCache {
    /// Create an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Retrieve cached weights or compute and store new ones
    pub fn get_or_compute<F>(&mut self, kernel: Kernel, compute_fn: F) -> TileWeights
    where
        F: FnOnce() -> TileWeights,
    {
        use std::collections::hash_map::Entry;

        match self.weights.entry(kernel) {
            Entry::Occupied(entry) => {
                self.stats.hits += 1;
                *entry.get()
            }
            Entry::Vacant(entry) => {
                self.stats.misses += 1;
                *entry.insert(compute_fn())
            }
        }
    }

    /// Number of distinct kernels stored
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    /// Whether nothing has been cached yet
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Drop all entries and reset statistics
    pub fn clear(&mut self) {
        self.weights.clear();
        self.stats = CacheStats::default();
    }
}

use std::collections::BTreeSet;

/// Cells whose cached evaluation is stale
///
/// Positions are stored as `y * width + x` keys. Inserting a key that is
/// already present is a no-op, and draining yields keys in ascending
/// (row-major) order.
#[derive(Clone, Debug, Default)]
pub struct Frontier {
    tainted: BTreeSet<usize>,
}

impl Frontier {
    /// Create an empty frontier
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a cell as stale; returns false if it already was
    pub fn taint(&mut self, key: usize) -> bool {
        self.tainted.insert(key)
    }

    /// Mark several cells as stale
    pub fn taint_all(&mut self, keys: impl IntoIterator<Item = usize>) {
        self.tainted.extend(keys);
    }

    /// Whether a cell is currently marked
    pub fn contains(&self, key: usize) -> bool {
        self.tainted.contains(&key)
    }

    /// Number of marked cells
    pub fn len(&self) -> usize {
        self.tainted.len()
    }

    /// Whether no cell is marked
    pub fn is_empty(&self) -> bool {
        self.tainted.is_empty()
    }

    /// Remove and return every marked cell in ascending key order
    pub fn drain(&mut self) -> Vec<usize> {
        std::mem::take(&mut self.tainted).into_iter().collect()
    }
}

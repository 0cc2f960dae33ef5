//! Entropy-ordered constraint propagation for dungeon tile grids
//!
//! Weighted 3x3 neighbourhood patterns are matched, under quarter-turn
//! rotations, against every unresolved cell. The cell whose matched weights
//! have the lowest Shannon entropy is resolved first by weighted random
//! choice, and its neighbours are queued for re-evaluation.

#![forbid(unsafe_code)]

/// Pattern catalog, cell evaluation and the generation state machine
pub mod algorithm;
/// Input/output operations, configuration and error handling
pub mod io;
/// Entropy and probability helpers
pub mod math;
/// Tile types, grids and coordinate mapping
pub mod spatial;

pub use algorithm::catalog::{Pattern, PatternCatalog};
pub use algorithm::executor::{Generator, GeneratorConfig, StepBudget, generate, generate_with};
pub use io::error::{AlgorithmError, Result};
pub use spatial::{BorderMatching, Grid, TileType};

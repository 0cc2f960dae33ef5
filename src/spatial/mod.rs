//! Spatial data structures
//!
//! This module contains spatial-related functionality including:
//! - Tile types and neighbourhood kernels
//! - The generation-owned grid and its read-only finished form
//! - World-to-cell coordinate mapping for collaborators

/// Tile grid storage and lookup
pub mod grid;
/// World position to cell mapping
pub mod scale;
/// Tile types and neighbour slot layout
pub mod tiles;

pub use grid::{BorderMatching, Grid, TileGrid};
pub use tiles::{Kernel, TileType};

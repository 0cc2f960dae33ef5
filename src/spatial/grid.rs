//! Tile grid storage with wall-border semantics
//!
//! [`TileGrid`] is the writable buffer owned by the generator while a level
//! is being built. Once generation finishes it is frozen into a [`Grid`],
//! which only offers lookups. Positions are `[x, y]` with `y` growing
//! downward; the backing array is indexed `[row, col]` = `[y, x]`.

use std::fmt;

use ndarray::{Array2, ArrayView2};
use num_traits::Float;

use crate::io::configuration::{MAX_GRID_DIMENSION, MIN_GRID_DIMENSION};
use crate::io::error::{AlgorithmError, Result};
use crate::spatial::scale::CellScale;
use crate::spatial::tiles::{Kernel, NEIGHBOR_COUNT, TileType, neighbor_positions};

/// How border cells take part in neighbourhood matching
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BorderMatching {
    /// Border and out-of-bounds neighbours are observed as `Wall`
    #[default]
    Wall,
    /// Border and out-of-bounds neighbours are observed as `Unknown`,
    /// matching any template slot
    Wildcard,
}

/// Writable grid owned by the generation process
#[derive(Debug, Clone)]
pub struct TileGrid {
    tiles: Array2<TileType>,
    width: usize,
    height: usize,
}

impl TileGrid {
    /// Create a grid with a `Wall` border and `Unknown` interior
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is below the minimum needed for
    /// an interior cell or above the allocation limit. Nothing is allocated
    /// in that case.
    pub fn new(width: usize, height: usize) -> Result<Self> {
        validate_dimensions(width, height)?;

        let tiles = Array2::from_shape_fn((height, width), |(row, col)| {
            if row == 0 || col == 0 || row == height - 1 || col == width - 1 {
                TileType::Wall
            } else {
                TileType::Unknown
            }
        });

        Ok(Self {
            tiles,
            width,
            height,
        })
    }

    /// Grid width in cells
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Grid height in cells
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Tile at `(x, y)`; anything outside the grid reports `Wall`
    pub fn tile_at(&self, x: usize, y: usize) -> TileType {
        self.tiles.get([y, x]).copied().unwrap_or(TileType::Wall)
    }

    /// Whether `(x, y)` lies on the outer ring of the grid
    pub const fn is_border(&self, x: usize, y: usize) -> bool {
        x == 0 || y == 0 || x + 1 == self.width || y + 1 == self.height
    }

    /// Whether `(x, y)` is inside the grid and off the border
    pub const fn is_interior(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height && !self.is_border(x, y)
    }

    /// Write a tile into an interior cell
    ///
    /// # Errors
    ///
    /// Returns an error if the position is on the border or outside the grid,
    /// or if `tile` is `Unknown`.
    pub fn set_tile(&mut self, x: usize, y: usize, tile: TileType) -> Result<()> {
        if !self.is_interior(x, y) {
            return Err(AlgorithmError::InvalidPosition {
                position: [x, y],
                dimensions: (self.width, self.height),
                reason: "only interior cells can be written",
            });
        }
        if !tile.is_resolved() {
            return Err(AlgorithmError::InvalidParameter {
                parameter: "tile",
                value: tile.to_string(),
                reason: "cells can only be resolved to a concrete tile".to_string(),
            });
        }

        if let Some(cell) = self.tiles.get_mut([y, x]) {
            *cell = tile;
        }
        Ok(())
    }

    /// Observe the eight neighbours of `position`
    pub fn kernel_at(&self, position: [usize; 2], border: BorderMatching) -> Kernel {
        let mut kernel = [TileType::Unknown; NEIGHBOR_COUNT];
        for (slot, neighbor) in kernel.iter_mut().zip(neighbor_positions(position)) {
            *slot = match (neighbor, border) {
                (Some([x, y]), BorderMatching::Wildcard) if !self.is_interior(x, y) => {
                    TileType::Unknown
                }
                (Some([x, y]), _) => self.tile_at(x, y),
                (None, BorderMatching::Wall) => TileType::Wall,
                (None, BorderMatching::Wildcard) => TileType::Unknown,
            };
        }
        kernel
    }

    /// Interior neighbours of `position` that are still `Unknown`
    pub fn unknown_neighbors(&self, position: [usize; 2]) -> Vec<[usize; 2]> {
        neighbor_positions(position)
            .into_iter()
            .flatten()
            .filter(|&[x, y]| self.is_interior(x, y) && !self.tile_at(x, y).is_resolved())
            .collect()
    }

    /// Interior positions in row-major order
    pub fn interior_positions(&self) -> impl Iterator<Item = [usize; 2]> + '_ {
        (1..self.height.saturating_sub(1))
            .flat_map(move |y| (1..self.width.saturating_sub(1)).map(move |x| [x, y]))
    }

    /// Number of interior cells that are still `Unknown`
    pub fn unknown_count(&self) -> usize {
        self.tiles.iter().filter(|tile| !tile.is_resolved()).count()
    }

    /// Integer key `y * width + x` for a position
    pub const fn encode(&self, position: [usize; 2]) -> usize {
        position[1] * self.width + position[0]
    }

    /// Position for a key produced by [`TileGrid::encode`]
    pub const fn decode(&self, key: usize) -> [usize; 2] {
        [key % self.width, key / self.width]
    }

    /// Borrow the raw tiles indexed `[y, x]`
    pub fn view(&self) -> ArrayView2<'_, TileType> {
        self.tiles.view()
    }

    /// Finish construction and hand out the read-only grid
    pub fn freeze(self) -> Grid {
        Grid {
            tiles: self.tiles,
            width: self.width,
            height: self.height,
        }
    }
}

/// Finished, read-only tile grid handed to rendering and physics
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    tiles: Array2<TileType>,
    width: usize,
    height: usize,
}

impl Grid {
    /// Grid width in cells
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Grid height in cells
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Tile at `(x, y)`; anything outside the grid reports `Wall`
    pub fn tile_at(&self, x: usize, y: usize) -> TileType {
        self.tiles.get([y, x]).copied().unwrap_or(TileType::Wall)
    }

    /// Tile under a continuous world position
    ///
    /// Positions that map outside the grid, including negative and
    /// non-finite ones, report `Wall` so collision checks treat them as solid.
    pub fn tile_at_world<T: Float>(&self, position: [T; 2], scale: &CellScale) -> TileType {
        scale
            .world_to_cell(position)
            .map_or(TileType::Wall, |[x, y]| self.tile_at(x, y))
    }

    /// Whether `(x, y)` lies on the outer ring of the grid
    pub const fn is_border(&self, x: usize, y: usize) -> bool {
        x == 0 || y == 0 || x + 1 == self.width || y + 1 == self.height
    }

    /// Number of cells holding `tile`
    pub fn count(&self, tile: TileType) -> usize {
        self.tiles.iter().filter(|&&t| t == tile).count()
    }

    /// Borrow the raw tiles indexed `[y, x]`
    pub fn view(&self) -> ArrayView2<'_, TileType> {
        self.tiles.view()
    }

    /// Iterate rows from top to bottom
    pub fn rows(&self) -> impl Iterator<Item = Vec<TileType>> + '_ {
        self.tiles.rows().into_iter().map(|row| row.to_vec())
    }

    /// Render one glyph per cell, one line per row
    pub fn to_ascii(&self) -> String {
        let mut out = String::with_capacity((self.width + 1) * self.height);
        for row in self.tiles.rows() {
            out.extend(row.iter().map(|tile| tile.glyph()));
            out.push('\n');
        }
        out
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_ascii())
    }
}

/// Check grid dimensions before allocation
///
/// # Errors
///
/// Returns an error if either side is outside
/// `MIN_GRID_DIMENSION..=MAX_GRID_DIMENSION`.
pub const fn validate_dimensions(width: usize, height: usize) -> Result<()> {
    if side_in_range(width) && side_in_range(height) {
        Ok(())
    } else {
        Err(AlgorithmError::InvalidDimensions {
            width,
            height,
            minimum: MIN_GRID_DIMENSION,
            maximum: MAX_GRID_DIMENSION,
        })
    }
}

const fn side_in_range(side: usize) -> bool {
    side >= MIN_GRID_DIMENSION && side <= MAX_GRID_DIMENSION
}

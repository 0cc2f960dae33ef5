//! Mapping between continuous world positions and grid cells

use num_traits::{Float, ToPrimitive};

use crate::io::error::{Result, invalid_parameter};

/// Size of one grid cell in world units
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CellScale {
    cell_width: f64,
    cell_height: f64,
}

impl CellScale {
    /// Create a scale from the world size of a single cell
    ///
    /// # Errors
    ///
    /// Returns an error if either side is not a positive finite number
    pub fn new(cell_width: f64, cell_height: f64) -> Result<Self> {
        for (parameter, value) in [("cell_width", cell_width), ("cell_height", cell_height)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(invalid_parameter(
                    parameter,
                    &value,
                    &"cell size must be positive and finite",
                ));
            }
        }
        Ok(Self {
            cell_width,
            cell_height,
        })
    }

    /// Scale that stretches a `width` x `height` grid over a viewport
    ///
    /// # Errors
    ///
    /// Returns an error if the viewport or grid size is zero
    pub fn fit(viewport: [u32; 2], width: usize, height: usize) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(invalid_parameter(
                "grid",
                &format!("{width}x{height}"),
                &"grid must have at least one cell",
            ));
        }
        Self::new(
            f64::from(viewport[0]) / width as f64,
            f64::from(viewport[1]) / height as f64,
        )
    }

    /// World width of a cell
    pub const fn cell_width(&self) -> f64 {
        self.cell_width
    }

    /// World height of a cell
    pub const fn cell_height(&self) -> f64 {
        self.cell_height
    }

    /// Cell containing a world position, or `None` for negative or
    /// non-finite coordinates
    pub fn world_to_cell<T: Float>(&self, position: [T; 2]) -> Option<[usize; 2]> {
        let x = position[0].to_f64()?;
        let y = position[1].to_f64()?;
        if !x.is_finite() || !y.is_finite() || x < 0.0 || y < 0.0 {
            return None;
        }
        let col = (x / self.cell_width).floor().to_usize()?;
        let row = (y / self.cell_height).floor().to_usize()?;
        Some([col, row])
    }

    /// World position of a cell's top-left corner
    pub fn cell_origin(&self, cell: [usize; 2]) -> [f64; 2] {
        [
            cell[0] as f64 * self.cell_width,
            cell[1] as f64 * self.cell_height,
        ]
    }
}

//! PNG export of finished grids, one square block of pixels per cell

use std::path::Path;

use image::{ImageBuffer, Rgba, RgbaImage};

use crate::io::configuration::{
    EMPTY_COLOR, FLOOR_COLOR, STAIRS_COLOR, UNKNOWN_COLOR, WALL_COLOR,
};
use crate::io::error::{AlgorithmError, Result, invalid_parameter};
use crate::spatial::Grid;
use crate::spatial::tiles::TileType;

/// Display colour of a tile
pub const fn tile_color(tile: TileType) -> [u8; 4] {
    match tile {
        TileType::Wall => WALL_COLOR,
        TileType::Empty => EMPTY_COLOR,
        TileType::Stairs => STAIRS_COLOR,
        TileType::Floor => FLOOR_COLOR,
        TileType::Unknown => UNKNOWN_COLOR,
    }
}

/// Paint a grid into an image with `cell_pixels` x `cell_pixels` blocks
///
/// # Errors
///
/// Returns an error if `cell_pixels` is zero or the image would not fit in
/// `u32` dimensions
pub fn render_grid(grid: &Grid, cell_pixels: u32) -> Result<RgbaImage> {
    let (width, height) = image_dimensions(grid.width(), grid.height(), cell_pixels)?;

    let img = ImageBuffer::from_fn(width, height, |px, py| {
        let x = (px / cell_pixels) as usize;
        let y = (py / cell_pixels) as usize;
        Rgba(tile_color(grid.tile_at(x, y)))
    });

    Ok(img)
}

/// Export a finished grid as a PNG image
///
/// # Errors
///
/// Returns an error if:
/// - `cell_pixels` is zero or the image is too large
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_grid_as_png(grid: &Grid, cell_pixels: u32, output_path: &Path) -> Result<()> {
    let img = render_grid(grid, cell_pixels)?;

    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| AlgorithmError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    img.save(output_path)
        .map_err(|e| AlgorithmError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    Ok(())
}

/// Pixel size of a `width` x `height` cell grid
///
/// # Errors
///
/// Returns an error if `cell_pixels` is zero or a side overflows `u32`
pub fn image_dimensions(width: usize, height: usize, cell_pixels: u32) -> Result<(u32, u32)> {
    if cell_pixels == 0 {
        return Err(invalid_parameter(
            "cell_pixels",
            &cell_pixels,
            &"cells must be at least one pixel wide",
        ));
    }

    let side = |cells: usize| {
        u32::try_from(cells)
            .ok()
            .and_then(|cells| cells.checked_mul(cell_pixels))
    };

    match (side(width), side(height)) {
        (Some(w), Some(h)) => Ok((w, h)),
        _ => Err(invalid_parameter(
            "cell_pixels",
            &cell_pixels,
            &format!("a {width}x{height} grid does not fit in an image at this scale"),
        )),
    }
}

//! Frame capture and GIF generation showing cells in resolution order

use std::path::Path;

use image::{Delay, Frame, Rgba, RgbaImage};

use crate::algorithm::executor::Placement;
use crate::io::configuration::{FINAL_FRAME_HOLD, VIEWER_MIN_FRAME_DELAY_MS};
use crate::io::error::{AlgorithmError, Result};
use crate::io::image::{image_dimensions, tile_color};
use crate::spatial::tiles::TileType;

/// Records tile placements so the generation can be replayed as an animation
#[derive(Debug, Clone)]
pub struct VisualizationCapture {
    placements: Vec<Placement>,
    width: usize,
    height: usize,
    cell_pixels: u32,
}

impl VisualizationCapture {
    /// Start a capture for a `width` x `height` grid
    pub fn new(width: usize, height: usize, cell_pixels: u32) -> Self {
        Self {
            placements: Vec::with_capacity(width.saturating_mul(height)),
            width,
            height,
            cell_pixels,
        }
    }

    /// Record one resolved cell
    pub fn record_placement(&mut self, placement: Placement) {
        self.placements.push(placement);
    }

    /// Record every placement of a run, in order
    pub fn record_all(&mut self, placements: &[Placement]) {
        self.placements.extend_from_slice(placements);
    }

    /// Returns all recorded placement events
    pub const fn placements(&self) -> &[Placement] {
        self.placements.as_slice()
    }

    /// Returns the total number of placement events
    pub const fn placement_count(&self) -> usize {
        self.placements.len()
    }

    /// Export the captured frames as a GIF with automatic frame skipping
    ///
    /// If `frame_delay_ms` is shorter than viewers reliably honour, frames
    /// are dropped so the apparent animation speed is kept.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No placements were captured
    /// - File system operations fail
    /// - GIF encoding fails
    pub fn export_gif(&self, output_path: &Path, frame_delay_ms: u32) -> Result<()> {
        if self.placements.is_empty() {
            return Err(AlgorithmError::InvalidParameter {
                parameter: "visualization",
                value: "empty".to_string(),
                reason: "no placements captured for visualization".to_string(),
            });
        }

        let frame_delay_ms = frame_delay_ms.max(1);
        let effective_delay_ms = frame_delay_ms.max(VIEWER_MIN_FRAME_DELAY_MS);
        let skip_factor = if frame_delay_ms < VIEWER_MIN_FRAME_DELAY_MS {
            VIEWER_MIN_FRAME_DELAY_MS.div_ceil(frame_delay_ms) as usize
        } else {
            1
        };

        let frames = self.generate_frames(effective_delay_ms, skip_factor)?;

        if let Some(parent) = output_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| AlgorithmError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create directory",
                source: e,
            })?;
        }

        let file = std::fs::File::create(output_path).map_err(|e| AlgorithmError::FileSystem {
            path: output_path.to_path_buf(),
            operation: "create file",
            source: e,
        })?;

        let mut encoder = image::codecs::gif::GifEncoder::new(file);
        encoder
            .encode_frames(frames)
            .map_err(|e| AlgorithmError::ImageExport {
                path: output_path.to_path_buf(),
                source: e,
            })?;

        Ok(())
    }

    /// Build the animation frames
    ///
    /// # Errors
    ///
    /// Returns an error if the grid cannot be rendered at the capture scale
    pub fn generate_frames(&self, delay_ms: u32, skip_factor: usize) -> Result<Vec<Frame>> {
        let skip_factor = skip_factor.max(1);
        let mut tiles: Vec<TileType> = (0..self.width * self.height)
            .map(|key| {
                let (x, y) = (key % self.width, key / self.width);
                if x == 0 || y == 0 || x + 1 == self.width || y + 1 == self.height {
                    TileType::Wall
                } else {
                    TileType::Unknown
                }
            })
            .collect();

        let mut frames = vec![self.render_frame(&tiles, delay_ms)?];

        for (count, placement) in self.placements.iter().enumerate() {
            let [x, y] = placement.position;
            if x < self.width
                && let Some(cell) = tiles.get_mut(y * self.width + x)
            {
                *cell = placement.tile;
            }
            if (count + 1).is_multiple_of(skip_factor) {
                frames.push(self.render_frame(&tiles, delay_ms)?);
            }
        }

        if !self.placements.len().is_multiple_of(skip_factor) {
            frames.push(self.render_frame(&tiles, delay_ms)?);
        }

        // Final frame displays longer for better visibility
        frames.push(self.render_frame(&tiles, delay_ms.saturating_mul(FINAL_FRAME_HOLD))?);

        Ok(frames)
    }

    fn render_frame(&self, tiles: &[TileType], delay_ms: u32) -> Result<Frame> {
        let (width, height) = image_dimensions(self.width, self.height, self.cell_pixels)?;
        let cell_pixels = self.cell_pixels;

        let img = RgbaImage::from_fn(width, height, |px, py| {
            let x = (px / cell_pixels) as usize;
            let y = (py / cell_pixels) as usize;
            let tile = tiles
                .get(y * self.width + x)
                .copied()
                .unwrap_or(TileType::Wall);
            Rgba(tile_color(tile))
        });

        Ok(Frame::from_parts(
            img,
            0,
            0,
            Delay::from_numer_denom_ms(delay_ms, 1),
        ))
    }
}

//! Command-line interface for generating a single dungeon grid

use crate::algorithm::catalog::PatternCatalog;
use crate::algorithm::executor::{Generator, GeneratorConfig, StepBudget};
use crate::io::configuration::{
    DEFAULT_CELL_PIXELS, DEFAULT_HEIGHT, DEFAULT_LOG_LEVEL, DEFAULT_SEED, DEFAULT_WIDTH,
    GIF_FRAME_DELAY_MS,
};
use crate::io::error::Result;
use crate::io::image::export_grid_as_png;
use crate::io::progress::ProgressReporter;
use crate::io::visualization::VisualizationCapture;
use crate::spatial::grid::{BorderMatching, Grid, validate_dimensions};
use clap::Parser;
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "dungeontile")]
#[command(
    author,
    version,
    about = "Generate dungeon wall layouts by entropy-ordered pattern matching"
)]
/// Command-line arguments for the dungeon generator
pub struct Cli {
    /// Grid width in cells, border included
    #[arg(short = 'W', long, default_value_t = DEFAULT_WIDTH)]
    pub width: usize,

    /// Grid height in cells, border included
    #[arg(short = 'H', long, default_value_t = DEFAULT_HEIGHT)]
    pub height: usize,

    /// Random seed for reproducible generation
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Column of the cell forced open (defaults to the centre)
    #[arg(long)]
    pub seed_x: Option<usize>,

    /// Row of the cell forced open (defaults to the centre)
    #[arg(long)]
    pub seed_y: Option<usize>,

    /// Stop with an error after this many resolved cells
    #[arg(long)]
    pub max_steps: Option<usize>,

    /// Stop with an error after this many milliseconds
    #[arg(long)]
    pub timeout_ms: Option<u64>,

    /// Write the finished grid as a PNG image
    #[arg(short, long, value_name = "PNG")]
    pub output: Option<PathBuf>,

    /// Write an animated GIF of the resolution order
    #[arg(short, long, value_name = "GIF")]
    pub visualize: Option<PathBuf>,

    /// Pixels per cell in exported images
    #[arg(short = 'p', long, default_value_t = DEFAULT_CELL_PIXELS)]
    pub cell_pixels: u32,

    /// Treat border neighbours as wildcards instead of walls while matching
    #[arg(long)]
    pub wildcard_border: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Do not print the grid to stdout
    #[arg(long)]
    pub no_ascii: bool,

    /// Tracing level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = DEFAULT_LOG_LEVEL)]
    pub log_level: String,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Check if the grid should be printed to stdout
    pub const fn should_print_ascii(&self) -> bool {
        !self.no_ascii
    }

    /// Seed cell, filling a missing coordinate from the centre
    pub fn seed_position(&self) -> Option<[usize; 2]> {
        match (self.seed_x, self.seed_y) {
            (None, None) => None,
            (x, y) => Some([
                x.unwrap_or(self.width / 2),
                y.unwrap_or(self.height / 2),
            ]),
        }
    }

    /// Generator configuration described by the arguments
    pub fn generator_config(&self) -> GeneratorConfig {
        GeneratorConfig {
            seed_position: self.seed_position(),
            rng_seed: self.seed,
            border: if self.wildcard_border {
                BorderMatching::Wildcard
            } else {
                BorderMatching::Wall
            },
            budget: StepBudget {
                max_steps: self.max_steps,
                deadline: self.timeout_ms.map(Duration::from_millis),
            },
        }
    }
}

/// Generate a grid as described by the arguments and write requested files
///
/// # Errors
///
/// Returns an error if the arguments are invalid, generation fails, or an
/// export cannot be written
pub fn run(cli: &Cli) -> Result<Grid> {
    validate_dimensions(cli.width, cli.height)?;
    let catalog = PatternCatalog::dungeon()?;
    let start_time = Instant::now();

    let mut generator = Generator::new(cli.width, cli.height, &catalog, cli.generator_config())?;

    let interior = (cli.width - 2) * (cli.height - 2);
    let progress = if cli.should_show_progress() {
        ProgressReporter::new(interior, "generating")
    } else {
        ProgressReporter::hidden(interior)
    };

    loop {
        match generator.step() {
            Ok(true) => progress.update(generator.resolved_count()),
            Ok(false) => break,
            Err(error) => {
                progress.abandon("failed");
                return Err(error);
            }
        }
    }
    progress.update(generator.resolved_count());
    progress.finish("done");

    let mut capture = cli
        .visualize
        .as_ref()
        .map(|_| VisualizationCapture::new(cli.width, cli.height, cli.cell_pixels));
    if let Some(capture) = capture.as_mut() {
        capture.record_all(generator.placements());
    }

    let grid = generator.finish()?;
    info!(
        width = grid.width(),
        height = grid.height(),
        elapsed_ms = start_time.elapsed().as_millis() as u64,
        "grid generated"
    );

    if let Some(path) = &cli.output {
        export_grid_as_png(&grid, cli.cell_pixels, path)?;
    }

    if let (Some(path), Some(capture)) = (&cli.visualize, &capture) {
        capture.export_gif(path, GIF_FRAME_DELAY_MS)?;
    }

    Ok(grid)
}


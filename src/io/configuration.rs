//! Generation constants and runtime configuration defaults

/// Smallest grid side that still contains an interior cell
pub const MIN_GRID_DIMENSION: usize = 3;

// Safety limit to prevent excessive memory allocation
/// Maximum allowed grid dimension
pub const MAX_GRID_DIMENSION: usize = 4_096;

/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 42;

/// Default grid width in cells
pub const DEFAULT_WIDTH: usize = 40;

/// Default grid height in cells
pub const DEFAULT_HEIGHT: usize = 24;

/// Side length of one cell in exported images
pub const DEFAULT_CELL_PIXELS: u32 = 8;

/// Default tracing level for the command line tool
pub const DEFAULT_LOG_LEVEL: &str = "warn";

// Tile colours used by image and GIF export
/// Colour of wall cells
pub const WALL_COLOR: [u8; 4] = [40, 36, 48, 255];
/// Colour of empty cells
pub const EMPTY_COLOR: [u8; 4] = [214, 200, 170, 255];
/// Colour of stairs cells
pub const STAIRS_COLOR: [u8; 4] = [196, 120, 40, 255];
/// Colour of floor cells
pub const FLOOR_COLOR: [u8; 4] = [160, 150, 128, 255];
/// Colour of cells still waiting to be resolved
pub const UNKNOWN_COLOR: [u8; 4] = [96, 96, 110, 255];

// Animation settings
/// Delay between GIF animation frames
pub const GIF_FRAME_DELAY_MS: u32 = 5;
/// Minimum frame delay that viewers reliably support (in milliseconds)
pub const VIEWER_MIN_FRAME_DELAY_MS: u32 = 50;
/// Multiplier applied to the frame delay for the final frame
pub const FINAL_FRAME_HOLD: u32 = 25;

/// Width of the progress bar in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;

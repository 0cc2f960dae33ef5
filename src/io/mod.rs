//! Input/output operations and error handling

/// Command-line front end
pub mod cli;
/// Constants and defaults
pub mod configuration;
/// Error types shared by the whole crate
pub mod error;
/// PNG export of finished grids
pub mod image;
/// Tracing subscriber setup for the binary
pub mod logging;
/// Progress bar for long runs
pub mod progress;
/// Animated GIF of the resolution order
pub mod visualization;

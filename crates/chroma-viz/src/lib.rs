#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Error types for the visualization module.
pub mod error;

/// Layout of windows into a single mosaic image.
pub mod grid;

/// Logging of window grids to a rerun viewer.
pub mod plot;

pub use crate::error::VizError;
pub use crate::grid::{grid_size, window_grid};
pub use crate::plot::{plot_windows, DEFAULT_TITLE};

#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// color correction module.
pub mod color;

/// image basic operations module.
pub mod core;

/// Error types for the image processing module.
pub mod error;

/// per-pixel iteration utilities.
pub mod pixels;

/// window statistics based region segmentation.
pub mod segment;

/// operations to threshold images.
pub mod threshold;

/// sliding window iteration over images.
pub mod window;

pub use crate::error::ImgprocError;

use chroma_image::{ImageError, ImageSize};

use crate::segment::Region;

/// An error type for the image processing module.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ImgprocError {
    /// The region does not contain a single full window.
    #[error("Region {region} does not contain a full window of {window_size}")]
    InvalidRegion {
        /// The requested region.
        region: Region,
        /// The configured window size.
        window_size: ImageSize,
    },

    /// A channel has a zero scale factor, e.g. its maximum value is zero.
    #[error("Channel {0} is degenerate: its scale factor is zero")]
    DegenerateChannel(usize),

    /// A configuration parameter is out of its valid range.
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Statistics were requested over an empty set of samples.
    #[error("Cannot compute statistics over an empty set of samples")]
    EmptySamples,

    /// Error from the image module.
    #[error(transparent)]
    Image(#[from] ImageError),
}

use chroma_image::{ImageError, ImageSize};

/// An error type for the visualization module.
#[derive(thiserror::Error, Debug)]
pub enum VizError {
    /// There are no windows to lay out.
    #[error("The list of windows is empty")]
    EmptyWindowList,

    /// A window does not have the size of the first window.
    #[error("Window {index} has size {found}, expected {expected}")]
    MismatchedWindowSize {
        /// The position of the offending window in the list.
        index: usize,
        /// The size of the first window.
        expected: ImageSize,
        /// The size of the offending window.
        found: ImageSize,
    },

    /// Error to create the mosaic image.
    #[error(transparent)]
    Image(#[from] ImageError),

    /// Error to log to the recording stream.
    #[error(transparent)]
    Recording(#[from] rerun::RecordingStreamError),
}

//! Sliding window iteration over images.
//!
//! A sliding window is a fixed-size sub-region swept across an image at a regular
//! stride. Windows are produced lazily in raster order (top to bottom, left to right)
//! and only windows that fit entirely inside the image are yielded; truncated windows
//! at the image border are discarded, never padded.
//!
//! # Example
//!
//! ```
//! use chroma_image::{Image, ImageSize};
//! use chroma_imgproc::window::{sliding_window, WindowConfig};
//!
//! let image = Image::<u8, 3>::from_size_val(ImageSize { width: 100, height: 100 }, 0).unwrap();
//!
//! let config = WindowConfig::default();
//! let origins = sliding_window(&image, &config, 0..100, 0..100)
//!     .unwrap()
//!     .map(|w| (w.x, w.y))
//!     .collect::<Vec<_>>();
//!
//! assert_eq!(origins.len(), 9);
//! assert_eq!(origins[0], (0, 0));
//! assert_eq!(origins[8], (50, 50));
//! ```

use std::ops::Range;

use chroma_image::{Image, ImageSize};

use crate::error::ImgprocError;

/// Default window size in pixels.
pub const DEFAULT_WINDOW_SIZE: ImageSize = ImageSize {
    width: 50,
    height: 50,
};

/// Default step between two consecutive windows in pixels.
pub const DEFAULT_STEP_SIZE: usize = 25;

/// Parameters of a sliding window sweep.
///
/// The window size controls the granularity of the sweep and the step size controls
/// the overlap between consecutive windows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowConfig {
    /// Size of each window in pixels. Defaults to 50x50.
    pub window_size: ImageSize,
    /// Distance between two consecutive window origins. Defaults to 25.
    pub step_size: usize,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            window_size: DEFAULT_WINDOW_SIZE,
            step_size: DEFAULT_STEP_SIZE,
        }
    }
}

impl WindowConfig {
    /// Set the window size.
    pub fn with_window_size(mut self, window_size: ImageSize) -> Self {
        self.window_size = window_size;
        self
    }

    /// Set the step size.
    pub fn with_step_size(mut self, step_size: usize) -> Self {
        self.step_size = step_size;
        self
    }

    /// Check that the window size and the step size are positive.
    ///
    /// # Errors
    ///
    /// Returns [`ImgprocError::InvalidConfiguration`] if any of them is zero.
    pub fn validate(&self) -> Result<(), ImgprocError> {
        if self.window_size.width == 0 || self.window_size.height == 0 {
            return Err(ImgprocError::InvalidConfiguration(format!(
                "window size must be positive, got {}x{}",
                self.window_size.width, self.window_size.height
            )));
        }

        if self.step_size == 0 {
            return Err(ImgprocError::InvalidConfiguration(
                "step size must be positive, got 0".to_string(),
            ));
        }

        Ok(())
    }
}

/// A window extracted from an image together with its position.
#[derive(Debug, Clone, PartialEq)]
pub struct Window<T, const C: usize> {
    /// The x-coordinate of the top-left corner of the window in the source image.
    pub x: usize,
    /// The y-coordinate of the top-left corner of the window in the source image.
    pub y: usize,
    /// A copy of the pixels covered by the window.
    pub image: Image<T, C>,
}

/// Iterator over the origins of the windows that fit inside an image.
///
/// Created by [`window_origins`] and used internally by [`SlidingWindow`].
#[derive(Debug, Clone)]
pub struct WindowOrigins {
    x_start: usize,
    x_stop: usize,
    y_stop: usize,
    step_size: usize,
    x: usize,
    y: usize,
}

impl WindowOrigins {
    fn new(
        image_size: ImageSize,
        config: &WindowConfig,
        x_range: Range<usize>,
        y_range: Range<usize>,
    ) -> Self {
        // a window at (x, y) fits iff x + width <= image width, same for y
        let x_limit = (image_size.width + 1).saturating_sub(config.window_size.width);
        let y_limit = (image_size.height + 1).saturating_sub(config.window_size.height);

        Self {
            x_start: x_range.start,
            x_stop: x_range.end.min(x_limit),
            y_stop: y_range.end.min(y_limit),
            step_size: config.step_size,
            x: x_range.start,
            y: y_range.start,
        }
    }

    fn steps(start: usize, stop: usize, step: usize) -> usize {
        if start >= stop {
            0
        } else {
            (stop - start - 1) / step + 1
        }
    }
}

impl Iterator for WindowOrigins {
    type Item = (usize, usize);

    fn next(&mut self) -> Option<Self::Item> {
        if self.x_start >= self.x_stop {
            return None;
        }

        if self.x >= self.x_stop {
            self.x = self.x_start;
            self.y = self.y.saturating_add(self.step_size);
        }

        if self.y >= self.y_stop {
            return None;
        }

        let origin = (self.x, self.y);
        self.x = self.x.saturating_add(self.step_size);

        Some(origin)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let per_row = Self::steps(self.x_start, self.x_stop, self.step_size);
        let remaining = if per_row == 0 || self.y >= self.y_stop {
            0
        } else {
            let rows_after = Self::steps(self.y, self.y_stop, self.step_size) - 1;
            Self::steps(self.x, self.x_stop, self.step_size) + rows_after * per_row
        };
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for WindowOrigins {}

/// Lazy iterator over the windows of an image.
///
/// Created by [`sliding_window`]. The iterator cannot be rewound; call
/// [`sliding_window`] again with the same arguments to restart the sweep.
#[derive(Debug, Clone)]
pub struct SlidingWindow<'a, T, const C: usize> {
    image: &'a Image<T, C>,
    window_size: ImageSize,
    origins: WindowOrigins,
}

impl<T: Copy, const C: usize> Iterator for SlidingWindow<'_, T, C> {
    type Item = Window<T, C>;

    fn next(&mut self) -> Option<Self::Item> {
        let (x, y) = self.origins.next()?;
        let image = self.image.crop(x, y, self.window_size)?;
        Some(Window { x, y, image })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.origins.size_hint()
    }
}

impl<T: Copy, const C: usize> ExactSizeIterator for SlidingWindow<'_, T, C> {}

/// Compute the origins of the windows of a sweep without copying any pixel.
///
/// The origins are produced in the same order as [`sliding_window`] yields its windows.
///
/// # Errors
///
/// Returns [`ImgprocError::InvalidConfiguration`] if the configuration is not valid.
///
/// # Example
///
/// ```
/// use chroma_image::ImageSize;
/// use chroma_imgproc::window::{window_origins, WindowConfig};
///
/// let config = WindowConfig::default()
///     .with_window_size(ImageSize { width: 2, height: 2 })
///     .with_step_size(1);
///
/// let origins = window_origins(ImageSize { width: 3, height: 3 }, &config, 0..3, 0..3)
///     .unwrap()
///     .collect::<Vec<_>>();
///
/// assert_eq!(origins, vec![(0, 0), (1, 0), (0, 1), (1, 1)]);
/// ```
pub fn window_origins(
    image_size: ImageSize,
    config: &WindowConfig,
    x_range: Range<usize>,
    y_range: Range<usize>,
) -> Result<WindowOrigins, ImgprocError> {
    config.validate()?;
    Ok(WindowOrigins::new(image_size, config, x_range, y_range))
}

/// Sweep a window over a region of an image.
///
/// For each origin `y` in `y_range` and `x` in `x_range`, taken with a stride of
/// `config.step_size`, the window covering rows `[y, y + height)` and columns
/// `[x, x + width)` is yielded if it fits inside the image. Empty or inverted
/// ranges, or ranges starting outside the image, produce no windows.
///
/// # Arguments
///
/// * `image` - The image to sweep.
/// * `config` - The window and step sizes.
/// * `x_range` - The range of x-coordinates of the window origins.
/// * `y_range` - The range of y-coordinates of the window origins.
///
/// # Errors
///
/// Returns [`ImgprocError::InvalidConfiguration`] if the configuration is not valid.
pub fn sliding_window<'a, T, const C: usize>(
    image: &'a Image<T, C>,
    config: &WindowConfig,
    x_range: Range<usize>,
    y_range: Range<usize>,
) -> Result<SlidingWindow<'a, T, C>, ImgprocError>
where
    T: Copy,
{
    let origins = window_origins(image.size(), config, x_range, y_range)?;
    Ok(SlidingWindow {
        image,
        window_size: config.window_size,
        origins,
    })
}

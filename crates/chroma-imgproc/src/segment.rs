//! Region segmentation based on window color statistics.
//!
//! The segmenter estimates the "typical" color of a region of an image and keeps the
//! pixels of the whole image whose color is close to it:
//!
//! 1. Sweep a sliding window over the region and compute the mean color of each window.
//! 2. Compute the mean and standard deviation of the window means, per channel.
//! 3. Derive a band `[mean - k * std, mean + k * std]` per channel (`k = 2` by default).
//! 4. Mark every pixel of the image whose channels all lie inside their band.
//!
//! Using window means instead of raw pixel values reduces the influence of noisy
//! pixels on the estimate, at the cost of requiring at least one full window inside
//! the region.
//!
//! # Example
//!
//! ```
//! use chroma_image::{Image, ImageSize};
//! use chroma_imgproc::segment::{segment_region, Region, SegmentConfig};
//!
//! let image = Image::<u8, 3>::from_size_val(ImageSize { width: 8, height: 8 }, 100).unwrap();
//!
//! let config = SegmentConfig::default()
//!     .with_window_size(ImageSize { width: 4, height: 4 })
//!     .with_step_size(2);
//!
//! let segmentation = segment_region(&image, &Region::new(0, 8, 0, 8), &config).unwrap();
//!
//! assert_eq!(segmentation.windows.len(), 9);
//! assert!(segmentation.mask.as_slice().iter().all(|&m| m == 255));
//! assert_eq!(segmentation.segmented, image);
//! ```

use std::ops::Range;

use chroma_image::{Image, ImageSize};
use num_traits::Zero;

use crate::core::{apply_mask, channel_std_mean, mean_color, ChannelStats};
use crate::error::ImgprocError;
use crate::threshold::{in_range, ThresholdBand};
use crate::window::{sliding_window, Window, WindowConfig};

/// Default number of standard deviations around the mean accepted by the bands.
pub const DEFAULT_NUM_STD: f64 = 2.0;

/// A rectangular region of an image, half-open on both axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Region {
    /// First column of the region.
    pub x_start: usize,
    /// One past the last column of the region.
    pub x_end: usize,
    /// First row of the region.
    pub y_start: usize,
    /// One past the last row of the region.
    pub y_end: usize,
}

impl Region {
    /// Create a region from its bounds.
    pub fn new(x_start: usize, x_end: usize, y_start: usize, y_end: usize) -> Self {
        Self {
            x_start,
            x_end,
            y_start,
            y_end,
        }
    }

    /// The region covering a whole image of the given size.
    pub fn full(size: ImageSize) -> Self {
        Self::new(0, size.width, 0, size.height)
    }

    /// The range of columns of the region.
    pub fn x_range(&self) -> Range<usize> {
        self.x_start..self.x_end
    }

    /// The range of rows of the region.
    pub fn y_range(&self) -> Range<usize> {
        self.y_start..self.y_end
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "x: {}..{}, y: {}..{}",
            self.x_start, self.x_end, self.y_start, self.y_end
        )
    }
}

/// Parameters of the region segmentation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentConfig {
    /// The sliding window sweep. Defaults to 50x50 windows with a step of 25.
    pub window: WindowConfig,
    /// The half width of the bands in standard deviations. Defaults to 2.
    pub num_std: f64,
}

impl Default for SegmentConfig {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            num_std: DEFAULT_NUM_STD,
        }
    }
}

impl SegmentConfig {
    /// Set the window size. Larger windows smooth the color estimate.
    pub fn with_window_size(mut self, window_size: ImageSize) -> Self {
        self.window.window_size = window_size;
        self
    }

    /// Set the step size. Smaller steps produce more, overlapping windows.
    pub fn with_step_size(mut self, step_size: usize) -> Self {
        self.window.step_size = step_size;
        self
    }

    /// Set the half width of the bands in standard deviations.
    pub fn with_num_std(mut self, num_std: f64) -> Self {
        self.num_std = num_std;
        self
    }

    /// Check the window parameters and that `num_std` is finite and non-negative.
    ///
    /// # Errors
    ///
    /// Returns [`ImgprocError::InvalidConfiguration`] if any parameter is invalid.
    pub fn validate(&self) -> Result<(), ImgprocError> {
        self.window.validate()?;

        if !self.num_std.is_finite() || self.num_std < 0.0 {
            return Err(ImgprocError::InvalidConfiguration(format!(
                "num_std must be finite and non-negative, got {}",
                self.num_std
            )));
        }

        Ok(())
    }
}

/// Result of [`segment_region`].
#[derive(Debug, Clone, PartialEq)]
pub struct Segmentation<T, const C: usize> {
    /// The source image where the mask is set, zero elsewhere.
    pub segmented: Image<T, C>,
    /// The mask over the whole image: 255 inside all the bands, 0 elsewhere.
    pub mask: Image<u8, 1>,
    /// The windows of the region, in raster order.
    pub windows: Vec<Window<T, C>>,
    /// The statistics of the window mean colors.
    pub stats: ChannelStats<C>,
    /// The band of each channel.
    pub bands: [ThresholdBand; C],
}

/// Segment the pixels of an image whose color is typical of a region.
///
/// # Arguments
///
/// * `image` - The input image.
/// * `region` - The region used to estimate the typical color.
/// * `config` - The window sweep and band parameters.
///
/// # Returns
///
/// The segmented image, the mask computed over the whole image, the windows of the
/// region and the statistics the bands were derived from.
///
/// # Errors
///
/// * [`ImgprocError::InvalidConfiguration`] if the configuration is invalid.
/// * [`ImgprocError::InvalidRegion`] if the region does not contain a single full window.
pub fn segment_region<T, const C: usize>(
    image: &Image<T, C>,
    region: &Region,
    config: &SegmentConfig,
) -> Result<Segmentation<T, C>, ImgprocError>
where
    T: Copy + Into<f64> + Zero,
{
    config.validate()?;

    let windows = sliding_window(image, &config.window, region.x_range(), region.y_range())?
        .collect::<Vec<_>>();

    if windows.is_empty() {
        return Err(ImgprocError::InvalidRegion {
            region: *region,
            window_size: config.window.window_size,
        });
    }

    log::debug!("Num windows in region {}: {}", region, windows.len());

    let mean_colors = windows
        .iter()
        .map(|window| mean_color(&window.image))
        .collect::<Result<Vec<_>, _>>()?;

    let stats = channel_std_mean(&mean_colors)?;
    let bands = stats.bands(config.num_std);

    log::debug!("Window mean stats: {:?}", stats);
    log::debug!("Threshold bands: {:?}", bands);

    let mut mask = Image::<u8, 1>::from_size_val(image.size(), 0)?;
    in_range(image, &mut mask, &bands)?;

    let mut segmented = Image::<T, C>::from_size_val(image.size(), T::zero())?;
    apply_mask(image, &mask, &mut segmented)?;

    Ok(Segmentation {
        segmented,
        mask,
        windows,
        stats,
        bands,
    })
}

#[cfg(test)]
mod tests {
    use chroma_image::{Image, ImageSize};

    use super::{segment_region, Region, SegmentConfig};
    use crate::error::ImgprocError;

    fn small_config() -> SegmentConfig {
        SegmentConfig::default()
            .with_window_size(ImageSize {
                width: 2,
                height: 2,
            })
            .with_step_size(2)
    }

    #[test]
    fn test_default_config() {
        let config = SegmentConfig::default();
        assert_eq!(
            config.window.window_size,
            ImageSize {
                width: 50,
                height: 50
            }
        );
        assert_eq!(config.window.step_size, 25);
        assert_eq!(config.num_std, 2.0);
    }

    #[test]
    fn test_invalid_config() -> Result<(), ImgprocError> {
        let image = Image::<u8, 3>::from_size_val(
            ImageSize {
                width: 4,
                height: 4,
            },
            0,
        )?;
        let region = Region::full(image.size());

        for config in [
            small_config().with_step_size(0),
            small_config().with_num_std(-1.0),
            small_config().with_num_std(f64::NAN),
        ] {
            assert!(matches!(
                segment_region(&image, &region, &config),
                Err(ImgprocError::InvalidConfiguration(_))
            ));
        }

        Ok(())
    }

    #[test]
    fn test_invalid_region() -> Result<(), ImgprocError> {
        let image = Image::<u8, 3>::from_size_val(
            ImageSize {
                width: 4,
                height: 4,
            },
            0,
        )?;

        for region in [
            Region::new(3, 4, 0, 4),
            Region::new(3, 1, 0, 4),
            Region::new(0, 4, 4, 4),
            Region::new(10, 20, 10, 20),
        ] {
            assert_eq!(
                segment_region(&image, &region, &small_config()),
                Err(ImgprocError::InvalidRegion {
                    region,
                    window_size: ImageSize {
                        width: 2,
                        height: 2
                    },
                })
            );
        }

        Ok(())
    }

    #[test]
    fn test_segment_two_colors() -> Result<(), ImgprocError> {
        // left half is dark, right half is bright, region covers the left half
        let size = ImageSize {
            width: 4,
            height: 4,
        };
        let data = (0..size.height)
            .flat_map(|_| (0..size.width).flat_map(|x| if x < 2 { [10u8; 3] } else { [200u8; 3] }))
            .collect();
        let image = Image::<u8, 3>::new(size, data)?;

        let segmentation = segment_region(&image, &Region::new(0, 2, 0, 4), &small_config())?;

        assert_eq!(segmentation.windows.len(), 2);
        assert_eq!(segmentation.stats.mean, [10.0; 3]);
        assert_eq!(segmentation.stats.std, [0.0; 3]);

        #[rustfmt::skip]
        let expected_mask = vec![
            255, 255, 0, 0,
            255, 255, 0, 0,
            255, 255, 0, 0,
            255, 255, 0, 0,
        ];
        assert_eq!(segmentation.mask.as_slice(), expected_mask.as_slice());
        assert_eq!(segmentation.mask.size(), image.size());

        for (i, pixel) in segmentation.segmented.as_slice().chunks_exact(3).enumerate() {
            if expected_mask[i] == 255 {
                assert_eq!(pixel, &[10, 10, 10]);
            } else {
                assert_eq!(pixel, &[0, 0, 0]);
            }
        }

        Ok(())
    }

    #[test]
    fn test_segment_uses_window_means() -> Result<(), ImgprocError> {
        // two windows with means 15 and 20
        #[rustfmt::skip]
        let image = Image::<u8, 1>::new(
            ImageSize { width: 4, height: 2 },
            vec![
                0, 20, 20, 20,
                20, 20, 20, 20,
            ],
        )?;
        let config = small_config().with_num_std(1.0);

        let segmentation = segment_region(&image, &Region::full(image.size()), &config)?;

        assert_eq!(segmentation.stats.mean, [17.5]);
        assert_eq!(segmentation.stats.std, [2.5]);
        assert_eq!(segmentation.bands[0].low, 15.0);
        assert_eq!(segmentation.bands[0].high, 20.0);
        assert_eq!(
            segmentation.mask.as_slice(),
            &[0, 255, 255, 255, 255, 255, 255, 255]
        );

        Ok(())
    }

    #[test]
    fn test_segment_is_deterministic() -> Result<(), ImgprocError> {
        let size = ImageSize {
            width: 9,
            height: 7,
        };
        let data = (0..size.width * size.height * 3)
            .map(|i| ((i * 37) % 251) as u8)
            .collect();
        let image = Image::<u8, 3>::new(size, data)?;
        let region = Region::new(1, 8, 0, 6);
        let config = small_config().with_step_size(1);

        let first = segment_region(&image, &region, &config)?;
        let second = segment_region(&image, &region, &config)?;

        assert_eq!(first.mask, second.mask);
        assert_eq!(first.segmented, second.segmented);

        Ok(())
    }
}

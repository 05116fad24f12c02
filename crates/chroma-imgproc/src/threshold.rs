use chroma_image::{Image, ImageError};

use crate::pixels;

/// A closed interval `[low, high]` of accepted values for one channel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThresholdBand {
    /// The lower bound, inclusive.
    pub low: f64,
    /// The upper bound, inclusive.
    pub high: f64,
}

impl ThresholdBand {
    /// Create the band `[center - k * spread, center + k * spread]`.
    ///
    /// The bounds are ordered as long as `spread` and `k` are non-negative.
    pub fn around(center: f64, spread: f64, k: f64) -> Self {
        Self {
            low: center - k * spread,
            high: center + k * spread,
        }
    }

    /// Check whether a value lies inside the band, bounds included.
    pub fn contains(&self, value: f64) -> bool {
        value >= self.low && value <= self.high
    }
}

/// Apply a per-channel band threshold to an image.
///
/// A pixel is set in the output when every one of its channels lies inside the
/// band of that channel, bounds included.
///
/// # Arguments
///
/// * `src` - The input image of an arbitrary number of channels and type.
/// * `dst` - The output mask: 255 where the pixel is inside all the bands, 0 elsewhere.
/// * `bands` - The band of each channel.
///
/// # Errors
///
/// Returns [`ImageError::InvalidImageSize`] if `src` and `dst` have different sizes.
///
/// # Examples
///
/// ```
/// use chroma_image::{Image, ImageSize};
/// use chroma_imgproc::threshold::{in_range, ThresholdBand};
///
/// let data = vec![100u8, 200, 50, 150, 200, 250];
///
/// let image = Image::<u8, 3>::new(
///    ImageSize {
///       width: 2,
///       height: 1,
///    },
///    data,
/// )
/// .unwrap();
///
/// let mut mask = Image::<u8, 1>::from_size_val(image.size(), 0).unwrap();
///
/// let bands = [
///     ThresholdBand { low: 100.0, high: 200.0 },
///     ThresholdBand { low: 150.0, high: 200.0 },
///     ThresholdBand { low: 0.0, high: 200.0 },
/// ];
///
/// in_range(&image, &mut mask, &bands).unwrap();
///
/// assert_eq!(mask.as_slice(), &[255, 0]);
/// ```
pub fn in_range<T, const C: usize>(
    src: &Image<T, C>,
    dst: &mut Image<u8, 1>,
    bands: &[ThresholdBand; C],
) -> Result<(), ImageError>
where
    T: Copy + Into<f64>,
{
    pixels::iter_pixels(src, dst, |src_pixel, dst_pixel| {
        let is_in_range = src_pixel
            .iter()
            .zip(bands.iter())
            .all(|(&v, band)| band.contains(v.into()));
        dst_pixel[0] = if is_in_range { 255 } else { 0 };
    })
}

#[cfg(test)]
mod tests {
    use chroma_image::{Image, ImageError, ImageSize};

    use super::ThresholdBand;

    #[test]
    fn test_band_around() {
        let band = ThresholdBand::around(10.0, 1.5, 2.0);
        assert_eq!(
            band,
            ThresholdBand {
                low: 7.0,
                high: 13.0
            }
        );
        assert!(band.contains(7.0));
        assert!(band.contains(13.0));
        assert!(!band.contains(13.000001));
        assert!(!band.contains(f64::NAN));

        let degenerate = ThresholdBand::around(5.0, 0.0, 2.0);
        assert!(degenerate.contains(5.0));
        assert!(!degenerate.contains(4.0));
    }

    #[test]
    fn test_in_range() -> Result<(), ImageError> {
        #[rustfmt::skip]
        let image = Image::<u8, 3>::new(
            ImageSize {
                width: 2,
                height: 2,
            },
            vec![
                10, 20, 30,   11, 20, 30,
                10, 19, 30,   10, 20, 31,
            ],
        )?;

        let bands = [
            ThresholdBand {
                low: 0.0,
                high: 10.0,
            },
            ThresholdBand {
                low: 20.0,
                high: 20.0,
            },
            ThresholdBand {
                low: 30.0,
                high: 40.0,
            },
        ];

        let mut mask = Image::<u8, 1>::from_size_val(image.size(), 7)?;
        super::in_range(&image, &mut mask, &bands)?;

        // all channels must be inside their band
        assert_eq!(mask.as_slice(), &[255, 0, 0, 255]);

        Ok(())
    }

    #[test]
    fn test_in_range_size_mismatch() -> Result<(), ImageError> {
        let image = Image::<f32, 1>::from_size_val(
            ImageSize {
                width: 2,
                height: 2,
            },
            0.0,
        )?;
        let mut mask = Image::<u8, 1>::from_size_val(
            ImageSize {
                width: 1,
                height: 2,
            },
            0,
        )?;

        let bands = [ThresholdBand {
            low: 0.0,
            high: 1.0,
        }];
        assert_eq!(
            super::in_range(&image, &mut mask, &bands),
            Err(ImageError::InvalidImageSize(2, 2, 1, 2))
        );

        Ok(())
    }
}

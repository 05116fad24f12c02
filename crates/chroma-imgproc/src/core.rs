use chroma_image::{Image, ImageError};
use num_traits::Zero;

use crate::error::ImgprocError;
use crate::pixels;
use crate::threshold::ThresholdBand;

/// Per-channel mean and standard deviation of a set of samples.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChannelStats<const C: usize> {
    /// The mean of each channel.
    pub mean: [f64; C],
    /// The population standard deviation of each channel.
    pub std: [f64; C],
}

impl<const C: usize> ChannelStats<C> {
    /// Compute the band `[mean - num_std * std, mean + num_std * std]` of each channel.
    ///
    /// # Example
    ///
    /// ```
    /// use chroma_imgproc::core::ChannelStats;
    ///
    /// let stats = ChannelStats { mean: [10.0], std: [2.0] };
    /// let [band] = stats.bands(2.0);
    ///
    /// assert_eq!((band.low, band.high), (6.0, 14.0));
    /// ```
    pub fn bands(&self, num_std: f64) -> [ThresholdBand; C] {
        std::array::from_fn(|c| ThresholdBand::around(self.mean[c], self.std[c], num_std))
    }
}

/// Compute the mean color of an image.
///
/// The mean is the arithmetic mean of all the pixel values of each channel.
///
/// # Errors
///
/// Returns [`ImgprocError::EmptySamples`] if the image has no pixels.
///
/// # Example
///
/// ```
/// use chroma_image::{Image, ImageSize};
/// use chroma_imgproc::core::mean_color;
///
/// let image = Image::<u8, 3>::new(
///    ImageSize {
///      width: 2,
///      height: 1,
///    },
///    vec![0, 10, 20, 10, 20, 31],
/// ).unwrap();
///
/// assert_eq!(mean_color(&image).unwrap(), [5.0, 15.0, 25.5]);
/// ```
pub fn mean_color<T, const C: usize>(image: &Image<T, C>) -> Result<[f64; C], ImgprocError>
where
    T: Copy + Into<f64>,
{
    let n = image.width() * image.height();
    if n == 0 {
        return Err(ImgprocError::EmptySamples);
    }

    let sum = image
        .as_slice()
        .chunks_exact(C)
        .fold([0f64; C], |mut sum, pixel| {
            sum.iter_mut()
                .zip(pixel.iter())
                .for_each(|(s, &v)| *s += v.into());
            sum
        });

    Ok(sum.map(|s| s / n as f64))
}

/// Compute the mean and the population standard deviation of each channel of a
/// set of samples.
///
/// # Arguments
///
/// * `samples` - The samples, one value per channel.
///
/// # Errors
///
/// Returns [`ImgprocError::EmptySamples`] if there are no samples.
///
/// # Example
///
/// ```
/// use chroma_imgproc::core::channel_std_mean;
///
/// let stats = channel_std_mean(&[[1.0, 10.0], [3.0, 10.0]]).unwrap();
///
/// assert_eq!(stats.mean, [2.0, 10.0]);
/// assert_eq!(stats.std, [1.0, 0.0]);
/// ```
pub fn channel_std_mean<const C: usize>(
    samples: &[[f64; C]],
) -> Result<ChannelStats<C>, ImgprocError> {
    if samples.is_empty() {
        return Err(ImgprocError::EmptySamples);
    }

    let n = samples.len() as f64;

    let sum = samples.iter().fold([0f64; C], |mut sum, sample| {
        sum.iter_mut().zip(sample.iter()).for_each(|(s, v)| *s += v);
        sum
    });
    let mean = sum.map(|s| s / n);

    // second pass over the deviations to keep the variance non-negative
    let sq_sum = samples.iter().fold([0f64; C], |mut sq_sum, sample| {
        sq_sum
            .iter_mut()
            .zip(sample.iter().zip(mean.iter()))
            .for_each(|(s, (v, m))| *s += (v - m).powi(2));
        sq_sum
    });
    let std = sq_sum.map(|s| (s / n).sqrt());

    Ok(ChannelStats { mean, std })
}

/// Copy the pixels of an image where a mask is set and zero the others.
///
/// The mask is a binary image where the value 0 is considered as False
/// and any other value is considered as True.
///
/// # Arguments
///
/// * `src` - The input image.
/// * `mask` - The binary mask to apply to the image.
/// * `dst` - The output image.
///
/// # Errors
///
/// Returns [`ImageError::InvalidImageSize`] if the sizes of the images differ.
///
/// # Example
///
/// ```
/// use chroma_image::{Image, ImageSize};
/// use chroma_imgproc::core::apply_mask;
///
/// let image = Image::<u8, 3>::new(
///    ImageSize {
///        width: 2,
///        height: 2,
///    },
///    vec![0, 1, 2, 253, 254, 255, 128, 129, 130, 64, 65, 66],
/// ).unwrap();
///
/// let mask = Image::<u8, 1>::new(image.size(), vec![255, 0, 255, 0]).unwrap();
///
/// let mut output = Image::<u8, 3>::from_size_val(image.size(), 0).unwrap();
///
/// apply_mask(&image, &mask, &mut output).unwrap();
///
/// assert_eq!(output.as_slice(), &[0, 1, 2, 0, 0, 0, 128, 129, 130, 0, 0, 0]);
/// ```
pub fn apply_mask<T, const C: usize>(
    src: &Image<T, C>,
    mask: &Image<u8, 1>,
    dst: &mut Image<T, C>,
) -> Result<(), ImageError>
where
    T: Copy + Zero,
{
    pixels::iter_pixels_two(src, mask, dst, |src_pixel, msk, dst_pixel| {
        if msk[0] != 0 {
            dst_pixel.copy_from_slice(src_pixel);
        } else {
            dst_pixel.fill(T::zero());
        }
    })
}

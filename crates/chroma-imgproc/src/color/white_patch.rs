use chroma_image::Image;

use crate::error::ImgprocError;
use crate::pixels;

/// Apply the white patch algorithm to an RGB image.
///
/// The brightest value of each channel is assumed to be the reference white, so
/// every channel is rescaled by `255 / max`, clipped to `[0, 255]` and truncated
/// to 8 bits.
///
/// # Arguments
///
/// * `src` - The input RGB image.
/// * `dst` - The output white balanced image.
///
/// # Errors
///
/// * [`ImgprocError::DegenerateChannel`] if the maximum of a channel is zero, in which
///   case `dst` is left untouched. An image without pixels is degenerate as well.
/// * An image size error if `src` and `dst` have different sizes.
///
/// # Example
///
/// ```
/// use chroma_image::{Image, ImageSize};
/// use chroma_imgproc::color::white_patch;
///
/// let image = Image::<u8, 3>::new(
///     ImageSize {
///         width: 2,
///         height: 1,
///     },
///     vec![100, 50, 200, 50, 25, 100],
/// )
/// .unwrap();
///
/// let mut balanced = Image::<u8, 3>::from_size_val(image.size(), 0).unwrap();
///
/// white_patch(&image, &mut balanced).unwrap();
/// assert_eq!(balanced.as_slice(), &[255, 255, 255, 127, 127, 127]);
/// ```
pub fn white_patch<T>(src: &Image<T, 3>, dst: &mut Image<u8, 3>) -> Result<(), ImgprocError>
where
    T: Copy + Into<f32>,
{
    let max = src
        .as_slice()
        .chunks_exact(3)
        .fold([0f32; 3], |mut max, pixel| {
            max.iter_mut()
                .zip(pixel.iter())
                .for_each(|(m, &v)| *m = m.max(v.into()));
            max
        });

    if let Some(channel) = max.iter().position(|&m| m <= 0.0) {
        return Err(ImgprocError::DegenerateChannel(channel));
    }

    let scale = max.map(|m| 255.0 / m);

    pixels::iter_pixels(src, dst, |src_pixel, dst_pixel| {
        dst_pixel
            .iter_mut()
            .zip(src_pixel.iter().zip(scale.iter()))
            .for_each(|(out, (&v, &s))| {
                let v: f32 = v.into();
                *out = (v * s).clamp(0.0, 255.0) as u8;
            });
    })?;

    Ok(())
}

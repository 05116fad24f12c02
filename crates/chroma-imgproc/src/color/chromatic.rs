use chroma_image::Image;

use crate::error::ImgprocError;
use crate::pixels;

/// Convert an RGB image to chromatic coordinates.
///
/// Each channel of a pixel is divided by the sum of the channels of that pixel,
/// which removes the overall brightness and keeps the relative color ratios:
///
/// r = R / (R + G + B), g = G / (R + G + B), b = B / (R + G + B)
///
/// The ratios are scaled to the 8-bit range and truncated, i.e. `255 * r` rounded
/// towards zero. A pixel whose channels sum to zero is divided by one instead,
/// so a black pixel stays black.
///
/// # Arguments
///
/// * `src` - The input RGB image.
/// * `dst` - The output chromatic coordinates image.
///
/// # Errors
///
/// Returns an error if `src` and `dst` have different sizes.
///
/// # Example
///
/// ```
/// use chroma_image::{Image, ImageSize};
/// use chroma_imgproc::color::chromatic_coordinates;
///
/// let image = Image::<u8, 3>::new(
///     ImageSize {
///         width: 2,
///         height: 1,
///     },
///     vec![10, 20, 20, 0, 0, 0],
/// )
/// .unwrap();
///
/// let mut chromatic = Image::<u8, 3>::from_size_val(image.size(), 0).unwrap();
///
/// chromatic_coordinates(&image, &mut chromatic).unwrap();
/// assert_eq!(chromatic.as_slice(), &[51, 102, 102, 0, 0, 0]);
/// ```
pub fn chromatic_coordinates<T>(
    src: &Image<T, 3>,
    dst: &mut Image<u8, 3>,
) -> Result<(), ImgprocError>
where
    T: Copy + Into<f32>,
{
    pixels::iter_pixels(src, dst, |src_pixel, dst_pixel| {
        let rgb: [f32; 3] = [src_pixel[0].into(), src_pixel[1].into(), src_pixel[2].into()];
        let sum = rgb.iter().sum::<f32>();
        let sum = if sum == 0.0 { 1.0 } else { sum };

        dst_pixel
            .iter_mut()
            .zip(rgb.iter())
            .for_each(|(out, &v)| *out = (v / sum * 255.0) as u8);
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use chroma_image::{Image, ImageSize};

    use crate::error::ImgprocError;

    #[test]
    fn test_chromatic_coordinates() -> Result<(), ImgprocError> {
        #[rustfmt::skip]
        let image = Image::<u8, 3>::new(
            ImageSize {
                width: 2,
                height: 2,
            },
            vec![
                255, 0, 0,    100, 100, 100,
                0, 0, 0,      1, 2, 3,
            ],
        )?;

        let mut chromatic = Image::<u8, 3>::from_size_val(image.size(), 7)?;
        super::chromatic_coordinates(&image, &mut chromatic)?;

        #[rustfmt::skip]
        let expected = [
            255, 0, 0,    85, 85, 85,
            0, 0, 0,      42, 85, 127,
        ];
        assert_eq!(chromatic.as_slice(), &expected);

        Ok(())
    }

    #[test]
    fn test_chromatic_coordinates_ignores_brightness() -> Result<(), ImgprocError> {
        let size = ImageSize {
            width: 2,
            height: 1,
        };
        let image = Image::<f32, 3>::new(size, vec![0.1, 0.2, 0.7, 10.0, 20.0, 70.0])?;

        let mut chromatic = Image::<u8, 3>::from_size_val(size, 0)?;
        super::chromatic_coordinates(&image, &mut chromatic)?;

        let pixels = chromatic.as_slice();
        for (a, b) in pixels[..3].iter().zip(pixels[3..].iter()) {
            assert!((*a as i16 - *b as i16).abs() <= 1);
        }

        Ok(())
    }

    #[test]
    fn test_chromatic_coordinates_size_mismatch() -> Result<(), ImgprocError> {
        let image = Image::<u8, 3>::from_size_val(
            ImageSize {
                width: 2,
                height: 2,
            },
            0,
        )?;
        let mut chromatic = Image::<u8, 3>::from_size_val(
            ImageSize {
                width: 3,
                height: 2,
            },
            0,
        )?;

        assert!(matches!(
            super::chromatic_coordinates(&image, &mut chromatic),
            Err(ImgprocError::Image(_))
        ));

        Ok(())
    }
}

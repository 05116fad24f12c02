use chroma_image::{Image, ImageError};

/// Apply a function to each pixel pair of two images of the same size.
///
/// The closure receives the channel values of the source pixel and the
/// channel values of the destination pixel at the same position.
///
/// # Errors
///
/// Returns [`ImageError::InvalidImageSize`] if `src` and `dst` have different sizes.
pub fn iter_pixels<T1, const C1: usize, T2, const C2: usize>(
    src: &Image<T1, C1>,
    dst: &mut Image<T2, C2>,
    mut f: impl FnMut(&[T1], &mut [T2]),
) -> Result<(), ImageError> {
    if src.size() != dst.size() {
        return Err(ImageError::InvalidImageSize(
            src.cols(),
            src.rows(),
            dst.cols(),
            dst.rows(),
        ));
    }

    src.as_slice()
        .chunks_exact(C1)
        .zip(dst.as_slice_mut().chunks_exact_mut(C2))
        .for_each(|(src_pixel, dst_pixel)| f(src_pixel, dst_pixel));

    Ok(())
}

/// Apply a function to each pixel triple of three images of the same size.
///
/// # Errors
///
/// Returns [`ImageError::InvalidImageSize`] if any of the sizes differ.
pub fn iter_pixels_two<T1, const C1: usize, T2, const C2: usize, T3, const C3: usize>(
    src1: &Image<T1, C1>,
    src2: &Image<T2, C2>,
    dst: &mut Image<T3, C3>,
    mut f: impl FnMut(&[T1], &[T2], &mut [T3]),
) -> Result<(), ImageError> {
    for size in [src2.size(), dst.size()] {
        if src1.size() != size {
            return Err(ImageError::InvalidImageSize(
                src1.cols(),
                src1.rows(),
                size.width,
                size.height,
            ));
        }
    }

    src1.as_slice()
        .chunks_exact(C1)
        .zip(src2.as_slice().chunks_exact(C2))
        .zip(dst.as_slice_mut().chunks_exact_mut(C3))
        .for_each(|((src1_pixel, src2_pixel), dst_pixel)| f(src1_pixel, src2_pixel, dst_pixel));

    Ok(())
}

#[cfg(test)]
mod tests {
    use chroma_image::{Image, ImageError, ImageSize};

    #[test]
    fn test_iter_pixels() -> Result<(), ImageError> {
        let size = ImageSize {
            width: 2,
            height: 1,
        };
        let src = Image::<u8, 3>::new(size, vec![1, 2, 3, 4, 5, 6])?;
        let mut dst = Image::<u16, 1>::from_size_val(size, 0)?;

        super::iter_pixels(&src, &mut dst, |s, d| {
            d[0] = s.iter().map(|&v| v as u16).sum();
        })?;

        assert_eq!(dst.as_slice(), &[6, 15]);
        Ok(())
    }

    #[test]
    fn test_iter_pixels_size_mismatch() -> Result<(), ImageError> {
        let src = Image::<u8, 1>::from_size_val(
            ImageSize {
                width: 2,
                height: 2,
            },
            0,
        )?;
        let mut dst = Image::<u8, 1>::from_size_val(
            ImageSize {
                width: 2,
                height: 3,
            },
            0,
        )?;

        let res = super::iter_pixels(&src, &mut dst, |_, _| {});
        assert_eq!(res, Err(ImageError::InvalidImageSize(2, 2, 2, 3)));
        Ok(())
    }
}

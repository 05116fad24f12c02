use std::path::Path;

use chroma_image::{Image, ImageSize};

use crate::error::IoError;

/// Reads an RGB8 image from the given file path.
///
/// The method reads any image format supported by the `image` crate and converts
/// the result to 8-bit RGB.
///
/// # Arguments
///
/// * `file_path` - The path to a valid image file.
///
/// # Returns
///
/// An image containing the RGB8 image data.
///
/// # Errors
///
/// Returns [`IoError::FileDoesNotExist`] if the path does not exist, or a decoding
/// error if the file is not a supported image.
pub fn read_image_any_rgb8(file_path: impl AsRef<Path>) -> Result<Image<u8, 3>, IoError> {
    let file_path = file_path.as_ref().to_owned();

    // verify the file exists
    if !file_path.exists() {
        return Err(IoError::FileDoesNotExist(file_path.to_path_buf()));
    }

    let img = image::ImageReader::open(&file_path)?
        .with_guessed_format()?
        .decode()?;

    let size = ImageSize {
        width: img.width() as usize,
        height: img.height() as usize,
    };

    Ok(Image::new(size, img.into_rgb8().into_raw())?)
}

/// Writes an RGB8 image to the given file path as PNG.
///
/// # Arguments
///
/// * `file_path` - The path to the PNG image.
/// * `image` - The image to write.
pub fn write_image_png_rgb8(
    file_path: impl AsRef<Path>,
    image: &Image<u8, 3>,
) -> Result<(), IoError> {
    image::save_buffer_with_format(
        file_path,
        image.as_slice(),
        image.width() as u32,
        image.height() as u32,
        image::ExtendedColorType::Rgb8,
        image::ImageFormat::Png,
    )?;
    Ok(())
}

/// Writes a grayscale image, e.g. a mask, to the given file path as PNG.
///
/// # Arguments
///
/// * `file_path` - The path to the PNG image.
/// * `image` - The image to write.
pub fn write_image_png_gray8(
    file_path: impl AsRef<Path>,
    image: &Image<u8, 1>,
) -> Result<(), IoError> {
    image::save_buffer_with_format(
        file_path,
        image.as_slice(),
        image.width() as u32,
        image.height() as u32,
        image::ExtendedColorType::L8,
        image::ImageFormat::Png,
    )?;
    Ok(())
}

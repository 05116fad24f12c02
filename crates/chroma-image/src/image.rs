use crate::error::ImageError;

/// Image size in pixels
///
/// A struct to represent the size of an image in pixels.
///
/// # Examples
///
/// ```
/// use chroma_image::ImageSize;
///
/// let image_size = ImageSize {
///   width: 10,
///   height: 20,
/// };
///
/// assert_eq!(image_size.width, 10);
/// assert_eq!(image_size.height, 20);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ImageSize {
    /// Width of the image in pixels
    pub width: usize,
    /// Height of the image in pixels
    pub height: usize,
}

impl std::fmt::Display for ImageSize {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "ImageSize {{ width: {}, height: {} }}",
            self.width, self.height
        )
    }
}

impl From<ImageSize> for [u32; 2] {
    fn from(size: ImageSize) -> Self {
        [size.width as u32, size.height as u32]
    }
}

/// Represents an image with pixel data.
///
/// The pixel data is stored row major and interleaved, i.e. with shape (H, W, C),
/// where H is the height of the image, W the width and C the number of channels.
#[derive(Clone, Debug, PartialEq)]
pub struct Image<T, const C: usize> {
    size: ImageSize,
    data: Vec<T>,
}

impl<T, const C: usize> Image<T, C> {
    /// Create a new image from pixel data.
    ///
    /// # Arguments
    ///
    /// * `size` - The size of the image in pixels.
    /// * `data` - The pixel data of the image.
    ///
    /// # Returns
    ///
    /// A new image with the given pixel data.
    ///
    /// # Errors
    ///
    /// If the length of the pixel data does not match the image size, an error is returned.
    /// If the number of elements of the image overflows `usize`, an error is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use chroma_image::{Image, ImageSize};
    ///
    /// let image = Image::<u8, 3>::new(
    ///    ImageSize {
    ///       width: 10,
    ///       height: 20,
    ///    },
    ///    vec![0u8; 10 * 20 * 3],
    /// ).unwrap();
    ///
    /// assert_eq!(image.size().width, 10);
    /// assert_eq!(image.size().height, 20);
    /// assert_eq!(image.num_channels(), 3);
    /// ```
    pub fn new(size: ImageSize, data: Vec<T>) -> Result<Self, ImageError> {
        let expected = num_elements::<C>(size)?;
        if data.len() != expected {
            return Err(ImageError::InvalidChannelShape(data.len(), expected));
        }

        Ok(Self { size, data })
    }

    /// Create a new image with the given size filled with a value.
    ///
    /// # Examples
    ///
    /// ```
    /// use chroma_image::{Image, ImageSize};
    ///
    /// let image = Image::<u8, 3>::from_size_val(
    ///   ImageSize {
    ///     width: 10,
    ///     height: 20,
    ///   }, 0u8).unwrap();
    ///
    /// assert_eq!(image.size().width, 10);
    /// assert_eq!(image.size().height, 20);
    /// assert_eq!(image.num_channels(), 3);
    /// ```
    pub fn from_size_val(size: ImageSize, val: T) -> Result<Self, ImageError>
    where
        T: Clone,
    {
        let data = vec![val; num_elements::<C>(size)?];
        Image::new(size, data)
    }

    /// Get the size of the image in pixels.
    pub fn size(&self) -> ImageSize {
        self.size
    }

    /// Get the number of columns of the image.
    pub fn cols(&self) -> usize {
        self.size.width
    }

    /// Get the number of rows of the image.
    pub fn rows(&self) -> usize {
        self.size.height
    }

    /// Get the width of the image in pixels.
    pub fn width(&self) -> usize {
        self.size.width
    }

    /// Get the height of the image in pixels.
    pub fn height(&self) -> usize {
        self.size.height
    }

    /// Get the number of channels in the image.
    pub fn num_channels(&self) -> usize {
        C
    }

    /// Get the pixel data as a flat slice in (H, W, C) order.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Get the pixel data as a flat mutable slice in (H, W, C) order.
    pub fn as_slice_mut(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Consume the image and return its pixel data.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Copy a rectangular region of the image into a new image.
    ///
    /// # Arguments
    ///
    /// * `x` - The x-coordinate of the top-left corner of the region.
    /// * `y` - The y-coordinate of the top-left corner of the region.
    /// * `size` - The size of the region.
    ///
    /// # Returns
    ///
    /// The cropped image, or `None` if the region does not fit entirely inside the image.
    ///
    /// # Examples
    ///
    /// ```
    /// use chroma_image::{Image, ImageSize};
    ///
    /// let image = Image::<_, 1>::new(ImageSize { width: 4, height: 4 }, vec![
    ///     0u8, 1, 2, 3,
    ///     4u8, 5, 6, 7,
    ///     8u8, 9, 10, 11,
    ///     12u8, 13, 14, 15
    /// ]).unwrap();
    ///
    /// let cropped = image.crop(1, 1, ImageSize { width: 2, height: 2 }).unwrap();
    /// assert_eq!(cropped.as_slice(), &[5u8, 6, 9, 10]);
    ///
    /// assert!(image.crop(3, 0, ImageSize { width: 2, height: 2 }).is_none());
    /// ```
    pub fn crop(&self, x: usize, y: usize, size: ImageSize) -> Option<Image<T, C>>
    where
        T: Copy,
    {
        if x.checked_add(size.width)? > self.cols() || y.checked_add(size.height)? > self.rows() {
            return None;
        }

        let row_len = size.width * C;
        let mut data = Vec::with_capacity(row_len * size.height);
        for row in y..y + size.height {
            // get the slice at the left border of the region
            let offset = (row * self.cols() + x) * C;
            data.extend_from_slice(&self.data[offset..offset + row_len]);
        }

        Some(Image { size, data })
    }
}

/// Number of elements of an image of the given size, or an error if it overflows.
fn num_elements<const C: usize>(size: ImageSize) -> Result<usize, ImageError> {
    size.width
        .checked_mul(size.height)
        .and_then(|n| n.checked_mul(C))
        .ok_or(ImageError::ImageSizeOverflow(size.width, size.height, C))
}

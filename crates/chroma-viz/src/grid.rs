use chroma_image::{Image, ImageSize};

use crate::error::VizError;

/// Number of rows and columns of the smallest square grid holding `num_windows` cells.
///
/// # Example
///
/// ```
/// use chroma_viz::grid_size;
///
/// assert_eq!(grid_size(0), 0);
/// assert_eq!(grid_size(4), 2);
/// assert_eq!(grid_size(5), 3);
/// ```
pub fn grid_size(num_windows: usize) -> usize {
    let mut size = 0;
    while size * size < num_windows {
        size += 1;
    }
    size
}

/// Lay out windows on a square grid as a single image.
///
/// The windows fill the grid in raster order, each cell separated from its
/// neighbours and from the border by `padding` pixels. Cells without a window keep
/// the background color.
///
/// # Arguments
///
/// * `windows` - The windows to lay out. All must have the same size.
/// * `padding` - The number of pixels between cells.
/// * `background` - The color of the padding and of the empty cells.
///
/// # Returns
///
/// The mosaic image.
///
/// # Errors
///
/// * [`VizError::EmptyWindowList`] if there are no windows.
/// * [`VizError::MismatchedWindowSize`] if the windows differ in size.
///
/// # Example
///
/// ```
/// use chroma_image::{Image, ImageSize};
/// use chroma_viz::window_grid;
///
/// let size = ImageSize { width: 2, height: 2 };
/// let windows = vec![Image::<u8, 3>::from_size_val(size, 255).unwrap(); 3];
///
/// let mosaic = window_grid(&windows, 1, [0, 0, 0]).unwrap();
///
/// assert_eq!(mosaic.size(), ImageSize { width: 7, height: 7 });
/// ```
pub fn window_grid<'a, I>(
    windows: I,
    padding: usize,
    background: [u8; 3],
) -> Result<Image<u8, 3>, VizError>
where
    I: IntoIterator<Item = &'a Image<u8, 3>>,
{
    let windows = windows.into_iter().collect::<Vec<_>>();

    let cell_size = match windows.first() {
        Some(first) => first.size(),
        None => return Err(VizError::EmptyWindowList),
    };

    if let Some((index, window)) = windows
        .iter()
        .enumerate()
        .find(|(_, w)| w.size() != cell_size)
    {
        return Err(VizError::MismatchedWindowSize {
            index,
            expected: cell_size,
            found: window.size(),
        });
    }

    let grid = grid_size(windows.len());
    let size = ImageSize {
        width: grid * (cell_size.width + padding) + padding,
        height: grid * (cell_size.height + padding) + padding,
    };

    let data = (0..size.width * size.height)
        .flat_map(|_| background)
        .collect();
    let mut mosaic = Image::<u8, 3>::new(size, data)?;

    let row_stride = size.width * 3;
    let window_stride = cell_size.width * 3;
    let mosaic_slice = mosaic.as_slice_mut();

    for (i, window) in windows.iter().enumerate() {
        let x0 = padding + (i % grid) * (cell_size.width + padding);
        let y0 = padding + (i / grid) * (cell_size.height + padding);

        for (r, window_row) in window.as_slice().chunks_exact(window_stride).enumerate() {
            let offset = (y0 + r) * row_stride + x0 * 3;
            mosaic_slice[offset..offset + window_stride].copy_from_slice(window_row);
        }
    }

    log::debug!(
        "Window grid of {} windows: {}x{} cells, image {}",
        windows.len(),
        grid,
        grid,
        size
    );

    Ok(mosaic)
}

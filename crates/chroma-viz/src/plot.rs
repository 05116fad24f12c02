use chroma_image::Image;

use crate::error::VizError;
use crate::grid::window_grid;

/// The entity path used when no title is given.
pub const DEFAULT_TITLE: &str = "Sliding Windows";

const PADDING: usize = 2;
const BACKGROUND: [u8; 3] = [255, 255, 255];

/// Log a grid of windows to a rerun recording stream.
///
/// The windows are laid out with [`window_grid`] on a white background and logged
/// as a single RGB image under the entity path `title`, or [`DEFAULT_TITLE`] if
/// no title is given.
///
/// # Arguments
///
/// * `rec` - The recording stream.
/// * `windows` - The windows to plot. All must have the same size.
/// * `title` - The entity path of the image.
pub fn plot_windows<'a, I>(
    rec: &rerun::RecordingStream,
    windows: I,
    title: Option<&str>,
) -> Result<(), VizError>
where
    I: IntoIterator<Item = &'a Image<u8, 3>>,
{
    let mosaic = window_grid(windows, PADDING, BACKGROUND)?;

    rec.log(
        title.unwrap_or(DEFAULT_TITLE),
        &rerun::Image::from_elements(
            mosaic.as_slice(),
            mosaic.size().into(),
            rerun::ColorModel::RGB,
        ),
    )?;

    Ok(())
}

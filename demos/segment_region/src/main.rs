use argh::FromArgs;
use std::path::PathBuf;

use chroma::image::ImageSize;
use chroma::imgproc::segment::{segment_region, Region, SegmentConfig};
use chroma::io::functional as F;
use chroma::viz;

#[derive(FromArgs)]
/// Segment the pixels of an image with the typical color of a region and log them to Rerun
struct Args {
    /// path to an input image
    #[argh(option, short = 'i')]
    image_path: PathBuf,

    /// first column of the region
    #[argh(option)]
    x_start: usize,

    /// one past the last column of the region
    #[argh(option)]
    x_end: usize,

    /// first row of the region
    #[argh(option)]
    y_start: usize,

    /// one past the last row of the region
    #[argh(option)]
    y_end: usize,

    /// width and height of the sliding window
    #[argh(option, short = 'w', default = "50")]
    window_size: usize,

    /// step between two consecutive windows
    #[argh(option, short = 's', default = "25")]
    step_size: usize,

    /// half width of the color bands in standard deviations
    #[argh(option, short = 'k', default = "2.0")]
    num_std: f64,

    /// directory to write the mask and the segmented image to
    #[argh(option, short = 'o')]
    output_dir: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args: Args = argh::from_env();

    // read the image
    let rgb = F::read_image_any_rgb8(&args.image_path)?;
    log::info!("Read image {:?} of size {}", args.image_path, rgb.size());

    let region = Region::new(args.x_start, args.x_end, args.y_start, args.y_end);
    let config = SegmentConfig::default()
        .with_window_size(ImageSize {
            width: args.window_size,
            height: args.window_size,
        })
        .with_step_size(args.step_size)
        .with_num_std(args.num_std);

    // segment the image with the color statistics of the region
    let segmentation = segment_region(&rgb, &region, &config)?;

    log::info!(
        "Region {} produced {} windows",
        region,
        segmentation.windows.len()
    );
    for (c, band) in segmentation.bands.iter().enumerate() {
        log::info!("Channel {}: [{:.2}, {:.2}]", c, band.low, band.high);
    }

    let num_selected = segmentation
        .mask
        .as_slice()
        .iter()
        .filter(|&&m| m != 0)
        .count();
    log::info!(
        "Selected {} of {} pixels",
        num_selected,
        rgb.width() * rgb.height()
    );

    if let Some(output_dir) = &args.output_dir {
        std::fs::create_dir_all(output_dir)?;
        F::write_image_png_gray8(output_dir.join("mask.png"), &segmentation.mask)?;
        F::write_image_png_rgb8(output_dir.join("segmented.png"), &segmentation.segmented)?;
        log::info!("Wrote mask and segmented image to {:?}", output_dir);
    }

    // create a Rerun recording stream
    let rec = rerun::RecordingStreamBuilder::new("Chroma App").spawn()?;

    rec.log(
        "rgb",
        &rerun::Image::from_elements(rgb.as_slice(), rgb.size().into(), rerun::ColorModel::RGB),
    )?;

    rec.log(
        "mask",
        &rerun::Image::from_elements(
            segmentation.mask.as_slice(),
            segmentation.mask.size().into(),
            rerun::ColorModel::L,
        ),
    )?;

    rec.log(
        "segmented",
        &rerun::Image::from_elements(
            segmentation.segmented.as_slice(),
            segmentation.segmented.size().into(),
            rerun::ColorModel::RGB,
        ),
    )?;

    viz::plot_windows(
        &rec,
        segmentation.windows.iter().map(|w| &w.image),
        None,
    )?;

    Ok(())
}

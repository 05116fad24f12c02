use argh::FromArgs;
use std::path::PathBuf;

use chroma::image::Image;
use chroma::imgproc::color;
use chroma::io::functional as F;

#[derive(FromArgs)]
/// Apply chromatic coordinates and white patch correction to an image
struct Args {
    /// path to an input image
    #[argh(option, short = 'i')]
    image_path: PathBuf,

    /// directory to write the corrected images to
    #[argh(option, short = 'o')]
    output_dir: Option<PathBuf>,

    /// log the images to Rerun
    #[argh(switch)]
    rerun: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args: Args = argh::from_env();

    // read the image
    let rgb = F::read_image_any_rgb8(&args.image_path)?;
    log::info!("Read image {:?} of size {}", args.image_path, rgb.size());

    // normalize each pixel by the sum of its channels
    let mut chromatic = Image::<u8, 3>::from_size_val(rgb.size(), 0)?;
    color::chromatic_coordinates(&rgb, &mut chromatic)?;

    // scale each channel so that its brightest value becomes white
    let mut white_patch = Image::<u8, 3>::from_size_val(rgb.size(), 0)?;
    color::white_patch(&rgb, &mut white_patch)?;

    if let Some(output_dir) = &args.output_dir {
        std::fs::create_dir_all(output_dir)?;
        F::write_image_png_rgb8(output_dir.join("chromatic.png"), &chromatic)?;
        F::write_image_png_rgb8(output_dir.join("white_patch.png"), &white_patch)?;
        log::info!("Wrote corrected images to {:?}", output_dir);
    }

    if args.rerun {
        // create a Rerun recording stream
        let rec = rerun::RecordingStreamBuilder::new("Chroma App").spawn()?;

        for (name, img) in [
            ("rgb", &rgb),
            ("chromatic", &chromatic),
            ("white_patch", &white_patch),
        ] {
            rec.log(
                name,
                &rerun::Image::from_elements(
                    img.as_slice(),
                    img.size().into(),
                    rerun::ColorModel::RGB,
                ),
            )?;
        }
    }

    Ok(())
}

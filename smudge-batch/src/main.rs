use std::path::PathBuf;
use std::time::Instant;

use argh::FromArgs;

use smudge::image::PlanarRgb;
use smudge::imgproc::filter::{BlurConfig, BoundaryPolicy};
use smudge::imgproc::pipeline::blur_planar;
use smudge::io::functional::read_image_any_rgb8;
use smudge::io::png::write_image_png_rgb8;

mod batch;
use batch::MirroredDir;

#[derive(FromArgs)]
/// Blur every image of a directory into a mirrored output directory
struct Args {
    /// the directory with the images to process
    #[argh(option)]
    input: PathBuf,

    /// the directory to write the blurred images to
    #[argh(option)]
    output: PathBuf,

    /// the side length of the averaging kernel, odd (default 5)
    #[argh(option, default = "5")]
    kernel_size: usize,

    /// copy the source borders instead of leaving them at zero
    #[argh(switch)]
    copy_borders: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Args = argh::from_env();

    env_logger::init();

    if !args.input.is_dir() {
        return Err(format!("input directory does not exist: {}", args.input.display()).into());
    }

    if !args.output.exists() {
        std::fs::create_dir_all(&args.output)?;
    } else if !args.output.is_dir() {
        return Err(format!(
            "output path exists and is not a directory: {}",
            args.output.display()
        )
        .into());
    }

    let boundary = if args.copy_borders {
        BoundaryPolicy::CopySource
    } else {
        BoundaryPolicy::ZeroFill
    };
    let config = BlurConfig::new(args.kernel_size).with_boundary(boundary);

    let start_time = Instant::now();

    for pair in MirroredDir::new(&args.input, &args.output) {
        let (input_path, output_path) = pair?;

        log::info!("Processing image: {}", input_path.display());

        let image = read_image_any_rgb8(&input_path)?;
        let mut blurred = PlanarRgb::from_size_val(image.size(), 0);
        blur_planar(&image, &mut blurred, &config)?;

        // outputs are always PNG encoded, the file name mirrors the input
        write_image_png_rgb8(&output_path, &blurred)?;
    }

    println!("Elapsed time: {} ms", start_time.elapsed().as_millis());

    Ok(())
}

use std::path::Path;

use smudge_image::{ImageSize, PlanarRgb};

use crate::error::IoError;

/// Reads an image from the given file path and normalizes it to RGB8.
///
/// The method tries to read from any image format supported by the image
/// crate. Grayscale and alpha sources are converted to three channels here,
/// so the pipeline only ever sees RGB planes.
///
/// # Arguments
///
/// * `file_path` - The path to a valid image file.
///
/// # Returns
///
/// A planar RGB image with three channels (rgb8).
pub fn read_image_any_rgb8(file_path: impl AsRef<Path>) -> Result<PlanarRgb, IoError> {
    let file_path = file_path.as_ref().to_owned();

    // verify the file exists
    if !file_path.exists() {
        return Err(IoError::FileDoesNotExist(file_path.to_path_buf()));
    }

    // open the file and map it to memory
    let file = std::fs::File::open(file_path)?;
    let mmap = unsafe { memmap2::Mmap::map(&file)? };

    // decode the data directly from memory
    let img = image::ImageReader::new(std::io::Cursor::new(&mmap))
        .with_guessed_format()?
        .decode()?;

    let size = ImageSize {
        width: img.width() as usize,
        height: img.height() as usize,
    };

    let rgb = img.into_rgb8();

    Ok(PlanarRgb::from_interleaved(size, rgb.as_raw())?)
}

use rayon::prelude::*;

use smudge_image::{ImageSize, PlanarRgb};

use crate::filter::{box_blur, BlurConfig, FilterError};

/// Blur each channel of a planar RGB image independently.
///
/// The three channel blurs have no data dependency and run in parallel;
/// every plane pair is disjoint memory owned by its own invocation.
///
/// # Arguments
///
/// * `src` - The source image.
/// * `dst` - The destination image, same size as the source.
/// * `config` - The kernel size and boundary policy.
///
/// PRECONDITION: `src` and `dst` must have the same size.
pub fn blur_planar(
    src: &PlanarRgb,
    dst: &mut PlanarRgb,
    config: &BlurConfig,
) -> Result<(), FilterError> {
    if src.size() != dst.size() {
        return Err(FilterError::SizeMismatch(
            src.width(),
            src.height(),
            dst.width(),
            dst.height(),
        ));
    }

    src.planes()
        .par_iter()
        .zip(dst.planes_mut().par_iter_mut())
        .try_for_each(|(src_plane, dst_plane)| box_blur(src_plane, dst_plane, config))
}

/// Blur an interleaved RGB byte buffer (3 bytes per pixel).
///
/// Deinterleaves into planes, blurs each channel and re-interleaves in the
/// same channel order. This entry point needs no filesystem access; decode
/// and encode of file bytes stay with the io collaborators.
///
/// # Errors
///
/// Fails if the buffer length does not match the image size, or on any
/// filter precondition violation.
pub fn blur_interleaved(
    size: ImageSize,
    data: &[u8],
    config: &BlurConfig,
) -> Result<Vec<u8>, FilterError> {
    let src = PlanarRgb::from_interleaved(size, data)?;
    let mut dst = PlanarRgb::from_size_val(size, 0);

    blur_planar(&src, &mut dst, config)?;

    Ok(dst.to_interleaved())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::BoundaryPolicy;
    use smudge_image::Plane;

    #[test]
    fn test_blur_planar_smoke() -> Result<(), FilterError> {
        let size = ImageSize {
            width: 7,
            height: 7,
        };
        let src = PlanarRgb::from_size_val(size, 10);
        let mut dst = PlanarRgb::from_size_val(size, 0);

        blur_planar(&src, &mut dst, &BlurConfig::default())?;

        for channel in 0..PlanarRgb::NUM_CHANNELS {
            assert_eq!(dst.plane(channel)?.get(3, 3), Some(&10));
            assert_eq!(dst.plane(channel)?.get(0, 0), Some(&0));
        }
        Ok(())
    }

    #[test]
    fn test_blur_planar_size_mismatch() {
        let src = PlanarRgb::from_size_val(
            ImageSize {
                width: 7,
                height: 7,
            },
            0,
        );
        let mut dst = PlanarRgb::from_size_val(
            ImageSize {
                width: 6,
                height: 7,
            },
            0,
        );

        let result = blur_planar(&src, &mut dst, &BlurConfig::default());
        assert_eq!(result, Err(FilterError::SizeMismatch(7, 7, 6, 7)));
    }

    #[test]
    fn test_channel_independence() -> Result<(), FilterError> {
        let size = ImageSize {
            width: 7,
            height: 7,
        };
        let red: Vec<u8> = (0..49).map(|x| (x * 3) as u8).collect();

        let zeroed = PlanarRgb::new([
            Plane::new(size, red.clone())?,
            Plane::from_size_val(size, 0),
            Plane::from_size_val(size, 0),
        ])?;
        let saturated = PlanarRgb::new([
            Plane::new(size, red)?,
            Plane::from_size_val(size, 255),
            Plane::from_size_val(size, 255),
        ])?;

        let mut dst_zeroed = PlanarRgb::from_size_val(size, 0);
        let mut dst_saturated = PlanarRgb::from_size_val(size, 0);

        blur_planar(&zeroed, &mut dst_zeroed, &BlurConfig::default())?;
        blur_planar(&saturated, &mut dst_saturated, &BlurConfig::default())?;

        assert_eq!(dst_zeroed.plane(0)?, dst_saturated.plane(0)?);
        Ok(())
    }

    #[test]
    fn test_blur_interleaved() -> Result<(), FilterError> {
        let size = ImageSize {
            width: 7,
            height: 7,
        };
        // every pixel is (10, 20, 30)
        let data: Vec<u8> = (0..49).flat_map(|_| [10u8, 20, 30]).collect();

        let blurred = blur_interleaved(size, &data, &BlurConfig::default())?;
        assert_eq!(blurred.len(), data.len());

        // interior pixel keeps the channel means, border pixels are zero
        let center = (3 * 7 + 3) * 3;
        assert_eq!(&blurred[center..center + 3], &[10, 20, 30]);
        assert_eq!(&blurred[0..3], &[0, 0, 0]);

        Ok(())
    }

    #[test]
    fn test_blur_interleaved_copy_source() -> Result<(), FilterError> {
        let size = ImageSize {
            width: 7,
            height: 7,
        };
        let data: Vec<u8> = (0..49).flat_map(|_| [10u8, 20, 30]).collect();

        let config = BlurConfig::default().with_boundary(BoundaryPolicy::CopySource);
        let blurred = blur_interleaved(size, &data, &config)?;

        // uniform input with copied borders reproduces the input exactly
        assert_eq!(blurred, data);
        Ok(())
    }

    #[test]
    fn test_blur_interleaved_bad_length() {
        let size = ImageSize {
            width: 7,
            height: 7,
        };
        let result = blur_interleaved(size, &[0u8; 10], &BlurConfig::default());
        assert!(result.is_err());
    }
}

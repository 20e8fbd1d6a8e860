use smudge_image::{ImageError, Plane};
use thiserror::Error;

/// Errors that can occur while filtering.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum FilterError {
    /// The kernel size is not a positive odd number.
    #[error("kernel size must be a positive odd number, got {0}")]
    InvalidKernelSize(usize),

    /// The kernel does not fit inside the image.
    #[error("kernel size {kernel_size} exceeds the image dimensions ({width}x{height})")]
    KernelExceedsImage {
        /// The offending kernel size.
        kernel_size: usize,
        /// Width of the image in pixels.
        width: usize,
        /// Height of the image in pixels.
        height: usize,
    },

    /// Source and destination sizes do not match.
    #[error("source and destination size mismatch ({0}x{1} vs {2}x{3})")]
    SizeMismatch(usize, usize, usize, usize),

    /// Error from the underlying image type.
    #[error(transparent)]
    Image(#[from] ImageError),
}

/// How output samples outside the filtered range are produced.
///
/// The blur only writes averaged samples in the range reachable by the
/// kernel center; the remaining border follows this policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BoundaryPolicy {
    /// Leave the border at zero.
    #[default]
    ZeroFill,

    /// Copy the source sample at the same location.
    CopySource,
}

/// Box blur configuration.
///
/// # Examples
///
/// ```
/// use smudge_imgproc::filter::{BlurConfig, BoundaryPolicy};
///
/// let config = BlurConfig::default();
/// assert_eq!(config.kernel_size, 5);
/// assert_eq!(config.boundary, BoundaryPolicy::ZeroFill);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlurConfig {
    /// Side length of the square averaging kernel. Must be odd.
    pub kernel_size: usize,
    /// Policy for the unfiltered border.
    pub boundary: BoundaryPolicy,
}

impl Default for BlurConfig {
    fn default() -> Self {
        Self {
            kernel_size: 5,
            boundary: BoundaryPolicy::ZeroFill,
        }
    }
}

impl BlurConfig {
    /// Create a configuration with the given kernel size and the default
    /// boundary policy.
    pub fn new(kernel_size: usize) -> Self {
        Self {
            kernel_size,
            ..Default::default()
        }
    }

    /// Replace the boundary policy.
    pub fn with_boundary(self, boundary: BoundaryPolicy) -> Self {
        Self { boundary, ..self }
    }

    /// Half-width of the kernel, `kernel_size / 2`.
    pub fn padding(&self) -> usize {
        self.kernel_size / 2
    }
}

/// Blur a single channel plane using a box blur filter.
///
/// Each written output sample is the truncated integer mean of the
/// `k x k` window centered on it, with `k = config.kernel_size`. The write
/// range covers rows `pad..=rows - pad` and columns `pad..=cols - pad`
/// inclusive, with `pad = k / 2` — one row and one column past the last
/// center whose window is fully inside the grid; window reads at that far
/// edge clamp to the last row/column. Samples outside the write range
/// follow `config.boundary`.
///
/// # Arguments
///
/// * `src` - The source plane.
/// * `dst` - The destination plane, same size as the source.
/// * `config` - The kernel size and boundary policy.
///
/// # Errors
///
/// Fails before any write if the sizes differ, the kernel size is even or
/// zero, or the kernel exceeds an image dimension.
pub fn box_blur(src: &Plane, dst: &mut Plane, config: &BlurConfig) -> Result<(), FilterError> {
    if src.size() != dst.size() {
        return Err(FilterError::SizeMismatch(
            src.cols(),
            src.rows(),
            dst.cols(),
            dst.rows(),
        ));
    }

    let kernel_size = config.kernel_size;
    if kernel_size == 0 || kernel_size % 2 == 0 {
        return Err(FilterError::InvalidKernelSize(kernel_size));
    }

    let (rows, cols) = (src.rows(), src.cols());
    if kernel_size > rows || kernel_size > cols {
        return Err(FilterError::KernelExceedsImage {
            kernel_size,
            width: cols,
            height: rows,
        });
    }

    let pad = kernel_size / 2;
    let norm = (kernel_size * kernel_size) as u32;
    let src_data = src.as_slice();
    let dst_data = dst.as_slice_mut();

    match config.boundary {
        BoundaryPolicy::ZeroFill => dst_data.fill(0),
        BoundaryPolicy::CopySource => dst_data.copy_from_slice(src_data),
    }

    for r in pad..=rows - pad {
        for c in pad..=cols - pad {
            // full accumulation before the division; u32 holds
            // kernel_size^2 * 255
            let mut sum = 0u32;
            for dr in 0..kernel_size {
                // at r == rows - pad the window overhangs the grid by one
                // row; reads clamp to the last row (same for columns)
                let rr = (r - pad + dr).min(rows - 1);
                let row_offset = rr * cols;
                for dc in 0..kernel_size {
                    let cc = (c - pad + dc).min(cols - 1);
                    sum += u32::from(src_data[row_offset + cc]);
                }
            }
            dst_data[r * cols + c] = (sum / norm) as u8;
        }
    }

    Ok(())
}

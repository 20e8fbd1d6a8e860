use crate::error::ImageError;

/// Image size in pixels
///
/// A struct to represent the size of an image in pixels.
///
/// # Examples
///
/// ```
/// use smudge_image::ImageSize;
///
/// let image_size = ImageSize {
///   width: 10,
///   height: 20,
/// };
///
/// assert_eq!(image_size.width, 10);
/// assert_eq!(image_size.height, 20);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
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

impl From<[usize; 2]> for ImageSize {
    fn from(size: [usize; 2]) -> Self {
        ImageSize {
            width: size[0],
            height: size[1],
        }
    }
}

impl From<ImageSize> for [u32; 2] {
    fn from(size: ImageSize) -> Self {
        [size.width as u32, size.height as u32]
    }
}

/// A single color channel stored as a row-major grid of 8-bit samples.
///
/// The grid is rectangular by construction: the backing buffer has exactly
/// `height * width` samples and cannot be resized after creation.
///
/// # Examples
///
/// ```
/// use smudge_image::{ImageSize, Plane};
///
/// let plane = Plane::from_size_val(
///   ImageSize {
///     width: 10,
///     height: 20,
/// }, 0u8);
///
/// assert_eq!(plane.size().width, 10);
/// assert_eq!(plane.size().height, 20);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Plane {
    size: ImageSize,
    data: Vec<u8>,
}

impl Plane {
    /// Create a new plane from sample data.
    ///
    /// # Arguments
    ///
    /// * `size` - The size of the plane in pixels.
    /// * `data` - The row-major sample data of the plane.
    ///
    /// # Errors
    ///
    /// If the length of the data does not match the plane size, an error is
    /// returned.
    pub fn new(size: ImageSize, data: Vec<u8>) -> Result<Self, ImageError> {
        if data.len() != size.width * size.height {
            return Err(ImageError::InvalidChannelShape(
                data.len(),
                size.width * size.height,
            ));
        }

        Ok(Self { size, data })
    }

    /// Create a new plane with the given size, filled with a constant value.
    pub fn from_size_val(size: ImageSize, val: u8) -> Self {
        Self {
            size,
            data: vec![val; size.width * size.height],
        }
    }

    /// Get the size of the plane in pixels.
    pub fn size(&self) -> ImageSize {
        self.size
    }

    /// Get the width of the plane in pixels.
    pub fn width(&self) -> usize {
        self.size.width
    }

    /// Get the height of the plane in pixels.
    pub fn height(&self) -> usize {
        self.size.height
    }

    /// Get the number of columns of the plane.
    pub fn cols(&self) -> usize {
        self.width()
    }

    /// Get the number of rows of the plane.
    pub fn rows(&self) -> usize {
        self.height()
    }

    /// Get a reference to the sample at the given row and column.
    ///
    /// Returns `None` if the location is out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<&u8> {
        if row >= self.size.height || col >= self.size.width {
            return None;
        }
        self.data.get(row * self.size.width + col)
    }

    /// Get the sample data as a row-major slice.
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    /// Get the sample data as a mutable row-major slice.
    pub fn as_slice_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }
}

/// An RGB image stored as three planes of identical dimensions.
///
/// The channel order is fixed (R, G, B) and preserved symmetrically by
/// [`PlanarRgb::from_interleaved`] and [`PlanarRgb::to_interleaved`].
///
/// # Examples
///
/// ```
/// use smudge_image::{ImageSize, PlanarRgb};
///
/// let image = PlanarRgb::from_size_val(
///   ImageSize {
///     width: 10,
///     height: 20,
/// }, 0u8);
///
/// assert_eq!(image.size().width, 10);
/// assert_eq!(image.size().height, 20);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlanarRgb {
    planes: [Plane; 3],
}

impl PlanarRgb {
    /// The number of color channels.
    pub const NUM_CHANNELS: usize = 3;

    /// Create a new image from three planes in R, G, B order.
    ///
    /// # Errors
    ///
    /// If the planes do not share identical dimensions, an error is returned.
    pub fn new(planes: [Plane; 3]) -> Result<Self, ImageError> {
        let size = planes[0].size();
        for plane in &planes[1..] {
            if plane.size() != size {
                return Err(ImageError::InvalidImageSize(
                    size.width,
                    size.height,
                    plane.width(),
                    plane.height(),
                ));
            }
        }

        Ok(Self { planes })
    }

    /// Create a new image with the given size, all channels filled with a
    /// constant value.
    pub fn from_size_val(size: ImageSize, val: u8) -> Self {
        Self {
            planes: [
                Plane::from_size_val(size, val),
                Plane::from_size_val(size, val),
                Plane::from_size_val(size, val),
            ],
        }
    }

    /// Create a new image from an interleaved byte buffer.
    ///
    /// # Arguments
    ///
    /// * `size` - The size of the image in pixels.
    /// * `data` - Pixel data with 3 bytes per pixel (R,G,B,R,G,B,...).
    ///
    /// # Errors
    ///
    /// If the length of the buffer does not match `width * height * 3`, an
    /// error is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use smudge_image::{ImageSize, PlanarRgb};
    ///
    /// let image = PlanarRgb::from_interleaved(
    ///   ImageSize {
    ///     width: 2,
    ///     height: 1,
    /// }, &[0, 1, 2, 3, 4, 5]).unwrap();
    ///
    /// assert_eq!(image.plane(0).unwrap().as_slice(), &[0, 3]);
    /// assert_eq!(image.plane(1).unwrap().as_slice(), &[1, 4]);
    /// assert_eq!(image.plane(2).unwrap().as_slice(), &[2, 5]);
    /// ```
    pub fn from_interleaved(size: ImageSize, data: &[u8]) -> Result<Self, ImageError> {
        let expected = size.width * size.height * Self::NUM_CHANNELS;
        if data.len() != expected {
            return Err(ImageError::InvalidChannelShape(data.len(), expected));
        }

        let num_pixels = size.width * size.height;
        let mut red = Vec::with_capacity(num_pixels);
        let mut green = Vec::with_capacity(num_pixels);
        let mut blue = Vec::with_capacity(num_pixels);

        for pixel in data.chunks_exact(Self::NUM_CHANNELS) {
            red.push(pixel[0]);
            green.push(pixel[1]);
            blue.push(pixel[2]);
        }

        Ok(Self {
            planes: [
                Plane::new(size, red)?,
                Plane::new(size, green)?,
                Plane::new(size, blue)?,
            ],
        })
    }

    /// Re-interleave the three planes into a single byte buffer with 3 bytes
    /// per pixel, in the same channel order as [`PlanarRgb::from_interleaved`].
    pub fn to_interleaved(&self) -> Vec<u8> {
        let num_pixels = self.size().width * self.size().height;
        let mut data = Vec::with_capacity(num_pixels * Self::NUM_CHANNELS);

        for i in 0..num_pixels {
            for plane in &self.planes {
                data.push(plane.data[i]);
            }
        }

        data
    }

    /// Get the size of the image in pixels.
    pub fn size(&self) -> ImageSize {
        self.planes[0].size()
    }

    /// Get the width of the image in pixels.
    pub fn width(&self) -> usize {
        self.size().width
    }

    /// Get the height of the image in pixels.
    pub fn height(&self) -> usize {
        self.size().height
    }

    /// Get one channel plane of the image.
    ///
    /// # Errors
    ///
    /// If the channel index is out of bounds, an error is returned.
    pub fn plane(&self, channel: usize) -> Result<&Plane, ImageError> {
        if channel >= Self::NUM_CHANNELS {
            return Err(ImageError::ChannelIndexOutOfBounds(
                channel,
                Self::NUM_CHANNELS,
            ));
        }

        Ok(&self.planes[channel])
    }

    /// Get the channel planes in R, G, B order.
    pub fn planes(&self) -> &[Plane] {
        &self.planes
    }

    /// Get the channel planes in R, G, B order, mutably.
    pub fn planes_mut(&mut self) -> &mut [Plane] {
        &mut self.planes
    }
}

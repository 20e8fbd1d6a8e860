#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// planar image representation for per-channel processing.
pub mod image;

/// Error types for the image module.
pub mod error;

pub use crate::error::ImageError;
pub use crate::image::{ImageSize, Plane, PlanarRgb};

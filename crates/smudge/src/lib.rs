#![doc = env!("CARGO_PKG_DESCRIPTION")]

#[doc(inline)]
pub use smudge_image as image;

#[doc(inline)]
pub use smudge_imgproc as imgproc;

#[doc(inline)]
pub use smudge_io as io;

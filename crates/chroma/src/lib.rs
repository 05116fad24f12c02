#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

#[doc(inline)]
pub use chroma_image as image;

#[doc(inline)]
pub use chroma_imgproc as imgproc;

#[doc(inline)]
pub use chroma_io as io;

#[doc(inline)]
pub use chroma_viz as viz;

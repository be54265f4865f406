#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

#[doc(inline)]
pub use ipa_image as image;

#[doc(inline)]
pub use ipa_imgproc as imgproc;

#[doc(inline)]
pub use ipa_io as io;

#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Border handling for out-of-bounds pixel lookups.
pub mod border;

/// Error types for the image module.
pub mod error;

/// image representation for raster processing.
pub mod image;

/// Sample level operations on images.
pub mod ops;

pub use crate::border::BorderMode;
pub use crate::error::ImageError;
pub use crate::image::{ChannelLayout, Image, ImageSize, MAX_CHANNELS};

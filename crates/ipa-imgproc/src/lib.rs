#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]
//!
//! Every operation reads its source through [`ipa_image::Image::get_pixel`], so
//! out-of-bounds taps are resolved by the source image's border mode, and
//! returns a freshly allocated image that inherits that border mode. The only
//! in-place operation is [`histogram::equalize_histogram`].

/// image cropping module.
pub mod crop;

/// point-wise intensity mappings module.
pub mod enhance;

/// image filtering module.
pub mod filter;

/// image flipping module.
pub mod flip;

/// compute and equalize image histograms module.
pub mod histogram;

/// utilities for interpolation.
pub mod interpolation;

/// utility functions for resizing images.
pub mod resize;

// serial pixel iteration helpers
pub(crate) mod iter;

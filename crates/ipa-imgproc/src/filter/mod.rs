//! Filter operations
//!
//! This module provides neighborhood filters for image processing: generic
//! linear convolution with a caller supplied [`Kernel`] and the order-statistic
//! filters (min, max, median). Every tap outside the image is resolved by the
//! source image's border mode.

/// Anchor placement of windows and kernels.
mod anchor;
pub use anchor::Anchor;

/// Linear convolution
mod convolution;
pub use convolution::*;

/// Convolution kernel type
mod kernel;
pub use kernel::Kernel;

/// Filter kernels
pub mod kernels;

/// Order-statistic filters
mod rank;
pub use rank::*;

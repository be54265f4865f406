//! Pixel interpolation methods for image transformations.
//!
//! This module provides the sampling kernels used when resampling images.
//!
//! # Interpolation Modes
//!
//! - **Nearest**: source coordinate truncated towards zero
//! - **NearestRounded**: source coordinate rounded to the closest pixel
//! - **Bilinear**: linear interpolation between the four surrounding pixels

mod bilinear;
pub(crate) mod interpolate;
mod nearest;

pub use interpolate::{interpolate_pixel, InterpolationMode};

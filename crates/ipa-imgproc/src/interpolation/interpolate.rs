use ipa_image::Image;

use super::{bilinear::bilinear_interpolation, nearest::nearest_neighbor_interpolation};

/// Interpolation mode for the resize operation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InterpolationMode {
    /// Nearest neighbor interpolation, truncating the source coordinate.
    ///
    /// The fractional part of the source coordinate is discarded, so the pixel
    /// at or before the coordinate is always picked.
    #[default]
    Nearest,
    /// Nearest neighbor interpolation, rounding the source coordinate to the
    /// closest pixel (ties go to the even index).
    NearestRounded,
    /// Bilinear interpolation
    Bilinear,
}

/// Kernel for interpolating a pixel value
///
/// # Arguments
///
/// * `image` - The input image container.
/// * `u` - The x coordinate of the pixel to interpolate.
/// * `v` - The y coordinate of the pixel to interpolate.
/// * `interpolation` - The interpolation mode to use.
/// * `pixel` - The output pixel, with one sample per channel of `image`.
///
/// PRECONDITION: `u` and `v` are non-negative.
pub fn interpolate_pixel(
    image: &Image,
    u: f64,
    v: f64,
    interpolation: InterpolationMode,
    pixel: &mut [i32],
) {
    match interpolation {
        InterpolationMode::Nearest => {
            nearest_neighbor_interpolation(image, u, v, f64::trunc, pixel)
        }
        InterpolationMode::NearestRounded => {
            nearest_neighbor_interpolation(image, u, v, f64::round_ties_even, pixel)
        }
        InterpolationMode::Bilinear => bilinear_interpolation(image, u, v, pixel),
    }
}

use ipa_image::{Image, ImageError, ImageSize};

use crate::interpolation::{interpolate_pixel, InterpolationMode};
use crate::iter::iter_pixels_mut;

/// Compute the size of an image scaled by the given factors.
///
/// Each dimension is `floor(factor * dimension)`, saturating at `usize::MAX`.
///
/// # Errors
///
/// Returns an error if a factor is not a positive finite number, or if the
/// scaled image would have no area or be too large to be stored.
pub fn scaled_size(
    size: ImageSize,
    x_factor: f64,
    y_factor: f64,
) -> Result<ImageSize, ImageError> {
    let valid = |f: f64| f.is_finite() && f > 0.0;
    if !valid(x_factor) || !valid(y_factor) {
        return Err(ImageError::InvalidScaleFactor(x_factor, y_factor));
    }

    let new_size = ImageSize {
        width: (x_factor * size.width as f64).floor() as usize,
        height: (y_factor * size.height as f64).floor() as usize,
    };

    if new_size.width == 0 || new_size.height == 0 {
        return Err(ImageError::InvalidImageSize(new_size.width, new_size.height));
    }

    Ok(new_size)
}

/// Resize an image by a scale factor per axis.
///
/// The output pixel `(i, j)` samples the source at `(i / x_factor, j / y_factor)`
/// with the given interpolation mode. The output keeps the source layout and
/// border mode.
///
/// # Arguments
///
/// * `src` - The input image container.
/// * `x_factor` - The horizontal scale factor.
/// * `y_factor` - The vertical scale factor.
/// * `interpolation` - The interpolation mode to use.
///
/// # Errors
///
/// Returns an error if a factor is not a positive finite number, or if the
/// scaled image would have no area or be too large to be stored.
///
/// # Example
///
/// ```
/// use ipa_image::{ChannelLayout, Image, ImageSize};
/// use ipa_imgproc::interpolation::InterpolationMode;
/// use ipa_imgproc::resize::resize;
///
/// let image = Image::new(
///     ImageSize {
///         width: 4,
///         height: 5,
///     },
///     ChannelLayout::Rgb,
///     vec![0; 4 * 5 * 3],
/// )
/// .unwrap();
///
/// let resized = resize(&image, 0.5, 0.6, InterpolationMode::Bilinear).unwrap();
///
/// assert_eq!(resized.num_channels(), 3);
/// assert_eq!(resized.size().width, 2);
/// assert_eq!(resized.size().height, 3);
/// ```
pub fn resize(
    src: &Image,
    x_factor: f64,
    y_factor: f64,
    interpolation: InterpolationMode,
) -> Result<Image, ImageError> {
    let new_size = scaled_size(src.size(), x_factor, y_factor)?;
    log::debug!(
        "resize {} -> {} with {:?}",
        src.size(),
        new_size,
        interpolation
    );

    let mut dst = src.blank_with_size(new_size)?;

    iter_pixels_mut(&mut dst, |x, y, pixel| {
        let u = x as f64 / x_factor;
        let v = y as f64 / y_factor;
        interpolate_pixel(src, u, v, interpolation, pixel);
    });

    Ok(dst)
}

/// Resize an image using nearest neighbor sampling.
///
/// The source coordinate is truncated, not rounded: see
/// [`InterpolationMode::NearestRounded`] for the rounding variant.
///
/// # Errors
///
/// Returns an error if a factor is not a positive finite number, or if the
/// scaled image would have no area or be too large to be stored.
pub fn resize_nearest(src: &Image, x_factor: f64, y_factor: f64) -> Result<Image, ImageError> {
    resize(src, x_factor, y_factor, InterpolationMode::Nearest)
}

/// Resize an image using bilinear interpolation.
///
/// # Errors
///
/// Returns an error if a factor is not a positive finite number, or if the
/// scaled image would have no area or be too large to be stored.
pub fn resize_bilinear(src: &Image, x_factor: f64, y_factor: f64) -> Result<Image, ImageError> {
    resize(src, x_factor, y_factor, InterpolationMode::Bilinear)
}

use ipa_image::{Image, ImageError};

use crate::iter::iter_pixels_mut;

/// Flip the input image horizontally.
///
/// # Arguments
///
/// * `src` - The input image with shape (H, W, C).
///
/// # Returns
///
/// The flipped image, with the same size, layout and border mode.
///
/// # Example
///
/// ```
/// use ipa_image::{ChannelLayout, Image, ImageSize};
/// use ipa_imgproc::flip::horizontal_flip;
///
/// let image = Image::new(
///     ImageSize {
///         width: 2,
///         height: 3,
///     },
///     ChannelLayout::Gray,
///     vec![0, 1, 2, 3, 4, 5],
/// )
/// .unwrap();
///
/// let flipped = horizontal_flip(&image).unwrap();
///
/// assert_eq!(flipped.as_slice(), &[1, 0, 3, 2, 5, 4]);
/// ```
pub fn horizontal_flip(src: &Image) -> Result<Image, ImageError> {
    let mut dst = src.blank_like();
    let last = src.cols() as isize - 1;

    iter_pixels_mut(&mut dst, |x, y, pixel| {
        pixel.copy_from_slice(src.get_pixel(last - x as isize, y as isize));
    });

    Ok(dst)
}

/// Flip the input image vertically.
///
/// # Arguments
///
/// * `src` - The input image with shape (H, W, C).
///
/// # Returns
///
/// The flipped image, with the same size, layout and border mode.
///
/// # Example
///
/// ```
/// use ipa_image::{ChannelLayout, Image, ImageSize};
/// use ipa_imgproc::flip::vertical_flip;
///
/// let image = Image::new(
///     ImageSize {
///         width: 2,
///         height: 3,
///     },
///     ChannelLayout::Gray,
///     vec![0, 1, 2, 3, 4, 5],
/// )
/// .unwrap();
///
/// let flipped = vertical_flip(&image).unwrap();
///
/// assert_eq!(flipped.as_slice(), &[4, 5, 2, 3, 0, 1]);
/// ```
pub fn vertical_flip(src: &Image) -> Result<Image, ImageError> {
    let mut dst = src.blank_like();
    let last = src.rows() as isize - 1;

    iter_pixels_mut(&mut dst, |x, y, pixel| {
        pixel.copy_from_slice(src.get_pixel(x as isize, last - y as isize));
    });

    Ok(dst)
}

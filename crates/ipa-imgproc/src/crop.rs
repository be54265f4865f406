use ipa_image::{Image, ImageError, ImageSize};

use crate::iter::iter_pixels_mut;

/// Crop an image to the region `[x1, x2) x [y1, y2)`.
///
/// The region may extend past the image edges, or lie fully outside of it: the
/// missing pixels are filled in by the source's border mode.
///
/// # Arguments
///
/// * `src` - The source image to crop.
/// * `x1` - The x-coordinate of the top-left corner of the region, inclusive.
/// * `y1` - The y-coordinate of the top-left corner of the region, inclusive.
/// * `x2` - The x-coordinate of the bottom-right corner of the region, exclusive.
/// * `y2` - The y-coordinate of the bottom-right corner of the region, exclusive.
///
/// # Errors
///
/// Returns an error if `x2 <= x1` or `y2 <= y1`, if the region width or height
/// overflows `isize`, or if the cropped image is too large to be stored.
///
/// # Examples
///
/// ```rust
/// use ipa_image::{ChannelLayout, Image, ImageSize};
/// use ipa_imgproc::crop::crop_image;
///
/// let image = Image::new(ImageSize { width: 4, height: 4 }, ChannelLayout::Gray, vec![
///     0, 1, 2, 3,
///     4, 5, 6, 7,
///     8, 9, 10, 11,
///     12, 13, 14, 15
/// ]).unwrap();
///
/// let cropped = crop_image(&image, 1, 1, 3, 3).unwrap();
///
/// assert_eq!(cropped.as_slice(), &[5, 6, 9, 10]);
/// ```
pub fn crop_image(
    src: &Image,
    x1: isize,
    y1: isize,
    x2: isize,
    y2: isize,
) -> Result<Image, ImageError> {
    let (width, height) = match (x2.checked_sub(x1), y2.checked_sub(y1)) {
        (Some(w), Some(h)) if w > 0 && h > 0 => (w as usize, h as usize),
        _ => return Err(ImageError::InvalidCropRegion(x1, y1, x2, y2)),
    };

    let mut dst = src.blank_with_size(ImageSize { width, height })?;

    iter_pixels_mut(&mut dst, |x, y, pixel| {
        pixel.copy_from_slice(src.get_pixel(x1 + x as isize, y1 + y as isize));
    });

    Ok(dst)
}

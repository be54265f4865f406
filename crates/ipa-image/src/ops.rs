use crate::{Image, ImageError};

/// Clamp every sample of an image into `[min, max]`.
///
/// Transforms never saturate their results; this is the explicit step to
/// bring an image back into a representable range.
///
/// # Arguments
///
/// * `src` - The source image.
/// * `min` - The lower bound, inclusive.
/// * `max` - The upper bound, inclusive.
///
/// # Errors
///
/// Returns an error if `min > max`.
///
/// Example:
///
/// ```
/// use ipa_image::{ChannelLayout, Image, ImageSize};
/// use ipa_image::ops::clamp;
///
/// let image = Image::new(
///     ImageSize { width: 3, height: 1 },
///     ChannelLayout::Gray,
///     vec![-20, 128, 300],
/// )
/// .unwrap();
///
/// let clamped = clamp(&image, 0, 255).unwrap();
/// assert_eq!(clamped.as_slice(), &[0, 128, 255]);
/// ```
pub fn clamp(src: &Image, min: i32, max: i32) -> Result<Image, ImageError> {
    if min > max {
        return Err(ImageError::InvalidClampRange(min, max));
    }

    let mut dst = src.blank_like();
    dst.as_slice_mut()
        .iter_mut()
        .zip(src.as_slice())
        .for_each(|(out, &inp)| *out = inp.clamp(min, max));

    Ok(dst)
}

#[cfg(test)]
mod tests {
    use crate::{BorderMode, ChannelLayout, Image, ImageError};

    #[test]
    fn test_clamp() -> Result<(), ImageError> {
        let image = Image::new(
            [2, 1].into(),
            ChannelLayout::GrayAlpha,
            vec![-1, 256, 10, 65025],
        )?
        .with_border_mode(BorderMode::Circular);

        let clamped = super::clamp(&image, 0, 255)?;
        assert_eq!(clamped.as_slice(), &[0, 255, 10, 255]);
        assert_eq!(clamped.border_mode(), BorderMode::Circular);

        assert_eq!(
            super::clamp(&image, 10, 0),
            Err(ImageError::InvalidClampRange(10, 0))
        );
        Ok(())
    }
}

use ipa_image::{Image, ImageError};

use crate::iter::{floor_sample, iter_samples_val};

/// Apply a linear grey level mapping to every channel of an image.
///
/// dst(x,y,c) = floor(src(x,y,c) * a + b)
///
/// The result is not clamped, so it may leave the `[0, 255]` range.
///
/// # Arguments
///
/// * `src` - The input image.
/// * `a` - The gain.
/// * `b` - The offset.
///
/// # Example
///
/// ```
/// use ipa_image::{ChannelLayout, Image, ImageSize};
/// use ipa_imgproc::enhance::linear_mapping;
///
/// let image = Image::new(
///     ImageSize { width: 3, height: 1 },
///     ChannelLayout::Gray,
///     vec![0, 10, 200],
/// )
/// .unwrap();
///
/// let mapped = linear_mapping(&image, 1.5, 0.5).unwrap();
/// assert_eq!(mapped.as_slice(), &[0, 15, 300]);
/// ```
pub fn linear_mapping(src: &Image, a: f64, b: f64) -> Result<Image, ImageError> {
    let mut dst = src.blank_like();
    iter_samples_val(src, &mut dst, |v| floor_sample(v as f64 * a + b));
    Ok(dst)
}

/// Apply a power law grey level mapping to every channel of an image.
///
/// dst(x,y,c) = floor(c * src(x,y,c) ^ p)
///
/// The result is not clamped, so it may leave the `[0, 255]` range.
///
/// # Arguments
///
/// * `src` - The input image.
/// * `c` - The scale applied after the power.
/// * `p` - The exponent.
pub fn power_mapping(src: &Image, c: f64, p: f64) -> Result<Image, ImageError> {
    let mut dst = src.blank_like();
    iter_samples_val(src, &mut dst, |v| floor_sample(c * (v as f64).powf(p)));
    Ok(dst)
}

/// Compute the negative of an image.
///
/// dst(x,y,c) = 255 - src(x,y,c)
///
/// Every channel is inverted, alpha included.
pub fn negative(src: &Image) -> Result<Image, ImageError> {
    let mut dst = src.blank_like();
    iter_samples_val(src, &mut dst, |v| 255 - v);
    Ok(dst)
}

#[cfg(test)]
mod tests {
    use ipa_image::{BorderMode, ChannelLayout, Image, ImageError, ImageSize};

    fn rgb_image() -> Result<Image, ImageError> {
        Image::new(
            ImageSize {
                width: 2,
                height: 2,
            },
            ChannelLayout::Rgb,
            vec![0, 1, 2, 50, 100, 150, 200, 250, 255, 7, 64, 128],
        )
    }

    #[test]
    fn linear_identity() -> Result<(), ImageError> {
        let image = rgb_image()?;
        assert_eq!(super::linear_mapping(&image, 1.0, 0.0)?, image);
        Ok(())
    }

    #[test]
    fn linear_floors_and_does_not_clamp() -> Result<(), ImageError> {
        let image = Image::new([4, 1].into(), ChannelLayout::Gray, vec![0, 3, 100, 255])?;
        let mapped = super::linear_mapping(&image, 2.0, -10.5)?;
        assert_eq!(mapped.as_slice(), &[-11, -5, 189, 499]);
        Ok(())
    }

    #[test]
    fn power_identity() -> Result<(), ImageError> {
        let image = rgb_image()?;
        assert_eq!(super::power_mapping(&image, 1.0, 1.0)?, image);
        Ok(())
    }

    #[test]
    fn power_gamma() -> Result<(), ImageError> {
        let image = Image::new([4, 1].into(), ChannelLayout::Gray, vec![0, 4, 16, 255])?;

        let mapped = super::power_mapping(&image, 2.0, 0.5)?;
        assert_eq!(mapped.as_slice(), &[0, 4, 8, 31]);

        let mapped = super::power_mapping(&image, 1.0, 2.0)?;
        assert_eq!(mapped.as_slice(), &[0, 16, 256, 65025]);
        Ok(())
    }

    #[test]
    fn negative_inverts() -> Result<(), ImageError> {
        let image = Image::new([2, 1].into(), ChannelLayout::Gray, vec![0, 255])?
            .with_border_mode(BorderMode::Circular);
        let inverted = super::negative(&image)?;
        assert_eq!(inverted.as_slice(), &[255, 0]);
        assert_eq!(inverted.border_mode(), BorderMode::Circular);
        Ok(())
    }

    #[test]
    fn negative_is_an_involution() -> Result<(), ImageError> {
        let image = rgb_image()?;
        assert_eq!(super::negative(&super::negative(&image)?)?, image);
        Ok(())
    }
}

use ipa_image::{Image, ImageError};

use super::{Anchor, Kernel};
use crate::iter::{floor_sample, iter_pixels_mut};

/// Convolve an image with a 2D kernel.
///
/// For every output pixel `(i, j)` and channel `c`:
///
/// dst(i,j,c) = floor( sum_{row,col} kernel[row][col] * src(i - ox + col, j - oy + row, c) )
///
/// where `(ox, oy) = (floor(kw / 2), ceil(kh / 2))` is the skewed kernel origin.
/// Taps outside the image are resolved by the source's border mode and the
/// result is not clamped.
///
/// # Arguments
///
/// * `src` - The source image with shape (H, W, C).
/// * `kernel` - The kernel weights.
///
/// # Returns
///
/// The filtered image, with the same size, layout and border mode.
///
/// # Example
///
/// ```
/// use ipa_image::{ChannelLayout, Image, ImageSize};
/// use ipa_imgproc::filter::{filter2d, Kernel};
///
/// let image = Image::new(
///     ImageSize { width: 3, height: 1 },
///     ChannelLayout::Gray,
///     vec![10, 20, 30],
/// )
/// .unwrap();
///
/// // horizontal difference, one row below the origin
/// let kernel = Kernel::new(vec![vec![0.0, 0.0, 0.0], vec![-1.0, 0.0, 1.0]]).unwrap();
///
/// let filtered = filter2d(&image, &kernel).unwrap();
/// assert_eq!(filtered.as_slice(), &[20, 20, -20]);
/// ```
pub fn filter2d(src: &Image, kernel: &Kernel) -> Result<Image, ImageError> {
    filter2d_with_anchor(src, kernel, Anchor::Skewed)
}

/// Convolve an image with a 2D kernel placed with the given anchor.
///
/// With [`Anchor::Centered`] an odd sized kernel is centered on the output
/// pixel, so the identity kernel `[[1]]` leaves the image unchanged.
///
/// See [`filter2d`] for the per pixel formula.
pub fn filter2d_with_anchor(
    src: &Image,
    kernel: &Kernel,
    anchor: Anchor,
) -> Result<Image, ImageError> {
    let (ox, oy) = anchor.kernel_origin(kernel.width(), kernel.height());
    log::trace!(
        "filter2d {}x{} kernel at ({}, {}) over {}",
        kernel.width(),
        kernel.height(),
        ox,
        oy,
        src.size()
    );

    let mut dst = src.blank_like();
    let mut sums = vec![0.0f64; src.num_channels()];

    iter_pixels_mut(&mut dst, |x, y, pixel| {
        sums.iter_mut().for_each(|s| *s = 0.0);

        for row in 0..kernel.height() {
            let sy = y as isize - oy + row as isize;
            for col in 0..kernel.width() {
                let sx = x as isize - ox + col as isize;
                let weight = kernel.get(row, col);
                let tap = src.get_pixel(sx, sy);
                for (sum, &v) in sums.iter_mut().zip(tap) {
                    *sum += weight * v as f64;
                }
            }
        }

        for (out, &sum) in pixel.iter_mut().zip(&sums) {
            *out = floor_sample(sum);
        }
    });

    Ok(dst)
}

#[cfg(test)]
mod tests {
    use ipa_image::{BorderMode, ChannelLayout, Image, ImageError, ImageSize};

    use crate::filter::{kernels, Anchor, Kernel};

    fn ramp_4x4() -> Result<Image, ImageError> {
        Image::new(
            ImageSize {
                width: 4,
                height: 4,
            },
            ChannelLayout::Gray,
            (0..16).collect(),
        )
    }

    #[test]
    fn identity_kernel_centered() -> Result<(), ImageError> {
        let image = Image::new([3, 2].into(), ChannelLayout::Rgb, (0..18).collect())?;
        let filtered =
            super::filter2d_with_anchor(&image, &Kernel::identity(), Anchor::Centered)?;
        assert_eq!(filtered, image);
        Ok(())
    }

    #[test]
    fn identity_kernel_skewed_shifts_down() -> Result<(), ImageError> {
        let image = ramp_4x4()?;
        let filtered = super::filter2d(&image, &Kernel::identity())?;
        #[rustfmt::skip]
        let expected = vec![
            0, 0, 0, 0,
            0, 1, 2, 3,
            4, 5, 6, 7,
            8, 9, 10, 11,
        ];
        assert_eq!(filtered.as_slice(), &expected);

        let image = image.with_border_mode(BorderMode::Circular);
        let filtered = super::filter2d(&image, &Kernel::identity())?;
        assert_eq!(&filtered.as_slice()[..4], &[12, 13, 14, 15]);
        Ok(())
    }

    #[test]
    fn box_blur_constant_image() -> Result<(), ImageError> {
        let image = Image::from_size_val([5, 4].into(), ChannelLayout::GrayAlpha, 90)?
            .with_border_mode(BorderMode::Reflected);
        let kernel = kernels::box_kernel(3, 3)?;
        let filtered = super::filter2d(&image, &kernel)?;
        // 9 * (90 / 9) may land a hair below 90
        assert!(filtered.as_slice().iter().all(|&v| v == 90 || v == 89));
        Ok(())
    }

    #[test]
    fn box_blur_centered_zero_border() -> Result<(), ImageError> {
        let image = Image::from_size_val([3, 3].into(), ChannelLayout::Gray, 9)?;
        let kernel = Kernel::new(vec![vec![1.0; 3]; 3])?;
        let filtered = super::filter2d_with_anchor(&image, &kernel, Anchor::Centered)?;
        #[rustfmt::skip]
        let expected = vec![
            36, 54, 36,
            54, 81, 54,
            36, 54, 36,
        ];
        assert_eq!(filtered.as_slice(), &expected);
        Ok(())
    }

    #[test]
    fn laplacian_is_unclamped() -> Result<(), ImageError> {
        let mut image = Image::zeros([3, 3].into(), ChannelLayout::Gray)?;
        image.set_pixel(1, 1, &[100])?;
        let filtered =
            super::filter2d_with_anchor(&image, &kernels::laplacian_kernel(), Anchor::Centered)?;
        #[rustfmt::skip]
        let expected = vec![
            0, 100, 0,
            100, -400, 100,
            0, 100, 0,
        ];
        assert_eq!(filtered.as_slice(), &expected);
        Ok(())
    }

    #[test]
    fn sobel_on_horizontal_ramp() -> Result<(), ImageError> {
        let image = Image::new(
            [4, 3].into(),
            ChannelLayout::Gray,
            vec![0, 10, 20, 30, 0, 10, 20, 30, 0, 10, 20, 30],
        )?
        .with_border_mode(BorderMode::Reflected);
        let (kx, ky) = kernels::sobel_kernels();

        let gx = super::filter2d_with_anchor(&image, &kx, Anchor::Centered)?;
        assert_eq!(gx.get_pixel(1, 1), &[80]);
        assert_eq!(gx.get_pixel(2, 1), &[80]);

        let gy = super::filter2d_with_anchor(&image, &ky, Anchor::Centered)?;
        assert!(gy.as_slice().iter().all(|&v| v == 0));
        Ok(())
    }

    #[test]
    fn floors_fractional_sums() -> Result<(), ImageError> {
        let image = Image::new([2, 1].into(), ChannelLayout::Gray, vec![3, -3])?;
        let kernel = Kernel::new(vec![vec![0.5]])?;
        let filtered = super::filter2d_with_anchor(&image, &kernel, Anchor::Centered)?;
        assert_eq!(filtered.as_slice(), &[1, -2]);
        Ok(())
    }
}

use ipa_image::{Image, ImageError, MAX_CHANNELS};

use super::Anchor;
use crate::iter::iter_pixels_mut;

/// The order statistic picked by [`rank_filter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankOp {
    /// The pixel with the smallest channel sum.
    Min,
    /// The pixel with the largest channel sum.
    Max,
    /// The per channel median.
    Median,
}

/// Apply an order-statistic filter over a rectangular window.
///
/// [`RankOp::Min`] and [`RankOp::Max`] rank the candidate pixels by the sum of
/// all their channels and copy the whole winning pixel, so the channels of the
/// output always come from the same source pixel. The running best starts as
/// the pixel under the output position and is only replaced by a strictly
/// smaller (resp. larger) sum, scanning window columns in the outer loop.
///
/// [`RankOp::Median`] works per channel: the median of each channel's window
/// samples, floored.
///
/// # Arguments
///
/// * `src` - The source image with shape (H, W, C).
/// * `window` - The window size (width, height).
/// * `op` - The order statistic to compute.
/// * `anchor` - The window placement relative to the output pixel.
///
/// # Errors
///
/// Returns an error if the window has no area.
pub fn rank_filter(
    src: &Image,
    window: (usize, usize),
    op: RankOp,
    anchor: Anchor,
) -> Result<Image, ImageError> {
    if window.0 == 0 || window.1 == 0 {
        return Err(ImageError::InvalidWindowSize(window.0, window.1));
    }

    let xs = anchor.window_offsets(window.0);
    let ys = anchor.window_offsets(window.1);
    log::trace!(
        "{:?} filter over {:?} x {:?} on {}",
        op,
        xs,
        ys,
        src.size()
    );

    let mut dst = src.blank_like();

    match op {
        RankOp::Min | RankOp::Max => {
            // true when `a` should replace `b`
            let better: fn(i64, i64) -> bool = match op {
                RankOp::Min => |a: i64, b: i64| a < b,
                _ => |a: i64, b: i64| a > b,
            };

            iter_pixels_mut(&mut dst, |x, y, pixel| {
                let (x, y) = (x as isize, y as isize);
                let mut best = src.get_pixel(x, y);
                let mut best_sum = channel_sum(best);

                for k in xs.clone() {
                    for l in ys.clone() {
                        let candidate = src.get_pixel(x + k, y + l);
                        let sum = channel_sum(candidate);
                        if better(sum, best_sum) {
                            best = candidate;
                            best_sum = sum;
                        }
                    }
                }

                pixel.copy_from_slice(best);
            });
        }
        RankOp::Median => {
            let c = src.num_channels();
            let mut samples: [Vec<i32>; MAX_CHANNELS] = Default::default();

            iter_pixels_mut(&mut dst, |x, y, pixel| {
                let (x, y) = (x as isize, y as isize);
                samples.iter_mut().for_each(Vec::clear);

                for k in xs.clone() {
                    for l in ys.clone() {
                        let candidate = src.get_pixel(x + k, y + l);
                        for (ch, &v) in candidate.iter().enumerate() {
                            samples[ch].push(v);
                        }
                    }
                }

                for (out, values) in pixel.iter_mut().zip(&mut samples[..c]) {
                    *out = floor_median(values);
                }
            });
        }
    }

    Ok(dst)
}

/// Apply a min filter, see [`rank_filter`].
///
/// # Errors
///
/// Returns an error if the window has no area.
///
/// # Example
///
/// ```
/// use ipa_image::{BorderMode, ChannelLayout, Image, ImageSize};
/// use ipa_imgproc::filter::min_filter;
///
/// let image = Image::new(
///     ImageSize { width: 2, height: 1 },
///     ChannelLayout::Rgb,
///     vec![10, 0, 0, 1, 2, 3],
/// )
/// .unwrap()
/// .with_border_mode(BorderMode::Circular);
///
/// // the second pixel has the smaller channel sum
/// let filtered = min_filter(&image, (2, 1)).unwrap();
/// assert_eq!(filtered.get_pixel(1, 0), &[1, 2, 3]);
/// ```
pub fn min_filter(src: &Image, window: (usize, usize)) -> Result<Image, ImageError> {
    rank_filter(src, window, RankOp::Min, Anchor::default())
}

/// Apply a max filter, see [`rank_filter`].
///
/// # Errors
///
/// Returns an error if the window has no area.
pub fn max_filter(src: &Image, window: (usize, usize)) -> Result<Image, ImageError> {
    rank_filter(src, window, RankOp::Max, Anchor::default())
}

/// Apply a median filter, see [`rank_filter`].
///
/// # Errors
///
/// Returns an error if the window has no area.
pub fn median_filter(src: &Image, window: (usize, usize)) -> Result<Image, ImageError> {
    rank_filter(src, window, RankOp::Median, Anchor::default())
}

fn channel_sum(pixel: &[i32]) -> i64 {
    pixel.iter().map(|&v| v as i64).sum()
}

// the mean of the two middle values for even counts, rounded down
fn floor_median(values: &mut [i32]) -> i32 {
    values.sort_unstable();
    let mid = values.len() / 2;
    if values.len() % 2 == 1 {
        values[mid]
    } else {
        (values[mid - 1] as i64 + values[mid] as i64).div_euclid(2) as i32
    }
}

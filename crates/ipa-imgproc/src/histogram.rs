use std::collections::BTreeMap;

use ipa_image::{Image, ImageError};

/// Number of intensity levels considered by [`equalize_histogram`].
pub const NUM_LEVELS: usize = 256;

/// Per channel intensity histogram of an image.
///
/// Each channel maps an observed intensity to the number of pixels carrying it.
/// Intensities that never occur are absent and count as zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Histogram {
    channels: Vec<BTreeMap<i32, usize>>,
}

impl Histogram {
    /// Get the number of channels in the histogram.
    pub fn num_channels(&self) -> usize {
        self.channels.len()
    }

    /// Get the intensity counts of one channel, if it exists.
    pub fn channel(&self, ch: usize) -> Option<&BTreeMap<i32, usize>> {
        self.channels.get(ch)
    }

    /// Get how many pixels carry `value` in channel `ch`.
    pub fn count(&self, ch: usize, value: i32) -> usize {
        self.channel(ch)
            .and_then(|counts| counts.get(&value))
            .copied()
            .unwrap_or(0)
    }

    /// Get the sum of all counts of one channel.
    ///
    /// This equals the number of pixels of the image the histogram was built from.
    pub fn total(&self, ch: usize) -> usize {
        self.channel(ch).map_or(0, |counts| counts.values().sum())
    }
}

/// Compute the pixel intensity histogram of an image, per channel.
///
/// # Arguments
///
/// * `src` - The input image to compute the histogram.
///
/// # Returns
///
/// One sparse histogram per channel of `src`.
///
/// # Example
///
/// ```
/// use ipa_image::{ChannelLayout, Image, ImageSize};
/// use ipa_imgproc::histogram::compute_histogram;
///
/// let image = Image::new(
///     ImageSize { width: 3, height: 1 },
///     ChannelLayout::GrayAlpha,
///     vec![0, 255, 7, 255, 0, 128],
/// )
/// .unwrap();
///
/// let histogram = compute_histogram(&image);
/// assert_eq!(histogram.count(0, 0), 2);
/// assert_eq!(histogram.count(0, 7), 1);
/// assert_eq!(histogram.count(1, 255), 2);
/// assert_eq!(histogram.count(1, 3), 0);
/// ```
pub fn compute_histogram(src: &Image) -> Histogram {
    let mut channels = vec![BTreeMap::new(); src.num_channels()];

    for pixel in src.as_slice().chunks_exact(src.num_channels()) {
        for (counts, &value) in channels.iter_mut().zip(pixel) {
            *counts.entry(value).or_insert(0) += 1;
        }
    }

    Histogram { channels }
}

/// Equalize the histogram of an image in place, per channel.
///
/// For each channel the cumulative distribution over the levels `0..=255` is
/// built and every sample `v` is replaced by `ceil(cdf[v] * 255)`.
///
/// The substitution is done in place: each output sample only depends on the
/// original sample at the same position through a precomputed table.
///
/// # Errors
///
/// Returns an error if any sample lies outside `[0, 255]`. The image is left
/// untouched in that case.
///
/// # Example
///
/// ```
/// use ipa_image::{ChannelLayout, Image, ImageSize};
/// use ipa_imgproc::histogram::equalize_histogram;
///
/// let mut image = Image::new(
///     ImageSize { width: 4, height: 1 },
///     ChannelLayout::Gray,
///     vec![0, 0, 1, 2],
/// )
/// .unwrap();
///
/// equalize_histogram(&mut image).unwrap();
/// assert_eq!(image.as_slice(), &[128, 128, 192, 255]);
/// ```
pub fn equalize_histogram(src: &mut Image) -> Result<(), ImageError> {
    if let Some(&v) = src
        .as_slice()
        .iter()
        .find(|&&v| !(0..NUM_LEVELS as i32).contains(&v))
    {
        return Err(ImageError::SampleOutOfRange(v));
    }

    let histogram = compute_histogram(src);
    let num_pixels = (src.width() * src.height()) as f64;

    let luts = (0..histogram.num_channels())
        .map(|ch| {
            let mut lut = [0i32; NUM_LEVELS];
            let mut cdf = 0.0;
            for (level, sk) in lut.iter_mut().enumerate() {
                cdf += histogram.count(ch, level as i32) as f64 / num_pixels;
                *sk = (cdf * 255.0).ceil() as i32;
            }
            lut
        })
        .collect::<Vec<_>>();

    log::debug!(
        "equalizing {} channels of {}",
        luts.len(),
        src.size()
    );

    let c = src.num_channels();
    for pixel in src.as_slice_mut().chunks_exact_mut(c) {
        for (value, lut) in pixel.iter_mut().zip(&luts) {
            *value = lut[*value as usize];
        }
    }

    Ok(())
}

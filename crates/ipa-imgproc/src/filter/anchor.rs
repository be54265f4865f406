use std::ops::Range;

/// Where a filter window or kernel sits relative to the output pixel.
///
/// With the default, [`Anchor::Skewed`], windows are shifted up and to the
/// left and a window of size `n` spans `2 * ceil(n / 2)` taps; a kernel of odd
/// height reaches one row further up. [`Anchor::Centered`] places an odd sized
/// window or kernel exactly on the output pixel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Anchor {
    /// Window offsets `[floor(-n/2), ceil(n/2))`; kernel origin
    /// `(floor(kw/2), ceil(kh/2))`.
    #[default]
    Skewed,
    /// Window offsets `[-floor(n/2), n - floor(n/2))`; kernel origin
    /// `(floor(kw/2), floor(kh/2))`.
    Centered,
}

impl Anchor {
    /// Get the offsets, relative to the output pixel, covered by a window of `n` pixels.
    ///
    /// # Example
    ///
    /// ```
    /// use ipa_imgproc::filter::Anchor;
    ///
    /// assert_eq!(Anchor::Skewed.window_offsets(3), -2..2);
    /// assert_eq!(Anchor::Centered.window_offsets(3), -1..2);
    /// assert_eq!(Anchor::Centered.window_offsets(1), 0..1);
    /// ```
    pub fn window_offsets(&self, n: usize) -> Range<isize> {
        let n = n as isize;
        match self {
            Anchor::Skewed => -((n + 1) / 2)..(n + 1) / 2,
            Anchor::Centered => -(n / 2)..n - n / 2,
        }
    }

    /// Get the kernel cell `(col, row)` that lines up with the output pixel.
    pub fn kernel_origin(&self, width: usize, height: usize) -> (isize, isize) {
        let (w, h) = (width as isize, height as isize);
        match self {
            Anchor::Skewed => (w / 2, (h + 1) / 2),
            Anchor::Centered => (w / 2, h / 2),
        }
    }
}

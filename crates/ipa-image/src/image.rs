use crate::{border::BorderMode, error::ImageError};

/// The largest number of channels a [`ChannelLayout`] can describe.
pub const MAX_CHANNELS: usize = 4;

// backing storage for synthetic zero pixels
const ZERO_PIXEL: [i32; MAX_CHANNELS] = [0; MAX_CHANNELS];

/// Image size in pixels
///
/// A struct to represent the size of an image in pixels.
///
/// # Examples
///
/// ```
/// use ipa_image::ImageSize;
///
/// let image_size = ImageSize {
///   width: 10,
///   height: 20,
/// };
///
/// assert_eq!(image_size.width, 10);
/// assert_eq!(image_size.height, 20);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ImageSize {
    /// Width of the image in pixels
    pub width: usize,
    /// Height of the image in pixels
    pub height: usize,
}

impl std::fmt::Display for ImageSize {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "ImageSize {{ width: {}, height: {} }}",
            self.width, self.height
        )
    }
}

impl From<[usize; 2]> for ImageSize {
    fn from(size: [usize; 2]) -> Self {
        ImageSize {
            width: size[0],
            height: size[1],
        }
    }
}

/// The channel layout of an image.
///
/// The layout fixes how many samples every pixel carries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ChannelLayout {
    /// Single intensity channel.
    Gray,
    /// Intensity plus alpha.
    GrayAlpha,
    /// Red, green and blue.
    Rgb,
    /// Red, green, blue and alpha.
    Rgba,
}

impl ChannelLayout {
    /// Get the number of samples per pixel.
    pub fn num_channels(&self) -> usize {
        match self {
            ChannelLayout::Gray => 1,
            ChannelLayout::GrayAlpha => 2,
            ChannelLayout::Rgb => 3,
            ChannelLayout::Rgba => 4,
        }
    }

    /// Get the layout with the given number of channels, if any.
    pub fn from_num_channels(num_channels: usize) -> Option<Self> {
        match num_channels {
            1 => Some(ChannelLayout::Gray),
            2 => Some(ChannelLayout::GrayAlpha),
            3 => Some(ChannelLayout::Rgb),
            4 => Some(ChannelLayout::Rgba),
            _ => None,
        }
    }
}

// number of samples for `size`, rejecting empty images and buffers past `isize::MAX` bytes
fn num_samples(size: ImageSize, layout: ChannelLayout) -> Result<usize, ImageError> {
    if size.width == 0 || size.height == 0 {
        return Err(ImageError::InvalidImageSize(size.width, size.height));
    }

    size.width
        .checked_mul(size.height)
        .and_then(|n| n.checked_mul(layout.num_channels()))
        .filter(|&n| n <= isize::MAX as usize / std::mem::size_of::<i32>())
        .ok_or(ImageError::InvalidImageSize(size.width, size.height))
}

/// Represents an image with pixel data.
///
/// The pixels are stored row-major with interleaved channels, so the sample of
/// channel `c` at `(x, y)` lives at `(y * width + x) * channels + c`.
///
/// Samples are signed integers: point mappings and convolutions are allowed to
/// produce values outside the conventional `[0, 255]` range without wrapping.
#[derive(Clone, Debug, PartialEq)]
pub struct Image {
    size: ImageSize,
    layout: ChannelLayout,
    border: BorderMode,
    data: Vec<i32>,
}

impl Image {
    /// Create a new image from pixel data.
    ///
    /// The image uses [`BorderMode::Zero`]; see [`Image::with_border_mode`] to
    /// pick a different one.
    ///
    /// # Arguments
    ///
    /// * `size` - The size of the image in pixels.
    /// * `layout` - The channel layout of the pixels.
    /// * `data` - The pixel data of the image.
    ///
    /// # Errors
    ///
    /// If the image has no area, is too large to be stored, or the length of the
    /// pixel data does not match the image size, an error is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use ipa_image::{ChannelLayout, Image, ImageSize};
    ///
    /// let image = Image::new(
    ///     ImageSize {
    ///         width: 10,
    ///         height: 20,
    ///     },
    ///     ChannelLayout::Rgb,
    ///     vec![0; 10 * 20 * 3],
    /// )
    /// .unwrap();
    ///
    /// assert_eq!(image.size().width, 10);
    /// assert_eq!(image.size().height, 20);
    /// assert_eq!(image.num_channels(), 3);
    /// ```
    pub fn new(
        size: ImageSize,
        layout: ChannelLayout,
        data: Vec<i32>,
    ) -> Result<Self, ImageError> {
        let expected = num_samples(size, layout)?;
        if data.len() != expected {
            return Err(ImageError::InvalidChannelShape(data.len(), expected));
        }

        Ok(Self {
            size,
            layout,
            border: BorderMode::default(),
            data,
        })
    }

    /// Create a new image with the given size and every sample set to `val`.
    ///
    /// # Errors
    ///
    /// If the image has no area or is too large to be stored, an error is returned.
    pub fn from_size_val(
        size: ImageSize,
        layout: ChannelLayout,
        val: i32,
    ) -> Result<Self, ImageError> {
        let data = vec![val; num_samples(size, layout)?];
        Image::new(size, layout, data)
    }

    /// Create a new blank canvas filled with zeros.
    ///
    /// # Errors
    ///
    /// If the image has no area, an error is returned.
    pub fn zeros(size: ImageSize, layout: ChannelLayout) -> Result<Self, ImageError> {
        Image::from_size_val(size, layout, 0)
    }

    /// Create a zero-filled image of the given size that shares this image's
    /// layout and border mode.
    ///
    /// This is the starting point of every transform output.
    ///
    /// # Errors
    ///
    /// If the size has no area, an error is returned.
    pub fn blank_with_size(&self, size: ImageSize) -> Result<Self, ImageError> {
        Ok(Image::zeros(size, self.layout)?.with_border_mode(self.border))
    }

    /// Create a zero-filled image with the same size, layout and border mode.
    pub fn blank_like(&self) -> Self {
        Self {
            size: self.size,
            layout: self.layout,
            border: self.border,
            data: vec![0; self.data.len()],
        }
    }

    /// Replace the border mode, consuming the image.
    pub fn with_border_mode(mut self, border: BorderMode) -> Self {
        self.border = border;
        self
    }

    /// Replace the border mode in place.
    pub fn set_border_mode(&mut self, border: BorderMode) {
        self.border = border;
    }

    /// Get the border mode used for out-of-bounds lookups.
    pub fn border_mode(&self) -> BorderMode {
        self.border
    }

    /// Get the channel layout of the image.
    pub fn layout(&self) -> ChannelLayout {
        self.layout
    }

    /// Get the size of the image in pixels.
    pub fn size(&self) -> ImageSize {
        self.size
    }

    /// Get the number of columns of the image.
    pub fn cols(&self) -> usize {
        self.width()
    }

    /// Get the number of rows of the image.
    pub fn rows(&self) -> usize {
        self.height()
    }

    /// Get the width of the image in pixels.
    pub fn width(&self) -> usize {
        self.size.width
    }

    /// Get the height of the image in pixels.
    pub fn height(&self) -> usize {
        self.size.height
    }

    /// Get the number of channels in the image.
    pub fn num_channels(&self) -> usize {
        self.layout.num_channels()
    }

    /// Get the raw samples of the image.
    pub fn as_slice(&self) -> &[i32] {
        &self.data
    }

    /// Get the raw samples of the image mutably.
    pub fn as_slice_mut(&mut self) -> &mut [i32] {
        &mut self.data
    }

    /// Consume the image and return its raw samples.
    pub fn into_vec(self) -> Vec<i32> {
        self.data
    }

    /// Get the pixel at `(x, y)`, resolving out-of-bounds coordinates with the
    /// image's border mode.
    ///
    /// This never fails: any coordinate, however far outside the image, maps to
    /// a stored pixel or to a synthetic zero pixel.
    ///
    /// # Example
    ///
    /// ```
    /// use ipa_image::{BorderMode, ChannelLayout, Image, ImageSize};
    ///
    /// let image = Image::new(
    ///     ImageSize { width: 4, height: 1 },
    ///     ChannelLayout::Gray,
    ///     vec![10, 20, 30, 40],
    /// )
    /// .unwrap();
    ///
    /// assert_eq!(image.get_pixel(-1, 0), &[0]);
    ///
    /// let image = image.with_border_mode(BorderMode::Circular);
    /// assert_eq!(image.get_pixel(-1, 0), &[40]);
    /// ```
    #[inline]
    pub fn get_pixel(&self, x: isize, y: isize) -> &[i32] {
        let c = self.num_channels();
        match (
            self.border.map_index(x, self.width()),
            self.border.map_index(y, self.height()),
        ) {
            (Some(x), Some(y)) => {
                let offset = (y * self.width() + x) * c;
                &self.data[offset..offset + c]
            }
            _ => &ZERO_PIXEL[..c],
        }
    }

    /// Get a single in-bounds sample.
    ///
    /// # Errors
    ///
    /// If the coordinates or the channel index are out of bounds, an error is returned.
    pub fn get_sample(&self, x: usize, y: usize, ch: usize) -> Result<i32, ImageError> {
        let offset = self.offset(x, y)?;
        if ch >= self.num_channels() {
            return Err(ImageError::ChannelIndexOutOfBounds(ch, self.num_channels()));
        }
        Ok(self.data[offset + ch])
    }

    /// Write a whole pixel at an in-bounds position.
    ///
    /// # Errors
    ///
    /// If the coordinates are out of bounds, or the pixel does not have one
    /// sample per channel, an error is returned.
    pub fn set_pixel(&mut self, x: usize, y: usize, pixel: &[i32]) -> Result<(), ImageError> {
        if pixel.len() != self.num_channels() {
            return Err(ImageError::InvalidPixelLength(
                pixel.len(),
                self.num_channels(),
            ));
        }
        let offset = self.offset(x, y)?;
        self.data[offset..offset + pixel.len()].copy_from_slice(pixel);
        Ok(())
    }

    /// Write one channel of the pixel at an in-bounds position.
    ///
    /// # Errors
    ///
    /// If the coordinates or the channel index are out of bounds, an error is returned.
    pub fn set_channel(
        &mut self,
        x: usize,
        y: usize,
        ch: usize,
        value: i32,
    ) -> Result<(), ImageError> {
        if ch >= self.num_channels() {
            return Err(ImageError::ChannelIndexOutOfBounds(ch, self.num_channels()));
        }
        let offset = self.offset(x, y)?;
        self.data[offset + ch] = value;
        Ok(())
    }

    /// Get a channel of the image as a grayscale image.
    ///
    /// The border mode is kept.
    ///
    /// # Errors
    ///
    /// If the channel index is out of bounds, an error is returned.
    pub fn channel(&self, ch: usize) -> Result<Image, ImageError> {
        let c = self.num_channels();
        if ch >= c {
            return Err(ImageError::ChannelIndexOutOfBounds(ch, c));
        }

        let data = self.data.chunks_exact(c).map(|px| px[ch]).collect();

        Ok(Image::new(self.size, ChannelLayout::Gray, data)?.with_border_mode(self.border))
    }

    fn offset(&self, x: usize, y: usize) -> Result<usize, ImageError> {
        if x >= self.width() || y >= self.height() {
            return Err(ImageError::PixelIndexOutOfBounds(
                x,
                y,
                self.width(),
                self.height(),
            ));
        }
        Ok((y * self.width() + x) * self.num_channels())
    }
}

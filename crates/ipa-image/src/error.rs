/// An error type for the image module.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ImageError {
    /// Error when channel and shape are not valid.
    #[error("Data length ({0}) does not match the image size ({1})")]
    InvalidChannelShape(usize, usize),

    /// Error when the image size is not valid.
    #[error("Invalid image size: width {0}, height {1}")]
    InvalidImageSize(usize, usize),

    /// Error when the pixel coordinates are out of bounds.
    #[error("Pixel coordinates ({0}, {1}) are out of bounds ({2}, {3})")]
    PixelIndexOutOfBounds(usize, usize, usize, usize),

    /// Error when the channel index is out of bounds.
    #[error("Channel index ({0}) is out of bounds ({1})")]
    ChannelIndexOutOfBounds(usize, usize),

    /// Error when a pixel does not carry one sample per channel.
    #[error("Pixel has {0} samples but the image has {1} channels")]
    InvalidPixelLength(usize, usize),

    /// Error when the crop rectangle has no area.
    #[error("Invalid crop region: ({0}, {1}) to ({2}, {3})")]
    InvalidCropRegion(isize, isize, isize, isize),

    /// Error when a scale factor is not a positive finite number.
    #[error("Invalid scale factors: x {0}, y {1}")]
    InvalidScaleFactor(f64, f64),

    /// Error when the kernel is empty or its rows have different lengths.
    #[error("Kernel must be a non-empty rectangular array")]
    InvalidKernelShape,

    /// Error when the filter window is empty.
    #[error("Invalid window size: width {0}, height {1}")]
    InvalidWindowSize(usize, usize),

    /// Error when a sample falls outside the 8-bit intensity domain.
    #[error("Sample value {0} is outside the range [0, 255]")]
    SampleOutOfRange(i32),

    /// Error when the clamping bounds are reversed.
    #[error("Invalid clamp range: [{0}, {1}]")]
    InvalidClampRange(i32, i32),
}

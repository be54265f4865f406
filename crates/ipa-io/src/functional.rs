use std::path::Path;

use image::{DynamicImage, ImageBuffer, Luma, LumaA, Rgb, Rgba};
use ipa_image::{ChannelLayout, Image, ImageSize};

use crate::error::IoError;

/// Reads an image from the given file path.
///
/// The method tries to read from any image format supported by the image crate.
/// 8-bit gray, gray+alpha, RGB and RGBA images keep their layout; any other
/// pixel format is converted to the 8-bit layout with the same channel count.
///
/// # Arguments
///
/// * `file_path` - The path to a valid image file.
///
/// # Returns
///
/// An image with [`ipa_image::BorderMode::Zero`] containing the image data.
pub fn read_image_any(file_path: impl AsRef<Path>) -> Result<Image, IoError> {
    let file_path = file_path.as_ref();

    // verify the file exists
    if !file_path.exists() {
        return Err(IoError::FileDoesNotExist(file_path.to_path_buf()));
    }

    let img = image::ImageReader::open(file_path)?
        .with_guessed_format()?
        .decode()?;

    log::debug!("decoded {:?} as {:?}", file_path, img.color());

    from_dynamic_image(img)
}

/// Decodes an image from an in-memory encoded buffer.
///
/// See [`read_image_any`] for the pixel format handling.
pub fn decode_image_bytes(bytes: &[u8]) -> Result<Image, IoError> {
    let img = image::ImageReader::new(std::io::Cursor::new(bytes))
        .with_guessed_format()?
        .decode()?;

    from_dynamic_image(img)
}

/// Writes an image to the given file path.
///
/// The format is picked from the file extension. Samples are saturated to
/// `[0, 255]` on the way out; the image itself is not modified.
///
/// # Arguments
///
/// * `file_path` - The destination path.
/// * `image` - The image to encode.
pub fn write_image_any(file_path: impl AsRef<Path>, image: &Image) -> Result<(), IoError> {
    let file_path = file_path.as_ref();
    let img = to_dynamic_image(image)?;

    log::debug!(
        "encoding {} {:?} image to {:?}",
        image.size(),
        image.layout(),
        file_path
    );

    img.save(file_path)?;

    Ok(())
}

fn from_dynamic_image(img: DynamicImage) -> Result<Image, IoError> {
    let size = ImageSize {
        width: img.width() as usize,
        height: img.height() as usize,
    };

    let (layout, raw) = match img.color().channel_count() {
        1 => (ChannelLayout::Gray, img.into_luma8().into_raw()),
        2 => (ChannelLayout::GrayAlpha, img.into_luma_alpha8().into_raw()),
        3 => (ChannelLayout::Rgb, img.into_rgb8().into_raw()),
        _ => (ChannelLayout::Rgba, img.into_rgba8().into_raw()),
    };

    let data = raw.into_iter().map(i32::from).collect();

    Ok(Image::new(size, layout, data)?)
}

fn to_dynamic_image(image: &Image) -> Result<DynamicImage, IoError> {
    let (width, height) = (image.width() as u32, image.height() as u32);
    let raw = image
        .as_slice()
        .iter()
        .map(|&v| v.clamp(0, 255) as u8)
        .collect::<Vec<_>>();

    let mismatch = || IoError::EncodeBufferMismatch(image.size());

    let img = match image.layout() {
        ChannelLayout::Gray => DynamicImage::ImageLuma8(
            ImageBuffer::<Luma<u8>, _>::from_raw(width, height, raw).ok_or_else(mismatch)?,
        ),
        ChannelLayout::GrayAlpha => DynamicImage::ImageLumaA8(
            ImageBuffer::<LumaA<u8>, _>::from_raw(width, height, raw).ok_or_else(mismatch)?,
        ),
        ChannelLayout::Rgb => DynamicImage::ImageRgb8(
            ImageBuffer::<Rgb<u8>, _>::from_raw(width, height, raw).ok_or_else(mismatch)?,
        ),
        ChannelLayout::Rgba => DynamicImage::ImageRgba8(
            ImageBuffer::<Rgba<u8>, _>::from_raw(width, height, raw).ok_or_else(mismatch)?,
        ),
    };

    Ok(img)
}

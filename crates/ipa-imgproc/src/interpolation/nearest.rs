use ipa_image::Image;

// pull coordinates at or past the last pixel back onto it
#[inline]
fn clamp_to_last(value: f64, len: usize) -> f64 {
    if value >= len as f64 {
        (len - 1) as f64
    } else {
        value
    }
}

/// Kernel for nearest neighbor interpolation
///
/// # Arguments
///
/// * `image` - The input image container.
/// * `u` - The x coordinate of the pixel to interpolate.
/// * `v` - The y coordinate of the pixel to interpolate.
/// * `snap` - Maps a coordinate onto the pixel grid (truncation or rounding).
/// * `pixel` - The output pixel.
pub(crate) fn nearest_neighbor_interpolation(
    image: &Image,
    u: f64,
    v: f64,
    snap: fn(f64) -> f64,
    pixel: &mut [i32],
) {
    let iu = snap(clamp_to_last(u, image.cols()));
    let iv = snap(clamp_to_last(v, image.rows()));

    // rounding may land one past the edge again
    let iu = clamp_to_last(iu, image.cols()) as isize;
    let iv = clamp_to_last(iv, image.rows()) as isize;

    pixel.copy_from_slice(image.get_pixel(iu, iv));
}

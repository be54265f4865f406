use ipa_image::Image;

/// Kernel for bilinear interpolation
///
/// The four surrounding pixels are read through the image's border mode, so a
/// coordinate on the last row or column blends with whatever the border mode
/// provides past the edge.
///
/// # Arguments
///
/// * `image` - The input image container.
/// * `u` - The x coordinate of the pixel to interpolate.
/// * `v` - The y coordinate of the pixel to interpolate.
/// * `pixel` - The output pixel.
pub(crate) fn bilinear_interpolation(image: &Image, u: f64, v: f64, pixel: &mut [i32]) {
    let (u0, u1) = (u.floor(), u.ceil());
    let (v0, v1) = (v.floor(), v.ceil());

    let frac_u = u - u0;
    let frac_v = v - v0;

    let p00 = image.get_pixel(u0 as isize, v0 as isize);
    let p01 = image.get_pixel(u1 as isize, v0 as isize);
    let p10 = image.get_pixel(u0 as isize, v1 as isize);
    let p11 = image.get_pixel(u1 as isize, v1 as isize);

    for (k, out) in pixel.iter_mut().enumerate() {
        let top = p00[k] as f64 * (1.0 - frac_u) + p01[k] as f64 * frac_u;
        let bottom = p10[k] as f64 * (1.0 - frac_u) + p11[k] as f64 * frac_u;
        *out = (top * (1.0 - frac_v) + bottom * frac_v).round_ties_even() as i32;
    }
}

use ipa_image::Image;

/// Visit every output pixel row by row together with its `(x, y)` position.
pub(crate) fn iter_pixels_mut(dst: &mut Image, mut f: impl FnMut(usize, usize, &mut [i32])) {
    let (cols, c) = (dst.cols(), dst.num_channels());
    dst.as_slice_mut()
        .chunks_exact_mut(cols * c)
        .enumerate()
        .for_each(|(y, row)| {
            row.chunks_exact_mut(c)
                .enumerate()
                .for_each(|(x, pixel)| f(x, y, pixel));
        });
}

/// Map every sample of `src` into the matching sample of `dst`.
///
/// PRECONDITION: `src` and `dst` must have the same shape.
pub(crate) fn iter_samples_val(src: &Image, dst: &mut Image, f: impl Fn(i32) -> i32) {
    dst.as_slice_mut()
        .iter_mut()
        .zip(src.as_slice())
        .for_each(|(out, &inp)| *out = f(inp));
}

/// Convert a real valued result into a sample, rounding towards negative infinity.
///
/// Values beyond the `i32` range saturate and NaN maps to zero.
#[inline]
pub(crate) fn floor_sample(v: f64) -> i32 {
    v.floor() as i32
}

use ipa_image::ImageError;

use super::Kernel;

/// Create a box blur kernel.
///
/// # Arguments
///
/// * `width` - The number of columns of the kernel.
/// * `height` - The number of rows of the kernel.
///
/// # Returns
///
/// A kernel whose weights all equal `1 / (width * height)`.
pub fn box_kernel(width: usize, height: usize) -> Result<Kernel, ImageError> {
    let weight = 1.0 / (width * height) as f64;
    Kernel::from_shape_vec(width, height, vec![weight; width * height])
}

/// Create a 1D gaussian kernel.
///
/// # Arguments
///
/// * `kernel_size` - The size of the kernel.
/// * `sigma` - The sigma of the gaussian kernel.
///
/// # Returns
///
/// A normalized vector of the kernel.
pub fn gaussian_kernel_1d(kernel_size: usize, sigma: f64) -> Vec<f64> {
    let mut kernel = Vec::with_capacity(kernel_size);

    let mean = (kernel_size as f64 - 1.0) / 2.0;
    let sigma_sq = sigma * sigma;

    // compute the kernel
    for i in 0..kernel_size {
        let x = i as f64 - mean;
        kernel.push((-(x * x) / (2.0 * sigma_sq)).exp());
    }

    // normalize the kernel
    let norm = kernel.iter().sum::<f64>();
    kernel.iter_mut().for_each(|k| *k /= norm);
    kernel
}

/// Create a square gaussian blur kernel.
///
/// The kernel is the outer product of [`gaussian_kernel_1d`] with itself, so its
/// weights sum to one.
///
/// # Errors
///
/// Returns an error if `kernel_size` is zero.
pub fn gaussian_kernel(kernel_size: usize, sigma: f64) -> Result<Kernel, ImageError> {
    let kernel_1d = gaussian_kernel_1d(kernel_size, sigma);
    let data = kernel_1d
        .iter()
        .flat_map(|&ky| kernel_1d.iter().map(move |&kx| ky * kx))
        .collect();
    Kernel::from_shape_vec(kernel_size, kernel_size, data)
}

/// Create the 3x3 sobel kernels.
///
/// # Returns
///
/// The horizontal and vertical derivative kernels.
pub fn sobel_kernels() -> (Kernel, Kernel) {
    #[rustfmt::skip]
    let kernel_x = [
        -1.0, 0.0, 1.0,
        -2.0, 0.0, 2.0,
        -1.0, 0.0, 1.0,
    ];
    #[rustfmt::skip]
    let kernel_y = [
        -1.0, -2.0, -1.0,
        0.0, 0.0, 0.0,
        1.0, 2.0, 1.0,
    ];
    (Kernel::from_3x3(kernel_x), Kernel::from_3x3(kernel_y))
}

/// Create the 3x3 laplacian kernel with a 4-connected neighborhood.
pub fn laplacian_kernel() -> Kernel {
    #[rustfmt::skip]
    let kernel = [
        0.0, 1.0, 0.0,
        1.0, -4.0, 1.0,
        0.0, 1.0, 0.0,
    ];
    Kernel::from_3x3(kernel)
}

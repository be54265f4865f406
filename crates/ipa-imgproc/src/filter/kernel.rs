use ipa_image::ImageError;

/// A dense 2D grid of real valued weights used for linear convolution.
///
/// Weights are stored row-major; `get(row, col)` addresses row `row` of
/// `height` and column `col` of `width`. Any rectangular shape is accepted.
#[derive(Debug, Clone, PartialEq)]
pub struct Kernel {
    width: usize,
    height: usize,
    data: Vec<f64>,
}

impl Kernel {
    /// Create a kernel from its rows.
    ///
    /// # Errors
    ///
    /// Returns an error if there are no rows, the rows are empty, or the rows
    /// have different lengths.
    ///
    /// # Example
    ///
    /// ```
    /// use ipa_imgproc::filter::Kernel;
    ///
    /// let kernel = Kernel::new(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]).unwrap();
    /// assert_eq!(kernel.width(), 3);
    /// assert_eq!(kernel.height(), 2);
    /// assert_eq!(kernel.get(1, 0), 4.0);
    /// ```
    pub fn new(rows: Vec<Vec<f64>>) -> Result<Self, ImageError> {
        let width = rows.first().map_or(0, Vec::len);
        if width == 0 || rows.iter().any(|row| row.len() != width) {
            return Err(ImageError::InvalidKernelShape);
        }

        Ok(Self {
            width,
            height: rows.len(),
            data: rows.into_iter().flatten().collect(),
        })
    }

    /// Create a kernel from row-major weights.
    ///
    /// # Errors
    ///
    /// Returns an error if the kernel has no area or `data` does not hold
    /// `width * height` weights.
    pub fn from_shape_vec(
        width: usize,
        height: usize,
        data: Vec<f64>,
    ) -> Result<Self, ImageError> {
        if width == 0 || height == 0 || data.len() != width * height {
            return Err(ImageError::InvalidKernelShape);
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// The single tap kernel `[[1]]`.
    pub fn identity() -> Self {
        Self {
            width: 1,
            height: 1,
            data: vec![1.0],
        }
    }

    pub(crate) fn from_3x3(weights: [f64; 9]) -> Self {
        Self {
            width: 3,
            height: 3,
            data: weights.to_vec(),
        }
    }

    /// Get the number of columns of the kernel.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Get the number of rows of the kernel.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Get the weight at `(row, col)`.
    ///
    /// PRECONDITION: `row < height` and `col < width`.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.data[row * self.width + col]
    }

    /// Get the row-major weights.
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }
}

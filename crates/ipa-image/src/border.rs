/// A border type used to resolve pixel lookups outside of the image.
///
/// The mode is attached to an [`crate::Image`] and every image derived from it
/// by a transform inherits the same mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum BorderMode {
    /// Out-of-bounds pixels read as zero in every channel.
    ///
    /// Example: ...0 0 0 | a b c d | 0 0 0...
    #[default]
    Zero,

    /// The image repeats periodically in both directions.
    ///
    /// Example: ...b c d | a b c d | a b c...
    Circular,

    /// The image is mirrored at each edge, starting with the edge pixel itself.
    ///
    /// Example: ...c b a | a b c d | d c b...
    Reflected,
}

impl BorderMode {
    /// Maps index `i` to a valid index within `[0, len)` according to the border mode.
    ///
    /// Returns `None` when the border mode produces a synthetic value instead of
    /// reading from storage, which only happens for [`BorderMode::Zero`].
    ///
    /// # Arguments
    ///
    /// * `i` - The (possibly out-of-range) coordinate index.
    /// * `len` - The valid length of the dimension. Must be non-zero.
    ///
    /// # Example
    ///
    /// ```
    /// use ipa_image::BorderMode;
    ///
    /// assert_eq!(BorderMode::Zero.map_index(-1, 4), None);
    /// assert_eq!(BorderMode::Circular.map_index(-1, 4), Some(3));
    /// assert_eq!(BorderMode::Reflected.map_index(-1, 4), Some(0));
    /// assert_eq!(BorderMode::Reflected.map_index(5, 4), Some(2));
    /// ```
    #[inline]
    pub fn map_index(&self, i: isize, len: usize) -> Option<usize> {
        let n = len as isize;
        match self {
            BorderMode::Zero => (0..n).contains(&i).then_some(i as usize),
            BorderMode::Circular => Some(i.rem_euclid(n) as usize),
            BorderMode::Reflected => {
                // odd periods run backwards
                let r = i.rem_euclid(n);
                if i.div_euclid(n).rem_euclid(2) == 0 {
                    Some(r as usize)
                } else {
                    Some((n - 1 - r) as usize)
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::BorderMode;

    #[test]
    fn zero_inside_and_outside() {
        assert_eq!(BorderMode::Zero.map_index(0, 3), Some(0));
        assert_eq!(BorderMode::Zero.map_index(2, 3), Some(2));
        assert_eq!(BorderMode::Zero.map_index(3, 3), None);
        assert_eq!(BorderMode::Zero.map_index(-1, 3), None);
    }

    #[test]
    fn circular_is_periodic() {
        let len = 4;
        for i in -13..13 {
            assert_eq!(
                BorderMode::Circular.map_index(i, len),
                BorderMode::Circular.map_index(i + len as isize, len)
            );
        }
        assert_eq!(BorderMode::Circular.map_index(-1, len), Some(3));
        assert_eq!(BorderMode::Circular.map_index(-5, len), Some(3));
        assert_eq!(BorderMode::Circular.map_index(9, len), Some(1));
    }

    #[test]
    fn reflected_mirrors_without_repeating_period() {
        let len = 3;
        let mapped = (-6..9)
            .map(|i| BorderMode::Reflected.map_index(i, len).unwrap())
            .collect::<Vec<_>>();
        #[rustfmt::skip]
        let expected = vec![
            0, 1, 2,
            2, 1, 0,
            0, 1, 2,
            2, 1, 0,
            0, 1, 2,
        ];
        assert_eq!(mapped, expected);
    }

    #[test]
    fn single_element_axis() {
        for mode in [BorderMode::Circular, BorderMode::Reflected] {
            for i in -3..3 {
                assert_eq!(mode.map_index(i, 1), Some(0));
            }
        }
    }
}

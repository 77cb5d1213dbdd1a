// ============================================================================
// SIMD Max Finder
// Vectorized first-maximum index search over f64 columns
// ============================================================================

/// SIMD-accelerated search for the first index holding the maximum.
///
/// Works on `f64`, so callers hand it a lossy copy of exact values. `NaN`
/// entries are ignored.
pub struct SimdMaxFinder;

impl SimdMaxFinder {
    /// Index of the first element equal to the maximum, or `None` when the
    /// slice is empty or holds only `NaN`.
    pub fn first_max_index(values: &[f64]) -> Option<usize> {
        let peak = Self::peak(values);
        if peak == f64::NEG_INFINITY && !values.contains(&f64::NEG_INFINITY) {
            return None;
        }
        values.iter().position(|&v| v == peak)
    }

    #[cfg(target_arch = "x86_64")]
    fn peak(values: &[f64]) -> f64 {
        if is_x86_feature_detected!("avx2") {
            // Safety: AVX2 support checked above
            unsafe { Self::simd_peak(values) }
        } else {
            Self::scalar_peak(values)
        }
    }

    #[cfg(not(target_arch = "x86_64"))]
    fn peak(values: &[f64]) -> f64 {
        Self::scalar_peak(values)
    }

    #[cfg(target_arch = "x86_64")]
    #[target_feature(enable = "avx2")]
    unsafe fn simd_peak(values: &[f64]) -> f64 {
        use std::arch::x86_64::*;

        let chunks = values.chunks_exact(4);
        let remainder = chunks.remainder();

        let mut peak_vec = _mm256_set1_pd(f64::NEG_INFINITY);
        for chunk in chunks {
            // Load 4 values
            let v = _mm256_loadu_pd(chunk.as_ptr());
            // maxpd returns the second operand when the first is NaN
            peak_vec = _mm256_max_pd(v, peak_vec);
        }

        let mut lanes = [0.0f64; 4];
        _mm256_storeu_pd(lanes.as_mut_ptr(), peak_vec);

        // Fold lanes and the remainder with scalar code
        lanes
            .iter()
            .chain(remainder)
            .fold(f64::NEG_INFINITY, |acc, &v| acc.max(v))
    }

    fn scalar_peak(values: &[f64]) -> f64 {
        values.iter().fold(f64::NEG_INFINITY, |acc, &v| acc.max(v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_max_index() {
        let values = vec![1.1, 2.2, -3.0, 0.5, 2.1];
        assert_eq!(SimdMaxFinder::first_max_index(&values), Some(1));
    }

    #[test]
    fn test_tie_resolves_to_first() {
        let values = vec![5.0, 5.0, 3.0];
        assert_eq!(SimdMaxFinder::first_max_index(&values), Some(0));

        // tie spanning the vector body and the remainder
        let mut long = vec![0.0; 9];
        long[6] = 7.5;
        long[8] = 7.5;
        assert_eq!(SimdMaxFinder::first_max_index(&long), Some(6));
    }

    #[test]
    fn test_all_negative() {
        let values = vec![-4.0, -1.5, -2.0, -1.5, -9.0, -3.0];
        assert_eq!(SimdMaxFinder::first_max_index(&values), Some(1));
    }

    #[test]
    fn test_max_in_remainder() {
        let values = vec![1.0, 2.0, 3.0, 4.0, 10.0];
        assert_eq!(SimdMaxFinder::first_max_index(&values), Some(4));
    }

    #[test]
    fn test_nan_ignored() {
        let values = vec![f64::NAN, 1.0, f64::NAN, 3.0, 2.0];
        assert_eq!(SimdMaxFinder::first_max_index(&values), Some(3));

        assert_eq!(SimdMaxFinder::first_max_index(&[f64::NAN, f64::NAN]), None);
    }

    #[test]
    fn test_empty() {
        assert_eq!(SimdMaxFinder::first_max_index(&[]), None);
    }

    #[test]
    fn test_matches_scalar() {
        let values: Vec<f64> = (0..37).map(|i| ((i * 7919) % 101) as f64 - 50.0).collect();
        let peak = SimdMaxFinder::scalar_peak(&values);
        let expected = values.iter().position(|&v| v == peak);
        assert_eq!(SimdMaxFinder::first_max_index(&values), expected);
    }
}

// src/validation/comparator.rs
//! Worst-case deviation between device output and host references

use super::ValidationError;
use crate::kernels::MathFn;

/// Maximum absolute differences against both references
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DeviationStats {
    /// Against the device math library run on the host
    pub max_diff_acc: f32,
    /// Against the standard library
    pub max_diff_std: f32,
}

/// Running max step. A NaN difference replaces the current max and is
/// itself replaced by the next element.
#[inline]
fn running_max(max: f32, diff: f32) -> f32 {
    if diff < max { max } else { diff }
}

/// `max_i |output[i] - f(input[i])|` for `f` in `{f_acc, f_std}`
pub fn compare(input: &[f32], output: &[f32], f_acc: MathFn, f_std: MathFn) -> Result<DeviationStats, ValidationError> {
    if input.len() != output.len() {
        return Err(ValidationError::LengthMismatch { input: input.len(), output: output.len() });
    }

    let mut stats = DeviationStats::default();
    for (&x, &y) in input.iter().zip(output.iter()) {
        stats.max_diff_acc = running_max(stats.max_diff_acc, (y - f_acc(x)).abs());
        stats.max_diff_std = running_max(stats.max_diff_std, (y - f_std(x)).abs());
    }

    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity(x: f32) -> f32 {
        x
    }

    fn plus_half(x: f32) -> f32 {
        x + 0.5
    }

    fn double(x: f32) -> f32 {
        x * 2.0
    }

    #[test]
    fn test_empty_is_zero() {
        let stats = compare(&[], &[], identity, plus_half).unwrap();
        assert_eq!(stats, DeviationStats::default());
    }

    #[test]
    fn test_exact_match() {
        let a = [1.0, 2.0, 3.0];
        let stats = compare(&a, &a, identity, identity).unwrap();
        assert_eq!(stats.max_diff_acc, 0.0);
        assert_eq!(stats.max_diff_std, 0.0);
    }

    #[test]
    fn test_references_tracked_independently() {
        let a = [1.0, 2.0, 4.0];
        let b = [1.0, 2.0, 4.0];
        let stats = compare(&a, &b, plus_half, double).unwrap();
        assert_eq!(stats.max_diff_acc, 0.5);
        assert_eq!(stats.max_diff_std, 4.0);
    }

    #[test]
    fn test_max_not_mean() {
        let a = [0.0, 0.0, 0.0, 0.0];
        let b = [0.0, 3.0, 0.0, 1.0];
        let stats = compare(&a, &b, identity, identity).unwrap();
        assert_eq!(stats.max_diff_acc, 3.0);
    }

    #[test]
    fn test_length_mismatch() {
        let result = compare(&[1.0, 2.0], &[1.0], identity, identity);
        assert!(matches!(result, Err(ValidationError::LengthMismatch { input: 2, output: 1 })));
    }

    #[test]
    fn test_nan_not_sticky() {
        assert!(running_max(1.0, f32::NAN).is_nan());
        assert_eq!(running_max(f32::NAN, 2.0), 2.0);

        let a = [0.0, 0.0];
        let b = [f32::NAN, 1.0];
        let stats = compare(&a, &b, identity, identity).unwrap();
        assert_eq!(stats.max_diff_acc, 1.0);
    }
}

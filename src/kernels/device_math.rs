// src/kernels/device_math.rs
//! Math primitives executed by the device kernels
//!
//! These are the same functions the host calls for the accelerated-math
//! reference, so a kernel and its reference share one implementation.

/// Single-precision power, `x^y`
#[inline]
pub fn pow(x: f32, y: f32) -> f32 {
    libm::powf(x, y)
}

/// Single-precision natural exponential, `e^x`
#[inline]
pub fn exp(x: f32) -> f32 {
    libm::expf(x)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pow_small_integers() {
        assert_eq!(pow(0.0, 2.0), 0.0);
        assert_eq!(pow(1.0, 2.0), 1.0);
        assert_eq!(pow(3.0, 2.0), 9.0);
        assert_eq!(pow(10.0, 2.0), 100.0);
    }

    #[test]
    fn test_exp_known_values() {
        assert_eq!(exp(0.0), 1.0);
        assert!((exp(1.0) - std::f32::consts::E).abs() < 1e-6);
        assert!((exp(10.0) - 22026.465).abs() / 22026.465 < 1e-6);
    }

    #[test]
    fn test_deterministic() {
        for i in 0..100 {
            let x = i as f32 * 0.1;
            assert_eq!(pow(x, 2.0).to_bits(), pow(x, 2.0).to_bits());
            assert_eq!(exp(x).to_bits(), exp(x).to_bits());
        }
    }
}

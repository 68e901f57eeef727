// src/kernels/mod.rs
//! Elementwise kernels under test
//!
//! Each kernel pairs the function the device executes with the two host
//! references it is checked against.

pub mod device_math;

use std::fmt;

/// Scalar math capability shared by kernels and references
pub type MathFn = fn(f32) -> f32;

/// Exponent used by the square kernel
pub const SQUARE_EXPONENT: f32 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementwiseKernel {
    /// `x^2` through the power primitive
    Square,
    /// `e^x`
    Exponential,
}

impl ElementwiseKernel {
    /// Kernels in the order the harness runs them
    pub const ALL: [ElementwiseKernel; 2] = [ElementwiseKernel::Square, ElementwiseKernel::Exponential];

    /// Banner label used in the report
    pub fn label(&self) -> &'static str {
        match self {
            ElementwiseKernel::Square => "POW",
            ElementwiseKernel::Exponential => "EXP",
        }
    }

    /// Function executed by each work-item, also the accelerated reference
    pub fn device_fn(&self) -> MathFn {
        match self {
            ElementwiseKernel::Square => device_square,
            ElementwiseKernel::Exponential => device_math::exp,
        }
    }

    /// Standard library reference
    pub fn std_fn(&self) -> MathFn {
        match self {
            ElementwiseKernel::Square => std_square,
            ElementwiseKernel::Exponential => f32::exp,
        }
    }

    #[inline]
    pub fn apply(&self, x: f32) -> f32 {
        (self.device_fn())(x)
    }
}

impl fmt::Display for ElementwiseKernel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ElementwiseKernel::Square => write!(f, "square"),
            ElementwiseKernel::Exponential => write!(f, "exponential"),
        }
    }
}

// Power with a float exponent, not x * x.
fn device_square(x: f32) -> f32 {
    device_math::pow(x, SQUARE_EXPONENT)
}

fn std_square(x: f32) -> f32 {
    x.powf(SQUARE_EXPONENT)
}

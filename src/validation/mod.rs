// src/validation/mod.rs
//! Device vs host validation of elementwise kernels
//!
//! Generates random samples, runs a kernel on a device and measures the
//! worst-case absolute deviation from two host references.

pub mod sample;
pub mod comparator;
pub mod routine;

// Re-export core validation types
pub use sample::SampleGenerator;
pub use comparator::{compare, DeviationStats};
pub use routine::{run_validation, ValidationReport, ValidationSuite};

use crate::config::ConfigError;
use crate::device::DeviceError;

#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Device error: {0}")]
    Device(#[from] DeviceError),

    #[error("Sample/result length mismatch: {input} vs {output}")]
    LengthMismatch { input: usize, output: usize },

    #[error("Report output failed: {0}")]
    Io(#[from] std::io::Error),
}

// src/device/mod.rs
//! Compute device abstraction
//!
//! A device runs a scalar kernel over every element of an input buffer,
//! one work-item per element, and blocks the caller until all work-items
//! have written their output.

pub mod nd_range;
pub mod cpu_queue;

pub use nd_range::NdRange;
pub use cpu_queue::CpuQueue;

use crate::kernels::MathFn;
use std::time::Duration;

/// Completion record of a kernel launch
#[derive(Debug, Clone, PartialEq)]
pub struct LaunchEvent {
    pub range: NdRange,
    /// Wall time between submission and completion, if the queue profiles
    pub elapsed: Option<Duration>,
}

impl LaunchEvent {
    pub fn profiling_info(&self) -> Option<Duration> {
        self.elapsed
    }
}

/// Core trait every execution queue implements
pub trait ComputeDevice {
    /// Human-readable device identity
    fn name(&self) -> &str;

    /// Whether launches carry execution timings
    fn has_profiling(&self) -> bool;

    /// Compute `output[i] = kernel(input[i])` for every i in `range`.
    /// Returns only after every work-item has completed.
    fn submit(&self, kernel: MathFn, range: NdRange, input: &[f32], output: &mut [f32]) -> Result<LaunchEvent, DeviceError>;
}

#[derive(Debug, thiserror::Error)]
pub enum DeviceError {
    #[error("Device unavailable: {0}")]
    Unavailable(#[from] rayon::ThreadPoolBuildError),

    #[error("Invalid work-group size: {0}")]
    InvalidWorkGroup(usize),

    #[error("Buffer length mismatch: input {input}, output {output}")]
    LengthMismatch { input: usize, output: usize },

    #[error("Launch range covers {range} elements but buffers hold {buffer}")]
    RangeMismatch { range: usize, buffer: usize },
}

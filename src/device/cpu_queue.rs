// src/device/cpu_queue.rs
//! Default queue: work-groups scheduled on a dedicated rayon pool

use super::{ComputeDevice, DeviceError, LaunchEvent, NdRange};
use crate::kernels::MathFn;
use log::debug;
use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};
use std::time::Instant;

pub struct CpuQueue {
    pool: ThreadPool,
    name: String,
    profiling: bool,
}

impl CpuQueue {
    /// Create a profiling-enabled queue. `threads == 0` uses rayon's default.
    pub fn new(threads: usize) -> Result<Self, DeviceError> {
        let mut builder = ThreadPoolBuilder::new()
            .thread_name(|i| format!("parity-worker-{}", i));
        if threads > 0 {
            builder = builder.num_threads(threads);
        }
        let pool = builder.build()?;

        let name = format!("rayon CPU queue ({} threads)", pool.current_num_threads());
        debug!("created {}", name);

        Ok(Self {
            pool,
            name,
            profiling: true,
        })
    }

    /// Drop launch timings
    pub fn without_profiling(mut self) -> Self {
        self.profiling = false;
        self
    }

    pub fn thread_count(&self) -> usize {
        self.pool.current_num_threads()
    }
}

impl ComputeDevice for CpuQueue {
    fn name(&self) -> &str {
        &self.name
    }

    fn has_profiling(&self) -> bool {
        self.profiling
    }

    fn submit(&self, kernel: MathFn, range: NdRange, input: &[f32], output: &mut [f32]) -> Result<LaunchEvent, DeviceError> {
        if input.len() != output.len() {
            return Err(DeviceError::LengthMismatch { input: input.len(), output: output.len() });
        }
        if range.len != input.len() {
            return Err(DeviceError::RangeMismatch { range: range.len, buffer: input.len() });
        }
        if range.local == 0 {
            return Err(DeviceError::InvalidWorkGroup(range.local));
        }

        debug!(
            "launch: {} work-items in {} groups of {} ({} idle)",
            range.global, range.group_count(), range.local, range.idle_items()
        );

        let start = Instant::now();

        // Each group owns one chunk of the output, so writes never overlap.
        self.pool.install(|| {
            output
                .par_chunks_mut(range.local)
                .enumerate()
                .for_each(|(group, chunk)| {
                    for local_id in 0..range.local {
                        let global_id = range.global_id(group, local_id);
                        if range.in_bounds(global_id) {
                            chunk[local_id] = kernel(input[global_id]);
                        }
                    }
                });
        });

        let elapsed = self.profiling.then(|| start.elapsed());
        Ok(LaunchEvent { range, elapsed })
    }
}

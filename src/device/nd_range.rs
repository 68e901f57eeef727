// src/device/nd_range.rs
//! Launch geometry for one-dimensional kernels

use super::DeviceError;

/// Global and local extents of a kernel launch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NdRange {
    /// Number of valid elements
    pub len: usize,
    /// Work-items per work-group
    pub local: usize,
    /// Total work-items launched, a multiple of `local`
    pub global: usize,
}

impl NdRange {
    /// Round `len` up to whole work-groups
    pub fn new(len: usize, local: usize) -> Result<Self, DeviceError> {
        if local == 0 {
            return Err(DeviceError::InvalidWorkGroup(local));
        }
        let groups = len.div_ceil(local);
        Ok(Self {
            len,
            local,
            global: groups * local,
        })
    }

    pub fn group_count(&self) -> usize {
        self.global / self.local
    }

    /// Global id of a work-item
    #[inline]
    pub fn global_id(&self, group: usize, local_id: usize) -> usize {
        group * self.local + local_id
    }

    /// Whether a work-item maps to a real element
    #[inline]
    pub fn in_bounds(&self, global_id: usize) -> bool {
        global_id < self.len
    }

    /// Work-items in the last group that do no work
    pub fn idle_items(&self) -> usize {
        self.global - self.len
    }
}

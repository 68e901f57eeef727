// src/report/mod.rs
//! Human-readable result output

use crate::device::ComputeDevice;
use crate::validation::ValidationReport;
use std::io::{self, Write};

/// Bytes held by the sample and result arrays together, saturating at `usize::MAX`
pub fn total_data_volume(len: usize) -> usize {
    len.saturating_mul(std::mem::size_of::<f32>() * 2)
}

pub struct Reporter<W: Write> {
    out: W,
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn write_header<D: ComputeDevice + ?Sized>(&mut self, device: &D, len: usize) -> io::Result<()> {
        writeln!(self.out, "Device name: {}", device.name())?;
        if !device.has_profiling() {
            writeln!(self.out, "Device does not support profiling with events!")?;
        }
        writeln!(self.out, "Total data volume: {} bytes.", total_data_volume(len))
    }

    pub fn write_kernel_block(&mut self, report: &ValidationReport) -> io::Result<()> {
        writeln!(self.out, "-------------- {} FUNCTION ----------------------", report.kernel.label())?;
        writeln!(self.out, "Maximum difference between device and CPU(device math): {}", report.stats.max_diff_acc)?;
        writeln!(self.out, "Maximum difference between device and CPU(STD): {}", report.stats.max_diff_std)?;
        self.out.flush()
    }
}

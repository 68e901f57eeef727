// src/validation/routine.rs
//! One validation pass: generate, dispatch, wait, compare

use super::comparator::{compare, DeviationStats};
use super::sample::SampleGenerator;
use super::ValidationError;
use crate::config::HarnessConfig;
use crate::device::{ComputeDevice, NdRange};
use crate::kernels::ElementwiseKernel;
use crate::report::Reporter;
use log::{debug, info};
use std::io::Write;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq)]
pub struct ValidationReport {
    pub kernel: ElementwiseKernel,
    pub len: usize,
    pub stats: DeviationStats,
    /// Kernel execution time, when the device profiles launches
    pub kernel_time: Option<Duration>,
}

/// Validate `kernel` on `device` over `config.sample.len` random elements
pub fn run_validation<D: ComputeDevice + ?Sized>(
    kernel: ElementwiseKernel,
    device: &D,
    config: &HarnessConfig,
) -> Result<ValidationReport, ValidationError> {
    config.validate()?;
    let len = config.sample.len;
    info!("validating {} kernel over {} elements", kernel, len);

    let mut generator = SampleGenerator::new(config.sample.low..config.sample.high);
    let input = generator.generate(len);
    let mut output = vec![0.0f32; len];

    let range = NdRange::new(len, config.dispatch.work_group_size)?;
    let event = device.submit(kernel.device_fn(), range, &input, &mut output)?;
    if let Some(elapsed) = event.profiling_info() {
        debug!("{} kernel finished in {:?}", kernel, elapsed);
    }

    let stats = compare(&input, &output, kernel.device_fn(), kernel.std_fn())?;
    info!(
        "{} kernel: max diff {:e} (device math), {:e} (std)",
        kernel, stats.max_diff_acc, stats.max_diff_std
    );

    Ok(ValidationReport {
        kernel,
        len,
        stats,
        kernel_time: event.profiling_info(),
    })
}

/// Runs every kernel in turn and reports each one
pub struct ValidationSuite<'a, D: ComputeDevice + ?Sized> {
    device: &'a D,
    config: HarnessConfig,
}

impl<'a, D: ComputeDevice + ?Sized> ValidationSuite<'a, D> {
    pub fn new(device: &'a D, config: HarnessConfig) -> Self {
        Self { device, config }
    }

    /// Header, then one block per kernel, square first
    pub fn run<W: Write>(&self, reporter: &mut Reporter<W>) -> Result<Vec<ValidationReport>, ValidationError> {
        reporter.write_header(self.device, self.config.sample.len)?;

        let mut reports = Vec::with_capacity(ElementwiseKernel::ALL.len());
        for kernel in ElementwiseKernel::ALL {
            let report = run_validation(kernel, self.device, &self.config)?;
            reporter.write_kernel_block(&report)?;
            reports.push(report);
        }

        Ok(reports)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::device::CpuQueue;

    // A few ULP of f32 at e^10
    const EXP_STD_TOLERANCE: f32 = 0.01;

    fn queue() -> CpuQueue {
        CpuQueue::new(2).unwrap()
    }

    #[test]
    fn test_square_matches_device_math_exactly() {
        let report = run_validation(ElementwiseKernel::Square, &queue(), &HarnessConfig::with_len(10_007)).unwrap();
        assert_eq!(report.len, 10_007);
        assert_eq!(report.stats.max_diff_acc, 0.0);
        // Squares of [0, 10) stay below 100
        assert!(report.stats.max_diff_std <= 100.0 * f32::EPSILON);
    }

    #[test]
    fn test_exponential_within_tolerance() {
        let report = run_validation(ElementwiseKernel::Exponential, &queue(), &HarnessConfig::with_len(20_000)).unwrap();
        assert_eq!(report.stats.max_diff_acc, 0.0);
        assert!(report.stats.max_diff_std < EXP_STD_TOLERANCE, "max diff {}", report.stats.max_diff_std);
        assert!(report.kernel_time.is_some());
    }

    #[test]
    fn test_zero_length() {
        for kernel in ElementwiseKernel::ALL {
            let report = run_validation(kernel, &queue(), &HarnessConfig::with_len(0)).unwrap();
            assert_eq!(report.stats, DeviationStats::default());
        }
    }

    #[test]
    fn test_invalid_config_rejected() {
        let mut config = HarnessConfig::with_len(10);
        config.dispatch.work_group_size = 0;
        let result = run_validation(ElementwiseKernel::Square, &queue(), &config);
        assert!(matches!(result, Err(ValidationError::Config(_))));
    }

    #[test]
    fn test_suite_runs_square_then_exp() {
        let q = queue();
        let suite = ValidationSuite::new(&q, HarnessConfig::with_len(500));
        let mut reporter = Reporter::new(Vec::new());
        let reports = suite.run(&mut reporter).unwrap();

        assert_eq!(reports.len(), 2);
        assert_eq!(reports[0].kernel, ElementwiseKernel::Square);
        assert_eq!(reports[1].kernel, ElementwiseKernel::Exponential);

        let text = String::from_utf8(reporter.into_inner()).unwrap();
        let pow_at = text.find("POW FUNCTION").unwrap();
        let exp_at = text.find("EXP FUNCTION").unwrap();
        assert!(pow_at < exp_at);
        assert!(text.contains("Total data volume: 4000 bytes."));
    }
}

// src/validation/sample.rs
//! Random input generation

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::ops::Range;

// Every freshly constructed generator starts from the same state.
const DEFAULT_SEED: u64 = 1;

/// Uniform single-precision sample source
pub struct SampleGenerator {
    rng: StdRng,
    range: Range<f32>,
}

impl SampleGenerator {
    pub fn new(range: Range<f32>) -> Self {
        Self {
            rng: StdRng::seed_from_u64(DEFAULT_SEED),
            range,
        }
    }

    /// `len` values uniformly distributed in `[range.start, range.end)`
    pub fn generate(&mut self, len: usize) -> Vec<f32> {
        let range = self.range.clone();
        (0..len).map(|_| self.rng.gen_range(range.clone())).collect()
    }
}

impl Default for SampleGenerator {
    fn default() -> Self {
        Self::new(0.0..10.0)
    }
}

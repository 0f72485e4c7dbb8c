use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, Normal};

use crate::domain::error::EngineError;

pub trait RevenueSampler {
    fn sample(&mut self) -> f64;
}

/// Draws revenue from `Normal(mean, std_dev)`. A zero standard deviation
/// yields `mean` exactly on every draw.
pub struct NormalRevenueSampler<R: Rng> {
    rng: R,
    distribution: Normal<f64>,
}

impl<R: Rng> NormalRevenueSampler<R> {
    pub fn new(rng: R, mean: f64, std_dev: f64) -> Result<Self, EngineError> {
        let distribution = Normal::new(mean, std_dev)
            .map_err(|e| EngineError::invalid("revenue_std_dev", e.to_string()))?;
        Ok(Self { rng, distribution })
    }
}

impl<R: Rng> RevenueSampler for NormalRevenueSampler<R> {
    fn sample(&mut self) -> f64 {
        self.distribution.sample(&mut self.rng)
    }
}

/// Generator for one block of the sample index range. Every block shares the
/// key derived from `seed` and reads its own ChaCha stream, so blocks can be
/// drawn in any order or on any thread.
pub fn block_rng(seed: u64, block: u64) -> ChaCha8Rng {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    rng.set_stream(block);
    rng
}

use rayon::prelude::*;
use tracing::debug;

use crate::domain::error::EngineError;
use crate::domain::roi::{RoiPercentiles, RoiQuery, RoiResult, RoiSample};
use crate::services::revenue_sampler::{block_rng, NormalRevenueSampler, RevenueSampler};
use crate::services::statistics::{fraction_where, percentile_sorted, sorted_copy, summarize};

/// Upper bound on `sample_count`; larger requests are rejected.
pub const DEFAULT_MAX_SAMPLE_COUNT: usize = 1_000_000;

/// Samples drawn from one generator stream. Fixed so the sample sequence
/// does not depend on how many workers draw it.
pub const SAMPLE_BLOCK_SIZE: usize = 4_096;

#[derive(Debug, Clone, Copy)]
pub struct RoiSimulator {
    max_sample_count: usize,
    parallel: bool,
}

impl Default for RoiSimulator {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_SAMPLE_COUNT)
    }
}

impl RoiSimulator {
    pub fn new(max_sample_count: usize) -> Self {
        Self {
            max_sample_count,
            parallel: false,
        }
    }

    /// Draw blocks on the rayon pool. The result is identical to a
    /// sequential run.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn simulate(&self, query: &RoiQuery) -> Result<RoiResult, EngineError> {
        self.validate(query)?;

        let samples = if self.parallel {
            draw_parallel(query)?
        } else {
            draw_sequential(query)?
        };
        debug!(
            sample_count = samples.len(),
            seed = query.seed,
            parallel = self.parallel,
            "drew roi samples"
        );

        summarize_roi(query, samples)
    }

    fn validate(&self, query: &RoiQuery) -> Result<(), EngineError> {
        if !query.investment.is_finite() || query.investment <= 0.0 {
            return Err(EngineError::invalid(
                "investment",
                format!("must be greater than zero, got {}", query.investment),
            ));
        }
        if !query.expected_revenue.is_finite() {
            return Err(EngineError::invalid(
                "expected_revenue",
                format!("must be finite, got {}", query.expected_revenue),
            ));
        }
        if !query.revenue_std_dev.is_finite() || query.revenue_std_dev < 0.0 {
            return Err(EngineError::invalid(
                "revenue_std_dev",
                format!("must be zero or positive, got {}", query.revenue_std_dev),
            ));
        }
        if !query.operating_cost.is_finite() || query.operating_cost < 0.0 {
            return Err(EngineError::invalid(
                "operating_cost",
                format!("must be zero or positive, got {}", query.operating_cost),
            ));
        }
        if !query.target_roi_percent.is_finite() {
            return Err(EngineError::invalid(
                "target_roi_percent",
                format!("must be finite, got {}", query.target_roi_percent),
            ));
        }
        if query.sample_count == 0 {
            return Err(EngineError::invalid(
                "sample_count",
                "must be greater than zero",
            ));
        }
        if query.sample_count > self.max_sample_count {
            return Err(EngineError::invalid(
                "sample_count",
                format!(
                    "must not exceed {}, got {}",
                    self.max_sample_count, query.sample_count
                ),
            ));
        }
        Ok(())
    }
}

pub fn simulate(query: &RoiQuery) -> Result<RoiResult, EngineError> {
    RoiSimulator::default().simulate(query)
}

pub(crate) fn draw_roi_samples<S: RevenueSampler>(
    sampler: &mut S,
    count: usize,
    query: &RoiQuery,
) -> Vec<f64> {
    (0..count)
        .map(|_| RoiSample::from_revenue(sampler.sample(), query).roi_percent)
        .collect()
}

fn block_count(sample_count: usize) -> usize {
    sample_count.div_ceil(SAMPLE_BLOCK_SIZE)
}

fn block_len(sample_count: usize, block: usize) -> usize {
    (sample_count - block * SAMPLE_BLOCK_SIZE).min(SAMPLE_BLOCK_SIZE)
}

fn draw_block(query: &RoiQuery, block: usize) -> Result<Vec<f64>, EngineError> {
    let rng = block_rng(query.seed, block as u64);
    let mut sampler =
        NormalRevenueSampler::new(rng, query.expected_revenue, query.revenue_std_dev)?;
    Ok(draw_roi_samples(
        &mut sampler,
        block_len(query.sample_count, block),
        query,
    ))
}

fn draw_sequential(query: &RoiQuery) -> Result<Vec<f64>, EngineError> {
    let mut samples = Vec::with_capacity(query.sample_count);
    for block in 0..block_count(query.sample_count) {
        samples.extend(draw_block(query, block)?);
    }
    Ok(samples)
}

fn draw_parallel(query: &RoiQuery) -> Result<Vec<f64>, EngineError> {
    let blocks: Vec<Vec<f64>> = (0..block_count(query.sample_count))
        .into_par_iter()
        .map(|block| draw_block(query, block))
        .collect::<Result<_, _>>()?;
    Ok(blocks.concat())
}

fn summarize_roi(query: &RoiQuery, samples: Vec<f64>) -> Result<RoiResult, EngineError> {
    let summary = summarize(&samples)
        .ok_or_else(|| EngineError::invalid("sample_count", "must be greater than zero"))?;
    let sorted = sorted_copy(&samples);
    let percentile = |p: f64| percentile_sorted(&sorted, p).unwrap_or(summary.mean);
    let target = query.target_roi_percent;

    Ok(RoiResult {
        sample_count: samples.len(),
        seed: query.seed,
        target_roi_percent: target,
        mean_roi: summary.mean,
        min_roi: summary.min,
        max_roi: summary.max,
        std_dev_roi: summary.std_dev,
        probability_negative: fraction_where(&samples, |roi| roi < 0.0),
        probability_meets_target: fraction_where(&samples, |roi| roi >= target),
        percentiles: RoiPercentiles {
            p5: percentile(5.0),
            p50: percentile(50.0),
            p95: percentile(95.0),
        },
        samples,
    })
}

use crate::domain::error::EngineError;
use crate::domain::roi::RoiQuery;
use crate::services::revenue_sampler::RevenueSampler;

// Replays fixed revenues in order, cycling when exhausted
pub struct SequenceSampler {
    revenues: Vec<f64>,
    next: usize,
}

impl SequenceSampler {
    pub fn new(revenues: Vec<f64>) -> Self {
        Self { revenues, next: 0 }
    }
}

impl RevenueSampler for SequenceSampler {
    fn sample(&mut self) -> f64 {
        let revenue = self.revenues[self.next % self.revenues.len()];
        self.next += 1;
        revenue
    }
}

/// The reference scenario: 50k invested, 80k ± 15k revenue, 10k running cost,
/// 50% target, 5000 samples, seed 42.
pub fn build_roi_query() -> RoiQuery {
    RoiQuery {
        investment: 50_000.0,
        expected_revenue: 80_000.0,
        revenue_std_dev: 15_000.0,
        operating_cost: 10_000.0,
        target_roi_percent: 50.0,
        sample_count: 5_000,
        seed: 42,
    }
}

pub fn invalid_parameter(error: &EngineError) -> &'static str {
    match error {
        EngineError::InvalidParameter { parameter, .. } => parameter,
    }
}

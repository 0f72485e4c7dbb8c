use serde::Serialize;

pub const DEFAULT_SEED: u64 = 42;

/// Parameters of one ROI Monte Carlo run. Monetary values share one
/// currency unit; ROI values are percentages.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoiQuery {
    pub investment: f64,
    pub expected_revenue: f64,
    pub revenue_std_dev: f64,
    pub operating_cost: f64,
    pub target_roi_percent: f64,
    pub sample_count: usize,
    pub seed: u64,
}

impl Default for RoiQuery {
    fn default() -> Self {
        Self {
            investment: 50_000.0,
            expected_revenue: 80_000.0,
            revenue_std_dev: 15_000.0,
            operating_cost: 10_000.0,
            target_roi_percent: 50.0,
            sample_count: 5_000,
            seed: DEFAULT_SEED,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoiSample {
    pub profit: f64,
    pub roi_percent: f64,
}

impl RoiSample {
    pub fn from_revenue(revenue: f64, query: &RoiQuery) -> Self {
        let profit = revenue - query.operating_cost;
        Self {
            profit,
            roi_percent: profit / query.investment * 100.0,
        }
    }
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub struct RoiPercentiles {
    pub p5: f64,
    pub p50: f64,
    pub p95: f64,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct RoiResult {
    pub sample_count: usize,
    pub seed: u64,
    pub target_roi_percent: f64,
    pub mean_roi: f64,
    pub min_roi: f64,
    pub max_roi: f64,
    pub std_dev_roi: f64,
    pub probability_negative: f64,
    pub probability_meets_target: f64,
    pub percentiles: RoiPercentiles,
    /// ROI percentage of every sample, in draw order.
    pub samples: Vec<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_derives_profit_and_roi_from_revenue() {
        let query = RoiQuery::default();
        let sample = RoiSample::from_revenue(85_000.0, &query);

        assert_eq!(sample.profit, 75_000.0);
        assert_eq!(sample.roi_percent, 150.0);
    }

    #[test]
    fn loss_yields_negative_roi() {
        let query = RoiQuery {
            operating_cost: 30_000.0,
            ..RoiQuery::default()
        };
        let sample = RoiSample::from_revenue(20_000.0, &query);

        assert_eq!(sample.profit, -10_000.0);
        assert_eq!(sample.roi_percent, -20.0);
    }
}

//! Value ranges the interactive tool offered for each input. They describe
//! typical business scenarios, not engine limits: values outside them are
//! still simulated, only flagged.

use crate::domain::roi::RoiQuery;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RecommendedRange {
    pub parameter: &'static str,
    pub min: f64,
    pub max: f64,
}

impl RecommendedRange {
    pub const fn new(parameter: &'static str, min: f64, max: f64) -> Self {
        Self { parameter, min, max }
    }

    pub fn contains(&self, value: f64) -> bool {
        (self.min..=self.max).contains(&value)
    }

    /// Advisory message when `value` lies outside the range.
    pub fn check(&self, value: f64) -> Option<String> {
        if self.contains(value) {
            None
        } else {
            Some(format!(
                "{} = {value} is outside the usual range {}..={}",
                self.parameter, self.min, self.max
            ))
        }
    }
}

pub const SHOW_UP_PERCENT: RecommendedRange = RecommendedRange::new("show_up_percent", 70.0, 100.0);
pub const INVESTMENT: RecommendedRange = RecommendedRange::new("investment", 10_000.0, 300_000.0);
pub const EXPECTED_REVENUE: RecommendedRange =
    RecommendedRange::new("expected_revenue", 40_000.0, 200_000.0);
pub const TARGET_ROI_PERCENT: RecommendedRange =
    RecommendedRange::new("target_roi_percent", 0.0, 300.0);
pub const OPERATING_COST: RecommendedRange = RecommendedRange::new("operating_cost", 0.0, 100_000.0);
pub const REVENUE_STD_DEV: RecommendedRange =
    RecommendedRange::new("revenue_std_dev", 1_000.0, 60_000.0);
pub const SAMPLE_COUNT: RecommendedRange = RecommendedRange::new("sample_count", 500.0, 20_000.0);

pub fn roi_advisories(query: &RoiQuery) -> Vec<String> {
    [
        INVESTMENT.check(query.investment),
        EXPECTED_REVENUE.check(query.expected_revenue),
        TARGET_ROI_PERCENT.check(query.target_roi_percent),
        OPERATING_COST.check(query.operating_cost),
        REVENUE_STD_DEV.check(query.revenue_std_dev),
        SAMPLE_COUNT.check(query.sample_count as f64),
    ]
    .into_iter()
    .flatten()
    .collect()
}

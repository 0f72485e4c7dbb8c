//! Summary statistics over Monte Carlo samples.
//!
//! All reductions walk the samples in their given order so the results are
//! reproducible bit for bit for a given sample sequence.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleSummary {
    pub mean: f64,
    pub min: f64,
    pub max: f64,
    /// Population standard deviation.
    pub std_dev: f64,
}

/// Mean, extremes and spread. `None` for an empty slice.
pub fn summarize(samples: &[f64]) -> Option<SampleSummary> {
    if samples.is_empty() {
        return None;
    }
    let count = samples.len() as f64;
    let mean = samples.iter().sum::<f64>() / count;
    let min = samples.iter().copied().fold(f64::INFINITY, f64::min);
    let max = samples.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let variance = samples
        .iter()
        .map(|value| (value - mean).powi(2))
        .sum::<f64>()
        / count;
    Some(SampleSummary {
        mean,
        min,
        max,
        std_dev: variance.sqrt(),
    })
}

/// Share of samples satisfying `predicate`; `0.0` for an empty slice.
pub fn fraction_where(samples: &[f64], predicate: impl Fn(f64) -> bool) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }
    let hits = samples.iter().filter(|value| predicate(**value)).count();
    hits as f64 / samples.len() as f64
}

/// Nearest-rank percentile of an ascending slice: the position
/// `percentile / 100 * (len - 1)` is rounded to the closest index and
/// percentiles outside `[0, 100]` clamp to the ends.
pub fn percentile_sorted(sorted: &[f64], percentile: f64) -> Option<f64> {
    let last = sorted.len().checked_sub(1)?;
    let index = if percentile <= 0.0 {
        0
    } else if percentile >= 100.0 {
        last
    } else {
        ((percentile / 100.0) * last as f64).round() as usize
    };
    sorted.get(index).copied()
}

/// Ascending copy of `samples`. NaN never occurs in engine output, so the
/// total order only matters for robustness.
pub fn sorted_copy(samples: &[f64]) -> Vec<f64> {
    let mut sorted = samples.to_vec();
    sorted.sort_by(f64::total_cmp);
    sorted
}

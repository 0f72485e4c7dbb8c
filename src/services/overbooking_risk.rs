use statrs::function::factorial::ln_binomial;
use tracing::debug;

use crate::domain::error::EngineError;
use crate::domain::overbooking::{OverbookingQuery, OverbookingResult, RiskPoint};

/// Largest ticket count the engine evaluates unless configured otherwise.
pub const DEFAULT_MAX_TICKETS: u32 = 100_000;

/// Probability of more ticket holders showing up than there are seats.
#[derive(Debug, Clone, Copy)]
pub struct OverbookingRiskEngine {
    max_tickets: u32,
}

impl Default for OverbookingRiskEngine {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_TICKETS)
    }
}

impl OverbookingRiskEngine {
    pub fn new(max_tickets: u32) -> Self {
        Self { max_tickets }
    }

    /// `P(X > capacity)` for `X ~ Binomial(sold, p)`.
    ///
    /// # Errors
    /// `InvalidParameter` when `p` is outside `[0, 1]`, when `sold < capacity`,
    /// or when `sold` exceeds the configured ticket limit.
    pub fn compute_risk(&self, capacity: u32, sold: u32, p: f64) -> Result<f64, EngineError> {
        validate_probability("show_up_probability", p)?;
        if sold < capacity {
            return Err(EngineError::invalid(
                "sold",
                format!("must be at least the capacity {capacity}, got {sold}"),
            ));
        }
        self.validate_ticket_limit("sold", sold)?;

        let risk = RiskWalk::new(capacity, p)
            .nth((sold - capacity) as usize)
            .map_or(0.0, |point| point.risk);
        Ok(risk)
    }

    /// Risk for every ticket count in `sold_from ..= sold_to`. Each point is
    /// bit-identical to `compute_risk` for the same ticket count.
    ///
    /// # Errors
    /// `InvalidParameter` when the range is empty or inverted, when it does not
    /// start above `capacity`, or when `p` is outside `[0, 1]`.
    pub fn compute_risk_curve(
        &self,
        capacity: u32,
        sold_from: u32,
        sold_to: u32,
        p: f64,
    ) -> Result<Vec<RiskPoint>, EngineError> {
        validate_probability("show_up_probability", p)?;
        if sold_from <= capacity {
            return Err(EngineError::invalid(
                "sold_from",
                format!("must be greater than the capacity {capacity}, got {sold_from}"),
            ));
        }
        if sold_from > sold_to {
            return Err(EngineError::invalid(
                "sold_to",
                format!("range {sold_from}..={sold_to} is empty"),
            ));
        }
        self.validate_ticket_limit("sold_to", sold_to)?;

        let curve: Vec<RiskPoint> = RiskWalk::new(capacity, p)
            .skip((sold_from - capacity) as usize)
            .take((sold_to - sold_from) as usize + 1)
            .collect();

        debug!(capacity, sold_from, sold_to, p, points = curve.len(), "computed risk curve");
        Ok(curve)
    }

    /// Largest ticket count whose risk stays at or below `threshold`, capped
    /// at the configured ticket limit.
    pub fn max_sold_within_risk(
        &self,
        capacity: u32,
        p: f64,
        threshold: f64,
    ) -> Result<u32, EngineError> {
        validate_probability("show_up_probability", p)?;
        validate_probability("risk_threshold", threshold)?;
        self.validate_ticket_limit("capacity", capacity)?;

        let recommended = RiskWalk::new(capacity, p)
            .take_while(|point| point.sold <= self.max_tickets && point.risk <= threshold)
            .last()
            .map_or(capacity, |point| point.sold);
        Ok(recommended)
    }

    /// Full evaluation of a query: the curve over `capacity + 1 ..= max_sold`,
    /// the highlighted risk at `sold`, and optionally the recommended limit.
    pub fn evaluate(
        &self,
        query: &OverbookingQuery,
        risk_threshold: Option<f64>,
    ) -> Result<OverbookingResult, EngineError> {
        let current_risk =
            self.compute_risk(query.capacity, query.sold, query.show_up_probability)?;

        if query.max_sold < query.capacity {
            return Err(EngineError::invalid(
                "max_sold",
                format!(
                    "must be at least the capacity {}, got {}",
                    query.capacity, query.max_sold
                ),
            ));
        }
        let curve = if query.max_sold > query.capacity {
            self.compute_risk_curve(
                query.capacity,
                query.capacity + 1,
                query.max_sold,
                query.show_up_probability,
            )?
        } else {
            Vec::new()
        };

        let recommended_max_sold = risk_threshold
            .map(|threshold| {
                self.max_sold_within_risk(query.capacity, query.show_up_probability, threshold)
            })
            .transpose()?;

        debug!(
            capacity = query.capacity,
            sold = query.sold,
            current_risk,
            ?recommended_max_sold,
            "evaluated overbooking query"
        );

        Ok(OverbookingResult {
            capacity: query.capacity,
            show_up_probability: query.show_up_probability,
            current_sold: query.sold,
            current_risk,
            curve,
            risk_threshold,
            recommended_max_sold,
        })
    }

    fn validate_ticket_limit(&self, parameter: &'static str, value: u32) -> Result<(), EngineError> {
        if value > self.max_tickets {
            return Err(EngineError::invalid(
                parameter,
                format!("must not exceed the ticket limit {}, got {value}", self.max_tickets),
            ));
        }
        Ok(())
    }
}

pub fn compute_risk(capacity: u32, sold: u32, p: f64) -> Result<f64, EngineError> {
    OverbookingRiskEngine::default().compute_risk(capacity, sold, p)
}

pub fn compute_risk_curve(
    capacity: u32,
    sold_from: u32,
    sold_to: u32,
    p: f64,
) -> Result<Vec<RiskPoint>, EngineError> {
    OverbookingRiskEngine::default().compute_risk_curve(capacity, sold_from, sold_to, p)
}

/// Risk at every ticket count from `capacity` upward.
///
/// Starts at `risk(capacity) = 0` and steps with
/// `risk(n + 1) = risk(n) + p * P_n(X = capacity)`: one extra ticket only
/// pushes attendance over capacity when exactly `capacity` of the first `n`
/// holders showed up and the new one does too. Every step adds a
/// non-negative term, so the sequence never decreases.
struct RiskWalk {
    capacity: u32,
    p: f64,
    next: Option<RiskPoint>,
}

impl RiskWalk {
    fn new(capacity: u32, p: f64) -> Self {
        Self {
            capacity,
            p,
            next: Some(RiskPoint {
                sold: capacity,
                risk: 0.0,
            }),
        }
    }
}

impl Iterator for RiskWalk {
    type Item = RiskPoint;

    fn next(&mut self) -> Option<RiskPoint> {
        let point = self.next?;
        self.next = point.sold.checked_add(1).map(|sold| RiskPoint {
            sold,
            risk: (point.risk + self.p * attendance_pmf(point.sold, self.capacity, self.p))
                .min(1.0),
        });
        Some(point)
    }
}

/// `P(X = k)` for `X ~ Binomial(trials, p)`, evaluated in log space.
fn attendance_pmf(trials: u32, k: u32, p: f64) -> f64 {
    if k > trials {
        return 0.0;
    }
    if p <= 0.0 {
        return if k == 0 { 1.0 } else { 0.0 };
    }
    if p >= 1.0 {
        return if k == trials { 1.0 } else { 0.0 };
    }
    let log_pmf = ln_binomial(u64::from(trials), u64::from(k))
        + f64::from(k) * p.ln()
        + f64::from(trials - k) * (-p).ln_1p();
    log_pmf.exp()
}

fn validate_probability(parameter: &'static str, value: f64) -> Result<(), EngineError> {
    if !value.is_finite() || !(0.0..=1.0).contains(&value) {
        return Err(EngineError::invalid(
            parameter,
            format!("must be a probability in [0, 1], got {value}"),
        ));
    }
    Ok(())
}

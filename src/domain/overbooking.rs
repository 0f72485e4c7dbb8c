use serde::Serialize;

/// Ticket counts and show-up rate for one overbooking evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverbookingQuery {
    pub capacity: u32,
    /// Probability in `[0, 1]` that a ticket holder shows up.
    pub show_up_probability: f64,
    /// Ticket count whose risk is highlighted.
    pub sold: u32,
    /// Last ticket count of the plotted range `capacity + 1 ..= max_sold`.
    pub max_sold: u32,
}

impl Default for OverbookingQuery {
    fn default() -> Self {
        Self {
            capacity: 120,
            show_up_probability: 0.88,
            sold: 130,
            max_sold: 130,
        }
    }
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub struct RiskPoint {
    pub sold: u32,
    pub risk: f64,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct OverbookingResult {
    pub capacity: u32,
    pub show_up_probability: f64,
    pub current_sold: u32,
    pub current_risk: f64,
    pub curve: Vec<RiskPoint>,
    pub risk_threshold: Option<f64>,
    /// Largest ticket count whose risk stays at or below `risk_threshold`.
    pub recommended_max_sold: Option<u32>,
}

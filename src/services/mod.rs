pub mod histogram;
pub mod overbooking_risk;
pub mod ranges;
pub mod revenue_sampler;
pub mod risk_curve_plot;
pub mod roi_simulation;
pub mod scenario_config;
pub mod statistics;

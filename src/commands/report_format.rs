use crate::domain::overbooking::OverbookingResult;
use crate::domain::roi::RoiResult;

fn percent(probability: f64) -> String {
    format!("{:.2}%", probability * 100.0)
}

pub fn format_overbooking_report(result: &OverbookingResult) -> String {
    let threshold = match result.risk_threshold {
        Some(value) => percent(value),
        None => "n/a".to_string(),
    };
    let recommended = match result.recommended_max_sold {
        Some(value) => value.to_string(),
        None => "n/a".to_string(),
    };

    let mut lines = Vec::new();
    lines.push("Overbooking Report".to_string());
    lines.push(format!("Capacity: {}", result.capacity));
    lines.push(format!(
        "Show-up probability: {}",
        percent(result.show_up_probability)
    ));
    lines.push(format!("Tickets sold: {}", result.current_sold));
    lines.push(format!("Current risk: {}", percent(result.current_risk)));
    lines.push(format!("Risk threshold: {threshold}"));
    lines.push(format!("Recommended max sold: {recommended}"));

    if !result.curve.is_empty() {
        lines.push(String::new());
        lines.push("Tickets sold | Risk (%)".to_string());
        lines.push("-------------|---------".to_string());
        for point in &result.curve {
            lines.push(format!("{} | {:.2}", point.sold, point.risk * 100.0));
        }
    }

    lines.join("\n")
}

pub fn format_roi_report(result: &RoiResult) -> String {
    let mut lines = Vec::new();
    lines.push("ROI Simulation Report".to_string());
    lines.push(format!("Samples: {}", result.sample_count));
    lines.push(format!("Seed: {}", result.seed));
    lines.push(format!("Mean ROI: {:.2}%", result.mean_roi));
    lines.push(format!("Min ROI: {:.2}%", result.min_roi));
    lines.push(format!("Max ROI: {:.2}%", result.max_roi));
    lines.push(format!("Std dev: {:.2}%", result.std_dev_roi));
    lines.push(format!(
        "Percentiles: P5 {:.2}% | P50 {:.2}% | P95 {:.2}%",
        result.percentiles.p5, result.percentiles.p50, result.percentiles.p95
    ));
    lines.push(format!(
        "Prob. ROI < 0: {}",
        percent(result.probability_negative)
    ));
    lines.push(format!(
        "Prob. ROI >= {:.1}%: {}",
        result.target_roi_percent,
        percent(result.probability_meets_target)
    ));

    lines.join("\n")
}

use plotters::prelude::*;
use thiserror::Error;

use crate::domain::overbooking::OverbookingResult;

#[derive(Error, Debug)]
pub enum RiskCurvePlotError {
    #[error("risk curve is empty")]
    EmptyCurve,
    #[error("failed to render risk curve: {0}")]
    Plot(String),
}

/// Line chart of overbooking risk against tickets sold, with the risk
/// threshold as a horizontal red line and the highlighted sale marked.
pub fn write_risk_curve_png(
    output_path: &str,
    result: &OverbookingResult,
) -> Result<(), RiskCurvePlotError> {
    let (Some(first), Some(last)) = (result.curve.first(), result.curve.last()) else {
        return Err(RiskCurvePlotError::EmptyCurve);
    };
    let x_min = first.sold;
    let x_max = last.sold.max(x_min + 1);

    let root = BitMapBackend::new(output_path, (900, 600)).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| RiskCurvePlotError::Plot(e.to_string()))?;

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption(
            format!("Probability of Exceeding {} Seats", result.capacity),
            ("sans-serif", 30),
        )
        .x_label_area_size(55)
        .y_label_area_size(65)
        .build_cartesian_2d(x_min..x_max, 0.0..1.0)
        .map_err(|e| RiskCurvePlotError::Plot(e.to_string()))?;

    chart
        .configure_mesh()
        .disable_mesh()
        .x_desc("Tickets sold")
        .y_desc("Probability")
        .label_style(("sans-serif", 18))
        .axis_desc_style(("sans-serif", 22))
        .y_label_formatter(&|value| format!("{:.0}%", value * 100.0))
        .draw()
        .map_err(|e| RiskCurvePlotError::Plot(e.to_string()))?;

    chart
        .draw_series(LineSeries::new(
            result.curve.iter().map(|point| (point.sold, point.risk)),
            RGBColor(0, 51, 102).stroke_width(3),
        ))
        .map_err(|e| RiskCurvePlotError::Plot(e.to_string()))?;

    if let Some(threshold) = result.risk_threshold {
        chart
            .draw_series(LineSeries::new(
                vec![(x_min, threshold), (x_max, threshold)],
                RED.stroke_width(2),
            ))
            .map_err(|e| RiskCurvePlotError::Plot(e.to_string()))?;
    }

    if (x_min..=x_max).contains(&result.current_sold) {
        chart
            .draw_series(std::iter::once(Circle::new(
                (result.current_sold, result.current_risk),
                6,
                RED.filled(),
            )))
            .map_err(|e| RiskCurvePlotError::Plot(e.to_string()))?;
    }

    root.present()
        .map_err(|e| RiskCurvePlotError::Plot(e.to_string()))?;
    Ok(())
}

use plotters::prelude::*;
use thiserror::Error;

/// Bin count of the ROI histogram.
pub const DEFAULT_BIN_COUNT: usize = 40;

#[derive(Error, Debug)]
pub enum HistogramError {
    #[error("no samples to plot")]
    Empty,
    #[error("failed to render histogram: {0}")]
    Render(String),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HistogramBin {
    pub lower: f64,
    pub upper: f64,
    pub count: usize,
}

/// Splits `[min, max]` of the samples into `bin_count` equal-width bins. The
/// maximum lands in the last bin; a constant sample set gets one unit-wide
/// bin centred on its value.
pub fn histogram_bins(samples: &[f64], bin_count: usize) -> Vec<HistogramBin> {
    if samples.is_empty() || bin_count == 0 {
        return Vec::new();
    }
    let min = samples.iter().copied().fold(f64::INFINITY, f64::min);
    let max = samples.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    if max - min <= f64::EPSILON * min.abs().max(1.0) {
        return vec![HistogramBin {
            lower: min - 0.5,
            upper: min + 0.5,
            count: samples.len(),
        }];
    }

    let width = (max - min) / bin_count as f64;
    let mut counts = vec![0usize; bin_count];
    for value in samples {
        let index = (((value - min) / width) as usize).min(bin_count - 1);
        counts[index] += 1;
    }
    counts
        .into_iter()
        .enumerate()
        .map(|(index, count)| HistogramBin {
            lower: min + index as f64 * width,
            upper: min + (index + 1) as f64 * width,
            count,
        })
        .collect()
}

/// Renders the ROI distribution as a PNG. Red marks break-even (0%) and
/// green the target, when either falls inside the plotted range.
pub fn write_roi_histogram_png(
    output_path: &str,
    samples: &[f64],
    target_roi_percent: f64,
) -> Result<(), HistogramError> {
    let bins = histogram_bins(samples, DEFAULT_BIN_COUNT);
    let (Some(first), Some(last)) = (bins.first(), bins.last()) else {
        return Err(HistogramError::Empty);
    };
    let (x_min, x_max) = (first.lower, last.upper);
    let max_count = bins.iter().map(|bin| bin.count).max().unwrap_or(1);

    let root = BitMapBackend::new(output_path, (900, 600)).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| HistogramError::Render(e.to_string()))?;

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption("Simulated ROI Distribution (%)", ("sans-serif", 30))
        .x_label_area_size(55)
        .y_label_area_size(65)
        .build_cartesian_2d(x_min..x_max, 0..(max_count + 1))
        .map_err(|e| HistogramError::Render(e.to_string()))?;

    chart
        .configure_mesh()
        .disable_mesh()
        .x_desc("ROI (%)")
        .y_desc("Frequency")
        .label_style(("sans-serif", 18))
        .axis_desc_style(("sans-serif", 22))
        .x_label_formatter(&|value| format!("{value:.0}"))
        .draw()
        .map_err(|e| HistogramError::Render(e.to_string()))?;

    let bar_style = RGBColor(0, 51, 102).mix(0.75).filled();
    chart
        .draw_series(bins.iter().map(|bin| {
            Rectangle::new([(bin.lower, 0), (bin.upper, bin.count)], bar_style)
        }))
        .map_err(|e| HistogramError::Render(e.to_string()))?;

    let top = max_count + 1;
    for (x, color) in [(0.0, RED), (target_roi_percent, RGBColor(0, 150, 70))] {
        if (x_min..=x_max).contains(&x) {
            chart
                .draw_series(LineSeries::new(
                    vec![(x, 0), (x, top)],
                    color.stroke_width(2),
                ))
                .map_err(|e| HistogramError::Render(e.to_string()))?;
        }
    }

    root.present()
        .map_err(|e| HistogramError::Render(e.to_string()))?;
    Ok(())
}

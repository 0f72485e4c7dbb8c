use tracing::{info, warn};

use crate::commands::base_commands::RoiArgs;
use crate::commands::command_error::{write_output, CommandError};
use crate::commands::report_format::format_roi_report;
use crate::domain::roi::RoiResult;
use crate::services::histogram::write_roi_histogram_png;
use crate::services::ranges::roi_advisories;
use crate::services::scenario_config::ScenarioConfig;

pub fn run_roi_simulation(args: &RoiArgs, config: &ScenarioConfig) -> Result<RoiResult, CommandError> {
    let mut settings = config.roi.clone();
    args.apply_to(&mut settings);
    let query = settings.to_query();

    for advisory in roi_advisories(&query) {
        warn!("{advisory}");
    }

    let simulator = config.limits.roi_simulator().with_parallel(settings.parallel);
    Ok(simulator.simulate(&query)?)
}

pub fn roi_command(args: &RoiArgs, config: &ScenarioConfig) -> Result<(), CommandError> {
    let result = run_roi_simulation(args, config)?;

    if let Some(output) = &args.output {
        write_output(output, &result, args.format)?;
        info!(path = %output, "wrote roi simulation result");
    }
    if let Some(histogram) = &args.histogram {
        write_roi_histogram_png(histogram, &result.samples, result.target_roi_percent)?;
        info!(path = %histogram, "wrote roi histogram");
    }

    println!("{}", format_roi_report(&result));
    if let Some(output) = &args.output {
        println!("Simulation result for {} samples written to {output}", result.sample_count);
    }
    if let Some(histogram) = &args.histogram {
        println!("ROI histogram written to {histogram}");
    }
    Ok(())
}

use tracing::{info, warn};

use crate::commands::base_commands::OverbookingArgs;
use crate::commands::command_error::{write_output, CommandError};
use crate::commands::report_format::format_overbooking_report;
use crate::domain::overbooking::OverbookingResult;
use crate::services::ranges::SHOW_UP_PERCENT;
use crate::services::risk_curve_plot::write_risk_curve_png;
use crate::services::scenario_config::ScenarioConfig;

pub fn evaluate_overbooking(
    args: &OverbookingArgs,
    config: &ScenarioConfig,
) -> Result<OverbookingResult, CommandError> {
    let mut settings = config.overbooking.clone();
    args.apply_to(&mut settings);

    if let Some(advisory) = SHOW_UP_PERCENT.check(settings.show_up_percent) {
        warn!("{advisory}");
    }

    let engine = config.limits.risk_engine();
    Ok(engine.evaluate(&settings.to_query(), settings.risk_threshold())?)
}

pub fn overbooking_command(
    args: &OverbookingArgs,
    config: &ScenarioConfig,
) -> Result<(), CommandError> {
    let result = evaluate_overbooking(args, config)?;

    if let Some(output) = &args.output {
        write_output(output, &result, args.format)?;
        info!(path = %output, "wrote overbooking result");
    }
    if let Some(plot) = &args.plot {
        write_risk_curve_png(plot, &result)?;
        info!(path = %plot, "wrote risk curve");
    }

    println!("{}", format_overbooking_report(&result));
    if let Some(output) = &args.output {
        println!("Overbooking result written to {output}");
    }
    if let Some(plot) = &args.plot {
        println!("Risk curve written to {plot}");
    }
    Ok(())
}

use std::process::ExitCode;

use clap::Parser;
use overbooking_roi::commands::base_commands::{CliArgs, Commands};
use overbooking_roi::commands::command_error::CommandError;
use overbooking_roi::commands::completions_cmd::completions_command;
use overbooking_roi::commands::logging::init_logging;
use overbooking_roi::commands::overbooking_cmd::overbooking_command;
use overbooking_roi::commands::roi_cmd::roi_command;
use overbooking_roi::services::scenario_config::ScenarioConfig;

fn main() -> ExitCode {
    let args = CliArgs::parse();
    init_logging(args.verbose);

    let result = match &args.command {
        Commands::Overbooking(cmd) => load_config(args.config.as_deref())
            .and_then(|config| overbooking_command(cmd, &config)),
        Commands::Roi(cmd) => {
            load_config(args.config.as_deref()).and_then(|config| roi_command(cmd, &config))
        }
        Commands::Completions { shell } => {
            completions_command(*shell, &mut std::io::stdout());
            Ok(())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn load_config(path: Option<&str>) -> Result<ScenarioConfig, CommandError> {
    let config = ScenarioConfig::load(path)?;
    if let Some(path) = path {
        tracing::info!(path, "loaded scenario config");
    }
    Ok(config)
}

use std::io;

use serde::Serialize;
use thiserror::Error;

use crate::commands::base_commands::OutputFormat;
use crate::domain::error::EngineError;
use crate::services::histogram::HistogramError;
use crate::services::risk_curve_plot::RiskCurvePlotError;
use crate::services::scenario_config::ScenarioConfigError;

#[derive(Error, Debug)]
pub enum CommandError {
    #[error(transparent)]
    Config(#[from] ScenarioConfigError),
    #[error(transparent)]
    Engine(#[from] EngineError),
    #[error("failed to serialize output as yaml: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("failed to serialize output as json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to write {path}: {source}")]
    Write { path: String, source: io::Error },
    #[error(transparent)]
    Histogram(#[from] HistogramError),
    #[error(transparent)]
    RiskCurvePlot(#[from] RiskCurvePlotError),
}

pub(crate) fn write_output<T: Serialize>(
    path: &str,
    value: &T,
    format: OutputFormat,
) -> Result<(), CommandError> {
    let contents = match format {
        OutputFormat::Yaml => serde_yaml::to_string(value)?,
        OutputFormat::Json => serde_json::to_string_pretty(value)?,
    };
    std::fs::write(path, contents).map_err(|source| CommandError::Write {
        path: path.to_string(),
        source,
    })
}

use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::overbooking::OverbookingQuery;
use crate::domain::roi::{RoiQuery, DEFAULT_SEED};
use crate::services::overbooking_risk::{OverbookingRiskEngine, DEFAULT_MAX_TICKETS};
use crate::services::roi_simulation::{RoiSimulator, DEFAULT_MAX_SAMPLE_COUNT};

#[derive(Error, Debug)]
pub enum ScenarioConfigError {
    #[error("failed to read scenario config {path}: {source}")]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to parse scenario config {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_yaml::Error,
    },
}

/// Scenario defaults loaded from YAML. Every field is optional in the file;
/// missing ones fall back to the values of the reference scenario.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScenarioConfig {
    pub overbooking: OverbookingSettings,
    pub roi: RoiSettings,
    pub limits: LimitSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OverbookingSettings {
    pub capacity: u32,
    pub show_up_percent: f64,
    pub sold: u32,
    /// End of the plotted range; the sold count when absent.
    pub max_sold: Option<u32>,
    pub risk_threshold_percent: Option<f64>,
}

impl Default for OverbookingSettings {
    fn default() -> Self {
        Self {
            capacity: 120,
            show_up_percent: 88.0,
            sold: 130,
            max_sold: None,
            risk_threshold_percent: Some(7.0),
        }
    }
}

impl OverbookingSettings {
    pub fn to_query(&self) -> OverbookingQuery {
        OverbookingQuery {
            capacity: self.capacity,
            show_up_probability: self.show_up_percent / 100.0,
            sold: self.sold,
            max_sold: self.max_sold.unwrap_or(self.sold),
        }
    }

    pub fn risk_threshold(&self) -> Option<f64> {
        self.risk_threshold_percent.map(|percent| percent / 100.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RoiSettings {
    pub investment: f64,
    pub expected_revenue: f64,
    pub revenue_std_dev: f64,
    pub operating_cost: f64,
    pub target_roi_percent: f64,
    pub sample_count: usize,
    pub seed: u64,
    pub parallel: bool,
}

impl Default for RoiSettings {
    fn default() -> Self {
        let query = RoiQuery::default();
        Self {
            investment: query.investment,
            expected_revenue: query.expected_revenue,
            revenue_std_dev: query.revenue_std_dev,
            operating_cost: query.operating_cost,
            target_roi_percent: query.target_roi_percent,
            sample_count: query.sample_count,
            seed: DEFAULT_SEED,
            parallel: false,
        }
    }
}

impl RoiSettings {
    pub fn to_query(&self) -> RoiQuery {
        RoiQuery {
            investment: self.investment,
            expected_revenue: self.expected_revenue,
            revenue_std_dev: self.revenue_std_dev,
            operating_cost: self.operating_cost,
            target_roi_percent: self.target_roi_percent,
            sample_count: self.sample_count,
            seed: self.seed,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LimitSettings {
    pub max_tickets: u32,
    pub max_sample_count: usize,
}

impl Default for LimitSettings {
    fn default() -> Self {
        Self {
            max_tickets: DEFAULT_MAX_TICKETS,
            max_sample_count: DEFAULT_MAX_SAMPLE_COUNT,
        }
    }
}

impl LimitSettings {
    pub fn risk_engine(&self) -> OverbookingRiskEngine {
        OverbookingRiskEngine::new(self.max_tickets)
    }

    pub fn roi_simulator(&self) -> RoiSimulator {
        RoiSimulator::new(self.max_sample_count)
    }
}

impl ScenarioConfig {
    pub fn from_yaml_str(contents: &str, path: &Path) -> Result<Self, ScenarioConfigError> {
        serde_yaml::from_str(contents).map_err(|source| ScenarioConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> Result<Self, ScenarioConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ScenarioConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&contents, path)
    }

    /// Reads `path` when given, otherwise the built-in defaults.
    pub fn load(path: Option<&str>) -> Result<Self, ScenarioConfigError> {
        match path {
            Some(path) => Self::from_yaml_file(path),
            None => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(yaml: &str) -> Result<ScenarioConfig, ScenarioConfigError> {
        ScenarioConfig::from_yaml_str(yaml, Path::new("scenario.yaml"))
    }

    #[test]
    fn empty_document_uses_reference_scenario() {
        let config = parse("{}").unwrap();
        assert_eq!(config, ScenarioConfig::default());

        let query = config.overbooking.to_query();
        assert_eq!(query.capacity, 120);
        assert_eq!(query.show_up_probability, 0.88);
        assert_eq!(query.sold, 130);
        assert_eq!(query.max_sold, 130);
        assert_eq!(config.overbooking.risk_threshold(), Some(0.07));
        assert_eq!(config.roi.to_query(), RoiQuery::default());
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let config = parse(
            "overbooking:\n  capacity: 180\n  max_sold: 210\nroi:\n  seed: 7\n  parallel: true\nlimits:\n  max_sample_count: 50000\n",
        )
        .unwrap();

        let query = config.overbooking.to_query();
        assert_eq!(query.capacity, 180);
        assert_eq!(query.sold, 130);
        assert_eq!(query.max_sold, 210);
        assert_eq!(config.roi.seed, 7);
        assert!(config.roi.parallel);
        assert_eq!(config.roi.investment, 50_000.0);
        assert_eq!(config.limits.max_sample_count, 50_000);
        assert_eq!(config.limits.max_tickets, DEFAULT_MAX_TICKETS);

        let oversized = RoiQuery {
            sample_count: 50_001,
            ..RoiQuery::default()
        };
        assert!(config.limits.roi_simulator().simulate(&oversized).is_err());
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let error = parse("roi:\n  investmnet: 10\n").unwrap_err();
        assert!(matches!(error, ScenarioConfigError::Parse { .. }));
        assert!(error.to_string().contains("scenario.yaml"));
    }

    #[test]
    fn threshold_can_be_disabled() {
        let config = parse("overbooking:\n  risk_threshold_percent: null\n").unwrap();
        assert_eq!(config.overbooking.risk_threshold(), None);
    }

    #[test]
    fn load_without_path_returns_defaults() {
        assert_eq!(ScenarioConfig::load(None).unwrap(), ScenarioConfig::default());
    }

    #[test]
    fn missing_file_reports_read_error() {
        let error = ScenarioConfig::load(Some("/nonexistent/scenario.yaml")).unwrap_err();
        assert!(matches!(error, ScenarioConfigError::Read { .. }));
    }
}

use std::path::Path;

use config::{Config, File};
use itertools::Itertools;
use transit_ccr_core::model::assignment::{TimePeriodConfig, TransitConfig};

use super::CcrAppError;

/// the parts of a model run configuration file used by the transit tools.
#[derive(Debug, Clone)]
pub struct RunConfiguration {
    pub transit: TransitConfig,
    pub time_periods: Vec<TimePeriodConfig>,
}

impl RunConfiguration {
    /// loads the `transit` and `time_periods` tables of a configuration file.
    pub fn from_file(configuration_file: &str) -> Result<Self, CcrAppError> {
        let config_error = |message: String| CcrAppError::Configuration {
            path: configuration_file.to_string(),
            message,
        };
        let config = Config::builder()
            .add_source(File::from(Path::new(configuration_file)))
            .build()
            .map_err(|e| config_error(e.to_string()))?;
        let transit = config
            .get::<TransitConfig>("transit")
            .map_err(|e| config_error(format!("error reading 'transit' key: {e}")))?;
        let time_periods = config
            .get::<Vec<TimePeriodConfig>>("time_periods")
            .map_err(|e| config_error(format!("error reading 'time_periods' key: {e}")))?;
        transit.validate()?;
        log::debug!(
            "loaded {} modes, {} classes and {} time periods from {configuration_file}",
            transit.modes.len(),
            transit.classes.len(),
            time_periods.len()
        );
        Ok(Self {
            transit,
            time_periods,
        })
    }

    pub fn time_period(&self, name: &str) -> Result<&TimePeriodConfig, CcrAppError> {
        self.time_periods
            .iter()
            .find(|tp| tp.name.eq_ignore_ascii_case(name))
            .ok_or_else(|| {
                let known = self
                    .time_periods
                    .iter()
                    .map(|tp| tp.name.as_str())
                    .join(", ");
                CcrAppError::InvalidUserInput(format!(
                    "unknown time period '{name}', expected one of [{known}]"
                ))
            })
    }
}

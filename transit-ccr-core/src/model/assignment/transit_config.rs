use std::{collections::HashSet, path::Path};

use serde::{Deserialize, Serialize};

use super::{TimePeriodConfig, TransitAssignmentError, TransitClassConfig, TransitModeConfig};
use crate::model::{
    cost::{CcrWeightsConfig, CongestedWeightsConfig},
    headway::{EawtFactors, EawtWeightsConfig, HeadwayPolicy, PerceivedHeadwayModel},
    journey::{journey_level_io, JourneyLevelBuilder, JourneyModeChars, LevelPerception},
};

/// stopping criteria of capacitated (CCR) assignment.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct CcrStopCriteria {
    pub max_iterations: usize,
    pub relative_difference: f64,
    pub percent_segments_over_capacity: f64,
}

/// gap targets of congested assignment. its iteration limit is set per time period.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct CongestedAssnConfig {
    pub normalized_gap: f64,
    pub relative_gap: f64,
}

/// the `transit` table of the run configuration.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TransitConfig {
    /// run capacitated assignment with crowding and eawt feedback
    #[serde(default)]
    pub use_ccr: bool,
    /// run congested assignment when capacitated assignment is off
    #[serde(default)]
    pub congested_transit_assignment: bool,
    /// model fares through fare-split modes and journey-level templates
    #[serde(default)]
    pub use_fares: bool,
    /// value of time in currency per hour
    pub value_of_time: f64,
    /// attribute holding the effective headways, e.g. "@hdw_eff"
    pub effective_headway_source: String,
    pub initial_wait_perception_factor: f64,
    pub walk_perception_factor: f64,
    /// replace connector walk times with per-class `@walk_time_{class}` attributes
    #[serde(default)]
    pub override_connector_times: bool,
    pub ccr_weights: CcrWeightsConfig,
    pub congested_weights: CongestedWeightsConfig,
    pub eawt_weights: EawtWeightsConfig,
    pub ccr_stop_criteria: CcrStopCriteria,
    pub congested: CongestedAssnConfig,
    pub modes: Vec<TransitModeConfig>,
    pub classes: Vec<TransitClassConfig>,
    #[serde(default)]
    pub journey_mode_chars: JourneyModeChars,
    #[serde(default)]
    pub headway_policy: HeadwayPolicy,
    /// mode whose congestion follows the steep curve in congested assignment
    #[serde(default = "TransitConfig::default_congestion_steep_mode")]
    pub congestion_steep_mode: char,
}

impl TransitConfig {
    fn default_congestion_steep_mode() -> char {
        'p'
    }

    /// perception factor converting fares to minutes, `60 / value_of_time`.
    pub fn fare_perception(&self) -> f64 {
        60.0 / self.value_of_time
    }

    pub fn eawt_factors(&self) -> EawtFactors {
        self.modes
            .iter()
            .map(|m| (m.mode_id, m.eawt_factor))
            .collect()
    }

    /// the perceived headway model of a time period.
    pub fn headway_model(&self, period: &TimePeriodConfig) -> PerceivedHeadwayModel {
        PerceivedHeadwayModel::new(
            period.duration(),
            self.eawt_weights,
            self.eawt_factors(),
            self.use_fares,
            self.headway_policy,
        )
    }

    /// the fare journey-level builder of a time period, from its template under `spec_dir`.
    pub fn journey_level_builder(
        &self,
        spec_dir: &Path,
        time_period: &str,
    ) -> Result<JourneyLevelBuilder, TransitAssignmentError> {
        let template = journey_level_io::read_template(spec_dir, time_period)?;
        let builder = JourneyLevelBuilder::new(
            template,
            LevelPerception::in_transit(&self.effective_headway_source),
            self.fare_perception(),
        )?;
        Ok(builder)
    }

    pub fn validate(&self) -> Result<(), TransitAssignmentError> {
        if self.value_of_time <= 0.0 {
            return Err(TransitAssignmentError::Config(format!(
                "value_of_time must be positive, found {}",
                self.value_of_time
            )));
        }
        let mut mode_ids = HashSet::new();
        if let Some(dup) = self.modes.iter().find(|m| !mode_ids.insert(m.mode_id)) {
            return Err(TransitAssignmentError::Config(format!(
                "mode '{}' is configured more than once",
                dup.mode_id
            )));
        }
        let mut class_names = HashSet::new();
        if let Some(dup) = self
            .classes
            .iter()
            .find(|c| !class_names.insert(c.name.as_str()))
        {
            return Err(TransitAssignmentError::Config(format!(
                "class '{}' is configured more than once",
                dup.name
            )));
        }
        if self.use_fares {
            for class in self.classes.iter() {
                class.variant()?;
            }
        }
        Ok(())
    }
}

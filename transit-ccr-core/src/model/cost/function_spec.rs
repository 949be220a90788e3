use serde::{Deserialize, Serialize};

use super::{CcrWeightsConfig, CongestedWeightsConfig};

/// extra segment attribute the engine stores congestion results in.
pub const CONGESTION_ATTRIBUTE: &str = "us3";

/// serializable description of a segment cost hook, for engines configured
/// declaratively rather than by callback.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "snake_case", tag = "type")]
pub enum CongestionFunctionSpec {
    Crowding {
        weights: CcrWeightsConfig,
        /// time period duration in minutes
        assignment_period: f64,
        congestion_attribute: String,
    },
    Congestion {
        weights: CongestedWeightsConfig,
        steep_mode: char,
        use_fares: bool,
        assignment_period: f64,
        congestion_attribute: String,
    },
}

impl CongestionFunctionSpec {
    pub fn assignment_period(&self) -> f64 {
        match self {
            CongestionFunctionSpec::Crowding {
                assignment_period, ..
            } => *assignment_period,
            CongestionFunctionSpec::Congestion {
                assignment_period, ..
            } => *assignment_period,
        }
    }
}

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AssignType {
    Transit,
    AuxTransit,
}

/// an assignment mode as configured for the transit network.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TransitModeConfig {
    pub mode_id: char,
    /// grouping used by classes to select their modes, e.g. "LOCAL" or "WALK"
    #[serde(rename = "type")]
    pub mode_type: String,
    pub assign_type: AssignType,
    /// scaling factor applied to extra added wait time on lines of this mode
    #[serde(default = "TransitModeConfig::default_eawt_factor")]
    pub eawt_factor: f64,
}

impl TransitModeConfig {
    fn default_eawt_factor() -> f64 {
        1.0
    }

    pub fn is_transit(&self) -> bool {
        self.assign_type == AssignType::Transit
    }
}

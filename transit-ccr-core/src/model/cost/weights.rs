use serde::{Deserialize, Serialize};

/// weights of the seated/standing crowding curves used by capacitated (CCR) assignment.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct CcrWeightsConfig {
    /// seated cost multiplier at zero volume
    pub min_seat: f64,
    /// seated cost multiplier at capacity
    pub max_seat: f64,
    pub power_seat: f64,
    /// standing cost multiplier at zero volume
    pub min_stand: f64,
    /// standing cost multiplier at capacity
    pub max_stand: f64,
    pub power_stand: f64,
}

/// weights of the seated/standing crowding curves used by congested assignment.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct CongestedWeightsConfig {
    pub min_seat: f64,
    pub max_seat: f64,
    pub power_seat: f64,
    pub min_stand: f64,
    pub max_stand: f64,
    pub power_stand: f64,
}

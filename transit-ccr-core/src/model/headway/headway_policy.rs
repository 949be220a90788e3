use serde::{Deserialize, Serialize};

/// limits applied when updating perceived headways between assignment iterations.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct HeadwayPolicy {
    /// largest factor a perceived headway may grow by in one iteration
    #[serde(default = "HeadwayPolicy::default_max_headway_growth")]
    pub max_headway_growth: f64,
    /// absolute ceiling on perceived headway, in minutes
    #[serde(default = "HeadwayPolicy::default_max_headway")]
    pub max_headway: f64,
    /// damping fraction applied to the capacity penalty
    #[serde(default = "HeadwayPolicy::default_headway_fraction")]
    pub headway_fraction: f64,
}

impl HeadwayPolicy {
    fn default_max_headway_growth() -> f64 {
        1.5
    }
    fn default_max_headway() -> f64 {
        999.98
    }
    fn default_headway_fraction() -> f64 {
        0.5
    }
}

impl Default for HeadwayPolicy {
    fn default() -> Self {
        Self {
            max_headway_growth: Self::default_max_headway_growth(),
            max_headway: Self::default_max_headway(),
            headway_fraction: Self::default_headway_fraction(),
        }
    }
}

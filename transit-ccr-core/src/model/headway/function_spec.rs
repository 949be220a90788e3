use serde::{Deserialize, Serialize};

use super::{EawtFactors, EawtWeightsConfig, HeadwayPolicy};

/// serializable description of the headway hook.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct HeadwayFunctionSpec {
    pub eawt_weights: EawtWeightsConfig,
    pub mode_eawt_factors: EawtFactors,
    pub use_fares: bool,
    pub headway_policy: HeadwayPolicy,
    /// time period duration in minutes
    pub assignment_period: f64,
}

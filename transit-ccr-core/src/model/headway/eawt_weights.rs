use serde::{Deserialize, Serialize};

/// coefficients of the extra added wait time regression.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct EawtWeightsConfig {
    pub constant: f64,
    /// coefficient on `1 / headway`
    pub weight_inverse_headway: f64,
    /// coefficient on the segment volume/capacity ratio
    pub vcr: f64,
    /// coefficient on the share of line alightings that happened by this segment
    pub exit_proportion: f64,
}

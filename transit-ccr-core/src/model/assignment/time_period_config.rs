use serde::{Deserialize, Serialize};
use uom::si::f64::Time;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TimePeriodConfig {
    pub name: String,
    /// duration of the period in minutes
    pub duration_minutes: f64,
    #[serde(default = "TimePeriodConfig::default_max_iteration")]
    pub congested_transit_assn_max_iteration: usize,
}

impl TimePeriodConfig {
    fn default_max_iteration() -> usize {
        1
    }

    pub fn duration(&self) -> Time {
        Time::new::<uom::si::time::minute>(self.duration_minutes)
    }
}

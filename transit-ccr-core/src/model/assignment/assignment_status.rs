use std::fmt::Display;

use serde::{Deserialize, Serialize};

use super::AssignmentOutcome;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AssignmentFlavor {
    Capacitated,
    Congested,
    Extended,
}

impl Display for AssignmentFlavor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            AssignmentFlavor::Capacitated => "capacitated",
            AssignmentFlavor::Congested => "congested",
            AssignmentFlavor::Extended => "extended",
        };
        write!(f, "{s}")
    }
}

/// run-level result of assigning one time period. non-convergence is reported
/// here rather than as an error.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct AssignmentStatus {
    pub time_period: String,
    pub flavor: AssignmentFlavor,
    pub iterations: usize,
    pub converged: bool,
    /// segments whose penalties were recomputed, for capacitated assignment
    pub penalized_segments: Option<usize>,
}

impl AssignmentStatus {
    pub fn new(time_period: &str, flavor: AssignmentFlavor, outcome: AssignmentOutcome) -> Self {
        Self {
            time_period: time_period.to_string(),
            flavor,
            iterations: outcome.iterations,
            converged: outcome.converged,
            penalized_segments: None,
        }
    }
}

use serde::{Deserialize, Serialize};

use super::{CcrStopCriteria, TransitAssignmentError, TransitAssignmentSpec};
use crate::model::{cost::CostModel, headway::HeadwayFunction};

/// a class name paired with its assignment request.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ClassSpec {
    pub name: String,
    pub spec: TransitAssignmentSpec,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct CongestedStopCriteria {
    pub max_iterations: usize,
    pub normalized_gap: f64,
    pub relative_gap: f64,
}

/// what the engine reports back after an assignment call.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssignmentOutcome {
    pub iterations: usize,
    pub converged: bool,
}

pub struct CapacitatedAssignmentRequest<'a> {
    pub time_period: &'a str,
    pub classes: &'a [ClassSpec],
    pub cost_model: &'a dyn CostModel,
    pub headway_function: &'a dyn HeadwayFunction,
    pub stop_criteria: CcrStopCriteria,
}

pub struct CongestedAssignmentRequest<'a> {
    pub time_period: &'a str,
    pub classes: &'a [ClassSpec],
    pub cost_model: &'a dyn CostModel,
    pub stop_criteria: CongestedStopCriteria,
}

pub struct ExtendedAssignmentRequest<'a> {
    pub time_period: &'a str,
    pub class: &'a ClassSpec,
    /// add this class's volumes to those already assigned
    pub add_volumes: bool,
}

/// the external path-assignment solver. it evaluates the supplied cost and headway
/// hooks internally until its own stopping criteria are met.
pub trait TransitAssignmentEngine {
    fn capacitated_assignment(
        &mut self,
        request: &CapacitatedAssignmentRequest,
    ) -> Result<AssignmentOutcome, TransitAssignmentError>;

    fn congested_assignment(
        &mut self,
        request: &CongestedAssignmentRequest,
    ) -> Result<AssignmentOutcome, TransitAssignmentError>;

    fn extended_assignment(
        &mut self,
        request: &ExtendedAssignmentRequest,
    ) -> Result<AssignmentOutcome, TransitAssignmentError>;
}

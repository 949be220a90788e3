use serde::{Deserialize, Serialize};

use crate::model::journey::{
    JourneyLevel, PenaltyByLocation, PenaltySpec, ValueSource, WaitingTimePerception,
};

/// the extended transit assignment request of one class, in the shape the engine
/// loads it.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TransitAssignmentSpec {
    #[serde(rename = "type")]
    pub assignment_type: String,
    pub modes: Vec<char>,
    pub demand: String,
    pub waiting_time: WaitingTimePerception,
    pub boarding_cost: PenaltyByLocation,
    pub boarding_time: PenaltyByLocation,
    pub in_vehicle_cost: Option<PenaltySpec>,
    pub in_vehicle_time: PerceptionFactor,
    pub aux_transit_time: PerceptionFactor,
    pub aux_transit_cost: Option<PenaltySpec>,
    pub journey_levels: Vec<JourneyLevel>,
    pub flow_distribution_between_lines: FlowDistributionBetweenLines,
    pub flow_distribution_at_origins: FlowDistributionAtOrigins,
    pub flow_distribution_at_regular_nodes_with_aux_transit_choices: FlowDistributionAtRegularNodes,
    pub circular_lines: CircularLines,
    pub performance_settings: PerformanceSettings,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PerceptionFactor {
    pub perception_factor: ValueSource,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct FlowDistributionBetweenLines {
    pub consider_total_impedance: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct FlowDistributionAtOrigins {
    pub fixed_proportions_on_connectors: Option<f64>,
    pub choices_at_origins: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct FlowDistributionAtRegularNodes {
    pub choices_at_regular_nodes: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CircularLines {
    pub stay: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PerformanceSettings {
    pub number_of_processors: usize,
}

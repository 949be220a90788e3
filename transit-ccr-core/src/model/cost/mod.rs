mod congestion_cost_model;
mod cost_model;
mod cost_model_error;
pub mod cost_ops;
mod crowding_cost_model;
mod function_spec;
mod weights;

pub use congestion_cost_model::CongestionCostModel;
pub use cost_model::CostModel;
pub use cost_model_error::CostModelError;
pub use crowding_cost_model::CrowdingCostModel;
pub use function_spec::{CongestionFunctionSpec, CONGESTION_ATTRIBUTE};
pub use weights::{CcrWeightsConfig, CongestedWeightsConfig};

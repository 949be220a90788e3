mod assignment_class;
mod assignment_engine;
mod assignment_status;
mod controller;
mod run_context;
mod time_period_config;
mod transit_assignment_error;
mod transit_assignment_spec;
mod transit_class_config;
mod transit_config;
mod transit_mode_config;

pub use assignment_class::TransitAssignmentClass;
pub use assignment_engine::{
    AssignmentOutcome, CapacitatedAssignmentRequest, ClassSpec, CongestedAssignmentRequest,
    CongestedStopCriteria, ExtendedAssignmentRequest, TransitAssignmentEngine,
};
pub use assignment_status::{AssignmentFlavor, AssignmentStatus};
pub use controller::TransitAssignmentController;
pub use run_context::RunContext;
pub use time_period_config::TimePeriodConfig;
pub use transit_assignment_error::TransitAssignmentError;
pub use transit_assignment_spec::TransitAssignmentSpec;
pub use transit_class_config::TransitClassConfig;
pub use transit_config::{CcrStopCriteria, CongestedAssnConfig, TransitConfig};
pub use transit_mode_config::{AssignType, TransitModeConfig};

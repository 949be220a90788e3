use crate::model::{
    cost::CostModelError, headway::HeadwayError, journey::JourneyLevelError,
    network::NetworkError,
};

#[derive(thiserror::Error, Debug)]
pub enum TransitAssignmentError {
    #[error("failure reading network snapshot: {0}")]
    Network(#[from] NetworkError),
    #[error("failure computing headways or penalties: {0}")]
    Headway(#[from] HeadwayError),
    #[error("failure evaluating segment cost: {0}")]
    CostModel(#[from] CostModelError),
    #[error("failure building journey levels: {0}")]
    JourneyLevel(#[from] JourneyLevelError),
    #[error("invalid transit configuration: {0}")]
    Config(String),
    #[error("no time period named '{0}' is configured")]
    UnknownTimePeriod(String),
    #[error("transit assignment engine failed: {0}")]
    Engine(String),
}

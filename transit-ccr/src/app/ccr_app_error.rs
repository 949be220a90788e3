use transit_ccr_core::model::{
    assignment::TransitAssignmentError, headway::HeadwayError, network::NetworkError,
};

#[derive(thiserror::Error, Debug)]
pub enum CcrAppError {
    #[error("failure reading configuration file '{path}': {message}")]
    Configuration { path: String, message: String },
    #[error("invalid user input: {0}")]
    InvalidUserInput(String),
    #[error("failure writing '{path}': {message}")]
    Write { path: String, message: String },
    #[error(transparent)]
    Assignment(#[from] TransitAssignmentError),
    #[error(transparent)]
    Network(#[from] NetworkError),
    #[error(transparent)]
    Headway(#[from] HeadwayError),
}

mod ccr_app;
mod ccr_app_error;
mod class_assembly;
mod run_configuration;

pub mod class_specs;
pub mod journey_levels;
pub mod penalties;

pub use ccr_app::{CcrApp, CcrOperation};
pub use ccr_app_error::CcrAppError;
pub use class_assembly::ClassAssembly;
pub use run_configuration::RunConfiguration;

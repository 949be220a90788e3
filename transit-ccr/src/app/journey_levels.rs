use std::path::{Path, PathBuf};

use transit_ccr_core::model::{assignment::RunContext, journey::journey_level_io};

use super::{CcrAppError, ClassAssembly, RunConfiguration};

/// builds, validates and writes the journey levels of every class of a period,
/// returning the artifact paths.
pub fn run(
    config: &RunConfiguration,
    time_period: &str,
    snapshot_directory: &Path,
    spec_directory: &Path,
) -> Result<Vec<PathBuf>, CcrAppError> {
    if !config.transit.use_fares {
        return Err(CcrAppError::InvalidUserInput(String::from(
            "journey level artifacts are only built when transit.use_fares is enabled",
        )));
    }
    let period = config.time_period(time_period)?;
    let context = RunContext::new(&period.name, 0, 1);
    let assembly = ClassAssembly::load(&config.transit, context, snapshot_directory, spec_directory)?;
    let paths = assembly
        .journey_levels(spec_directory)?
        .iter()
        .map(|(class, _)| journey_level_io::artifact_path(spec_directory, &period.name, class.name()))
        .collect();
    Ok(paths)
}

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use transit_ccr_core::model::assignment::{ClassSpec, RunContext};

use super::{CcrAppError, ClassAssembly, RunConfiguration};

/// `{spec_dir}/{period}_class_specs.json`
pub fn default_output_file(spec_directory: &Path, time_period: &str) -> PathBuf {
    spec_directory.join(format!("{time_period}_class_specs.json"))
}

/// assembles the assignment request of every class of a period and writes them as a
/// single JSON array.
pub fn run(
    config: &RunConfiguration,
    context: RunContext,
    snapshot_directory: &Path,
    spec_directory: &Path,
    output_file: &Path,
) -> Result<Vec<ClassSpec>, CcrAppError> {
    let period = config.time_period(&context.time_period)?;
    let context = RunContext::new(&period.name, context.iteration, context.num_processors);
    let assembly = ClassAssembly::load(&config.transit, context, snapshot_directory, spec_directory)?;
    let specs = assembly.class_specs(spec_directory)?;

    let write_error = |message: String| CcrAppError::Write {
        path: output_file.to_string_lossy().to_string(),
        message,
    };
    let file = File::create(output_file).map_err(|e| write_error(e.to_string()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, &specs).map_err(|e| write_error(e.to_string()))?;
    writer.flush().map_err(|e| write_error(e.to_string()))?;
    log::info!(
        "wrote {} class specifications for {} (iteration {}) to {}",
        specs.len(),
        assembly.context().time_period,
        assembly.context().iteration,
        output_file.to_string_lossy()
    );
    Ok(specs)
}

use std::path::Path;

use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};
use transit_ccr_core::model::assignment::RunContext;

use super::{class_specs, journey_levels, penalties, CcrAppError, RunConfiguration};

/// Command line tools for capacitated transit assignment: crowding and headway
/// feedback, journey levels, and per-class assignment specifications
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct CcrApp {
    #[command(subcommand)]
    pub op: CcrOperation,
}

#[derive(Debug, Clone, Serialize, Deserialize, Subcommand)]
pub enum CcrOperation {
    /// recompute @eawt and @capacity_penalty for every segment of a period
    Penalties {
        /// TOML file with the `transit` and `time_periods` tables
        #[arg(short, long)]
        configuration_file: String,

        /// name of the time period to process
        #[arg(short, long)]
        time_period: String,

        /// directory holding one `{period}/` snapshot directory per time period
        #[arg(short, long)]
        snapshot_directory: String,
    },
    /// build, validate and write the journey levels of every class of a period
    JourneyLevels {
        /// TOML file with the `transit` and `time_periods` tables
        #[arg(short, long)]
        configuration_file: String,

        /// name of the time period to process
        #[arg(short, long)]
        time_period: String,

        /// directory holding one `{period}/` snapshot directory per time period
        #[arg(short, long)]
        snapshot_directory: String,

        /// directory with the journey level templates. artifacts are written here.
        #[arg(short = 'd', long)]
        spec_directory: String,
    },
    /// write the assignment specification of every class of a period as JSON
    ClassSpecs {
        /// TOML file with the `transit` and `time_periods` tables
        #[arg(short, long)]
        configuration_file: String,

        /// name of the time period to process
        #[arg(short, long)]
        time_period: String,

        /// directory holding one `{period}/` snapshot directory per time period
        #[arg(short, long)]
        snapshot_directory: String,

        /// directory with the journey level templates. artifacts are written here.
        #[arg(short = 'd', long)]
        spec_directory: String,

        /// output file. defaults to `{spec_directory}/{period}_class_specs.json`
        #[arg(short, long)]
        output_file: Option<String>,

        /// outer model iteration
        #[arg(short, long, default_value_t = 0)]
        iteration: usize,

        /// processors the engine may use. defaults to the available parallelism.
        #[arg(short, long)]
        num_processors: Option<usize>,
    },
}

impl CcrOperation {
    pub fn run(&self) -> Result<(), CcrAppError> {
        match self {
            CcrOperation::Penalties {
                configuration_file,
                time_period,
                snapshot_directory,
            } => {
                let config = RunConfiguration::from_file(configuration_file)?;
                let result = penalties::run(&config, time_period, Path::new(snapshot_directory))?;
                let penalized = result.iter().filter(|p| p.capacity_penalty > 0.0).count();
                log::info!(
                    "wrote penalties for {} segments, {penalized} with a capacity penalty",
                    result.len()
                );
                Ok(())
            }
            CcrOperation::JourneyLevels {
                configuration_file,
                time_period,
                snapshot_directory,
                spec_directory,
            } => {
                let config = RunConfiguration::from_file(configuration_file)?;
                let paths = journey_levels::run(
                    &config,
                    time_period,
                    Path::new(snapshot_directory),
                    Path::new(spec_directory),
                )?;
                for path in paths.iter() {
                    log::info!("wrote {}", path.to_string_lossy());
                }
                Ok(())
            }
            CcrOperation::ClassSpecs {
                configuration_file,
                time_period,
                snapshot_directory,
                spec_directory,
                output_file,
                iteration,
                num_processors,
            } => {
                let config = RunConfiguration::from_file(configuration_file)?;
                let spec_dir = Path::new(spec_directory);
                let output = match output_file {
                    Some(out) => Path::new(out).to_path_buf(),
                    None => class_specs::default_output_file(spec_dir, time_period),
                };
                let nproc = match num_processors {
                    Some(n) => *n,
                    None => std::thread::available_parallelism()
                        .map(|n| n.get())
                        .unwrap_or(1),
                };
                let context = RunContext::new(time_period, *iteration, nproc);
                class_specs::run(
                    &config,
                    context,
                    Path::new(snapshot_directory),
                    spec_dir,
                    &output,
                )?;
                Ok(())
            }
        }
    }
}

use std::path::Path;

use kdam::tqdm;
use transit_ccr_core::model::{
    assignment::{ClassSpec, RunContext, TransitAssignmentClass, TransitConfig},
    journey::{JourneyLevel, JourneyLevelBuilder},
    network::{CsvSnapshotStore, FareModes, NetworkSnapshotStore},
};

use super::CcrAppError;

/// everything needed to resolve the classes of one time period: the fare modes of
/// its network and the journey-level template, both only loaded when fares are
/// modeled.
pub struct ClassAssembly<'a> {
    config: &'a TransitConfig,
    context: RunContext,
    fare_modes: Option<FareModes>,
    builder: Option<JourneyLevelBuilder>,
}

impl<'a> ClassAssembly<'a> {
    pub fn load(
        config: &'a TransitConfig,
        context: RunContext,
        snapshot_directory: &Path,
        spec_directory: &Path,
    ) -> Result<Self, CcrAppError> {
        if !config.use_fares {
            return Ok(Self {
                config,
                context,
                fare_modes: None,
                builder: None,
            });
        }
        let store = CsvSnapshotStore::new(snapshot_directory);
        let fare_modes = store.read_network(&context.time_period)?.fare_modes();
        let builder = config.journey_level_builder(spec_directory, &context.time_period)?;
        log::info!(
            "loaded {} fare source modes and a {} level template for {}",
            fare_modes.len(),
            builder.template().len(),
            context.time_period
        );
        Ok(Self {
            config,
            context,
            fare_modes: Some(fare_modes),
            builder: Some(builder),
        })
    }

    pub fn context(&self) -> &RunContext {
        &self.context
    }

    /// builds the journey levels of every class. artifacts are written to
    /// `spec_directory` when fares are modeled.
    pub fn journey_levels(
        &self,
        spec_directory: &Path,
    ) -> Result<Vec<(TransitAssignmentClass<'_>, Vec<JourneyLevel>)>, CcrAppError> {
        let classes = tqdm!(
            self.config.classes.iter(),
            desc = "build journey levels",
            total = self.config.classes.len()
        );
        let mut result = Vec::with_capacity(self.config.classes.len());
        for class_config in classes {
            let class = TransitAssignmentClass::new(
                class_config,
                self.config,
                &self.context,
                self.fare_modes.as_ref(),
            )?;
            let levels = class.resolve_journey_levels(self.builder.as_ref(), spec_directory)?;
            result.push((class, levels));
        }
        eprintln!();
        Ok(result)
    }

    /// the assignment request of every class.
    pub fn class_specs(&self, spec_directory: &Path) -> Result<Vec<ClassSpec>, CcrAppError> {
        let specs = self
            .journey_levels(spec_directory)?
            .into_iter()
            .map(|(class, levels)| class.class_spec(levels))
            .collect();
        Ok(specs)
    }
}

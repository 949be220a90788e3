use std::{
    collections::HashMap,
    path::{Path, PathBuf},
};

use super::{
    AssignmentFlavor, AssignmentOutcome, AssignmentStatus, CapacitatedAssignmentRequest,
    ClassSpec, CongestedAssignmentRequest, CongestedStopCriteria, ExtendedAssignmentRequest,
    RunContext, TimePeriodConfig, TransitAssignmentClass, TransitAssignmentEngine,
    TransitAssignmentError, TransitConfig,
};
use crate::model::{
    cost::{CongestionCostModel, CrowdingCostModel},
    headway::compute_segment_penalties,
    journey::{JourneyLevel, JourneyLevelBuilder},
    network::{FareModes, NetworkSnapshotStore},
};

/// drives the transit assignment of each time period: assembles the class requests,
/// calls the engine, and recomputes segment penalties between capacitated passes.
pub struct TransitAssignmentController<E, S>
where
    E: TransitAssignmentEngine,
    S: NetworkSnapshotStore,
{
    config: TransitConfig,
    time_periods: Vec<TimePeriodConfig>,
    spec_dir: PathBuf,
    engine: E,
    store: S,
    /// (time period, class name) -> journey levels
    journey_levels: HashMap<(String, String), Vec<JourneyLevel>>,
}

impl<E, S> TransitAssignmentController<E, S>
where
    E: TransitAssignmentEngine,
    S: NetworkSnapshotStore,
{
    pub fn new(
        config: TransitConfig,
        time_periods: Vec<TimePeriodConfig>,
        spec_dir: &Path,
        engine: E,
        store: S,
    ) -> Result<Self, TransitAssignmentError> {
        config.validate()?;
        Ok(Self {
            config,
            time_periods,
            spec_dir: spec_dir.to_path_buf(),
            engine,
            store,
            journey_levels: HashMap::new(),
        })
    }

    pub fn config(&self) -> &TransitConfig {
        &self.config
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn time_period(&self, name: &str) -> Result<&TimePeriodConfig, TransitAssignmentError> {
        self.time_periods
            .iter()
            .find(|tp| tp.name.eq_ignore_ascii_case(name))
            .ok_or_else(|| TransitAssignmentError::UnknownTimePeriod(name.to_string()))
    }

    /// assigns every configured time period in order.
    pub fn run(
        &mut self,
        iteration: usize,
        num_processors: usize,
    ) -> Result<Vec<AssignmentStatus>, TransitAssignmentError> {
        let names: Vec<String> = self.time_periods.iter().map(|tp| tp.name.clone()).collect();
        names
            .iter()
            .map(|name| self.run_period(&RunContext::new(name, iteration, num_processors)))
            .collect()
    }

    /// the context with its time period renamed to the configured period it matches.
    fn resolve_context(&self, context: &RunContext) -> Result<RunContext, TransitAssignmentError> {
        let period = self.time_period(&context.time_period)?;
        Ok(RunContext::new(
            &period.name,
            context.iteration,
            context.num_processors,
        ))
    }

    /// assigns one time period with the flavor selected by configuration.
    pub fn run_period(
        &mut self,
        context: &RunContext,
    ) -> Result<AssignmentStatus, TransitAssignmentError> {
        let context = self.resolve_context(context)?;
        let period = self.time_period(&context.time_period)?.clone();
        let classes = self.class_specs(&context)?;
        let status = if self.config.use_ccr {
            self.run_capacitated(&period, &classes)?
        } else if self.config.congested_transit_assignment {
            self.run_congested(&period, &classes)?
        } else {
            self.run_extended(&period, &classes)?
        };
        if status.converged {
            log::info!(
                "{} assignment for {} finished after {} iterations",
                status.flavor,
                status.time_period,
                status.iterations
            );
        } else {
            log::warn!(
                "{} assignment for {} did not converge within {} iterations",
                status.flavor,
                status.time_period,
                status.iterations
            );
        }
        Ok(status)
    }

    /// assembles the assignment request of every configured class for a period.
    /// journey levels are cached per (period, class) for the controller's lifetime.
    pub fn class_specs(
        &mut self,
        context: &RunContext,
    ) -> Result<Vec<ClassSpec>, TransitAssignmentError> {
        let context = self.resolve_context(context)?;
        let fare_modes: Option<FareModes> = if self.config.use_fares {
            Some(self.store.read_network(&context.time_period)?.fare_modes())
        } else {
            None
        };
        let mut builder: Option<JourneyLevelBuilder> = None;
        let mut specs = Vec::with_capacity(self.config.classes.len());
        for class_config in self.config.classes.iter() {
            let class = TransitAssignmentClass::new(
                class_config,
                &self.config,
                &context,
                fare_modes.as_ref(),
            )?;
            let key = (context.time_period.clone(), class.name().to_string());
            let levels = match self.journey_levels.get(&key) {
                Some(levels) => levels.clone(),
                None => {
                    if self.config.use_fares && builder.is_none() {
                        builder = Some(
                            self.config
                                .journey_level_builder(&self.spec_dir, &context.time_period)?,
                        );
                    }
                    let levels = class.resolve_journey_levels(builder.as_ref(), &self.spec_dir)?;
                    self.journey_levels.insert(key, levels.clone());
                    levels
                }
            };
            specs.push(class.class_spec(levels));
        }
        Ok(specs)
    }

    fn run_capacitated(
        &mut self,
        period: &TimePeriodConfig,
        classes: &[ClassSpec],
    ) -> Result<AssignmentStatus, TransitAssignmentError> {
        let cost_model = CrowdingCostModel::new(period.duration(), self.config.ccr_weights);
        let headway_model = self.config.headway_model(period);
        let request = CapacitatedAssignmentRequest {
            time_period: &period.name,
            classes,
            cost_model: &cost_model,
            headway_function: &headway_model,
            stop_criteria: self.config.ccr_stop_criteria,
        };
        let outcome = self.engine.capacitated_assignment(&request)?;

        // penalties are read back by the engine's next pass
        let network = self.store.read_network(&period.name)?;
        let penalties = compute_segment_penalties(&headway_model, &network)?;
        self.store.write_penalties(&period.name, &penalties)?;

        let mut status = AssignmentStatus::new(&period.name, AssignmentFlavor::Capacitated, outcome);
        status.penalized_segments = Some(penalties.len());
        Ok(status)
    }

    fn run_congested(
        &mut self,
        period: &TimePeriodConfig,
        classes: &[ClassSpec],
    ) -> Result<AssignmentStatus, TransitAssignmentError> {
        let cost_model = CongestionCostModel::new(
            period.duration(),
            self.config.congested_weights,
            self.config.use_fares,
        )
        .with_steep_mode(self.config.congestion_steep_mode);
        let request = CongestedAssignmentRequest {
            time_period: &period.name,
            classes,
            cost_model: &cost_model,
            stop_criteria: CongestedStopCriteria {
                max_iterations: period.congested_transit_assn_max_iteration,
                normalized_gap: self.config.congested.normalized_gap,
                relative_gap: self.config.congested.relative_gap,
            },
        };
        let outcome = self.engine.congested_assignment(&request)?;
        Ok(AssignmentStatus::new(&period.name, AssignmentFlavor::Congested, outcome))
    }

    fn run_extended(
        &mut self,
        period: &TimePeriodConfig,
        classes: &[ClassSpec],
    ) -> Result<AssignmentStatus, TransitAssignmentError> {
        let mut combined = AssignmentOutcome {
            iterations: 0,
            converged: true,
        };
        for (idx, class) in classes.iter().enumerate() {
            let request = ExtendedAssignmentRequest {
                time_period: &period.name,
                class,
                add_volumes: idx > 0,
            };
            let outcome = self.engine.extended_assignment(&request)?;
            combined.iterations += outcome.iterations;
            combined.converged &= outcome.converged;
        }
        Ok(AssignmentStatus::new(&period.name, AssignmentFlavor::Extended, combined))
    }
}

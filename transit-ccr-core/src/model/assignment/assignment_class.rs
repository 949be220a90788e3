use std::{collections::BTreeSet, path::Path};

use super::{
    transit_assignment_spec::{
        CircularLines, FlowDistributionAtOrigins, FlowDistributionAtRegularNodes,
        FlowDistributionBetweenLines, PerceptionFactor, PerformanceSettings,
    },
    ClassSpec, RunContext, TransitAssignmentError, TransitAssignmentSpec, TransitClassConfig,
    TransitConfig, TransitModeConfig,
};
use crate::model::{
    journey::{
        journey_level_io::{self, ASSIGNMENT_TYPE},
        minimal_journey_levels, validate_class_modes, JourneyLevel, JourneyLevelBuilder,
        LevelPerception, PenaltyByLocation, PenaltySpec, ValueSource, WaitingTimePerception,
    },
    network::FareModes,
};

const OPTIMAL_STRATEGY: &str = "OPTIMAL_STRATEGY";

/// one assignment class of a time period, resolving its configuration against the
/// run context and the network's fare modes.
#[derive(Debug, Clone)]
pub struct TransitAssignmentClass<'a> {
    class_config: &'a TransitClassConfig,
    config: &'a TransitConfig,
    context: &'a RunContext,
    fare_modes: Option<&'a FareModes>,
}

impl<'a> TransitAssignmentClass<'a> {
    /// `fare_modes` must be provided when fares are modeled.
    pub fn new(
        class_config: &'a TransitClassConfig,
        config: &'a TransitConfig,
        context: &'a RunContext,
        fare_modes: Option<&'a FareModes>,
    ) -> Result<Self, TransitAssignmentError> {
        if config.use_fares && fare_modes.is_none() {
            return Err(TransitAssignmentError::Config(format!(
                "class {} requires fare modes when use_fares is enabled",
                class_config.name
            )));
        }
        Ok(Self {
            class_config,
            config,
            context,
            fare_modes,
        })
    }

    pub fn name(&self) -> &str {
        &self.class_config.name
    }

    pub fn demand_matrix(&self) -> String {
        format!(
            "mf\"TRN_{}_{}\"",
            self.class_config.skim_set_id, self.context.time_period
        )
    }

    /// every mode id this class assigns on.
    pub fn modes(&self) -> Vec<char> {
        self.used_mode_ids(self.class_modes())
    }

    /// the transit mode ids of this class, after fare-mode substitution.
    pub fn transit_modes(&self) -> Vec<char> {
        self.used_mode_ids(self.class_modes().filter(|m| m.is_transit()))
    }

    fn class_modes(&self) -> impl Iterator<Item = &'a TransitModeConfig> + 'a {
        let class_config: &'a TransitClassConfig = self.class_config;
        let config: &'a TransitConfig = self.config;
        let mode_types = &class_config.mode_types;
        config
            .modes
            .iter()
            .filter(move |m| mode_types.contains(&m.mode_type))
    }

    /// with fares, each transit mode is replaced by the fare modes generated from it.
    fn used_mode_ids<'b>(&self, modes: impl Iterator<Item = &'b TransitModeConfig>) -> Vec<char> {
        match (self.config.use_fares, self.fare_modes) {
            (true, Some(fare_modes)) => {
                let mut out: BTreeSet<char> = BTreeSet::new();
                for mode in modes {
                    if mode.is_transit() {
                        match fare_modes.get(&mode.mode_id) {
                            Some(generated) => out.extend(generated.iter().copied()),
                            None => log::warn!(
                                "class {}: no fare modes generated from transit mode '{}'",
                                self.name(),
                                mode.mode_id
                            ),
                        }
                    } else {
                        out.insert(mode.mode_id);
                    }
                }
                out.into_iter().collect()
            }
            _ => modes.map(|m| m.mode_id).collect(),
        }
    }

    pub fn level_perception(&self) -> LevelPerception {
        LevelPerception::in_transit(&self.config.effective_headway_source)
    }

    /// journey levels of this class: spliced from the fare template when fares are
    /// modeled, otherwise the minimal two-level automaton over its transit modes.
    pub fn journey_levels(
        &self,
        builder: Option<&JourneyLevelBuilder>,
    ) -> Result<Vec<JourneyLevel>, TransitAssignmentError> {
        let transit_modes = self.transit_modes();
        if !self.config.use_fares {
            return Ok(minimal_journey_levels(
                &transit_modes,
                &self.level_perception(),
            ));
        }
        let builder = builder.ok_or_else(|| {
            TransitAssignmentError::Config(format!(
                "class {} requires a journey level template when use_fares is enabled",
                self.name()
            ))
        })?;
        let variant = self.class_config.variant()?;
        let descriptor = variant.descriptor(&self.config.journey_mode_chars);
        let levels = builder.build(&descriptor)?;
        validate_class_modes(&levels, &transit_modes)?;
        log::debug!(
            "class {} uses the {} journey level variant with {} levels",
            self.name(),
            variant,
            levels.len()
        );
        Ok(levels)
    }

    /// journey levels of this class. when fares are modeled they are also written as
    /// the class's artifact for the run's time period under `spec_dir`.
    pub fn resolve_journey_levels(
        &self,
        builder: Option<&JourneyLevelBuilder>,
        spec_dir: &Path,
    ) -> Result<Vec<JourneyLevel>, TransitAssignmentError> {
        let levels = self.journey_levels(builder)?;
        if self.config.use_fares {
            journey_level_io::write_journey_levels(
                spec_dir,
                &self.context.time_period,
                self.name(),
                &levels,
            )?;
        }
        Ok(levels)
    }

    /// the named request handed to the engine.
    pub fn class_spec(&self, journey_levels: Vec<JourneyLevel>) -> ClassSpec {
        ClassSpec {
            name: self.name().to_string(),
            spec: self.transit_spec(journey_levels),
        }
    }

    /// the extended transit assignment request of this class.
    pub fn transit_spec(&self, journey_levels: Vec<JourneyLevel>) -> TransitAssignmentSpec {
        let config = self.config;
        let fare_perception = config.fare_perception();
        let (boarding_cost, in_vehicle_cost) = if config.use_fares {
            (
                PenaltyByLocation {
                    on_segments: Some(PenaltySpec::new("@board_cost", fare_perception)),
                    ..Default::default()
                },
                Some(PenaltySpec::new("@invehicle_cost", fare_perception)),
            )
        } else {
            (
                PenaltyByLocation {
                    global: Some(PenaltySpec::new(0.0, 1.0)),
                    ..Default::default()
                },
                None,
            )
        };
        let aux_transit_cost = if config.override_connector_times {
            Some(PenaltySpec::new(
                format!("@walk_time_{}", self.name().to_lowercase()).as_str(),
                config.walk_perception_factor,
            ))
        } else {
            None
        };

        TransitAssignmentSpec {
            assignment_type: ASSIGNMENT_TYPE.to_string(),
            modes: self.modes(),
            demand: self.demand_matrix(),
            waiting_time: WaitingTimePerception {
                headway_fraction: ValueSource::from("@hdw_fraction"),
                effective_headways: config.effective_headway_source.clone(),
                spread_factor: 1.0,
                perception_factor: ValueSource::Value(config.initial_wait_perception_factor),
            },
            boarding_cost,
            boarding_time: PenaltyByLocation {
                on_lines: Some(PenaltySpec::new("@iboard_penalty", 1.0)),
                ..Default::default()
            },
            in_vehicle_cost,
            in_vehicle_time: PerceptionFactor {
                perception_factor: ValueSource::from("@invehicle_factor"),
            },
            aux_transit_time: PerceptionFactor {
                perception_factor: ValueSource::Value(1.0),
            },
            aux_transit_cost,
            journey_levels,
            flow_distribution_between_lines: FlowDistributionBetweenLines {
                consider_total_impedance: false,
            },
            flow_distribution_at_origins: FlowDistributionAtOrigins {
                fixed_proportions_on_connectors: None,
                choices_at_origins: OPTIMAL_STRATEGY.to_string(),
            },
            flow_distribution_at_regular_nodes_with_aux_transit_choices:
                FlowDistributionAtRegularNodes {
                    choices_at_regular_nodes: OPTIMAL_STRATEGY.to_string(),
                },
            circular_lines: CircularLines { stay: false },
            performance_settings: PerformanceSettings {
                number_of_processors: self.context.num_processors,
            },
        }
    }
}

#[cfg(test)]
mod test {
    use std::collections::BTreeSet;

    use super::*;
    use crate::model::assignment::AssignType;

    fn config(use_fares: bool) -> TransitConfig {
        let raw = r#"{
            "value_of_time": 10.0,
            "effective_headway_source": "@hdw_eff",
            "initial_wait_perception_factor": 1.5,
            "walk_perception_factor": 2.0,
            "ccr_weights": {"min_seat": 1.0, "max_seat": 1.4, "power_seat": 2.2,
                            "min_stand": 1.4, "max_stand": 1.6, "power_stand": 3.4},
            "congested_weights": {"min_seat": 1.0, "max_seat": 1.4, "power_seat": 2.2,
                                  "min_stand": 1.4, "max_stand": 1.6, "power_stand": 3.4},
            "eawt_weights": {"constant": 0.26, "weight_inverse_headway": 1.6,
                             "vcr": 0.005, "exit_proportion": 0.59},
            "ccr_stop_criteria": {"max_iterations": 3, "relative_difference": 0.01,
                                  "percent_segments_over_capacity": 0.01},
            "congested": {"normalized_gap": 0.25, "relative_gap": 0.25},
            "modes": [],
            "classes": []
        }"#;
        let mut config: TransitConfig = serde_json::from_str(raw).expect("test invariant failed");
        config.use_fares = use_fares;
        config.modes = vec![
            mode('b', "LOCAL", AssignType::Transit),
            mode('h', "PREMIUM", AssignType::Transit),
            mode('l', "LOCAL", AssignType::Transit),
            mode('w', "WALK", AssignType::AuxTransit),
        ];
        config.classes = vec![TransitClassConfig {
            name: String::from("WLK_TRN_WLK"),
            skim_set_id: String::from("WLK_TRN_WLK"),
            mode_types: vec![String::from("LOCAL"), String::from("WALK")],
            journey_variant: None,
        }];
        config
    }

    fn mode(mode_id: char, mode_type: &str, assign_type: AssignType) -> TransitModeConfig {
        TransitModeConfig {
            mode_id,
            mode_type: mode_type.to_string(),
            assign_type,
            eawt_factor: 1.0,
        }
    }

    #[test]
    fn test_modes_without_fares() {
        let config = config(false);
        let context = RunContext::new("ea", 0, 4);
        let class = TransitAssignmentClass::new(&config.classes[0], &config, &context, None)
            .expect("test invariant failed");
        assert_eq!(class.modes(), vec!['b', 'l', 'w']);
        assert_eq!(class.transit_modes(), vec!['b', 'l']);
        assert_eq!(class.demand_matrix(), "mf\"TRN_WLK_TRN_WLK_ea\"");
        let levels = class.journey_levels(None).expect("test invariant failed");
        assert_eq!(levels.len(), 2);
        assert_eq!(levels[0].target('l'), Some(1));
    }

    #[test]
    fn test_resolved_levels_without_fares_write_nothing() {
        let dir = tempfile::tempdir().expect("test invariant failed");
        let config = config(false);
        let context = RunContext::new("ea", 0, 4);
        let class = TransitAssignmentClass::new(&config.classes[0], &config, &context, None)
            .expect("test invariant failed");
        let levels = class
            .resolve_journey_levels(None, dir.path())
            .expect("test invariant failed");
        assert_eq!(levels.len(), 2);
        assert!(!journey_level_io::artifact_path(dir.path(), "ea", "WLK_TRN_WLK").exists());

        let spec = class.class_spec(levels.clone());
        assert_eq!(spec.name, "WLK_TRN_WLK");
        assert_eq!(spec.spec.journey_levels, levels);
    }

    #[test]
    fn test_fare_modes_replace_transit_modes() {
        let config = config(true);
        let context = RunContext::new("ea", 0, 4);
        // no fare modes were generated from 'l'
        let fare_modes = FareModes::from([
            ('b', BTreeSet::from(['x', 'y'])),
            ('h', BTreeSet::from(['z'])),
        ]);
        let class =
            TransitAssignmentClass::new(&config.classes[0], &config, &context, Some(&fare_modes))
                .expect("test invariant failed");
        assert_eq!(class.modes(), vec!['w', 'x', 'y']);
        assert_eq!(class.transit_modes(), vec!['x', 'y']);
    }

    #[test]
    fn test_fares_require_fare_modes_and_template() {
        let config = config(true);
        let context = RunContext::new("ea", 0, 4);
        let missing = TransitAssignmentClass::new(&config.classes[0], &config, &context, None);
        assert!(matches!(missing, Err(TransitAssignmentError::Config(_))));

        let fare_modes = FareModes::new();
        let class =
            TransitAssignmentClass::new(&config.classes[0], &config, &context, Some(&fare_modes))
                .expect("test invariant failed");
        assert!(matches!(
            class.journey_levels(None),
            Err(TransitAssignmentError::Config(_))
        ));
    }

    #[test]
    fn test_fare_spec_costs() {
        let config = config(true);
        let context = RunContext::new("ea", 0, 4);
        let fare_modes = FareModes::from([('b', BTreeSet::from(['x']))]);
        let class =
            TransitAssignmentClass::new(&config.classes[0], &config, &context, Some(&fare_modes))
                .expect("test invariant failed");
        let spec = class.transit_spec(vec![]);
        let in_vehicle = spec.in_vehicle_cost.expect("test invariant failed");
        assert_eq!(in_vehicle.penalty, ValueSource::from("@invehicle_cost"));
        assert_eq!(in_vehicle.perception_factor, ValueSource::Value(6.0));
        assert!(spec.boarding_cost.global.is_none());
        assert!(spec.aux_transit_cost.is_none());
        assert_eq!(spec.performance_settings.number_of_processors, 4);
    }
}

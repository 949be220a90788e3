use super::{
    validate_journey_levels, AddedLevel, JourneyLevel, JourneyLevelError, LevelIdx,
    LevelPerception, Target, TransitionRule, ValueSource, VariantDescriptor,
};

/// section sizes of the final automaton, used to resolve symbolic targets.
#[derive(Debug, Clone, Copy)]
struct LevelLayout {
    n_access: usize,
    n_template: usize,
    n_egress: usize,
    trap: bool,
}

impl LevelLayout {
    fn n_levels(&self) -> usize {
        self.n_access + self.n_template + self.n_egress + usize::from(self.trap)
    }

    fn trap_index(&self) -> LevelIdx {
        self.n_access + self.n_template + self.n_egress
    }

    /// resolves a target for the level at `level`. `template_target` is the
    /// template's own target for the mode, when the rule comes from the template.
    fn resolve(
        &self,
        target: Target,
        level: LevelIdx,
        template_target: Option<LevelIdx>,
    ) -> Result<LevelIdx, JourneyLevelError> {
        let invalid = |message: String| JourneyLevelError::InvalidTarget { level, message };
        match target {
            Target::Trap if self.trap => Ok(self.trap_index()),
            Target::Trap => Err(invalid(String::from(
                "prohibit target used by a variant without a prohibit level",
            ))),
            Target::Stay => Ok(level),
            Target::Access(k) if k < self.n_access => Ok(k),
            Target::Access(k) => Err(invalid(format!(
                "access level {k} of {}",
                self.n_access
            ))),
            Target::Egress(k) if k < self.n_egress => Ok(self.n_access + self.n_template + k),
            Target::Egress(k) => Err(invalid(format!(
                "egress level {k} of {}",
                self.n_egress
            ))),
            Target::FirstTemplate => Ok(self.n_access),
            Target::Template => {
                let t = template_target.ok_or_else(|| {
                    invalid(String::from("template target requested for a non-template mode"))
                })?;
                // template targets count one prepended level
                (t + self.n_access)
                    .checked_sub(1)
                    .ok_or_else(|| invalid(format!("template target {t} precedes level 0")))
            }
        }
    }
}

/// splices a walk-access template automaton into the automaton of a class variant.
#[derive(Debug, Clone)]
pub struct JourneyLevelBuilder {
    template: Vec<JourneyLevel>,
    perception: LevelPerception,
    /// boarding-cost perception factor, `60 / value_of_time`
    fare_perception: f64,
}

impl JourneyLevelBuilder {
    pub fn new(
        template: Vec<JourneyLevel>,
        perception: LevelPerception,
        fare_perception: f64,
    ) -> Result<Self, JourneyLevelError> {
        if template.is_empty() {
            return Err(JourneyLevelError::EmptyTemplate);
        }
        Ok(Self {
            template,
            perception,
            fare_perception,
        })
    }

    pub fn template(&self) -> &[JourneyLevel] {
        &self.template
    }

    /// builds and validates the automaton described by `descriptor`.
    pub fn build(&self, descriptor: &VariantDescriptor) -> Result<Vec<JourneyLevel>, JourneyLevelError> {
        let base = self
            .template
            .first()
            .ok_or(JourneyLevelError::EmptyTemplate)?;
        let layout = LevelLayout {
            n_access: descriptor.access_levels.len(),
            n_template: self.template.len(),
            n_egress: descriptor.egress_levels.len(),
            trap: descriptor.trap,
        };
        let mut levels = Vec::with_capacity(layout.n_levels());

        for (k, added) in descriptor.access_levels.iter().enumerate() {
            levels.push(added_level(added, base, &layout, k)?);
        }

        for (i, template_level) in self.template.iter().enumerate() {
            let index = layout.n_access + i;
            let mut level = template_level.clone();
            for rule in level.transition_rules.iter_mut() {
                rule.next_journey_level =
                    layout.resolve(Target::Template, index, Some(rule.next_journey_level))?;
            }
            for (mode, target) in descriptor.template_rules.iter() {
                let next = layout.resolve(*target, index, None)?;
                level.transition_rules.push(TransitionRule::new(*mode, next));
            }
            if let Some(reachable) = descriptor.template_reachable {
                level.destinations_reachable = reachable;
            }
            level.waiting_time = Some(self.perception.waiting_time.clone());
            level.boarding_time = Some(self.perception.boarding_time.clone());
            levels.push(level);
        }

        for (k, added) in descriptor.egress_levels.iter().enumerate() {
            let index = layout.n_access + layout.n_template + k;
            levels.push(added_level(added, base, &layout, index)?);
        }

        if layout.trap {
            let trap = layout.trap_index();
            let rules = base
                .modes()
                .chain(descriptor.extra_modes())
                .map(|mode| TransitionRule::new(mode, trap))
                .collect();
            levels.push(JourneyLevel::new("prohibit", false, rules));
        }

        for (index, level) in levels.iter_mut().enumerate() {
            if let Some(boarding_cost) = level.boarding_cost.as_mut() {
                let on_segments = boarding_cost
                    .on_segments
                    .as_mut()
                    .ok_or(JourneyLevelError::MissingOnSegments(index))?;
                on_segments.perception_factor = ValueSource::Value(self.fare_perception);
            }
        }

        validate_journey_levels(&levels, layout.trap)?;
        log::debug!(
            "built {} journey levels from a {} level template",
            levels.len(),
            self.template.len()
        );
        Ok(levels)
    }
}

/// an access or egress level: transit modes of the first template level go to the
/// level's transit target, followed by its own rules.
fn added_level(
    added: &AddedLevel,
    base: &JourneyLevel,
    layout: &LevelLayout,
    index: LevelIdx,
) -> Result<JourneyLevel, JourneyLevelError> {
    let mut rules = Vec::with_capacity(base.transition_rules.len() + added.rules.len());
    for rule in base.transition_rules.iter() {
        let next = layout.resolve(added.transit, index, Some(rule.next_journey_level))?;
        rules.push(TransitionRule::new(rule.mode, next));
    }
    for (mode, target) in added.rules.iter() {
        rules.push(TransitionRule::new(*mode, layout.resolve(*target, index, None)?));
    }
    Ok(JourneyLevel::new(
        &added.description,
        added.destinations_reachable,
        rules,
    ))
}

/// the two-level automaton used when fares are not modeled: a boarding level and an
/// in-transit level, both routing every transit mode to the in-transit level.
pub fn minimal_journey_levels(
    transit_modes: &[char],
    perception: &LevelPerception,
) -> Vec<JourneyLevel> {
    let rules: Vec<TransitionRule> = transit_modes
        .iter()
        .map(|m| TransitionRule::new(*m, 1))
        .collect();
    let first = JourneyLevel::new("", true, rules.clone());
    let mut in_transit = JourneyLevel::new("", true, rules);
    in_transit.waiting_time = Some(perception.waiting_time.clone());
    in_transit.boarding_time = Some(perception.boarding_time.clone());
    vec![first, in_transit]
}

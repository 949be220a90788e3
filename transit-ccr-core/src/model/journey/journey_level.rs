use serde::{Deserialize, Serialize};

use super::{PenaltyByLocation, WaitingTimePerception};

/// zero-based position of a level in an automaton.
pub type LevelIdx = usize;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionRule {
    pub mode: char,
    pub next_journey_level: LevelIdx,
}

impl TransitionRule {
    pub fn new(mode: char, next_journey_level: LevelIdx) -> Self {
        Self {
            mode,
            next_journey_level,
        }
    }
}

/// one state of a journey-level automaton.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct JourneyLevel {
    pub description: String,
    /// whether paths may end while in this level
    pub destinations_reachable: bool,
    pub transition_rules: Vec<TransitionRule>,
    #[serde(default)]
    pub waiting_time: Option<WaitingTimePerception>,
    #[serde(default)]
    pub boarding_time: Option<PenaltyByLocation>,
    #[serde(default)]
    pub boarding_cost: Option<PenaltyByLocation>,
}

impl JourneyLevel {
    pub fn new(
        description: &str,
        destinations_reachable: bool,
        transition_rules: Vec<TransitionRule>,
    ) -> Self {
        Self {
            description: description.to_string(),
            destinations_reachable,
            transition_rules,
            waiting_time: None,
            boarding_time: None,
            boarding_cost: None,
        }
    }

    /// the level a mode leads to, if this level has a rule for it.
    pub fn target(&self, mode: char) -> Option<LevelIdx> {
        self.transition_rules
            .iter()
            .find(|r| r.mode == mode)
            .map(|r| r.next_journey_level)
    }

    pub fn modes(&self) -> impl Iterator<Item = char> + '_ {
        self.transition_rules.iter().map(|r| r.mode)
    }

    /// true when every rule of the level at `index` leads back to itself.
    pub fn is_absorbing(&self, index: LevelIdx) -> bool {
        self.transition_rules
            .iter()
            .all(|r| r.next_journey_level == index)
    }
}

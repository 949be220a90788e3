use serde::{Deserialize, Serialize};

/// a parameter given either as a literal value or as the name of a network attribute
/// the engine reads per element (e.g. `"@wait_pfactor"`).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum ValueSource {
    Value(f64),
    Attribute(String),
}

impl From<f64> for ValueSource {
    fn from(value: f64) -> Self {
        ValueSource::Value(value)
    }
}

impl From<&str> for ValueSource {
    fn from(attribute: &str) -> Self {
        ValueSource::Attribute(attribute.to_string())
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PenaltySpec {
    pub penalty: ValueSource,
    pub perception_factor: ValueSource,
}

impl PenaltySpec {
    pub fn new<P: Into<ValueSource>, F: Into<ValueSource>>(penalty: P, perception_factor: F) -> Self {
        Self {
            penalty: penalty.into(),
            perception_factor: perception_factor.into(),
        }
    }
}

/// a penalty applied at one or more network locations. used for boarding time and
/// boarding cost.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct PenaltyByLocation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub global: Option<PenaltySpec>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub at_nodes: Option<PenaltySpec>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on_lines: Option<PenaltySpec>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on_segments: Option<PenaltySpec>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct WaitingTimePerception {
    pub headway_fraction: ValueSource,
    /// attribute holding the effective headways
    pub effective_headways: String,
    pub spread_factor: f64,
    pub perception_factor: ValueSource,
}

/// wait and boarding perception overrides attached to in-transit levels.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct LevelPerception {
    pub waiting_time: WaitingTimePerception,
    pub boarding_time: PenaltyByLocation,
}

impl LevelPerception {
    /// overrides applied to every level reached after boarding transit.
    pub fn in_transit(effective_headway_source: &str) -> LevelPerception {
        LevelPerception {
            waiting_time: WaitingTimePerception {
                headway_fraction: ValueSource::from("@hdw_fraction"),
                effective_headways: effective_headway_source.to_string(),
                spread_factor: 1.0,
                perception_factor: ValueSource::from("@wait_pfactor"),
            },
            boarding_time: PenaltyByLocation {
                on_lines: Some(PenaltySpec::new("@xboard_penalty", 1.0)),
                at_nodes: Some(PenaltySpec::new("@xboard_nodepen", 1.0)),
                ..Default::default()
            },
        }
    }
}

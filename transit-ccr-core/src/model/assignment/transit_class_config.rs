use serde::{Deserialize, Serialize};

use crate::model::journey::{JourneyLevelError, JourneyVariant};

/// a travel-market segment assigned as its own class.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TransitClassConfig {
    pub name: String,
    /// demand matrix key, `TRN_{skim_set_id}_{period}`
    pub skim_set_id: String,
    /// mode types this class may use
    pub mode_types: Vec<String>,
    /// journey-level variant, inferred from the class name when omitted
    #[serde(default)]
    pub journey_variant: Option<JourneyVariant>,
}

impl TransitClassConfig {
    pub fn variant(&self) -> Result<JourneyVariant, JourneyLevelError> {
        match self.journey_variant {
            Some(variant) => Ok(variant),
            None => self.name.parse(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_variant_inferred_from_name() {
        let mut class = TransitClassConfig {
            name: String::from("PNR_TRN_WLK"),
            skim_set_id: String::from("PNR_TRN_WLK"),
            mode_types: vec![],
            journey_variant: None,
        };
        assert_eq!(
            class.variant().expect("test invariant failed"),
            JourneyVariant::ParkAndRideOutbound
        );
        class.name = String::from("DRIVE_ALONE_TRANSIT");
        assert!(class.variant().is_err());
        class.journey_variant = Some(JourneyVariant::WalkTransitWalk);
        assert_eq!(
            class.variant().expect("test invariant failed"),
            JourneyVariant::WalkTransitWalk
        );
    }
}

use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

use super::{AddedLevel, JourneyLevelError, JourneyModeChars, Target, VariantDescriptor};

/// structural variants of the journey-level automaton, named after the assignment
/// classes that use them.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JourneyVariant {
    #[serde(rename = "WLK_TRN_WLK")]
    WalkTransitWalk,
    #[serde(rename = "PNR_TRN_WLK")]
    ParkAndRideOutbound,
    #[serde(rename = "WLK_TRN_PNR")]
    ParkAndRideReturn,
    #[serde(rename = "KNR_TRN_WLK")]
    KissAndRideOutbound,
    #[serde(rename = "WLK_TRN_KNR")]
    KissAndRideReturn,
}

impl JourneyVariant {
    pub const ALL: [JourneyVariant; 5] = [
        JourneyVariant::WalkTransitWalk,
        JourneyVariant::ParkAndRideOutbound,
        JourneyVariant::ParkAndRideReturn,
        JourneyVariant::KissAndRideOutbound,
        JourneyVariant::KissAndRideReturn,
    ];

    pub fn class_name(&self) -> &'static str {
        match self {
            JourneyVariant::WalkTransitWalk => "WLK_TRN_WLK",
            JourneyVariant::ParkAndRideOutbound => "PNR_TRN_WLK",
            JourneyVariant::ParkAndRideReturn => "WLK_TRN_PNR",
            JourneyVariant::KissAndRideOutbound => "KNR_TRN_WLK",
            JourneyVariant::KissAndRideReturn => "WLK_TRN_KNR",
        }
    }

    pub fn from_class_name(name: &str) -> Option<JourneyVariant> {
        Self::ALL.into_iter().find(|v| v.class_name() == name)
    }

    /// the splice parameters of this variant for the given mode characters.
    pub fn descriptor(&self, chars: &JourneyModeChars) -> VariantDescriptor {
        match self {
            JourneyVariant::WalkTransitWalk => VariantDescriptor {
                access_levels: vec![AddedLevel::new("base", true, Target::Template, vec![])],
                egress_levels: vec![],
                template_rules: vec![],
                template_reachable: None,
                trap: false,
            },
            JourneyVariant::ParkAndRideOutbound => drive_access(chars, chars.pnr, "pnr"),
            JourneyVariant::KissAndRideOutbound => drive_access(chars, chars.knr, "knr"),
            JourneyVariant::ParkAndRideReturn => drive_egress(chars, chars.pnr),
            JourneyVariant::KissAndRideReturn => drive_egress(chars, chars.knr),
        }
    }
}

/// drive to a station, transfer there through the station connector, then ride
/// transit and walk out.
fn drive_access(chars: &JourneyModeChars, station: char, description: &str) -> VariantDescriptor {
    use Target::*;
    let (e, d, w) = (chars.egress, chars.drive, chars.walk);
    VariantDescriptor {
        access_levels: vec![
            AddedLevel::new(
                "drive access",
                false,
                Trap,
                vec![(e, Trap), (d, Access(0)), (w, Trap), (station, Access(1))],
            ),
            AddedLevel::new(
                description,
                false,
                FirstTemplate,
                vec![(e, Trap), (d, Trap), (w, Trap), (station, Access(1))],
            ),
        ],
        egress_levels: vec![],
        template_rules: vec![(e, Stay), (d, Trap), (w, Stay), (station, Trap)],
        template_reachable: None,
        trap: true,
    }
}

/// walk to transit, ride, then leave through the station connector and drive home.
fn drive_egress(chars: &JourneyModeChars, station: char) -> VariantDescriptor {
    use Target::*;
    let (a, d, w) = (chars.access, chars.drive, chars.walk);
    VariantDescriptor {
        access_levels: vec![AddedLevel::new(
            "walk access",
            true,
            FirstTemplate,
            vec![(a, Access(0)), (d, Trap), (w, Trap), (station, Trap)],
        )],
        egress_levels: vec![AddedLevel::new(
            "drive home",
            true,
            Trap,
            vec![(a, Trap), (d, Egress(0)), (w, Trap), (station, Trap)],
        )],
        template_rules: vec![(a, Trap), (d, Trap), (w, Stay), (station, Egress(0))],
        template_reachable: Some(false),
        trap: true,
    }
}

impl Display for JourneyVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.class_name())
    }
}

impl FromStr for JourneyVariant {
    type Err = JourneyLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        JourneyVariant::from_class_name(s)
            .ok_or_else(|| JourneyLevelError::UnknownVariant(s.to_string()))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_class_names_round_trip() {
        for variant in JourneyVariant::ALL {
            let parsed: JourneyVariant = variant
                .class_name()
                .parse()
                .expect("test invariant failed");
            assert_eq!(parsed, variant);
        }
        assert!(matches!(
            "DRV_TRN_DRV".parse::<JourneyVariant>(),
            Err(JourneyLevelError::UnknownVariant(_))
        ));
    }

    #[test]
    fn test_serde_names_match_class_names() {
        let json = serde_json::to_string(&JourneyVariant::KissAndRideReturn)
            .expect("test invariant failed");
        assert_eq!(json, "\"WLK_TRN_KNR\"");
    }

    #[test]
    fn test_knr_uses_knr_connector() {
        let chars = JourneyModeChars::default();
        let descriptor = JourneyVariant::KissAndRideOutbound.descriptor(&chars);
        assert_eq!(descriptor.extra_modes(), vec!['e', 'D', 'w', 'k']);
        assert_eq!(descriptor.access_levels[1].description, "knr");
    }
}

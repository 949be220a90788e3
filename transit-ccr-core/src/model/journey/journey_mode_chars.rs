use serde::{Deserialize, Serialize};

/// mode characters of the access, egress and auxiliary legs the journey-level
/// variants gate on.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct JourneyModeChars {
    /// walk access to transit
    #[serde(default = "JourneyModeChars::default_access")]
    pub access: char,
    /// walk egress from transit
    #[serde(default = "JourneyModeChars::default_egress")]
    pub egress: char,
    /// drive leg on the road network
    #[serde(default = "JourneyModeChars::default_drive")]
    pub drive: char,
    /// walk transfer
    #[serde(default = "JourneyModeChars::default_walk")]
    pub walk: char,
    /// park-and-ride connector
    #[serde(default = "JourneyModeChars::default_pnr")]
    pub pnr: char,
    /// kiss-and-ride connector
    #[serde(default = "JourneyModeChars::default_knr")]
    pub knr: char,
}

impl JourneyModeChars {
    fn default_access() -> char {
        'a'
    }
    fn default_egress() -> char {
        'e'
    }
    fn default_drive() -> char {
        'D'
    }
    fn default_walk() -> char {
        'w'
    }
    fn default_pnr() -> char {
        'p'
    }
    fn default_knr() -> char {
        'k'
    }
}

impl Default for JourneyModeChars {
    fn default() -> Self {
        Self {
            access: Self::default_access(),
            egress: Self::default_egress(),
            drive: Self::default_drive(),
            walk: Self::default_walk(),
            pnr: Self::default_pnr(),
            knr: Self::default_knr(),
        }
    }
}

//! per-class journey-level automata restricting which mode sequences a path may use.
//!
//! a journey level is a state of the automaton; each level routes every mode to the
//! next level. variants that gate entry or exit through access and egress legs route
//! illegal sequences to a trailing "prohibit" level that absorbs every mode.

mod builder;
mod journey_level;
mod journey_level_error;
pub mod journey_level_io;
mod journey_mode_chars;
mod journey_variant;
mod perception;
mod validation;
mod variant_descriptor;

pub use builder::{minimal_journey_levels, JourneyLevelBuilder};
pub use journey_level::{JourneyLevel, LevelIdx, TransitionRule};
pub use journey_level_error::JourneyLevelError;
pub use journey_level_io::JourneyLevelDocument;
pub use journey_mode_chars::JourneyModeChars;
pub use journey_variant::JourneyVariant;
pub use perception::{LevelPerception, PenaltyByLocation, PenaltySpec, ValueSource, WaitingTimePerception};
pub use validation::{validate_class_modes, validate_journey_levels};
pub use variant_descriptor::{AddedLevel, Target, VariantDescriptor};

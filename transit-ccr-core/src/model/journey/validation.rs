use std::collections::BTreeSet;

use itertools::Itertools;

use super::{JourneyLevel, JourneyLevelError};

/// checks a finished automaton before it is handed to the engine.
///
/// every level must route every mode used anywhere in the automaton exactly once,
/// and every target must be a valid level. when `expect_trap` is set, the last level
/// must be the one and only level whose rules all lead back to itself.
pub fn validate_journey_levels(
    levels: &[JourneyLevel],
    expect_trap: bool,
) -> Result<(), JourneyLevelError> {
    let n_levels = levels.len();
    let modes: BTreeSet<char> = levels.iter().flat_map(|l| l.modes()).collect();

    for (index, level) in levels.iter().enumerate() {
        let counts = level.modes().counts();
        for mode in modes.iter() {
            match counts.get(mode) {
                None => {
                    return Err(JourneyLevelError::MissingRule {
                        level: index,
                        mode: *mode,
                    })
                }
                Some(&count) if count > 1 => {
                    return Err(JourneyLevelError::DuplicateRule {
                        level: index,
                        mode: *mode,
                        count,
                    })
                }
                Some(_) => {}
            }
        }
        if let Some(rule) = level
            .transition_rules
            .iter()
            .find(|r| r.next_journey_level >= n_levels)
        {
            return Err(JourneyLevelError::TargetOutOfRange {
                level: index,
                mode: rule.mode,
                target: rule.next_journey_level,
                n_levels,
            });
        }
    }

    if expect_trap {
        let absorbing = levels
            .iter()
            .enumerate()
            .filter(|(idx, level)| level.is_absorbing(*idx))
            .map(|(idx, _)| idx)
            .collect_vec();
        let last = n_levels.checked_sub(1);
        match absorbing.as_slice() {
            [idx] if Some(*idx) == last => {}
            [] => {
                return Err(JourneyLevelError::TrapViolation(String::from(
                    "no level absorbs every mode",
                )))
            }
            found => {
                return Err(JourneyLevelError::TrapViolation(format!(
                    "expected only the last level ({}) to be absorbing, found levels [{}]",
                    n_levels.saturating_sub(1),
                    found.iter().join(", ")
                )))
            }
        }
        if levels.last().is_some_and(|l| l.destinations_reachable) {
            return Err(JourneyLevelError::TrapViolation(String::from(
                "destinations are reachable from the prohibit level",
            )));
        }
    }
    Ok(())
}

/// checks that the automaton routes every transit mode a class may use.
pub fn validate_class_modes(
    levels: &[JourneyLevel],
    class_modes: &[char],
) -> Result<(), JourneyLevelError> {
    for (index, level) in levels.iter().enumerate() {
        if let Some(mode) = class_modes.iter().find(|m| level.target(**m).is_none()) {
            return Err(JourneyLevelError::MissingRule {
                level: index,
                mode: *mode,
            });
        }
    }
    Ok(())
}

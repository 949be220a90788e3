use std::collections::{BTreeMap, BTreeSet, HashSet};

use serde::{Deserialize, Serialize};

use super::{Line, NetworkError};

/// source mode -> the set of generated fare mode characters for that source mode.
pub type FareModes = BTreeMap<char, BTreeSet<char>>;

/// per-time-period snapshot of transit lines and their segments.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct TransitNetwork {
    pub lines: Vec<Line>,
}

impl TransitNetwork {
    /// builds a network, rejecting duplicate line ids.
    pub fn new(lines: Vec<Line>) -> Result<TransitNetwork, NetworkError> {
        let mut seen: HashSet<&str> = HashSet::new();
        for line in lines.iter() {
            if !seen.insert(line.id.as_str()) {
                return Err(NetworkError::DuplicateLine(line.id.clone()));
            }
        }
        Ok(TransitNetwork { lines })
    }

    pub fn get_line(&self, line_id: &str) -> Option<&Line> {
        self.lines.iter().find(|l| l.id == line_id)
    }

    pub fn n_segments(&self) -> usize {
        self.lines.iter().map(|l| l.n_segments()).sum()
    }

    /// groups the mode characters generated by fare splitting under the source mode
    /// they were derived from. lines without a source mode are skipped.
    pub fn fare_modes(&self) -> FareModes {
        let mut fare_modes = FareModes::new();
        for line in self.lines.iter() {
            if let Some(src) = line.source_mode {
                fare_modes.entry(src).or_default().insert(line.mode);
            }
        }
        fare_modes
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::model::network::Vehicle;

    fn line(id: &str, mode: char, source_mode: Option<char>) -> Line {
        Line {
            id: id.to_string(),
            mode,
            source_mode,
            headway: 15.0,
            vehicle: Vehicle {
                seated_capacity: 40.0,
                total_capacity: 60.0,
            },
            segments: vec![],
        }
    }

    #[test]
    fn test_fare_modes_grouped_by_source() {
        let network = TransitNetwork::new(vec![
            line("a", 'x', Some('b')),
            line("b", 'y', Some('b')),
            line("c", 'z', Some('l')),
            line("d", 'q', None),
        ])
        .expect("test invariant failed");
        let fm = network.fare_modes();
        assert_eq!(fm.len(), 2);
        assert_eq!(fm[&'b'], BTreeSet::from(['x', 'y']));
        assert_eq!(fm[&'l'], BTreeSet::from(['z']));
    }

    #[test]
    fn test_duplicate_line_rejected() {
        let result = TransitNetwork::new(vec![line("a", 'x', None), line("a", 'y', None)]);
        assert!(matches!(result, Err(NetworkError::DuplicateLine(id)) if id == "a"));
    }
}

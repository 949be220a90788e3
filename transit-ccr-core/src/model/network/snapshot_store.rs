use std::collections::HashMap;

use super::{NetworkError, SegmentPenalty, TransitNetwork};

/// read/write access to the per-period network attributes shared with the
/// assignment engine.
pub trait NetworkSnapshotStore {
    /// loads the line and segment attributes for a time period.
    fn read_network(&self, time_period: &str) -> Result<TransitNetwork, NetworkError>;

    /// persists the derived segment penalties for the engine's next pass.
    fn write_penalties(
        &mut self,
        time_period: &str,
        penalties: &[SegmentPenalty],
    ) -> Result<(), NetworkError>;
}

/// a store held entirely in memory, used when embedding the core alongside an
/// engine that already owns the network, and in tests.
#[derive(Debug, Default, Clone)]
pub struct InMemorySnapshotStore {
    networks: HashMap<String, TransitNetwork>,
    penalties: HashMap<String, Vec<SegmentPenalty>>,
}

impl InMemorySnapshotStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_network(&mut self, time_period: &str, network: TransitNetwork) {
        self.networks.insert(time_period.to_string(), network);
    }

    /// the most recently written penalties for a period.
    pub fn penalties(&self, time_period: &str) -> Option<&[SegmentPenalty]> {
        self.penalties.get(time_period).map(|p| p.as_slice())
    }
}

impl NetworkSnapshotStore for InMemorySnapshotStore {
    fn read_network(&self, time_period: &str) -> Result<TransitNetwork, NetworkError> {
        self.networks
            .get(time_period)
            .cloned()
            .ok_or_else(|| NetworkError::MissingPeriod(time_period.to_string()))
    }

    fn write_penalties(
        &mut self,
        time_period: &str,
        penalties: &[SegmentPenalty],
    ) -> Result<(), NetworkError> {
        self.penalties
            .insert(time_period.to_string(), penalties.to_vec());
        Ok(())
    }
}

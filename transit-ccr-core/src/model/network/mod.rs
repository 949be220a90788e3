mod csv_snapshot_store;
mod line;
mod network_error;
mod segment;
mod segment_ref;
mod snapshot_store;
mod transit_network;

pub use csv_snapshot_store::CsvSnapshotStore;
pub use line::{Line, Vehicle};
pub use network_error::NetworkError;
pub use segment::{Segment, SegmentPenalty};
pub use segment_ref::SegmentRef;
pub use snapshot_store::{InMemorySnapshotStore, NetworkSnapshotStore};
pub use transit_network::{FareModes, TransitNetwork};

/// zero-based position of a segment within its line.
pub type SegmentIdx = usize;

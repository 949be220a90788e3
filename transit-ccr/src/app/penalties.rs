use std::path::Path;

use transit_ccr_core::model::{
    headway::compute_segment_penalties,
    network::{CsvSnapshotStore, NetworkSnapshotStore, SegmentPenalty},
};

use super::{CcrAppError, RunConfiguration};

/// recomputes the eawt and capacity penalty of every segment of a period's snapshot
/// and writes them next to it.
pub fn run(
    config: &RunConfiguration,
    time_period: &str,
    snapshot_directory: &Path,
) -> Result<Vec<SegmentPenalty>, CcrAppError> {
    let period = config.time_period(time_period)?;
    let mut store = CsvSnapshotStore::new(snapshot_directory);
    let network = store.read_network(&period.name)?;
    log::info!(
        "read {} lines with {} segments for {}",
        network.lines.len(),
        network.n_segments(),
        period.name
    );
    let model = config.transit.headway_model(period);
    let penalties = compute_segment_penalties(&model, &network)?;
    store.write_penalties(&period.name, &penalties)?;
    Ok(penalties)
}

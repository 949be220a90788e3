use rayon::prelude::*;

use super::{HeadwayError, HeadwayFunction, PerceivedHeadwayModel, SegmentLoad};
use crate::model::network::{Line, SegmentPenalty, TransitNetwork};

/// recomputes `@eawt` and `@capacity_penalty` for every segment of the network.
///
/// lines are processed in parallel, segments strictly in line order, and all results
/// are collected before returning so callers write them back in one step. output
/// order follows the network's line order.
pub fn compute_segment_penalties(
    model: &PerceivedHeadwayModel,
    network: &TransitNetwork,
) -> Result<Vec<SegmentPenalty>, HeadwayError> {
    let per_line = network
        .lines
        .par_iter()
        .map(|line| line_penalties(model, line))
        .collect::<Result<Vec<_>, _>>()?;
    let penalties: Vec<SegmentPenalty> = per_line.into_iter().flatten().collect();

    let penalized = penalties
        .iter()
        .filter(|p| p.capacity_penalty > 0.0)
        .count();
    log::info!(
        "computed penalties for {} segments on {} lines, {} with a capacity penalty",
        penalties.len(),
        network.lines.len(),
        penalized
    );
    Ok(penalties)
}

fn line_penalties(
    model: &PerceivedHeadwayModel,
    line: &Line,
) -> Result<Vec<SegmentPenalty>, HeadwayError> {
    let capacity = line.period_capacity(model.period);
    let aggregates = model.line_aggregates(line);
    line.segment_refs()
        .map(|segment| {
            let load = SegmentLoad::from_segment(&segment, capacity);
            let eawt = model.eawt(&segment, &aggregates, &load)?;
            let previous_headway = segment.segment().previous_headway;
            let capacity_penalty = (previous_headway - eawt - line.headway).max(0.0)
                * model.policy.headway_fraction;
            Ok(SegmentPenalty {
                line_id: line.id.clone(),
                segment_index: segment.index(),
                eawt,
                capacity_penalty,
            })
        })
        .collect()
}

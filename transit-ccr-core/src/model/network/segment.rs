use serde::{Deserialize, Serialize};

use super::SegmentIdx;

/// one directional traversal of a link by a transit line. volumes and boardings are
/// produced by the assignment engine for the current iteration.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Default)]
pub struct Segment {
    /// assigned passenger flow through the segment
    pub transit_volume: f64,
    /// passengers boarding at the start of this segment
    pub transit_boardings: f64,
    /// perceived headway carried over from the previous assignment iteration.
    /// kept distinct from the line's nominal headway.
    pub previous_headway: f64,
}

impl Segment {
    pub fn new(transit_volume: f64, transit_boardings: f64, previous_headway: f64) -> Segment {
        Segment {
            transit_volume,
            transit_boardings,
            previous_headway,
        }
    }
}

/// derived outputs written back for the next assignment pass.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SegmentPenalty {
    pub line_id: String,
    pub segment_index: SegmentIdx,
    /// extra added wait time, `@eawt`
    pub eawt: f64,
    /// boarding penalty induced by capacity, `@capacity_penalty`
    pub capacity_penalty: f64,
}

use crate::model::network::SegmentRef;

/// the values an assignment engine supplies for one segment when it evaluates the
/// headway hook.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentLoad {
    pub volume: f64,
    pub boardings: f64,
    /// nominal line headway in minutes
    pub headway: f64,
    /// line capacity over the time period
    pub capacity: f64,
}

impl SegmentLoad {
    pub fn new(volume: f64, boardings: f64, headway: f64, capacity: f64) -> SegmentLoad {
        SegmentLoad {
            volume,
            boardings,
            headway,
            capacity,
        }
    }

    /// the load recorded on a segment of a network snapshot.
    pub fn from_segment(segment: &SegmentRef, capacity: f64) -> SegmentLoad {
        let seg = segment.segment();
        SegmentLoad::new(
            seg.transit_volume,
            seg.transit_boardings,
            segment.line().headway,
            capacity,
        )
    }
}

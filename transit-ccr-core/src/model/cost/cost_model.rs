use super::{CongestionFunctionSpec, CostModelError};
use crate::model::network::SegmentRef;

/// a segment cost hook evaluated by the external assignment engine once per path-flow
/// evaluation. implementations are pure functions of the segment snapshot.
pub trait CostModel: Send + Sync {
    /// non-negative congestion cost for a segment carrying `volume` with `capacity`
    /// over the assignment period.
    fn segment_cost(
        &self,
        volume: f64,
        capacity: f64,
        segment: &SegmentRef,
    ) -> Result<f64, CostModelError>;

    /// declarative description of this hook for engines that take their
    /// congestion function as configuration.
    fn function_spec(&self) -> CongestionFunctionSpec;
}

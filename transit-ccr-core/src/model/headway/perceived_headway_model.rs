use uom::si::{f64::Time, time::minute};

use super::{
    adjusted_headway, extra_added_wait_time, EawtFactors, EawtWeightsConfig, HeadwayError,
    HeadwayFunctionSpec, HeadwayPolicy, LineAggregates, SegmentLoad,
};
use crate::model::network::{Line, SegmentRef};

/// the headway hook evaluated by the external engine for capacitated assignment.
///
/// an engine evaluates a line's segments in line order. it calls `line_aggregates`
/// once per line and evaluation pass, then `headway` for each segment of that line.
pub trait HeadwayFunction: Send + Sync {
    /// per-line alighting statistics shared by every segment of the line.
    fn line_aggregates(&self, line: &Line) -> LineAggregates {
        LineAggregates::from_line(line)
    }

    /// effective headway of a segment under the load the engine assigns it.
    fn headway(
        &self,
        load: &SegmentLoad,
        segment: &SegmentRef,
        aggregates: &LineAggregates,
    ) -> Result<f64, HeadwayError>;

    fn function_spec(&self) -> HeadwayFunctionSpec;
}

/// effective headway as the adjusted perceived headway plus the extra added wait time.
#[derive(Debug, Clone)]
pub struct PerceivedHeadwayModel {
    pub period: Time,
    pub eawt_weights: EawtWeightsConfig,
    pub eawt_factors: EawtFactors,
    pub use_fares: bool,
    pub policy: HeadwayPolicy,
}

impl PerceivedHeadwayModel {
    pub fn new(
        period: Time,
        eawt_weights: EawtWeightsConfig,
        eawt_factors: EawtFactors,
        use_fares: bool,
        policy: HeadwayPolicy,
    ) -> Self {
        Self {
            period,
            eawt_weights,
            eawt_factors,
            use_fares,
            policy,
        }
    }

    /// eawt of a segment using aggregates already computed for its line.
    pub fn eawt(
        &self,
        segment: &SegmentRef,
        aggregates: &LineAggregates,
        load: &SegmentLoad,
    ) -> Result<f64, HeadwayError> {
        extra_added_wait_time(
            segment,
            aggregates,
            load,
            &self.eawt_weights,
            &self.eawt_factors,
            self.use_fares,
        )
    }
}

impl HeadwayFunction for PerceivedHeadwayModel {
    fn headway(
        &self,
        load: &SegmentLoad,
        segment: &SegmentRef,
        aggregates: &LineAggregates,
    ) -> Result<f64, HeadwayError> {
        let eawt = self.eawt(segment, aggregates, load)?;
        let previous_headway = segment.segment().previous_headway;
        let adjusted = adjusted_headway(load, previous_headway, &self.policy);
        Ok(adjusted + eawt)
    }

    fn function_spec(&self) -> HeadwayFunctionSpec {
        HeadwayFunctionSpec {
            eawt_weights: self.eawt_weights,
            mode_eawt_factors: self.eawt_factors.clone(),
            use_fares: self.use_fares,
            headway_policy: self.policy,
            assignment_period: self.period.get::<minute>(),
        }
    }
}

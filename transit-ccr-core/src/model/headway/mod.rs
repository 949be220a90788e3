mod adjusted_headway;
mod eawt;
mod eawt_weights;
mod function_spec;
mod headway_error;
mod headway_policy;
mod line_aggregates;
mod perceived_headway_model;
mod segment_load;
mod segment_penalties;

pub use adjusted_headway::adjusted_headway;
pub use eawt::{eawt_factor, extra_added_wait_time, EawtFactors, DEGENERATE_HEADWAY, HEADWAY_SENTINEL};
pub use eawt_weights::EawtWeightsConfig;
pub use function_spec::HeadwayFunctionSpec;
pub use headway_error::HeadwayError;
pub use headway_policy::HeadwayPolicy;
pub use line_aggregates::{LineAggregates, MIN_TOTAL_OFFS, TOTAL_OFFS_SENTINEL};
pub use perceived_headway_model::{HeadwayFunction, PerceivedHeadwayModel};
pub use segment_load::SegmentLoad;
pub use segment_penalties::compute_segment_penalties;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum HeadwayError {
    #[error("no eawt factor configured for mode '{0}'")]
    MissingEawtFactor(char),
    #[error("line '{line_id}' has non-positive segment capacity {capacity}")]
    NonPositiveCapacity { line_id: String, capacity: f64 },
    #[error("segment {index} is out of range for line '{line_id}'")]
    SegmentOutOfRange { line_id: String, index: usize },
}

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum CostModelError {
    #[error("segment capacity must be positive for a volume of {volume}, found {capacity}")]
    NonPositiveCapacity { volume: f64, capacity: f64 },
    #[error("line '{line_id}' has degenerate headway {headway}, cannot compute seated capacity")]
    DegenerateHeadway { line_id: String, headway: f64 },
}

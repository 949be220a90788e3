/// run-scoped values threaded explicitly through one time-period assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunContext {
    pub time_period: String,
    /// outer model iteration
    pub iteration: usize,
    /// processors the engine may use for path computations
    pub num_processors: usize,
}

impl RunContext {
    pub fn new(time_period: &str, iteration: usize, num_processors: usize) -> Self {
        Self {
            time_period: time_period.to_string(),
            iteration,
            num_processors,
        }
    }
}

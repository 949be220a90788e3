use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum JourneyLevelError {
    #[error("failure reading journey levels from {path}: {message}")]
    Read { path: PathBuf, message: String },
    #[error("failure writing journey levels to {path}: {message}")]
    Write { path: PathBuf, message: String },
    #[error("journey level template has no levels")]
    EmptyTemplate,
    #[error("no journey level variant matches class '{0}'")]
    UnknownVariant(String),
    #[error("level {level} has no transition rule for mode '{mode}'")]
    MissingRule { level: usize, mode: char },
    #[error("level {level} has {count} transition rules for mode '{mode}'")]
    DuplicateRule { level: usize, mode: char, count: usize },
    #[error("level {level} routes mode '{mode}' to level {target} but the automaton has {n_levels} levels")]
    TargetOutOfRange {
        level: usize,
        mode: char,
        target: usize,
        n_levels: usize,
    },
    #[error("cannot resolve transition target for level {level}: {message}")]
    InvalidTarget { level: usize, message: String },
    #[error("prohibit level is malformed: {0}")]
    TrapViolation(String),
    #[error("level {0} has a boarding cost without an on_segments entry")]
    MissingOnSegments(usize),
}

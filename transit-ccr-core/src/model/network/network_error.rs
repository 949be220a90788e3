use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum NetworkError {
    #[error("failure reading file from {path}: {message}")]
    Read { path: PathBuf, message: String },
    #[error("failure writing to {path}: {message}")]
    Write { path: PathBuf, message: String },
    #[error("segment row references unknown line '{0}'")]
    UnknownLine(String),
    #[error("duplicate line id '{0}' in snapshot")]
    DuplicateLine(String),
    #[error("line '{line_id}' has non-contiguous segment indices: expected {expected}, found {found}")]
    NonContiguousSegments {
        line_id: String,
        expected: usize,
        found: usize,
    },
    #[error("no snapshot stored for time period '{0}'")]
    MissingPeriod(String),
}

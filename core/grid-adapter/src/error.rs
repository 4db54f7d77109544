//! FILENAME: core/grid-adapter/src/error.rs

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GridError {
    /// A column path walked into absent or null structure. This is a
    /// descriptor/data shape mismatch, not a transient fault.
    #[error("cannot resolve path '{path}' at segment '{segment}' in record {record}")]
    PathResolution {
        path: String,
        segment: String,
        record: String,
    },

    #[error("Invalid field path: {0}")]
    InvalidPath(#[from] field_path::ParseError),

    #[error("Grid dimension mismatch in {what}: expected {expected}, found {found}")]
    DimensionMismatch {
        what: String,
        expected: usize,
        found: usize,
    },

    #[error("Invalid grid definition: {0}")]
    Config(#[from] serde_json::Error),
}

pub type GridResult<T> = Result<T, GridError>;

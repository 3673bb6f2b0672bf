//! Crate-wide error type.
//!
//! Every fallible operation (kernel and plane construction, raster assembly,
//! bounds-checked access, decode/encode, tool configuration) reports through
//! [`Error`]. None of these are retried internally; convolution is
//! deterministic, so a retry would reproduce the same failure.
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid shape: {0}")]
    InvalidShape(String),

    #[error("inconsistent plane shape: {0}")]
    InconsistentPlaneShape(String),

    #[error("{what} index {index:?} out of range for bounds {bounds:?}")]
    IndexOutOfRange {
        what: &'static str,
        index: (usize, usize),
        bounds: (usize, usize),
    },

    #[error("failed to load image {}: {reason}", path.display())]
    ImageLoad { path: PathBuf, reason: String },

    #[error("failed to save image {}: {reason}", path.display())]
    ImageSave { path: PathBuf, reason: String },

    #[error("invalid config {}: {reason}", path.display())]
    Config { path: PathBuf, reason: String },

    #[error("failed to write JSON {}: {reason}", path.display())]
    Json { path: PathBuf, reason: String },
}

impl Error {
    pub(crate) fn out_of_range(
        what: &'static str,
        index: (usize, usize),
        bounds: (usize, usize),
    ) -> Self {
        Error::IndexOutOfRange {
            what,
            index,
            bounds,
        }
    }
}

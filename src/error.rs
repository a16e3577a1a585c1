use thiserror::Error;

use crate::dims::Dims;

/// Terminal failures of a generation run. None of these are retried
/// internally; a cancelled run requires a fresh job.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    #[error("invalid maze dimensions {0:?}")]
    InvalidDimensions(Dims),

    #[error("unknown maze algorithm `{0}`")]
    UnknownAlgorithm(String),

    #[error("maze generation was cancelled")]
    Cancelled,
}

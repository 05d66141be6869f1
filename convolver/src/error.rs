use thiserror::Error;

/// Errors returned by the convolver operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Operand shapes cannot be combined: rank mismatch, a kernel axis larger
    /// than the signal axis, or incompatible layer dimensions.
    #[error("shape mismatch: {reason} (left {left:?}, right {right:?})")]
    ShapeMismatch {
        reason: &'static str,
        left: Vec<usize>,
        right: Vec<usize>,
    },

    /// A scalar parameter is outside its allowed range.
    #[error("invalid argument: {reason}")]
    InvalidArgument { reason: &'static str },

    #[error("array layout: {0}")]
    Layout(#[from] ndarray::ShapeError),

    #[error("config io: {0}")]
    Io(#[from] std::io::Error),

    #[error("config json: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn shape(reason: &'static str, left: &[usize], right: &[usize]) -> Self {
        Self::ShapeMismatch {
            reason,
            left: left.to_vec(),
            right: right.to_vec(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

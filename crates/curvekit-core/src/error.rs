use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CurveError {
    #[error("Insufficient points: need at least {required}, got {actual}")]
    InsufficientPoints { required: usize, actual: usize },

    #[error("Invalid tension: {0}")]
    InvalidTension(String),
}

pub type Result<T> = std::result::Result<T, CurveError>;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum MorphError {
    #[error("Unknown shape: {0}")]
    UnknownShape(String),

    #[error("Invalid morph duration: {0} (must be a positive number of seconds)")]
    InvalidDuration(f64),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Rebuild failed at vertex {index}: {reason}")]
    Rebuild { index: usize, reason: String },
}

pub type Result<T> = std::result::Result<T, MorphError>;

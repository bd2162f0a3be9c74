use thiserror::Error;

/// Errors emitted by dataset generation.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("invalid options: {0}")]
    InvalidOptions(String),
    #[error("invalid month weights: {0}")]
    InvalidWeights(String),
    #[error("invalid purchase date {year:04}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u32, day: u32 },
}

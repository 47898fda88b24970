//! Error type for the grading pipeline.

/// The only failure the pipeline can report: a caller handed it data that
/// breaks a precondition (buffer shape, non-finite parameters).
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum GradingError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

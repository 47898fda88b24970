//! Errors surfaced by the command-line front end.

use lumen_core::GradingError;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to decode image: {0}")]
    Decode(image::ImageError),
    #[error("failed to encode image: {0}")]
    Encode(image::ImageError),
    #[error("invalid base64 payload: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error("malformed data URL: {0}")]
    DataUrl(String),
    #[error("input is {size} bytes, limit is {limit}")]
    TooLarge { size: u64, limit: u64 },
    #[error("could not read parameters: {0}")]
    Params(#[from] serde_json::Error),
    #[error(transparent)]
    Grading(#[from] GradingError),
}

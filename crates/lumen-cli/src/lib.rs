//! Lumen CLI — file and data-URL front end for the grading pipeline.
//!
//! Everything codec-related lives here: decoding inputs through the
//! `image` crate, enforcing the input size cap, thumbnailing previews,
//! and re-encoding results as JPEG files or base64 data URLs.

pub mod codec;
pub mod commands;
pub mod config;
pub mod error;

pub use config::CliConfig;
pub use error::CliError;

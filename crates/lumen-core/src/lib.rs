//! Lumen Core — the color-adjustment pipeline.
//!
//! This crate contains the tone enhancers, white-balance temperature, HSV
//! adjustment, camera profile emulation, and the orchestrator that chains
//! them. No codec or transport concerns live here beyond conversion to and
//! from `image::DynamicImage`.

pub mod error;
pub mod grading;
pub mod image;
pub mod profiles;
pub mod transform;

// Re-exports for convenience.
pub use error::GradingError;
pub use self::image::{GradingImage, PixelLayout};
pub use profiles::{CameraProfile, ProfileRegistry};
pub use transform::params::AdjustmentParams;
pub use transform::pipeline::{GradingPipeline, process};

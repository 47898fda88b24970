//! Transform pipeline — parameter definitions and the orchestrator.

pub mod params;
pub mod pipeline;

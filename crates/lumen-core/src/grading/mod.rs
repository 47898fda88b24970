//! Grading operators — tone enhancers, white balance, HSV adjustment.
//!
//! Every operator takes an owned [`GradingImage`](crate::image::GradingImage)
//! and returns a new one. None of them can fail: results are clamped into
//! the 8-bit channel range.

pub mod enhance;
pub mod hsv;
pub mod temperature;

pub use enhance::{brightness, contrast, saturation, sharpness};
pub use hsv::hsl;
pub use temperature::temperature;

/// Multiply a sample by `k` in double precision, clamp, truncate.
#[inline]
pub(crate) fn scale_channel(v: u8, k: f64) -> u8 {
    (v as f64 * k).clamp(0.0, 255.0) as u8
}

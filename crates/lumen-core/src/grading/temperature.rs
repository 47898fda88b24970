//! White-balance temperature as asymmetric red/blue channel gains.
//!
//! ```text
//! value > 0 (warm):  R × (1 + 0.5·value)   B × (1 − 0.3·value)
//! value < 0 (cool):  R × (1 + 0.3·value)   B × (1 − 0.5·value)
//! ```
//!
//! Warming pushes red harder than it pulls blue; cooling does the reverse.
//! Green is never touched.

use crate::grading::scale_channel;
use crate::image::GradingImage;

const STRONG: f64 = 0.5;
const WEAK: f64 = 0.3;

/// Red and blue gains for a temperature value.
fn gains(value: f64) -> (f64, f64) {
    if value > 0.0 {
        (1.0 + value * STRONG, 1.0 - value * WEAK)
    } else {
        (1.0 + value * WEAK, 1.0 - value * STRONG)
    }
}

/// Shift white balance. `0.0` and grayscale input return the image as-is.
pub fn temperature(mut image: GradingImage, value: f64) -> GradingImage {
    if value == 0.0 || !image.is_rgb() {
        return image;
    }

    let (red_gain, blue_gain) = gains(value);
    for px in image.as_raw_mut().chunks_exact_mut(3) {
        px[0] = scale_channel(px[0], red_gain);
        px[2] = scale_channel(px[2], blue_gain);
    }
    image
}

//! Tone enhancers: brightness, contrast, saturation and sharpness.
//!
//! Each enhancer interpolates between the input and a "degenerate" version
//! of it, then stores the clamped, truncated result:
//!
//! ```text
//! out = degenerate + factor × (in − degenerate)
//! ```
//!
//! | enhancer   | degenerate image                    |
//! |------------|-------------------------------------|
//! | brightness | black                               |
//! | contrast   | flat gray at [`CONTRAST_PIVOT`]     |
//! | saturation | Rec. 601 luma of each pixel         |
//! | sharpness  | 3×3 smoothed copy                   |
//!
//! `factor = 1.0` returns the image untouched; `factor = 0.0` returns the
//! degenerate image. Factors above 1.0 extrapolate away from it.

use crate::image::{GradingImage, clamp_channel};

/// Fixed mid-gray reference for contrast. The image mean is not used.
pub const CONTRAST_PIVOT: f32 = 128.0;

/// Smoothing kernel for the sharpness degenerate, normalised by 13.
const SMOOTH_KERNEL: [[u32; 3]; 3] = [[1, 1, 1], [1, 5, 1], [1, 1, 1]];
const SMOOTH_DIVISOR: u32 = 13;

/// Interpolate in single precision.
#[inline]
fn blend(degenerate: f32, v: u8, alpha: f32) -> u8 {
    clamp_channel(degenerate + alpha * (v as f32 - degenerate))
}

/// Rec. 601 luma in 16-bit fixed point, rounded.
#[inline]
pub(crate) fn luma601(r: u8, g: u8, b: u8) -> u8 {
    ((r as u32 * 19595 + g as u32 * 38470 + b as u32 * 7471 + 0x8000) >> 16) as u8
}

/// Multiply every channel by `factor`.
pub fn brightness(mut image: GradingImage, factor: f64) -> GradingImage {
    if factor == 1.0 {
        return image;
    }
    let alpha = factor as f32;
    for v in image.as_raw_mut() {
        *v = blend(0.0, *v, alpha);
    }
    image
}

/// Scale each channel's distance from [`CONTRAST_PIVOT`] by `factor`.
pub fn contrast(mut image: GradingImage, factor: f64) -> GradingImage {
    if factor == 1.0 {
        return image;
    }
    let alpha = factor as f32;
    for v in image.as_raw_mut() {
        *v = blend(CONTRAST_PIVOT, *v, alpha);
    }
    image
}

/// Blend each pixel toward (`factor < 1`) or away from (`factor > 1`) its
/// luma gray. Grayscale images are already their own luma.
pub fn saturation(mut image: GradingImage, factor: f64) -> GradingImage {
    if factor == 1.0 || !image.is_rgb() {
        return image;
    }
    let alpha = factor as f32;
    for px in image.as_raw_mut().chunks_exact_mut(3) {
        let gray = luma601(px[0], px[1], px[2]) as f32;
        for v in px.iter_mut() {
            *v = blend(gray, *v, alpha);
        }
    }
    image
}

/// Unsharp-mask style sharpening against a 3×3 smoothed copy.
pub fn sharpness(mut image: GradingImage, factor: f64) -> GradingImage {
    if factor == 1.0 {
        return image;
    }
    let alpha = factor as f32;
    let smoothed = smooth(&image);
    for (v, &s) in image.as_raw_mut().iter_mut().zip(&smoothed) {
        *v = blend(s as f32, *v, alpha);
    }
    image
}

/// Apply [`SMOOTH_KERNEL`] to the interior. The outermost rows and columns
/// are copied unfiltered.
fn smooth(image: &GradingImage) -> Vec<u8> {
    let src = image.as_raw();
    let mut out = src.to_vec();
    let width = image.width() as usize;
    let height = image.height() as usize;
    let channels = image.channels();
    if width < 3 || height < 3 {
        return out;
    }

    for y in 1..height - 1 {
        for x in 1..width - 1 {
            for c in 0..channels {
                let mut sum = 0_u32;
                for (ky, row) in SMOOTH_KERNEL.iter().enumerate() {
                    let sy = y + ky - 1;
                    for (kx, &weight) in row.iter().enumerate() {
                        let sx = x + kx - 1;
                        sum += weight * src[(sy * width + sx) * channels + c] as u32;
                    }
                }
                out[(y * width + x) * channels + c] =
                    ((sum + SMOOTH_DIVISOR / 2) / SMOOTH_DIVISOR) as u8;
            }
        }
    }
    out
}

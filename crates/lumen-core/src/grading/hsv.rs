//! Hue / saturation / "lightness" adjustment through 8-bit HSV.
//!
//! Hue is stored in half-degrees, so the hue domain is `[0, 180)` and a
//! shift of 180 is one full turn. Saturation and value are `[0, 255]`.
//!
//! "Lightness" scales the HSV value channel. It is not HSL lightness.

use crate::grading::scale_channel;
use crate::image::GradingImage;

/// Size of the 8-bit hue domain (half-degrees).
pub const HUE_RANGE: f64 = 180.0;

/// Fixed-point precision of the RGB→HSV division tables.
const HSV_SHIFT: u32 = 12;
const HSV_ROUND: i32 = 1 << (HSV_SHIFT - 1);

/// `round((255 << 12) / v)`; entry 0 is 0.
const SDIV_TABLE: [i32; 256] = div_table(255 << HSV_SHIFT, 1);
/// `round((180 << 12) / (6 · diff))`; entry 0 is 0.
const HDIV_TABLE: [i32; 256] = div_table(180 << HSV_SHIFT, 6);

/// Rounded reciprocal table `numerator / (scale · i)`. No entry falls on a
/// tie, so rounding half up is exact.
const fn div_table(numerator: i32, scale: i32) -> [i32; 256] {
    let mut table = [0; 256];
    let mut i = 1;
    while i < 256 {
        let d = scale * i as i32;
        table[i] = (2 * numerator + d) / (2 * d);
        i += 1;
    }
    table
}

/// Sector → indices into `[v, p, q, t]` for `[b, g, r]`.
const SECTOR_DATA: [[usize; 3]; 6] = [
    [1, 3, 0],
    [1, 0, 2],
    [3, 0, 1],
    [0, 2, 1],
    [0, 1, 3],
    [2, 1, 0],
];

/// Convert 8-bit RGB to 8-bit HSV with hue in `[0, 180)`.
///
/// Saturation and hue are computed in 12-bit fixed point through
/// [`SDIV_TABLE`] and [`HDIV_TABLE`], so results match the usual 8-bit
/// conversion bit for bit, including its rounding quirks.
pub(crate) fn rgb_to_hsv(r: u8, g: u8, b: u8) -> [u8; 3] {
    let (r, g, b) = (r as i32, g as i32, b as i32);
    let v = r.max(g).max(b);
    let diff = v - r.min(g).min(b);

    let s = (diff * SDIV_TABLE[v as usize] + HSV_ROUND) >> HSV_SHIFT;

    // Position around the hexagon in units of `diff`, red sector first.
    let k = if v == r {
        g - b
    } else if v == g {
        b - r + 2 * diff
    } else {
        r - g + 4 * diff
    };
    let mut h = (k * HDIV_TABLE[diff as usize] + HSV_ROUND) >> HSV_SHIFT;
    if h < 0 {
        h += HUE_RANGE as i32;
    }

    [h as u8, s as u8, v as u8]
}

/// Convert 8-bit HSV (hue in `[0, 180)`) back to 8-bit RGB.
///
/// Runs in single precision and rounds half to even on the way out.
pub(crate) fn hsv_to_rgb(h: u8, s: u8, v: u8) -> [u8; 3] {
    const INV_255: f32 = 1.0 / 255.0;
    const HUE_SCALE: f32 = 6.0 / 180.0;

    let s = s as f32 * INV_255;
    let v = v as f32 * INV_255;
    if s == 0.0 {
        let gray = to_u8(v);
        return [gray, gray, gray];
    }

    let h = (h as f32 * HUE_SCALE) % 6.0;
    let sector = h.floor();
    let (sector, f) = if (0.0..6.0).contains(&sector) {
        (sector as usize, h - sector)
    } else {
        (0, 0.0)
    };

    let tab = [
        v,
        v * (1.0 - s),
        v * (1.0 - s * f),
        v * (1.0 - s * (1.0 - f)),
    ];
    let [b, g, r] = SECTOR_DATA[sector];
    [to_u8(tab[r]), to_u8(tab[g]), to_u8(tab[b])]
}

#[inline]
fn to_u8(unit: f32) -> u8 {
    (unit * 255.0).round_ties_even().clamp(0.0, 255.0) as u8
}

/// Shift hue, scale saturation and scale value in one HSV round trip.
///
/// - `hue`: added to the half-degree hue, wrapping modulo 180.
/// - `saturation`: `S × (1 + saturation)`, clamped.
/// - `lightness`: `V × (1 + lightness)`, clamped.
///
/// Only when all three are exactly `0.0` is the image returned untouched.
/// Any other combination runs the full conversion, so even unperturbed
/// channels pick up the hue quantization. Grayscale input passes through.
pub fn hsl(mut image: GradingImage, hue: f64, saturation: f64, lightness: f64) -> GradingImage {
    if (hue == 0.0 && saturation == 0.0 && lightness == 0.0) || !image.is_rgb() {
        return image;
    }

    let sat_gain = 1.0 + saturation;
    let val_gain = 1.0 + lightness;

    for px in image.as_raw_mut().chunks_exact_mut(3) {
        let [h, s, v] = rgb_to_hsv(px[0], px[1], px[2]);
        let h = (h as f64 + hue).rem_euclid(HUE_RANGE) as u8;
        let s = scale_channel(s, sat_gain);
        let v = scale_channel(v, val_gain);
        px.copy_from_slice(&hsv_to_rgb(h, s, v));
    }
    image
}

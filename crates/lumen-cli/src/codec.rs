//! Input loading, preview scaling, and output encoding.
//!
//! Inputs are either file paths or `data:image/...;base64,` URLs. Both are
//! held to [`CliConfig::max_input_bytes`] before any decoding happens.

use std::fs;
use std::io::Cursor;
use std::path::Path;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use chrono::NaiveDateTime;
use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;
use lumen_core::GradingImage;

use crate::config::CliConfig;
use crate::error::CliError;

/// Prefix of every data URL this tool produces.
pub const JPEG_DATA_URL_PREFIX: &str = "data:image/jpeg;base64,";

/// `true` if `source` should be treated as a data URL rather than a path.
pub fn is_data_url(source: &str) -> bool {
    source.starts_with("data:")
}

/// Read the raw encoded bytes of an input, enforcing the size cap.
pub fn read_input(source: &str, config: &CliConfig) -> Result<Vec<u8>, CliError> {
    let bytes = if is_data_url(source) {
        decode_data_url(source)?
    } else {
        let path = Path::new(source);
        let size = fs::metadata(path)?.len();
        check_size(size, config.max_input_bytes)?;
        fs::read(path)?
    };
    check_size(bytes.len() as u64, config.max_input_bytes)?;
    Ok(bytes)
}

fn check_size(size: u64, limit: u64) -> Result<(), CliError> {
    if size > limit {
        return Err(CliError::TooLarge { size, limit });
    }
    Ok(())
}

/// Read and decode an input into a grading image.
pub fn load_image(source: &str, config: &CliConfig) -> Result<GradingImage, CliError> {
    let bytes = read_input(source, config)?;
    let decoded = image::load_from_memory(&bytes).map_err(CliError::Decode)?;
    let img = GradingImage::from_dynamic(&decoded);
    tracing::info!(
        "decoded {}x{} {} image ({} bytes)",
        img.width(),
        img.height(),
        img.layout(),
        bytes.len()
    );
    Ok(img)
}

/// Extract the payload of a base64 data URL.
pub fn decode_data_url(url: &str) -> Result<Vec<u8>, CliError> {
    let (header, payload) = url
        .split_once(',')
        .ok_or_else(|| CliError::DataUrl("missing ',' separator".into()))?;
    if !is_data_url(header) {
        return Err(CliError::DataUrl("missing 'data:' scheme".into()));
    }
    if !header.ends_with(";base64") {
        return Err(CliError::DataUrl(format!("'{header}' is not base64 encoded")));
    }
    Ok(STANDARD.decode(payload.trim())?)
}

/// Wrap JPEG bytes in a data URL.
pub fn encode_data_url(jpeg: &[u8]) -> String {
    format!("{JPEG_DATA_URL_PREFIX}{}", STANDARD.encode(jpeg))
}

/// Encode as baseline JPEG. Grayscale input is expanded to RGB first.
pub fn encode_jpeg(img: GradingImage, quality: u8) -> Result<Vec<u8>, CliError> {
    let rgb = img.to_rgb();
    let (width, height) = (rgb.width(), rgb.height());
    let mut buffer = Cursor::new(Vec::new());
    let mut encoder = JpegEncoder::new_with_quality(&mut buffer, quality);
    encoder
        .encode(rgb.as_raw(), width, height, image::ExtendedColorType::Rgb8)
        .map_err(CliError::Encode)?;
    Ok(buffer.into_inner())
}

/// Write an image to disk. `.jpg`/`.jpeg` (or no extension) use the
/// configured JPEG quality; other extensions go through the `image`
/// crate's format detection.
pub fn save_image(img: GradingImage, path: &Path, quality: u8) -> Result<(), CliError> {
    let is_jpeg = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_none_or(|ext| ext.eq_ignore_ascii_case("jpg") || ext.eq_ignore_ascii_case("jpeg"));

    if is_jpeg {
        fs::write(path, encode_jpeg(img, quality)?)?;
    } else {
        img.into_dynamic().save(path).map_err(CliError::Encode)?;
    }
    tracing::info!("wrote {}", path.display());
    Ok(())
}

/// Largest size with the same aspect ratio that fits inside `max`.
/// Images already inside the box keep their size.
pub fn fit_within(width: u32, height: u32, max: (u32, u32)) -> (u32, u32) {
    if width <= max.0 && height <= max.1 {
        return (width, height);
    }
    let scale = f64::min(max.0 as f64 / width as f64, max.1 as f64 / height as f64);
    let w = ((width as f64 * scale).round() as u32).clamp(1, max.0.max(1));
    let h = ((height as f64 * scale).round() as u32).clamp(1, max.1.max(1));
    (w, h)
}

/// Downscale with Lanczos3 so the image fits inside `max`.
pub fn thumbnail(img: GradingImage, max: (u32, u32)) -> GradingImage {
    let (width, height) = fit_within(img.width(), img.height(), max);
    if (width, height) == (img.width(), img.height()) {
        return img;
    }
    let resized = img
        .into_dynamic()
        .resize_exact(width, height, FilterType::Lanczos3);
    GradingImage::from_dynamic(&resized)
}

/// File name used when no output path is given, stamped to the second.
pub fn default_output_name(timestamp: NaiveDateTime) -> String {
    format!("edited_image_{}.jpg", timestamp.format("%Y%m%d_%H%M%S"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_url_round_trip() {
        let url = encode_data_url(&[1, 2, 3, 250]);
        assert!(url.starts_with(JPEG_DATA_URL_PREFIX));
        assert_eq!(decode_data_url(&url).unwrap(), vec![1, 2, 3, 250]);
    }

    #[test]
    fn test_data_url_requires_separator() {
        let err = decode_data_url("data:image/png;base64").unwrap_err();
        assert!(matches!(err, CliError::DataUrl(_)));
    }

    #[test]
    fn test_data_url_requires_base64_marker() {
        let err = decode_data_url("data:text/plain,hello").unwrap_err();
        assert!(matches!(err, CliError::DataUrl(_)));
    }

    #[test]
    fn test_data_url_rejects_bad_payload() {
        let err = decode_data_url("data:image/png;base64,@@@").unwrap_err();
        assert!(matches!(err, CliError::Base64(_)));
    }

    #[test]
    fn test_size_cap_applies_to_data_urls() {
        let config = CliConfig {
            max_input_bytes: 2,
            ..CliConfig::from_lookup(|_| None)
        };
        let url = encode_data_url(&[0, 0, 0]);
        let err = read_input(&url, &config).unwrap_err();
        assert!(matches!(err, CliError::TooLarge { size: 3, limit: 2 }));
    }

    #[test]
    fn test_fit_within_keeps_small_images() {
        assert_eq!(fit_within(800, 600, (1920, 1080)), (800, 600));
    }

    #[test]
    fn test_fit_within_preserves_aspect() {
        assert_eq!(fit_within(3840, 2160, (1920, 1080)), (1920, 1080));
        assert_eq!(fit_within(4000, 1000, (1920, 1080)), (1920, 480));
        assert_eq!(fit_within(1000, 4000, (1920, 1080)), (270, 1080));
    }

    #[test]
    fn test_thumbnail_shrinks_to_box() {
        let img = GradingImage::from_rgb_pixel(40, 20, [200, 10, 10]);
        let thumb = thumbnail(img, (10, 10));
        assert_eq!((thumb.width(), thumb.height()), (10, 5));
        assert!(thumb.is_rgb());
    }

    #[test]
    fn test_jpeg_encode_decodes_back() {
        let img = GradingImage::from_rgb_pixel(8, 8, [120, 120, 120]);
        let bytes = encode_jpeg(img, 95).unwrap();
        let decoded = image::load_from_memory(&bytes).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (8, 8));
    }

    #[test]
    fn test_default_output_name() {
        let timestamp = chrono::NaiveDate::from_ymd_opt(2024, 3, 5)
            .and_then(|d| d.and_hms_opt(7, 8, 9))
            .unwrap();
        assert_eq!(default_output_name(timestamp), "edited_image_20240305_070809.jpg");
    }
}

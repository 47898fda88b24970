//! Runtime configuration for the CLI.

/// Default cap on input payloads (16 MiB).
const DEFAULT_MAX_INPUT_BYTES: u64 = 16 * 1024 * 1024;
/// Default JPEG quality for encoded output.
const DEFAULT_JPEG_QUALITY: u8 = 95;
/// Default bounding box for previews.
const DEFAULT_PREVIEW_MAX: (u32, u32) = (1920, 1080);

/// Runtime configuration, read from `LUMEN_*` environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    /// Largest accepted input, in bytes (`LUMEN_MAX_INPUT_BYTES`).
    pub max_input_bytes: u64,
    /// JPEG quality 1–100 (`LUMEN_JPEG_QUALITY`).
    pub jpeg_quality: u8,
    /// Preview bounding box as `WxH` (`LUMEN_PREVIEW_MAX`).
    pub preview_max: (u32, u32),
}

impl Default for CliConfig {
    fn default() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }
}

impl CliConfig {
    /// Build a config from an arbitrary variable source. Unset or
    /// unparsable values fall back to the defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            max_input_bytes: lookup("LUMEN_MAX_INPUT_BYTES")
                .and_then(|s| s.trim().parse().ok())
                .unwrap_or(DEFAULT_MAX_INPUT_BYTES),
            jpeg_quality: lookup("LUMEN_JPEG_QUALITY")
                .and_then(|s| s.trim().parse::<u8>().ok())
                .map(|q| q.clamp(1, 100))
                .unwrap_or(DEFAULT_JPEG_QUALITY),
            preview_max: lookup("LUMEN_PREVIEW_MAX")
                .and_then(|s| parse_dimensions(&s))
                .unwrap_or(DEFAULT_PREVIEW_MAX),
        }
    }
}

/// Parse `"1920x1080"`. Zero-sized boxes are rejected.
fn parse_dimensions(s: &str) -> Option<(u32, u32)> {
    let (w, h) = s.trim().split_once(['x', 'X'])?;
    let w = w.trim().parse().ok()?;
    let h = h.trim().parse().ok()?;
    (w > 0 && h > 0).then_some((w, h))
}

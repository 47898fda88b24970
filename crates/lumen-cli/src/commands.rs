//! Subcommand implementations. Each returns the JSON document that `main`
//! prints on success.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Local;
use clap::Args;
use lumen_core::{AdjustmentParams, GradingPipeline, ProfileRegistry};
use serde_json::{Value, json};

use crate::codec;
use crate::config::CliConfig;
use crate::error::CliError;

/// Adjustment flags. Any flag given overrides the matching field loaded
/// from `--params`.
#[derive(Debug, Clone, Default, Args)]
pub struct AdjustArgs {
    /// JSON file with adjustment parameters
    #[arg(long, value_name = "FILE")]
    pub params: Option<PathBuf>,

    /// Brightness multiplier (1.0 = no change)
    #[arg(long, value_name = "FLOAT", allow_negative_numbers = true)]
    pub brightness: Option<f64>,

    /// Contrast around mid-gray (1.0 = no change)
    #[arg(long, value_name = "FLOAT", allow_negative_numbers = true)]
    pub contrast: Option<f64>,

    /// Saturation (1.0 = no change, 0.0 = grayscale)
    #[arg(long, value_name = "FLOAT", allow_negative_numbers = true)]
    pub saturation: Option<f64>,

    /// Sharpness (1.0 = no change, 0.0 = smoothed)
    #[arg(long, value_name = "FLOAT", allow_negative_numbers = true)]
    pub sharpness: Option<f64>,

    /// White-balance temperature, -1.0 (cool) to 1.0 (warm)
    #[arg(long, value_name = "FLOAT", allow_negative_numbers = true)]
    pub temperature: Option<f64>,

    /// Hue shift in half-degrees (180 = full turn)
    #[arg(long, value_name = "FLOAT", allow_negative_numbers = true)]
    pub hue: Option<f64>,

    /// Fractional HSV saturation change (0.0 = no change)
    #[arg(long, value_name = "FLOAT", allow_negative_numbers = true)]
    pub hsl_saturation: Option<f64>,

    /// Fractional HSV value change (0.0 = no change)
    #[arg(long, value_name = "FLOAT", allow_negative_numbers = true)]
    pub lightness: Option<f64>,

    /// Camera profile id (see `lumen profiles`)
    #[arg(long, value_name = "ID")]
    pub profile: Option<String>,
}

impl AdjustArgs {
    /// Merge the parameter file (if any) with the command-line overrides.
    pub fn resolve(&self) -> Result<AdjustmentParams, CliError> {
        let mut params = match &self.params {
            Some(path) => serde_json::from_str(&fs::read_to_string(path)?)?,
            None => AdjustmentParams::default(),
        };

        let overrides = [
            (self.brightness, &mut params.brightness),
            (self.contrast, &mut params.contrast),
            (self.saturation, &mut params.saturation),
            (self.sharpness, &mut params.sharpness),
            (self.temperature, &mut params.temperature),
            (self.hue, &mut params.hue),
            (self.hsl_saturation, &mut params.hsl_saturation),
            (self.lightness, &mut params.lightness),
        ];
        for (value, field) in overrides {
            if let Some(value) = value {
                *field = value;
            }
        }
        if let Some(profile) = &self.profile {
            params.camera_profile = Some(profile.clone());
        }

        params.validate()?;
        Ok(params)
    }
}

/// Grade `input` and either write it to disk or return it as a data URL.
pub fn process(
    input: &str,
    output: Option<&Path>,
    data_url: bool,
    adjust: &AdjustArgs,
    config: &CliConfig,
) -> Result<Value, CliError> {
    let params = adjust.resolve()?;
    let img = codec::load_image(input, config)?;
    let graded = GradingPipeline::builtin().process(img, &params);
    let (width, height) = (graded.width(), graded.height());

    if data_url {
        let jpeg = codec::encode_jpeg(graded, config.jpeg_quality)?;
        return Ok(json!({
            "success": true,
            "image": codec::encode_data_url(&jpeg),
        }));
    }

    let path = match output {
        Some(path) => path.to_path_buf(),
        None => PathBuf::from(codec::default_output_name(Local::now().naive_local())),
    };
    codec::save_image(graded, &path, config.jpeg_quality)?;
    Ok(json!({
        "success": true,
        "path": path.display().to_string(),
        "width": width,
        "height": height,
    }))
}

/// Convert to RGB, fit inside the preview box, and encode as JPEG.
pub fn preview(input: &str, output: Option<&Path>, config: &CliConfig) -> Result<Value, CliError> {
    let img = codec::load_image(input, config)?.to_rgb();
    let thumb = codec::thumbnail(img, config.preview_max);
    let (width, height) = (thumb.width(), thumb.height());
    tracing::info!("preview is {width}x{height}");

    match output {
        Some(path) => {
            codec::save_image(thumb, path, config.jpeg_quality)?;
            Ok(json!({
                "success": true,
                "path": path.display().to_string(),
                "width": width,
                "height": height,
            }))
        }
        None => {
            let jpeg = codec::encode_jpeg(thumb, config.jpeg_quality)?;
            Ok(json!({
                "success": true,
                "image": codec::encode_data_url(&jpeg),
                "width": width,
                "height": height,
            }))
        }
    }
}

/// The camera profile table, for populating a selection list.
pub fn profiles(registry: &ProfileRegistry) -> Result<Value, CliError> {
    let list = registry
        .iter()
        .map(serde_json::to_value)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Value::Array(list))
}

//! Adjustment parameters for one pipeline run.
//!
//! `AdjustmentParams` is the contract between the collaborator that parses
//! user input and the pipeline. Every field has a neutral value at which
//! its step is skipped outright.

use serde::{Deserialize, Serialize};

use crate::error::GradingError;

/// User-facing adjustment settings. Missing JSON fields take their
/// neutral value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdjustmentParams {
    /// Brightness multiplier. 1.0 = neutral.
    pub brightness: f64,
    /// Contrast around mid-gray. 1.0 = neutral.
    pub contrast: f64,
    /// Saturation relative to luma. 1.0 = neutral.
    pub saturation: f64,
    /// Sharpness against a smoothed copy. 1.0 = neutral.
    pub sharpness: f64,
    /// White-balance temperature, roughly −1.0 (cool) to +1.0 (warm).
    /// 0.0 = neutral.
    pub temperature: f64,
    /// Hue shift in half-degrees (180 = full turn). 0.0 = neutral.
    pub hue: f64,
    /// Fractional HSV saturation change. 0.0 = neutral.
    pub hsl_saturation: f64,
    /// Fractional HSV value change. 0.0 = neutral.
    pub lightness: f64,
    /// Camera profile id. `None` or empty = no profile.
    pub camera_profile: Option<String>,
}

impl Default for AdjustmentParams {
    /// Produces an identity run — the image passes through unchanged.
    fn default() -> Self {
        Self {
            brightness: 1.0,
            contrast: 1.0,
            saturation: 1.0,
            sharpness: 1.0,
            temperature: 0.0,
            hue: 0.0,
            hsl_saturation: 0.0,
            lightness: 0.0,
            camera_profile: None,
        }
    }
}

impl AdjustmentParams {
    /// Parse from JSON and reject non-finite values.
    pub fn from_json(json: &str) -> Result<Self, GradingError> {
        let params: Self = serde_json::from_str(json)
            .map_err(|e| GradingError::InvalidInput(format!("adjustment parameters: {e}")))?;
        params.validate()?;
        Ok(params)
    }

    /// Every numeric field must be finite.
    pub fn validate(&self) -> Result<(), GradingError> {
        let fields = [
            ("brightness", self.brightness),
            ("contrast", self.contrast),
            ("saturation", self.saturation),
            ("sharpness", self.sharpness),
            ("temperature", self.temperature),
            ("hue", self.hue),
            ("hsl_saturation", self.hsl_saturation),
            ("lightness", self.lightness),
        ];
        for (name, value) in fields {
            if !value.is_finite() {
                return Err(GradingError::InvalidInput(format!(
                    "{name} must be a finite number, got {value}"
                )));
            }
        }
        Ok(())
    }

    /// `true` when none of the HSV adjustments would change anything.
    pub fn hsl_is_neutral(&self) -> bool {
        self.hue == 0.0 && self.hsl_saturation == 0.0 && self.lightness == 0.0
    }

    /// The requested profile id, treating an empty string as absent.
    pub fn profile_id(&self) -> Option<&str> {
        self.camera_profile.as_deref().filter(|id| !id.is_empty())
    }

    /// `true` when every step of the pipeline would be skipped.
    pub fn is_neutral(&self) -> bool {
        self.brightness == 1.0
            && self.contrast == 1.0
            && self.saturation == 1.0
            && self.sharpness == 1.0
            && self.temperature == 0.0
            && self.hsl_is_neutral()
            && self.profile_id().is_none()
    }
}

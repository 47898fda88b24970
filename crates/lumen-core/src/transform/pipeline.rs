//! Pipeline orchestrator — applies the full adjustment chain to an image.

use crate::grading::{brightness, contrast, hsl, saturation, sharpness, temperature};
use crate::image::GradingImage;
use crate::profiles::ProfileRegistry;
use crate::transform::params::AdjustmentParams;

/// Runs [`AdjustmentParams`] against images using a borrowed profile
/// registry. Cheap to copy and safe to share across threads.
#[derive(Debug, Clone, Copy)]
pub struct GradingPipeline<'a> {
    profiles: &'a ProfileRegistry,
}

impl GradingPipeline<'static> {
    /// Pipeline over the built-in camera profiles.
    pub fn builtin() -> Self {
        Self::new(ProfileRegistry::builtin())
    }
}

impl<'a> GradingPipeline<'a> {
    pub fn new(profiles: &'a ProfileRegistry) -> Self {
        Self { profiles }
    }

    pub fn profiles(&self) -> &'a ProfileRegistry {
        self.profiles
    }

    /// Apply every non-neutral adjustment in a fixed order:
    /// 1. Convert to RGB
    /// 2. Brightness
    /// 3. Contrast
    /// 4. Saturation
    /// 5. Sharpness
    /// 6. Temperature
    /// 7. Hue / saturation / lightness (one combined HSV pass)
    /// 8. Camera profile
    ///
    /// Reordering the steps changes output pixels. Neutral steps are not
    /// executed at all.
    pub fn process(&self, image: GradingImage, params: &AdjustmentParams) -> GradingImage {
        let _span = tracing::debug_span!("grade", width = image.width(), height = image.height())
            .entered();

        let mut image = image.to_rgb();

        if params.brightness != 1.0 {
            tracing::debug!(factor = params.brightness, "brightness");
            image = brightness(image, params.brightness);
        }
        if params.contrast != 1.0 {
            tracing::debug!(factor = params.contrast, "contrast");
            image = contrast(image, params.contrast);
        }
        if params.saturation != 1.0 {
            tracing::debug!(factor = params.saturation, "saturation");
            image = saturation(image, params.saturation);
        }
        if params.sharpness != 1.0 {
            tracing::debug!(factor = params.sharpness, "sharpness");
            image = sharpness(image, params.sharpness);
        }
        if params.temperature != 0.0 {
            tracing::debug!(value = params.temperature, "temperature");
            image = temperature(image, params.temperature);
        }
        if !params.hsl_is_neutral() {
            tracing::debug!(
                hue = params.hue,
                saturation = params.hsl_saturation,
                lightness = params.lightness,
                "hsl"
            );
            image = hsl(image, params.hue, params.hsl_saturation, params.lightness);
        }
        if let Some(id) = params.profile_id() {
            tracing::debug!(profile = id, "camera profile");
            image = self.profiles.apply(image, id);
        }

        image
    }
}

/// Process an image with the built-in camera profiles.
pub fn process(image: GradingImage, params: &AdjustmentParams) -> GradingImage {
    GradingPipeline::builtin().process(image, params)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grading::enhance;
    use crate::image::PixelLayout;

    fn gradient() -> GradingImage {
        let mut data = Vec::new();
        for y in 0..4_u8 {
            for x in 0..4_u8 {
                data.extend_from_slice(&[x * 60, y * 60, 255 - x * 30]);
            }
        }
        GradingImage::new(4, 4, PixelLayout::Rgb8, data).unwrap()
    }

    #[test]
    fn test_neutral_params_are_identity() {
        let img = gradient();
        assert_eq!(process(img.clone(), &AdjustmentParams::default()), img);
    }

    #[test]
    fn test_gray_input_comes_out_rgb() {
        let img = GradingImage::from_gray_pixel(2, 2, 77);
        let out = process(img, &AdjustmentParams::default());
        assert!(out.is_rgb());
        assert_eq!(out.pixel(1, 1), &[77, 77, 77]);
    }

    #[test]
    fn test_brightness_runs_before_contrast() {
        let img = GradingImage::from_rgb_pixel(1, 1, [100, 100, 100]);
        let params = AdjustmentParams {
            brightness: 2.0,
            contrast: 0.5,
            ..Default::default()
        };
        // 100 × 2 = 200, then 128 + 0.5 × (200 − 128) = 164.
        assert_eq!(process(img.clone(), &params).as_raw(), &[164, 164, 164]);

        let swapped = enhance::brightness(enhance::contrast(img, 0.5), 2.0);
        assert_ne!(swapped.as_raw(), &[164, 164, 164]);
    }

    #[test]
    fn test_profile_runs_last() {
        let img = gradient();
        let params = AdjustmentParams {
            temperature: 0.4,
            camera_profile: Some("canon".into()),
            ..Default::default()
        };
        let expected = ProfileRegistry::builtin()
            .apply(crate::grading::temperature(img.clone(), 0.4), "canon");
        assert_eq!(process(img, &params), expected);
    }

    #[test]
    fn test_unknown_profile_in_params_is_noop() {
        let registry = ProfileRegistry::builtin();
        let pipeline = GradingPipeline::new(registry);
        let params = AdjustmentParams {
            camera_profile: Some("missing".into()),
            ..Default::default()
        };
        let img = gradient();
        assert_eq!(pipeline.process(img.clone(), &params), img);
    }
}

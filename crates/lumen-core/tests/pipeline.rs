//! End-to-end behaviour of the adjustment pipeline.

use lumen_core::grading::{brightness, contrast, hsl, saturation, sharpness, temperature};
use lumen_core::profiles::apply_profile;
use lumen_core::{AdjustmentParams, GradingImage, GradingPipeline, PixelLayout, ProfileRegistry, process};

/// Create a small test gradient image.
fn create_test_gradient(width: u32, height: u32) -> GradingImage {
    let mut data = Vec::with_capacity((width * height * 3) as usize);
    for y in 0..height {
        for x in 0..width {
            let r = (x * 255 / (width - 1)) as u8;
            let g = (y * 255 / (height - 1)) as u8;
            data.extend_from_slice(&[r, g, 128]);
        }
    }
    GradingImage::new(width, height, PixelLayout::Rgb8, data).expect("valid gradient")
}

#[test]
fn test_neutral_params_leave_image_untouched() {
    let image = create_test_gradient(8, 6);
    let out = process(image.clone(), &AdjustmentParams::default());
    assert_eq!(out, image);
}

#[test]
fn test_neutral_factors_are_exact_noops() {
    let image = create_test_gradient(5, 5);
    assert_eq!(brightness(image.clone(), 1.0), image);
    assert_eq!(contrast(image.clone(), 1.0), image);
    assert_eq!(saturation(image.clone(), 1.0), image);
    assert_eq!(sharpness(image.clone(), 1.0), image);
    assert_eq!(temperature(image.clone(), 0.0), image);
    assert_eq!(hsl(image.clone(), 0.0, 0.0, 0.0), image);
}

#[test]
fn test_extreme_factors_clamp_instead_of_wrapping() {
    let image = create_test_gradient(4, 4);

    let blown = process(
        image.clone(),
        &AdjustmentParams {
            brightness: 50.0,
            ..Default::default()
        },
    );
    for (i, (&before, &after)) in image.as_raw().iter().zip(blown.as_raw()).enumerate() {
        let expected = if before == 0 { 0 } else { 255 };
        assert_eq!(after, expected, "sample {i}: {before} → {after}");
    }

    let crushed = process(
        image,
        &AdjustmentParams {
            brightness: -2.0,
            ..Default::default()
        },
    );
    assert!(crushed.as_raw().iter().all(|&v| v == 0));
}

#[test]
fn test_red_with_warm_temperature() {
    let image = GradingImage::from_rgb_pixel(2, 2, [255, 0, 0]);
    let params = AdjustmentParams {
        temperature: 0.5,
        ..Default::default()
    };
    let out = process(image, &params);
    assert_eq!(out.pixel(0, 0), &[255, 0, 0]);
    assert_eq!(out.pixel(1, 1), &[255, 0, 0]);
}

#[test]
fn test_mid_gray_contrast_stays_on_pivot() {
    let image = GradingImage::from_rgb_pixel(3, 3, [128, 128, 128]);
    let params = AdjustmentParams {
        contrast: 2.0,
        ..Default::default()
    };
    let out = process(image, &params);
    // 128 + 2.0 × (128 − 128) = 128
    assert!(out.as_raw().iter().all(|&v| v == 128));
}

#[test]
fn test_hue_full_turn_preserves_colors() {
    let image = create_test_gradient(6, 6);
    let params = AdjustmentParams {
        hue: 180.0,
        ..Default::default()
    };
    let out = process(image.clone(), &params);
    for (i, (&a, &b)) in image.as_raw().iter().zip(out.as_raw()).enumerate() {
        assert!(
            (a as i32 - b as i32).abs() <= 4,
            "sample {i}: {a} vs {b} after a full hue turn"
        );
    }
}

#[test]
fn test_json_slider_values_keep_double_precision() {
    let image = GradingImage::from_rgb_pixel(1, 1, [100, 100, 200]);
    let params = AdjustmentParams::from_json(r#"{"temperature": 0.1}"#).unwrap();
    assert_eq!(process(image, &params).as_raw(), &[105, 100, 194]);

    let image = GradingImage::from_rgb_pixel(1, 1, [10, 10, 10]);
    let params = AdjustmentParams::from_json(r#"{"lightness": -0.1}"#).unwrap();
    assert_eq!(process(image, &params).as_raw(), &[9, 9, 9]);
}

#[test]
fn test_hue_full_turn_requantizes_off_primary_colors() {
    let image = GradingImage::from_rgb_pixel(2, 1, [242, 0, 255]);
    let params = AdjustmentParams {
        hue: 180.0,
        ..Default::default()
    };
    let out = process(image, &params);
    assert_eq!(out.pixel(1, 0), &[247, 0, 255]);
}

#[test]
fn test_unknown_profile_leaves_image_untouched() {
    let image = create_test_gradient(4, 3);
    assert_eq!(apply_profile(image.clone(), "nonexistent"), image);

    let params = AdjustmentParams {
        camera_profile: Some("nonexistent".into()),
        ..Default::default()
    };
    assert_eq!(process(image.clone(), &params), image);
}

#[test]
fn test_grayscale_passes_through_channel_ops() {
    let image = GradingImage::new(2, 2, PixelLayout::Gray8, vec![0, 64, 128, 255]).unwrap();
    assert_eq!(temperature(image.clone(), 0.7), image);
    assert_eq!(hsl(image.clone(), 45.0, 0.3, -0.2), image);
    assert_eq!(apply_profile(image.clone(), "arri"), image);
}

#[test]
fn test_blackmagic_changes_only_saturation() {
    let image = create_test_gradient(5, 4);
    let params = AdjustmentParams {
        camera_profile: Some("blackmagic".into()),
        ..Default::default()
    };
    assert_eq!(process(image.clone(), &params), saturation(image, 1.05));
}

#[test]
fn test_pipeline_is_deterministic_across_threads() {
    let image = create_test_gradient(16, 16);
    let params = AdjustmentParams {
        brightness: 1.1,
        contrast: 1.2,
        saturation: 0.9,
        sharpness: 1.5,
        temperature: -0.3,
        hue: 12.0,
        hsl_saturation: 0.1,
        lightness: -0.05,
        camera_profile: Some("red".into()),
    };
    let pipeline = GradingPipeline::new(ProfileRegistry::builtin());
    let reference = pipeline.process(image.clone(), &params);

    std::thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let image = image.clone();
                let params = &params;
                s.spawn(move || pipeline.process(image, params))
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().expect("worker panicked"), reference);
        }
    });
}

#[test]
fn test_full_chain_matches_manual_composition() {
    let image = create_test_gradient(7, 5);
    let params = AdjustmentParams {
        brightness: 1.2,
        contrast: 1.1,
        saturation: 1.3,
        sharpness: 2.0,
        temperature: 0.25,
        hue: 20.0,
        hsl_saturation: -0.2,
        lightness: 0.1,
        camera_profile: Some("sony".into()),
    };

    let manual = {
        let img = brightness(image.clone(), 1.2);
        let img = contrast(img, 1.1);
        let img = saturation(img, 1.3);
        let img = sharpness(img, 2.0);
        let img = temperature(img, 0.25);
        let img = hsl(img, 20.0, -0.2, 0.1);
        apply_profile(img, "sony")
    };

    assert_eq!(process(image, &params), manual);
}

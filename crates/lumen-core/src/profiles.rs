//! Camera profile emulation.
//!
//! A profile is a per-channel gain followed by a contrast and a saturation
//! pass. The built-in profiles live in a read-only registry that is built
//! once per process and shared by reference.

use std::sync::OnceLock;

use serde::Serialize;

use crate::grading::enhance::{contrast, saturation};
use crate::grading::scale_channel;
use crate::image::GradingImage;

/// Immutable description of a camera look.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CameraProfile {
    id: &'static str,
    name: &'static str,
    color_matrix: [f64; 3],
    contrast: f64,
    saturation: f64,
    description: &'static str,
}

impl CameraProfile {
    /// Registry key, e.g. `"arri"`.
    pub fn id(&self) -> &'static str {
        self.id
    }

    /// Display name, e.g. `"ARRI Alexa"`.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Per-channel `[R, G, B]` gains.
    pub fn color_matrix(&self) -> [f64; 3] {
        self.color_matrix
    }

    pub fn contrast(&self) -> f64 {
        self.contrast
    }

    pub fn saturation(&self) -> f64 {
        self.saturation
    }

    pub fn description(&self) -> &'static str {
        self.description
    }

    /// Channel gains, then contrast, then saturation.
    ///
    /// Grayscale input is returned unchanged.
    pub fn apply(&self, mut image: GradingImage) -> GradingImage {
        if !image.is_rgb() {
            return image;
        }

        if self.color_matrix != [1.0; 3] {
            for px in image.as_raw_mut().chunks_exact_mut(3) {
                for (v, &k) in px.iter_mut().zip(&self.color_matrix) {
                    *v = scale_channel(*v, k);
                }
            }
        }

        let image = contrast(image, self.contrast);
        saturation(image, self.saturation)
    }
}

const BUILTIN_PROFILES: [CameraProfile; 5] = [
    CameraProfile {
        id: "arri",
        name: "ARRI Alexa",
        color_matrix: [1.05, 0.98, 1.02],
        contrast: 1.1,
        saturation: 1.15,
        description: "ARRI Alexa natural color profile",
    },
    CameraProfile {
        id: "red",
        name: "RED Digital Cinema",
        color_matrix: [1.08, 0.95, 1.05],
        contrast: 1.15,
        saturation: 1.2,
        description: "RED high contrast profile",
    },
    CameraProfile {
        id: "canon",
        name: "Canon Cinema",
        color_matrix: [1.03, 1.02, 0.98],
        contrast: 1.05,
        saturation: 1.1,
        description: "Canon warm tone profile",
    },
    CameraProfile {
        id: "sony",
        name: "Sony Venice",
        color_matrix: [1.02, 1.0, 1.03],
        contrast: 1.08,
        saturation: 1.12,
        description: "Sony balanced profile",
    },
    CameraProfile {
        id: "blackmagic",
        name: "Blackmagic",
        color_matrix: [1.0, 1.0, 1.0],
        contrast: 1.0,
        saturation: 1.05,
        description: "Blackmagic flat profile",
    },
];

/// Read-only lookup table of camera profiles keyed by id.
#[derive(Debug)]
pub struct ProfileRegistry {
    profiles: Vec<CameraProfile>,
}

impl ProfileRegistry {
    /// The process-wide registry of built-in profiles.
    pub fn builtin() -> &'static Self {
        static REGISTRY: OnceLock<ProfileRegistry> = OnceLock::new();
        REGISTRY.get_or_init(|| Self {
            profiles: BUILTIN_PROFILES.to_vec(),
        })
    }

    /// Look up a profile. Unknown ids yield `None`.
    pub fn get(&self, id: &str) -> Option<&CameraProfile> {
        self.profiles.iter().find(|p| p.id == id)
    }

    /// Profiles in table order.
    pub fn iter(&self) -> impl Iterator<Item = &CameraProfile> {
        self.profiles.iter()
    }

    pub fn ids(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.profiles.iter().map(|p| p.id)
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    /// Apply the profile named `id`. Empty or unknown ids are a no-op.
    pub fn apply(&self, image: GradingImage, id: &str) -> GradingImage {
        match self.get(id) {
            Some(profile) => profile.apply(image),
            None => {
                if !id.is_empty() {
                    tracing::warn!("unknown camera profile '{id}', skipping");
                }
                image
            }
        }
    }
}

/// Apply a built-in profile by id.
pub fn apply_profile(image: GradingImage, id: &str) -> GradingImage {
    ProfileRegistry::builtin().apply(image, id)
}

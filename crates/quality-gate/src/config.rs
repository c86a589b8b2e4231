//! Quality gate configuration

use face_mesh::ConfigError;
use serde::{Deserialize, Serialize};

/// Minimum overall score for an acceptable face
pub const MIN_ACCEPTABLE_SCORE: f32 = 0.6;

/// More warnings than this make a face unacceptable regardless of its score
pub const MAX_ACCEPTABLE_WARNINGS: usize = 2;

/// Quality gate thresholds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QualityConfig {
    /// Maximum in-plane head rotation for a frontal pose (degrees)
    pub max_rotation_degrees: f32,
    /// Maximum nose offset from the cheek center, relative to face width
    pub max_asymmetry_ratio: f32,
    /// Maximum cheek depth difference
    pub max_depth_asymmetry: f32,

    /// Mouth aspect ratio above this is an open mouth
    pub mouth_open_ratio: f32,
    /// Mean brow-to-eye distance above this is raised eyebrows
    pub eyebrow_raise_distance: f32,

    /// Landmark confidence below this counts as low
    pub min_landmark_confidence: f32,
    /// Low-confidence landmark count above this suggests a poor image
    pub poor_image_low_count: usize,
}

impl Default for QualityConfig {
    fn default() -> Self {
        Self {
            max_rotation_degrees: 15.0,
            max_asymmetry_ratio: 0.15,
            max_depth_asymmetry: 0.05,
            mouth_open_ratio: 0.15,
            eyebrow_raise_distance: 0.08,
            min_landmark_confidence: 0.5,
            poor_image_low_count: 50,
        }
    }
}

impl QualityConfig {
    /// Create strict config (tighter pose and expression limits)
    pub fn strict() -> Self {
        Self {
            max_rotation_degrees: 10.0,
            max_asymmetry_ratio: 0.10,
            max_depth_asymmetry: 0.03,
            ..Default::default()
        }
    }

    /// Create lenient config (looser pose limits)
    pub fn lenient() -> Self {
        Self {
            max_rotation_degrees: 25.0,
            max_asymmetry_ratio: 0.20,
            max_depth_asymmetry: 0.08,
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        ConfigError::check_range("quality.max_rotation_degrees", self.max_rotation_degrees, 0.0, 90.0)?;
        ConfigError::check_range("quality.max_asymmetry_ratio", self.max_asymmetry_ratio, 0.0, 1.0)?;
        ConfigError::check_range("quality.max_depth_asymmetry", self.max_depth_asymmetry, 0.0, 1.0)?;
        ConfigError::check_range("quality.mouth_open_ratio", self.mouth_open_ratio, 0.0, 10.0)?;
        ConfigError::check_range("quality.eyebrow_raise_distance", self.eyebrow_raise_distance, 0.0, 1.0)?;
        ConfigError::check_range("quality.min_landmark_confidence", self.min_landmark_confidence, 0.0, 1.0)
    }
}

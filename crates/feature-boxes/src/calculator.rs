//! Region bounding box calculation

use face_mesh::{ConfigError, LandmarkSet, Region, MIN_EXTENT};
use tracing::debug;

use crate::{BoundingBox, BoxConfig, FeatureBoxes};

/// Computes padded normalized boxes from a landmark set
#[derive(Debug, Clone, Default)]
pub struct BoundingBoxCalculator {
    config: BoxConfig,
}

impl BoundingBoxCalculator {
    pub fn new(config: BoxConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn calculate_all(&self, landmarks: &LandmarkSet) -> FeatureBoxes {
        FeatureBoxes {
            face: self.calculate(landmarks, Region::Face),
            right_eye: self.calculate(landmarks, Region::RightEye),
            left_eye: self.calculate(landmarks, Region::LeftEye),
            nose: self.calculate(landmarks, Region::Nose),
            lips: self.calculate(landmarks, Region::Lips),
        }
    }

    /// Padded box around one region.
    ///
    /// Padded edges are clamped to the image but never move inside the
    /// tight extent, so the box always contains every region landmark.
    pub fn calculate(&self, landmarks: &LandmarkSet, region: Region) -> BoundingBox {
        let (mut min_x, mut min_y) = (f32::MAX, f32::MAX);
        let (mut max_x, mut max_y) = (f32::MIN, f32::MIN);
        for p in landmarks.points(region.landmarks()) {
            min_x = min_x.min(p.x);
            min_y = min_y.min(p.y);
            max_x = max_x.max(p.x);
            max_y = max_y.max(p.y);
        }

        let pad_x = (max_x - min_x) * self.config.padding;
        let pad_y = (max_y - min_y) * self.config.padding;
        if max_x - min_x < MIN_EXTENT || max_y - min_y < MIN_EXTENT {
            debug!(region = region.name(), "Region has collapsed extent");
        }

        BoundingBox::from_edges(
            (min_x - pad_x).max(0.0).min(min_x),
            (min_y - pad_y).max(0.0).min(min_y),
            (max_x + pad_x).min(1.0).max(max_x),
            (max_y + pad_y).min(1.0).max(max_y),
        )
    }
}

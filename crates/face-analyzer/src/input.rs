//! Pipeline input and output

use face_mesh::{ImageDimensions, LandmarkSet};
use feature_boxes::FeatureBoxes;
use feature_summary::AnalysisSummary;
use morphology::{EyeClassification, LipClassification, NoseClassification};
use quality_gate::QualityReport;
use serde::{Deserialize, Serialize};

/// One face to analyze
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FaceInput {
    pub landmarks: LandmarkSet,
    /// Per-landmark detection confidences, one per landmark
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidences: Option<Vec<f32>>,
    /// Source image size, for pixel-space boxes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<ImageDimensions>,
}

impl FaceInput {
    pub fn new(landmarks: LandmarkSet) -> Self {
        Self {
            landmarks,
            confidences: None,
            image: None,
        }
    }

    #[must_use]
    pub fn with_confidences(mut self, confidences: Vec<f32>) -> Self {
        self.confidences = Some(confidences);
        self
    }

    #[must_use]
    pub fn with_image(mut self, image: ImageDimensions) -> Self {
        self.image = Some(image);
        self
    }
}

impl From<LandmarkSet> for FaceInput {
    fn from(landmarks: LandmarkSet) -> Self {
        Self::new(landmarks)
    }
}

/// Complete analysis of one face
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FaceAnalysis {
    pub quality: QualityReport,
    pub eyes: EyeClassification,
    pub nose: NoseClassification,
    pub lips: LipClassification,
    /// Normalized boxes
    pub bounding_boxes: FeatureBoxes,
    /// Pixel boxes, present when the image size is known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pixel_boxes: Option<FeatureBoxes>,
    pub summary: AnalysisSummary,
}

//! Quality gate results

use std::fmt;

use serde::{Deserialize, Serialize};

/// Head pose estimate
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PoseReport {
    pub is_frontal: bool,
    /// Angle of the forehead-to-nose line from vertical (degrees, unsigned)
    pub rotation_degrees: f32,
    /// Nose offset from the cheek center, relative to face width
    pub asymmetry_ratio: f32,
    /// Absolute cheek depth difference
    pub depth_asymmetry: f32,
    /// 1 for an upright face, falling linearly to 0 at 90 degrees
    pub pose_quality: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpressionType {
    #[default]
    Neutral,
    MouthOpen,
    Smiling,
    EyebrowsRaised,
}

impl ExpressionType {
    pub fn as_str(self) -> &'static str {
        match self {
            ExpressionType::Neutral => "neutral",
            ExpressionType::MouthOpen => "mouth_open",
            ExpressionType::Smiling => "smiling",
            ExpressionType::EyebrowsRaised => "eyebrows_raised",
        }
    }
}

impl fmt::Display for ExpressionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExpressionReport {
    #[serde(rename = "type")]
    pub expression_type: ExpressionType,
    pub is_neutral: bool,
    /// Inner lip gap over mouth width
    pub mouth_aspect_ratio: f32,
    pub is_smiling: bool,
    /// Mean vertical brow-to-eye-top distance
    pub eyebrow_distance: f32,
    pub expression_confidence: f32,
}

/// Statistics over per-landmark detection confidences
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LandmarkConfidenceReport {
    pub average: f32,
    pub min: f32,
    pub low_confidence_count: usize,
    /// Share of landmarks at or above the confidence threshold
    pub confidence_quality: f32,
}

/// Complete quality gate outcome
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QualityReport {
    pub pose: PoseReport,
    pub expression: ExpressionReport,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub landmark_confidence: Option<LandmarkConfidenceReport>,
    /// Mean of the available sub-scores
    pub overall_score: f32,
    pub is_acceptable: bool,
    pub warnings: Vec<String>,
    pub recommendations: Vec<String>,
}

//! Summary output types

use morphology::{EyeShape, LipBalance, LipFullness, NoseWidth};
use serde::{Deserialize, Serialize};

/// Primary categories of every feature
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureSet {
    pub eye_shape: EyeShape,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub eye_secondary: Vec<EyeShape>,
    pub nose_width: NoseWidth,
    pub lip_fullness: LipFullness,
    pub lip_balance: LipBalance,
}

/// Makeup keywords grouped by feature
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MakeupKeywords {
    pub eye: Vec<String>,
    pub nose: Vec<String>,
    pub lip: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EyeBreakdown {
    pub primary: EyeShape,
    pub secondary: Vec<EyeShape>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoseBreakdown {
    pub width: NoseWidth,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LipBreakdown {
    pub fullness: LipFullness,
    pub balance: LipBalance,
}

/// Per-feature view of the classified categories
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureBreakdown {
    pub eyes: EyeBreakdown,
    pub nose: NoseBreakdown,
    pub lips: LipBreakdown,
}

/// Aggregated result of one face analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisSummary {
    pub features: FeatureSet,
    /// Mean of the eye, nose and lip confidences
    pub overall_confidence: f32,
    pub description: String,
    /// Ordered, without duplicates
    pub search_tags: Vec<String>,
    pub makeup_keywords: MakeupKeywords,
    pub breakdown: FeatureBreakdown,
}

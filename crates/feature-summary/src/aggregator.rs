//! Summary aggregation

use face_mesh::{clamp_unit, mean};
use morphology::{EyeClassification, LipClassification, NoseClassification};
use tracing::debug;

use crate::keywords::{eye_keywords, lip_keywords, nose_keywords, search_tags};
use crate::{
    AnalysisSummary, EyeBreakdown, FeatureBreakdown, FeatureSet, LipBreakdown, MakeupKeywords,
    NoseBreakdown,
};

/// Builds the final summary from the three feature classifications
#[derive(Debug, Clone, Copy, Default)]
pub struct FeatureSummaryAggregator;

impl FeatureSummaryAggregator {
    pub fn new() -> Self {
        Self
    }

    pub fn summarize(
        &self,
        eyes: &EyeClassification,
        nose: &NoseClassification,
        lips: &LipClassification,
    ) -> AnalysisSummary {
        let features = FeatureSet {
            eye_shape: eyes.category,
            eye_secondary: eyes.secondary_tags.clone(),
            nose_width: nose.category,
            lip_fullness: lips.category,
            lip_balance: lips.metrics.lip_balance,
        };

        let overall_confidence =
            clamp_unit(mean(&[eyes.top_confidence(), nose.confidence, lips.confidence]));

        let summary = AnalysisSummary {
            description: describe(&features),
            search_tags: search_tags(&features),
            makeup_keywords: MakeupKeywords {
                eye: eye_keywords(&features),
                nose: nose_keywords(&features),
                lip: lip_keywords(&features),
            },
            breakdown: FeatureBreakdown {
                eyes: EyeBreakdown {
                    primary: features.eye_shape,
                    secondary: features.eye_secondary.clone(),
                },
                nose: NoseBreakdown {
                    width: features.nose_width,
                },
                lips: LipBreakdown {
                    fullness: features.lip_fullness,
                    balance: features.lip_balance,
                },
            },
            overall_confidence,
            features,
        };

        debug!(
            overall_confidence,
            tags = summary.search_tags.len(),
            "Feature summary: {}",
            summary.description
        );
        summary
    }
}

/// Readable one-sentence description
fn describe(features: &FeatureSet) -> String {
    let mut eye = features.eye_shape.to_string();
    if let Some(secondary) = features.eye_secondary.first() {
        eye.push(' ');
        eye.push_str(&secondary.as_str().to_lowercase());
    }

    let mut description = format!(
        "Your facial features include {eye} eyes, a {} nose, and {} lips",
        features.nose_width, features.lip_fullness
    );
    if features.lip_balance.is_dominant() {
        description.push_str(&format!(" with a {} lip balance", features.lip_balance.words()));
    }
    description.push('.');
    description
}

//! Lip fullness classification
//!
//! Upper and lower lip thickness are each the median of three vertical
//! samples, compared to the mouth width.

use std::collections::BTreeMap;

use face_mesh::{clamp_unit, distance_2d, LandmarkId, LandmarkSet, MIN_EXTENT};
use feature_stats::{RobustEstimate, SanityBand};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::confidence::{Bucket, ThreeBuckets};
use crate::{ClassificationResult, LipBalance, LipFullness, LipThresholds};

pub type LipClassification = ClassificationResult<LipFullness, LipMetrics>;

// Outer edge to inner edge, right to left
const UPPER_LIP_PAIRS: [(LandmarkId, LandmarkId); 3] = [
    (LandmarkId::UPPER_LIP_TOP_RIGHT, LandmarkId::UPPER_LIP_BOTTOM_RIGHT),
    (LandmarkId::UPPER_LIP_TOP, LandmarkId::UPPER_LIP_BOTTOM),
    (LandmarkId::UPPER_LIP_TOP_LEFT, LandmarkId::UPPER_LIP_BOTTOM_LEFT),
];

// Inner edge to outer edge, right to left
const LOWER_LIP_PAIRS: [(LandmarkId, LandmarkId); 3] = [
    (LandmarkId::LOWER_LIP_TOP_RIGHT, LandmarkId::LOWER_LIP_BOTTOM_RIGHT),
    (LandmarkId::LOWER_LIP_TOP, LandmarkId::LOWER_LIP_BOTTOM),
    (LandmarkId::LOWER_LIP_TOP_LEFT, LandmarkId::LOWER_LIP_BOTTOM_LEFT),
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct LipMetrics {
    pub mouth_width: f32,
    pub upper_thickness: f32,
    pub lower_thickness: f32,
    /// Combined thickness over mouth width
    pub fullness_ratio: f32,
    pub upper_ratio: f32,
    pub lower_ratio: f32,
    pub lip_balance: LipBalance,
    /// Mouth corner depth minus lip center depth
    pub lip_projection: f32,
    pub upper_samples: usize,
    pub lower_samples: usize,
    pub measurement_stability: f32,
}

/// Lip fullness classifier
#[derive(Debug, Clone, Default)]
pub struct LipFullnessClassifier {
    thresholds: LipThresholds,
}

impl LipFullnessClassifier {
    pub fn new(thresholds: LipThresholds) -> Self {
        Self { thresholds }
    }

    fn buckets(&self) -> ThreeBuckets {
        ThreeBuckets {
            low_max: self.thresholds.thin_max,
            high_min: self.thresholds.medium_max,
        }
    }

    pub fn classify(&self, landmarks: &LandmarkSet) -> LipClassification {
        let metrics = self.measure(landmarks);
        debug!(
            ratio = metrics.fullness_ratio,
            balance = %metrics.lip_balance,
            projection = metrics.lip_projection,
            stability = metrics.measurement_stability,
            "Lip metrics"
        );
        self.decide(metrics)
    }

    pub fn measure(&self, landmarks: &LandmarkSet) -> LipMetrics {
        let t = &self.thresholds;
        let band = SanityBand::new(t.thickness_band_min, t.thickness_band_max);
        let thickness = |pairs: &[(LandmarkId, LandmarkId)], center: (LandmarkId, LandmarkId)| {
            let samples: Vec<f32> = pairs
                .iter()
                .map(|&(a, b)| distance_2d(landmarks[a], landmarks[b]))
                .collect();
            RobustEstimate::from_samples(&samples, band, distance_2d(landmarks[center.0], landmarks[center.1]))
        };
        let upper = thickness(&UPPER_LIP_PAIRS[..], UPPER_LIP_PAIRS[1]);
        let lower = thickness(&LOWER_LIP_PAIRS[..], LOWER_LIP_PAIRS[1]);

        let mouth_width = distance_2d(
            landmarks[LandmarkId::MOUTH_RIGHT_CORNER],
            landmarks[LandmarkId::MOUTH_LEFT_CORNER],
        );
        let (fullness_ratio, upper_ratio, lower_ratio) = if mouth_width < MIN_EXTENT {
            warn!(mouth_width, "Degenerate mouth width, assuming medium lip ratio");
            (self.buckets().midpoint(), 0.0, 0.0)
        } else {
            (
                (upper.value + lower.value) / mouth_width,
                upper.value / mouth_width,
                lower.value / mouth_width,
            )
        };

        let corner_z = (landmarks[LandmarkId::MOUTH_RIGHT_CORNER].z + landmarks[LandmarkId::MOUTH_LEFT_CORNER].z) / 2.0;
        let center_z = (landmarks[LandmarkId::UPPER_LIP_TOP].z + landmarks[LandmarkId::LOWER_LIP_BOTTOM].z) / 2.0;

        LipMetrics {
            mouth_width,
            upper_thickness: upper.value,
            lower_thickness: lower.value,
            fullness_ratio,
            upper_ratio,
            lower_ratio,
            lip_balance: self.balance(upper_ratio - lower_ratio),
            lip_projection: corner_z - center_z,
            upper_samples: upper.accepted,
            lower_samples: lower.accepted,
            measurement_stability: feature_stats::stability(
                (upper.std_dev + lower.std_dev) / 2.0,
                t.stability_gain,
            ),
        }
    }

    fn balance(&self, diff: f32) -> LipBalance {
        let t = &self.thresholds;
        let magnitude = diff.abs();
        if magnitude < t.balanced_max {
            LipBalance::Balanced
        } else if magnitude < t.slight_dominance_max {
            if diff > 0.0 {
                LipBalance::SlightlyUpperDominant
            } else {
                LipBalance::SlightlyLowerDominant
            }
        } else if diff > 0.0 {
            LipBalance::UpperDominant
        } else {
            LipBalance::LowerDominant
        }
    }

    pub fn decide(&self, metrics: LipMetrics) -> LipClassification {
        let t = &self.thresholds;
        let (bucket, base) = self.buckets().decide(metrics.fullness_ratio);
        let category = match bucket {
            Bucket::Low => LipFullness::Thin,
            Bucket::Middle => LipFullness::Medium,
            Bucket::High => LipFullness::Full,
        };

        let mut confidence = base * metrics.measurement_stability;
        if category == LipFullness::Full && metrics.lip_projection > t.projection_min {
            confidence = (confidence * t.full_projection_boost).min(t.boost_cap);
        }
        let confidence = clamp_unit(confidence);

        ClassificationResult {
            category,
            confidence,
            secondary_tags: Vec::new(),
            confidence_map: BTreeMap::from([(category, confidence)]),
            metrics,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use face_mesh::{Landmark, LANDMARK_COUNT};
    use proptest::prelude::*;
    use test_support::FaceBuilder;

    fn classify(builder: FaceBuilder) -> LipClassification {
        LipFullnessClassifier::default().classify(&builder.build())
    }

    #[test]
    fn test_default_lips_are_medium_balanced() {
        let result = classify(FaceBuilder::new());
        assert_eq!(result.category, LipFullness::Medium);
        assert_eq!(result.metrics.lip_balance, LipBalance::Balanced);
        assert_eq!(result.metrics.upper_samples, 3);
        assert!((result.metrics.mouth_width - 0.14).abs() < 1e-5);
        assert!((result.metrics.measurement_stability - 1.0).abs() < 1e-4);
    }

    #[test]
    fn test_thin_lips() {
        // (0.003 + 0.004) / 0.14 = 0.05
        let result = classify(FaceBuilder::new().lips(0.003, 0.004));
        assert_eq!(result.category, LipFullness::Thin);
        assert!((result.metrics.fullness_ratio - 0.05).abs() < 1e-4);
        assert!((result.confidence - 0.9).abs() < 1e-3);
    }

    #[test]
    fn test_full_lips_projection_boost() {
        let flat = classify(FaceBuilder::new().lips(0.015, 0.016));
        let projected = classify(FaceBuilder::new().lips(0.015, 0.016).lip_center_depth(-0.02));
        assert_eq!(flat.category, LipFullness::Full);
        assert_eq!(projected.category, LipFullness::Full);
        assert!(projected.metrics.lip_projection > 0.01);
        assert!((projected.confidence - flat.confidence * 1.10).abs() < 1e-4);
    }

    #[test]
    fn test_balance_levels() {
        let cases = [
            ((0.016, 0.008), LipBalance::UpperDominant),
            ((0.012, 0.008), LipBalance::SlightlyUpperDominant),
            ((0.008, 0.012), LipBalance::SlightlyLowerDominant),
            ((0.008, 0.016), LipBalance::LowerDominant),
            ((0.011, 0.012), LipBalance::Balanced),
        ];
        for ((upper, lower), expected) in cases {
            let result = classify(FaceBuilder::new().lips(upper, lower));
            assert_eq!(result.metrics.lip_balance, expected, "upper {upper} lower {lower}");
        }
    }

    #[test]
    fn test_degenerate_mouth_falls_back_to_medium() {
        let flat = LandmarkSet::new(vec![Landmark::new(0.5, 0.5, 0.0); LANDMARK_COUNT]).unwrap();
        let result = LipFullnessClassifier::default().classify(&flat);
        assert_eq!(result.category, LipFullness::Medium);
        assert_eq!(result.metrics.upper_samples, 0);
        assert_eq!(result.metrics.upper_ratio, 0.0);
        assert_eq!(result.metrics.lip_balance, LipBalance::Balanced);
    }

    proptest! {
        #[test]
        fn prop_confidence_in_unit_interval(upper in 0.0f32..0.05, lower in 0.0f32..0.05, z in -0.05f32..0.05) {
            let result = classify(FaceBuilder::new().lips(upper, lower).lip_center_depth(z));
            prop_assert!((0.0..=1.0).contains(&result.confidence));
        }
    }
}

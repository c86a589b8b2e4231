//! Nose width classification
//!
//! Width is sampled at three levels (ala, outer nostril, inner nostril) and
//! compared to the cheek-to-cheek face width. Depth cues from the nose tip,
//! bridge and ala can raise the confidence but never change the category.

use std::collections::BTreeMap;

use face_mesh::{distance_2d, safe_ratio, LandmarkId, LandmarkSet, MIN_EXTENT};
use feature_stats::{stability, SampleStats};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::confidence::{Bucket, ThreeBuckets};
use crate::{ClassificationResult, NoseThresholds, NoseWidth};

pub type NoseClassification = ClassificationResult<NoseWidth, NoseMetrics>;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct NoseMetrics {
    pub ala_width: f32,
    pub nostril_width: f32,
    pub inner_nostril_width: f32,
    pub avg_width: f32,
    pub width_std_dev: f32,
    pub face_width: f32,
    pub nose_to_face_ratio: f32,
    /// Ala width relative to inner nostril width, minus one
    pub nostril_flare: f32,
    /// Tip distance in front of the cheek plane
    pub nose_projection: f32,
    /// Bridge distance in front of the cheek plane
    pub bridge_prominence: f32,
    /// Mean ala distance in front of the cheek plane
    pub ala_projection: f32,
    pub is_prominent: bool,
    pub is_flat: bool,
    pub has_high_bridge: bool,
    pub measurement_stability: f32,
}

/// Nose width classifier
#[derive(Debug, Clone, Default)]
pub struct NoseWidthClassifier {
    thresholds: NoseThresholds,
}

impl NoseWidthClassifier {
    pub fn new(thresholds: NoseThresholds) -> Self {
        Self { thresholds }
    }

    fn buckets(&self) -> ThreeBuckets {
        ThreeBuckets {
            low_max: self.thresholds.narrow_max,
            high_min: self.thresholds.medium_max,
        }
    }

    pub fn classify(&self, landmarks: &LandmarkSet) -> NoseClassification {
        let metrics = self.measure(landmarks);
        debug!(
            ratio = metrics.nose_to_face_ratio,
            flare = metrics.nostril_flare,
            projection = metrics.nose_projection,
            stability = metrics.measurement_stability,
            "Nose metrics"
        );
        self.decide(metrics)
    }

    pub fn measure(&self, landmarks: &LandmarkSet) -> NoseMetrics {
        let t = &self.thresholds;
        let width = |a: LandmarkId, b: LandmarkId| distance_2d(landmarks[a], landmarks[b]);

        let ala_width = width(LandmarkId::RIGHT_ALA, LandmarkId::LEFT_ALA);
        let nostril_width = width(LandmarkId::RIGHT_NOSTRIL_OUTER, LandmarkId::LEFT_NOSTRIL_OUTER);
        let inner_nostril_width = width(LandmarkId::RIGHT_NOSTRIL_INNER, LandmarkId::LEFT_NOSTRIL_INNER);
        let widths = SampleStats::compute(&[ala_width, nostril_width, inner_nostril_width]);

        let face_width = width(LandmarkId::RIGHT_CHEEK, LandmarkId::LEFT_CHEEK);
        let nose_to_face_ratio = if face_width < MIN_EXTENT {
            warn!(face_width, "Degenerate face width, assuming medium nose ratio");
            self.buckets().midpoint()
        } else {
            widths.mean / face_width
        };

        let plane_z = (landmarks[LandmarkId::RIGHT_CHEEK].z + landmarks[LandmarkId::LEFT_CHEEK].z) / 2.0;
        let ala_z = (landmarks[LandmarkId::RIGHT_ALA].z + landmarks[LandmarkId::LEFT_ALA].z) / 2.0;
        let nose_projection = plane_z - landmarks[LandmarkId::NOSE_TIP].z;
        let bridge_prominence = plane_z - landmarks[LandmarkId::NOSE_BRIDGE_TOP].z;

        NoseMetrics {
            ala_width,
            nostril_width,
            inner_nostril_width,
            avg_width: widths.mean,
            width_std_dev: widths.std_dev,
            face_width,
            nose_to_face_ratio,
            nostril_flare: safe_ratio(ala_width - inner_nostril_width, inner_nostril_width, 0.0),
            nose_projection,
            bridge_prominence,
            ala_projection: plane_z - ala_z,
            is_prominent: nose_projection > t.prominent_projection,
            is_flat: nose_projection < t.flat_projection,
            has_high_bridge: bridge_prominence > t.high_bridge,
            measurement_stability: stability(widths.std_dev, t.stability_gain),
        }
    }

    pub fn decide(&self, metrics: NoseMetrics) -> NoseClassification {
        let t = &self.thresholds;
        let (bucket, base) = self.buckets().decide(metrics.nose_to_face_ratio);
        let category = match bucket {
            Bucket::Low => NoseWidth::Narrow,
            Bucket::Middle => NoseWidth::Medium,
            Bucket::High => NoseWidth::Wide,
        };

        let mut confidence = base * metrics.measurement_stability;
        let boost = match category {
            NoseWidth::Wide if metrics.is_prominent => Some(t.wide_prominent_boost),
            NoseWidth::Narrow if metrics.has_high_bridge => Some(t.narrow_bridge_boost),
            _ => None,
        };
        if let Some(factor) = boost {
            confidence = (confidence * factor).min(t.boost_cap);
        }
        let confidence = face_mesh::clamp_unit(confidence);

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

    fn classify(builder: FaceBuilder) -> NoseClassification {
        NoseWidthClassifier::default().classify(&builder.build())
    }

    #[test]
    fn test_reference_ratios() {
        let narrow = classify(FaceBuilder::new().nose_ratio(0.20));
        assert_eq!(narrow.category, NoseWidth::Narrow);
        assert!((narrow.metrics.nose_to_face_ratio - 0.20).abs() < 1e-4);

        let medium = classify(FaceBuilder::new().nose_ratio(0.30));
        assert_eq!(medium.category, NoseWidth::Medium);
        assert!(medium.confidence > 0.8 && medium.confidence <= 0.9);

        let wide = classify(FaceBuilder::new().nose_ratio(0.40));
        assert_eq!(wide.category, NoseWidth::Wide);
    }

    #[test]
    fn test_medium_confidence_is_peak_times_stability() {
        let medium = classify(FaceBuilder::new().nose_ratio(0.30));
        assert!((medium.confidence - 0.9 * medium.metrics.measurement_stability).abs() < 1e-4);
    }

    #[test]
    fn test_width_samples() {
        let metrics = classify(FaceBuilder::new().nose_ratio(0.30)).metrics;
        assert!((metrics.avg_width - 0.15).abs() < 1e-4);
        assert!(metrics.width_std_dev > 0.0);
        // Ala is 1.1x and inner nostrils 0.9x the average width
        assert!((metrics.nostril_flare - (1.1 / 0.9 - 1.0)).abs() < 1e-3);
    }

    #[test]
    fn test_depth_flags() {
        let metrics = classify(FaceBuilder::new()).metrics;
        assert!(metrics.is_prominent);
        assert!(metrics.has_high_bridge);
        assert!(!metrics.is_flat);
        assert!((metrics.nose_projection - 0.06).abs() < 1e-5);

        let flat = classify(FaceBuilder::new().nose_depth(0.02, 0.0)).metrics;
        assert!(flat.is_flat);
        assert!(!flat.has_high_bridge);
    }

    #[test]
    fn test_prominence_boosts_wide_confidence() {
        let prominent = classify(FaceBuilder::new().nose_ratio(0.40));
        let flat = classify(FaceBuilder::new().nose_ratio(0.40).nose_depth(0.0, 0.0));
        assert_eq!(prominent.category, flat.category);
        assert!((prominent.confidence - flat.confidence * 1.10).abs() < 1e-4);
    }

    #[test]
    fn test_confidence_grows_away_from_boundary() {
        let near = classify(FaceBuilder::new().nose_ratio(0.37).nose_depth(0.0, 0.0));
        let far = classify(FaceBuilder::new().nose_ratio(0.48).nose_depth(0.0, 0.0));
        assert_eq!(near.category, NoseWidth::Wide);
        assert!(far.confidence > near.confidence);
    }

    #[test]
    fn test_degenerate_face_width_falls_back_to_medium() {
        let flat = LandmarkSet::new(vec![Landmark::new(0.5, 0.5, 0.0); LANDMARK_COUNT]).unwrap();
        let result = NoseWidthClassifier::default().classify(&flat);
        assert_eq!(result.category, NoseWidth::Medium);
        assert!((result.metrics.nose_to_face_ratio - 0.30).abs() < 1e-6);
        assert_eq!(result.metrics.nostril_flare, 0.0);
    }

    proptest! {
        #[test]
        fn prop_confidence_in_unit_interval(ratio in 0.01f32..0.9, tip_z in -0.2f32..0.2) {
            let result = classify(FaceBuilder::new().nose_ratio(ratio).nose_depth(tip_z, tip_z / 2.0));
            prop_assert!((0.0..=1.0).contains(&result.confidence));
        }
    }
}

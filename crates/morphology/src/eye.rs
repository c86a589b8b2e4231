//! Eye shape classification
//!
//! Each eye is measured independently:
//! - width: inner to outer corner distance
//! - height: median of seven vertically aligned lid pairs, band-filtered
//! - eyelid coverage: how far the outer lid arc sits below the top of the eye,
//!   relative to the eye opening (low coverage means little visible crease)
//! - corner tilt: direction of the inner-to-outer corner line relative to
//!   the line joining both outer corners
//! - lid depth: upper lid depth relative to the lower lid and the iris
//!
//! The two sides are averaged and a base shape plus an optional corner
//! direction is decided from the averaged metrics.

use std::collections::BTreeMap;

use face_mesh::{
    clamp_unit, distance_2d, mean, mean_of, safe_ratio, EyeSide, Landmark, LandmarkSet, MIN_EXTENT,
};
use feature_stats::{RobustEstimate, SanityBand};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::{ClassificationResult, EyeShape, EyeThresholds};

pub type EyeClassification = ClassificationResult<EyeShape, EyeMetrics>;

/// Measurements for one eye
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct EyeSideMetrics {
    pub width: f32,
    pub height: f32,
    /// Height over width, in [0, 1]
    pub aspect_ratio: f32,
    /// In [0, 1]; 0.5 when the eye opening is degenerate
    pub eyelid_coverage: f32,
    /// Roughly degrees for small tilts, positive when the outer corner is higher
    pub corner_tilt: f32,
    /// Mean upper lid depth minus mean lower lid depth
    pub eyelid_depth_diff: f32,
    /// Mean upper lid depth minus iris center depth
    pub lid_to_iris_depth: f32,
    pub is_deep_set: bool,
    pub is_prominent: bool,
    /// Lid pairs that passed the sanity band
    pub height_samples: usize,
    pub measurement_stability: f32,
}

/// Both eyes plus their averaged metrics
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct EyeMetrics {
    pub right: EyeSideMetrics,
    pub left: EyeSideMetrics,
    pub aspect_ratio: f32,
    pub eyelid_coverage: f32,
    pub corner_tilt: f32,
    pub eyelid_depth_diff: f32,
    pub lid_to_iris_depth: f32,
    pub is_deep_set: bool,
    pub is_prominent: bool,
    /// Mean of both sides' measurement stability
    pub measurement_quality: f32,
}

impl EyeMetrics {
    pub fn from_sides(right: EyeSideMetrics, left: EyeSideMetrics) -> Self {
        let avg = |f: fn(&EyeSideMetrics) -> f32| (f(&right) + f(&left)) / 2.0;
        Self {
            aspect_ratio: avg(|m| m.aspect_ratio),
            eyelid_coverage: avg(|m| m.eyelid_coverage),
            corner_tilt: avg(|m| m.corner_tilt),
            eyelid_depth_diff: avg(|m| m.eyelid_depth_diff),
            lid_to_iris_depth: avg(|m| m.lid_to_iris_depth),
            is_deep_set: right.is_deep_set || left.is_deep_set,
            is_prominent: right.is_prominent || left.is_prominent,
            measurement_quality: avg(|m| m.measurement_stability),
            right,
            left,
        }
    }
}

/// Signed tilt of `inner -> outer` against `axis`, as `(180 / pi) * sin(theta)`.
///
/// Image y grows downward, so a raised outer corner has a negative cross product.
fn corner_tilt(axis: (f32, f32), inner: Landmark, outer: Landmark) -> f32 {
    let (ax, ay) = axis;
    let (vx, vy) = (outer.x - inner.x, outer.y - inner.y);
    let axis_len = ax.hypot(ay);
    let vector_len = vx.hypot(vy);
    if axis_len < MIN_EXTENT || vector_len < MIN_EXTENT {
        return 0.0;
    }
    let cross = ax * vy - ay * vx;
    -cross / (axis_len * vector_len) * std::f32::consts::FRAC_1_PI * 180.0
}

/// Eye shape classifier
#[derive(Debug, Clone, Default)]
pub struct EyeShapeClassifier {
    thresholds: EyeThresholds,
}

impl EyeShapeClassifier {
    pub fn new(thresholds: EyeThresholds) -> Self {
        Self { thresholds }
    }

    /// Measure both eyes and decide the shape
    pub fn classify(&self, landmarks: &LandmarkSet) -> EyeClassification {
        let metrics = self.measure(landmarks);
        debug!(
            aspect_ratio = metrics.aspect_ratio,
            eyelid_coverage = metrics.eyelid_coverage,
            corner_tilt = metrics.corner_tilt,
            eyelid_depth_diff = metrics.eyelid_depth_diff,
            quality = metrics.measurement_quality,
            "Eye metrics"
        );
        self.decide(metrics)
    }

    pub fn measure(&self, landmarks: &LandmarkSet) -> EyeMetrics {
        let right_outer = landmarks[EyeSide::Right.outer_corner()];
        let left_outer = landmarks[EyeSide::Left.outer_corner()];
        let axis = (left_outer.x - right_outer.x, left_outer.y - right_outer.y);

        EyeMetrics::from_sides(
            self.measure_side(landmarks, EyeSide::Right, axis),
            self.measure_side(landmarks, EyeSide::Left, axis),
        )
    }

    fn measure_side(&self, landmarks: &LandmarkSet, side: EyeSide, axis: (f32, f32)) -> EyeSideMetrics {
        let t = &self.thresholds;
        let inner = landmarks[side.inner_corner()];
        let outer = landmarks[side.outer_corner()];
        let top = landmarks[side.top()];
        let bottom = landmarks[side.bottom()];

        let width = distance_2d(inner, outer).max(MIN_EXTENT);

        let samples: Vec<f32> = side
            .lid_pairs()
            .iter()
            .map(|&(upper, lower)| (landmarks[upper].y - landmarks[lower].y).abs())
            .collect();
        let band = SanityBand::new(t.height_band_min, t.height_band_max);
        let height = RobustEstimate::from_samples(&samples, band, (top.y - bottom.y).abs());
        if height.used_fallback {
            warn!(?side, "No plausible lid pair, using center height");
        }

        let arc_y = mean_of(landmarks.points(side.coverage_arc()), |p| p.y);
        let eyelid_coverage = clamp_unit(safe_ratio((arc_y - top.y).abs(), (bottom.y - top.y).abs(), 0.5));

        let upper_z: Vec<f32> = side.upper_lid().map(|id| landmarks[id].z).collect();
        let lower_z: Vec<f32> = side.lower_lid().map(|id| landmarks[id].z).collect();
        let eyelid_depth_diff = mean(&upper_z) - mean(&lower_z);
        let lid_to_iris_depth = mean(&upper_z) - landmarks[side.iris_center()].z;

        EyeSideMetrics {
            width,
            height: height.value,
            aspect_ratio: clamp_unit(height.value / width),
            eyelid_coverage,
            corner_tilt: corner_tilt(axis, inner, outer),
            eyelid_depth_diff,
            lid_to_iris_depth,
            is_deep_set: eyelid_depth_diff < -t.deep_set_depth,
            is_prominent: eyelid_depth_diff > t.prominent_depth,
            height_samples: height.accepted,
            measurement_stability: height.stability(t.stability_gain),
        }
    }

    /// Decide the primary shape and secondary tags from averaged metrics
    pub fn decide(&self, metrics: EyeMetrics) -> EyeClassification {
        let t = &self.thresholds;
        let quality = clamp_unit(metrics.measurement_quality);
        let tilt = metrics.corner_tilt;
        let mut confidence_map = BTreeMap::new();

        let angle = if tilt > t.tilt_min {
            Some(EyeShape::Upturned)
        } else if tilt < -t.tilt_min {
            Some(EyeShape::Downturned)
        } else {
            None
        };
        let angle_confidence = angle.map(|shape| {
            let strength = (tilt.abs() / t.tilt_full_scale).min(1.0);
            let confidence = clamp_unit((0.6 + 0.35 * strength) * quality);
            confidence_map.insert(shape, confidence);
            confidence
        });

        let (base, base_confidence) = self.base_shape(&metrics);
        let base_confidence = clamp_unit(base_confidence * quality);
        confidence_map.insert(base, base_confidence);

        let mut secondary_tags = Vec::new();
        let (category, confidence) = match (angle, angle_confidence) {
            (Some(shape), Some(conf)) if conf > t.angle_primary_confidence && tilt.abs() > t.primary_tilt_min => {
                if base != EyeShape::Almond && base_confidence > t.base_secondary_confidence {
                    secondary_tags.push(base);
                }
                (shape, conf)
            }
            _ => {
                if let (Some(shape), Some(conf)) = (angle, angle_confidence) {
                    if conf > t.angle_secondary_confidence {
                        secondary_tags.push(shape);
                    }
                }
                (base, base_confidence)
            }
        };

        ClassificationResult {
            category,
            confidence,
            secondary_tags,
            confidence_map,
            metrics,
        }
    }

    /// First matching base shape and its confidence before quality scaling
    fn base_shape(&self, metrics: &EyeMetrics) -> (EyeShape, f32) {
        let t = &self.thresholds;
        let coverage = metrics.eyelid_coverage;
        let aspect = metrics.aspect_ratio;
        let depth = metrics.eyelid_depth_diff;

        if coverage < t.monolid_max {
            (EyeShape::Monolid, (0.75 + 2.0 * (t.monolid_max - coverage)).min(0.95))
        } else if coverage < t.hooded_max || metrics.is_deep_set {
            let confidence = if metrics.is_deep_set && depth < t.strong_deep_set_depth {
                (0.85 + 5.0 * depth.abs()).min(0.95)
            } else {
                (0.7 + 1.5 * (t.hooded_max - coverage)).min(0.9)
            };
            (EyeShape::Hooded, confidence)
        } else if aspect > t.round_min {
            (EyeShape::Round, (0.7 + 2.0 * (aspect - t.round_min)).min(0.95))
        } else {
            let off_center = (aspect - t.almond_midpoint()).abs();
            (EyeShape::Almond, (0.9 - 2.0 * off_center).max(0.65))
        }
    }
}

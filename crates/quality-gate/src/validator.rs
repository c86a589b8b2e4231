//! Pose, expression and confidence checks

use face_mesh::{clamp_unit, mean, safe_ratio, LandmarkId, LandmarkSet, LANDMARK_COUNT};
use tracing::{debug, warn};

use crate::report::{ExpressionReport, ExpressionType, LandmarkConfidenceReport, PoseReport, QualityReport};
use crate::{QualityConfig, QualityError, MAX_ACCEPTABLE_WARNINGS, MIN_ACCEPTABLE_SCORE};

/// Validates face pose, expression and detection quality
#[derive(Debug, Clone, Default)]
pub struct QualityValidator {
    config: QualityConfig,
}

impl QualityValidator {
    /// Create a validator with checked configuration
    pub fn new(config: QualityConfig) -> Result<Self, QualityError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Run every check and assemble the report.
    ///
    /// `confidences`, when present, must hold one score per landmark.
    pub fn validate(
        &self,
        landmarks: &LandmarkSet,
        confidences: Option<&[f32]>,
    ) -> Result<QualityReport, QualityError> {
        let pose = self.check_head_pose(landmarks);
        let expression = self.check_expression(landmarks);
        let landmark_confidence = confidences
            .map(|scores| self.check_landmark_confidence(scores))
            .transpose()?;

        let mut warnings = Vec::new();
        if !pose.is_frontal {
            let warning = if pose.rotation_degrees >= self.config.max_rotation_degrees {
                format!("Head is rotated {:.1}° from frontal view", pose.rotation_degrees)
            } else {
                // Roll within limits: nose offset or cheek depth failed
                "Head is turned away from the camera".to_string()
            };
            warnings.push(warning);
        }
        if !expression.is_neutral {
            warnings.push(format!(
                "Non-neutral facial expression detected: {}",
                expression.expression_type
            ));
        }
        if let Some(report) = &landmark_confidence {
            if report.low_confidence_count > 0 {
                warnings.push(format!(
                    "{} landmarks have low confidence",
                    report.low_confidence_count
                ));
            }
        }

        let mut scores = vec![pose.pose_quality, expression.expression_confidence];
        if let Some(report) = &landmark_confidence {
            scores.push(report.confidence_quality);
        }
        let overall_score = clamp_unit(mean(&scores));
        let is_acceptable = overall_score >= MIN_ACCEPTABLE_SCORE && warnings.len() <= MAX_ACCEPTABLE_WARNINGS;

        if is_acceptable {
            debug!(overall_score, warnings = warnings.len(), "Face passed quality gate");
        } else {
            warn!(overall_score, warnings = ?warnings, "Face failed quality gate");
        }

        let recommendations = self.recommendations(&pose, &expression, landmark_confidence.as_ref());

        Ok(QualityReport {
            pose,
            expression,
            landmark_confidence,
            overall_score,
            is_acceptable,
            warnings,
            recommendations,
        })
    }

    /// Estimate head pose from the forehead-to-nose line and cheek geometry
    pub fn check_head_pose(&self, landmarks: &LandmarkSet) -> PoseReport {
        let c = &self.config;
        let nose = landmarks[LandmarkId::NOSE_TIP];
        let forehead = landmarks[LandmarkId::FOREHEAD_CENTER];
        let right_cheek = landmarks[LandmarkId::RIGHT_CHEEK];
        let left_cheek = landmarks[LandmarkId::LEFT_CHEEK];

        let rotation_degrees = (nose.x - forehead.x).atan2(nose.y - forehead.y).to_degrees().abs();

        let cheek_center_x = (right_cheek.x + left_cheek.x) / 2.0;
        let span = (left_cheek.x - right_cheek.x).abs();
        let asymmetry_ratio = safe_ratio((nose.x - cheek_center_x).abs(), span, 0.0);
        let depth_asymmetry = (left_cheek.z - right_cheek.z).abs();

        PoseReport {
            is_frontal: rotation_degrees < c.max_rotation_degrees
                && asymmetry_ratio < c.max_asymmetry_ratio
                && depth_asymmetry < c.max_depth_asymmetry,
            rotation_degrees,
            asymmetry_ratio,
            depth_asymmetry,
            pose_quality: clamp_unit(1.0 - rotation_degrees / 90.0),
        }
    }

    /// Detect open mouth, smile and raised eyebrows, in that priority
    pub fn check_expression(&self, landmarks: &LandmarkSet) -> ExpressionReport {
        let c = &self.config;
        let upper = landmarks[LandmarkId::UPPER_LIP_BOTTOM];
        let lower = landmarks[LandmarkId::LOWER_LIP_TOP];
        let right_corner = landmarks[LandmarkId::MOUTH_RIGHT_CORNER];
        let left_corner = landmarks[LandmarkId::MOUTH_LEFT_CORNER];

        let mouth_aspect_ratio = safe_ratio(
            (upper.y - lower.y).abs(),
            (right_corner.x - left_corner.x).abs(),
            0.0,
        );

        let lip_line_y = (upper.y + lower.y) / 2.0;
        let is_smiling = right_corner.y < lip_line_y && left_corner.y < lip_line_y;

        let brow_gap = |brow: LandmarkId, eye_top: LandmarkId| (landmarks[brow].y - landmarks[eye_top].y).abs();
        let eyebrow_distance = (brow_gap(LandmarkId::RIGHT_BROW_CENTER, LandmarkId::RIGHT_EYE_TOP)
            + brow_gap(LandmarkId::LEFT_BROW_CENTER, LandmarkId::LEFT_EYE_TOP))
            / 2.0;

        let expression_type = if mouth_aspect_ratio > c.mouth_open_ratio {
            ExpressionType::MouthOpen
        } else if is_smiling {
            ExpressionType::Smiling
        } else if eyebrow_distance > c.eyebrow_raise_distance {
            ExpressionType::EyebrowsRaised
        } else {
            ExpressionType::Neutral
        };
        let is_neutral = expression_type == ExpressionType::Neutral;

        ExpressionReport {
            expression_type,
            is_neutral,
            mouth_aspect_ratio,
            is_smiling,
            eyebrow_distance,
            expression_confidence: if is_neutral { 1.0 } else { 0.5 },
        }
    }

    /// Summarize per-landmark detection confidences
    pub fn check_landmark_confidence(
        &self,
        confidences: &[f32],
    ) -> Result<LandmarkConfidenceReport, QualityError> {
        if confidences.len() != LANDMARK_COUNT {
            return Err(QualityError::ConfidenceCount {
                expected: LANDMARK_COUNT,
                actual: confidences.len(),
            });
        }
        if let Some(index) = confidences.iter().position(|c| !c.is_finite()) {
            return Err(QualityError::NonFiniteConfidence { index });
        }

        let low_confidence_count = confidences
            .iter()
            .filter(|&&c| c < self.config.min_landmark_confidence)
            .count();

        Ok(LandmarkConfidenceReport {
            average: mean(confidences),
            min: confidences.iter().copied().fold(f32::MAX, f32::min),
            low_confidence_count,
            confidence_quality: 1.0 - low_confidence_count as f32 / confidences.len() as f32,
        })
    }

    fn recommendations(
        &self,
        pose: &PoseReport,
        expression: &ExpressionReport,
        confidence: Option<&LandmarkConfidenceReport>,
    ) -> Vec<String> {
        let mut recommendations = Vec::new();

        if !pose.is_frontal {
            recommendations.push("Please face the camera directly with your head centered");
        }
        match expression.expression_type {
            ExpressionType::Smiling => {
                recommendations.push("Please maintain a neutral expression without smiling")
            }
            ExpressionType::MouthOpen => recommendations.push("Please close your mouth for the photo"),
            ExpressionType::EyebrowsRaised => {
                recommendations.push("Please relax your eyebrows to a natural position")
            }
            ExpressionType::Neutral => {}
        }
        if confidence.is_some_and(|c| c.low_confidence_count > self.config.poor_image_low_count) {
            recommendations.push("Image quality may be poor - try better lighting or a clearer photo");
        }
        if recommendations.is_empty() {
            recommendations.push("Image quality is good - ready for analysis!");
        }

        recommendations.into_iter().map(String::from).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use test_support::{landmark_confidences, FaceBuilder};

    fn validate(builder: FaceBuilder, confidences: Option<&[f32]>) -> QualityReport {
        QualityValidator::default()
            .validate(&builder.build(), confidences)
            .unwrap()
    }

    #[test]
    fn test_neutral_frontal_face_passes() {
        let report = validate(FaceBuilder::new(), None);
        assert!(report.pose.is_frontal);
        assert!(report.pose.rotation_degrees < 1e-3);
        assert_eq!(report.expression.expression_type, ExpressionType::Neutral);
        assert!(report.landmark_confidence.is_none());
        assert!((report.overall_score - 1.0).abs() < 1e-6);
        assert!(report.is_acceptable);
        assert!(report.warnings.is_empty());
        assert_eq!(report.recommendations, vec!["Image quality is good - ready for analysis!"]);
    }

    #[test]
    fn test_rolled_head_warns() {
        let report = validate(FaceBuilder::new().roll(20.0), None);
        assert!(!report.pose.is_frontal);
        assert!((report.pose.rotation_degrees - 20.0).abs() < 0.1);
        assert!((report.pose.pose_quality - (1.0 - 20.0 / 90.0)).abs() < 1e-3);
        assert_eq!(report.warnings, vec!["Head is rotated 20.0° from frontal view"]);
        assert_eq!(
            report.recommendations,
            vec!["Please face the camera directly with your head centered"]
        );
    }

    #[test]
    fn test_off_center_nose_is_not_frontal() {
        let report = validate(FaceBuilder::new().nose_offset(0.1), None);
        assert!(report.pose.asymmetry_ratio > 0.15);
        assert!(!report.pose.is_frontal);
        assert_eq!(report.warnings, vec!["Head is turned away from the camera"]);
    }

    #[test]
    fn test_uneven_cheek_depth_warns_turned() {
        let report = validate(FaceBuilder::new().turned(0.1), None);
        assert!(report.pose.rotation_degrees < 1e-3);
        assert!(!report.pose.is_frontal);
        assert_eq!(report.warnings, vec!["Head is turned away from the camera"]);
        assert!(!report.warnings[0].contains("0.0°"));
    }

    #[test]
    fn test_expression_priority() {
        let open = validate(FaceBuilder::new().mouth_open(0.03).smiling(), None);
        assert_eq!(open.expression.expression_type, ExpressionType::MouthOpen);
        assert!(open.expression.is_smiling);

        let smile = validate(FaceBuilder::new().smiling().brow_gap(0.1), None);
        assert_eq!(smile.expression.expression_type, ExpressionType::Smiling);
        assert_eq!(smile.expression.expression_confidence, 0.5);

        let brows = validate(FaceBuilder::new().brow_gap(0.1), None);
        assert_eq!(brows.expression.expression_type, ExpressionType::EyebrowsRaised);
        assert_eq!(
            brows.warnings,
            vec!["Non-neutral facial expression detected: eyebrows_raised"]
        );
    }

    #[test]
    fn test_landmark_confidence_summary() {
        let scores = landmark_confidences(60);
        let report = validate(FaceBuilder::new(), Some(scores.as_slice()));
        let confidence = report.landmark_confidence.unwrap();
        assert_eq!(confidence.low_confidence_count, 60);
        assert!((confidence.min - 0.3).abs() < 1e-6);
        assert!((confidence.confidence_quality - (1.0 - 60.0 / 478.0)).abs() < 1e-5);
        assert!(report.warnings.contains(&"60 landmarks have low confidence".to_string()));
        assert!(report
            .recommendations
            .iter()
            .any(|r| r.starts_with("Image quality may be poor")));
    }

    #[test]
    fn test_more_than_two_warnings_is_unacceptable() {
        let scores = landmark_confidences(10);
        let report = validate(FaceBuilder::new().turned(0.1).smiling(), Some(scores.as_slice()));
        assert_eq!(report.warnings.len(), 3);
        assert!(report.overall_score >= 0.6);
        assert!(!report.is_acceptable);
    }

    #[test]
    fn test_presets_keep_acceptability_limits() {
        let scores = landmark_confidences(10);
        let face = FaceBuilder::new().turned(0.2).smiling().build();
        for config in [QualityConfig::lenient(), QualityConfig::default(), QualityConfig::strict()] {
            let report = QualityValidator::new(config)
                .unwrap()
                .validate(&face, Some(scores.as_slice()))
                .unwrap();
            assert_eq!(report.warnings.len(), 3);
            assert!(report.overall_score >= MIN_ACCEPTABLE_SCORE);
            assert!(!report.is_acceptable);
        }
    }

    #[test]
    fn test_rejects_wrong_confidence_count() {
        let scores = vec![0.9; 468];
        let result = QualityValidator::default().validate(&FaceBuilder::new().build(), Some(scores.as_slice()));
        assert_eq!(
            result.unwrap_err(),
            QualityError::ConfidenceCount {
                expected: 478,
                actual: 468
            }
        );
    }

    #[test]
    fn test_rejects_invalid_config() {
        let config = QualityConfig {
            min_landmark_confidence: 1.5,
            ..Default::default()
        };
        assert!(matches!(QualityValidator::new(config), Err(QualityError::Config(_))));
    }

    #[test]
    fn test_report_serializes_expression_type() {
        let report = validate(FaceBuilder::new().smiling(), None);
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["expression"]["type"], "smiling");
        assert!(json.get("landmark_confidence").is_none());
    }

    proptest! {
        #[test]
        fn prop_scores_in_unit_interval(roll in -80.0f32..80.0, low in 0usize..478) {
            let scores = landmark_confidences(low);
            let report = validate(FaceBuilder::new().roll(roll), Some(scores.as_slice()));
            prop_assert!((0.0..=1.0).contains(&report.overall_score));
            prop_assert!((0.0..=1.0).contains(&report.pose.pose_quality));
            if report.warnings.len() > 2 {
                prop_assert!(!report.is_acceptable);
            }
        }
    }
}

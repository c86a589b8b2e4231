//! Feature analysis pipeline

use feature_boxes::{BoundingBoxCalculator, FeatureBoxes};
use feature_summary::FeatureSummaryAggregator;
use morphology::{
    EyeClassification, EyeShapeClassifier, LipClassification, LipFullnessClassifier,
    NoseClassification, NoseWidthClassifier,
};
use quality_gate::{QualityReport, QualityValidator};
use rayon::prelude::*;
use tracing::{debug, info};

use crate::{AnalysisError, AnalyzerConfig, FaceAnalysis, FaceInput};

/// Runs every analysis stage over a landmark set.
///
/// Holds only immutable configuration, so one analyzer can be shared by
/// reference across threads.
#[derive(Debug, Clone)]
pub struct FeatureAnalyzer {
    eye: EyeShapeClassifier,
    nose: NoseWidthClassifier,
    lip: LipFullnessClassifier,
    quality: QualityValidator,
    boxes: BoundingBoxCalculator,
    summary: FeatureSummaryAggregator,
}

impl FeatureAnalyzer {
    /// Create an analyzer after validating every threshold group
    pub fn new(config: AnalyzerConfig) -> Result<Self, AnalysisError> {
        config.validate()?;
        info!(
            padding = config.boxes.padding,
            max_rotation = config.quality.max_rotation_degrees,
            "Creating feature analyzer"
        );

        let AnalyzerConfig {
            morphology,
            quality,
            boxes,
        } = config;

        Ok(Self {
            eye: EyeShapeClassifier::new(morphology.eye),
            nose: NoseWidthClassifier::new(morphology.nose),
            lip: LipFullnessClassifier::new(morphology.lip),
            quality: QualityValidator::new(quality)?,
            boxes: BoundingBoxCalculator::new(boxes)?,
            summary: FeatureSummaryAggregator::new(),
        })
    }

    /// Analyze one face, running the stages one after another
    pub fn analyze(&self, input: &FaceInput) -> Result<FaceAnalysis, AnalysisError> {
        let quality = self.check_quality(input)?;
        let eyes = self.eye.classify(&input.landmarks);
        let nose = self.nose.classify(&input.landmarks);
        let lips = self.lip.classify(&input.landmarks);
        let boxes = self.boxes.calculate_all(&input.landmarks);

        Ok(self.assemble(input, quality, eyes, nose, lips, boxes))
    }

    /// Analyze one face with the independent stages running concurrently.
    ///
    /// Produces the same result as [`FeatureAnalyzer::analyze`].
    pub fn analyze_parallel(&self, input: &FaceInput) -> Result<FaceAnalysis, AnalysisError> {
        let landmarks = &input.landmarks;
        let (quality, (eyes, (nose, (lips, boxes)))) = rayon::join(
            || self.check_quality(input),
            || {
                rayon::join(
                    || self.eye.classify(landmarks),
                    || {
                        rayon::join(
                            || self.nose.classify(landmarks),
                            || {
                                rayon::join(
                                    || self.lip.classify(landmarks),
                                    || self.boxes.calculate_all(landmarks),
                                )
                            },
                        )
                    },
                )
            },
        );

        Ok(self.assemble(input, quality?, eyes, nose, lips, boxes))
    }

    /// Analyze many faces in parallel.
    ///
    /// Results keep the input order; one failing face does not affect the others.
    pub fn analyze_batch(&self, inputs: &[FaceInput]) -> Vec<Result<FaceAnalysis, AnalysisError>> {
        info!(faces = inputs.len(), "Analyzing batch");
        inputs.par_iter().map(|input| self.analyze(input)).collect()
    }

    fn check_quality(&self, input: &FaceInput) -> Result<QualityReport, AnalysisError> {
        Ok(self
            .quality
            .validate(&input.landmarks, input.confidences.as_deref())?)
    }

    fn assemble(
        &self,
        input: &FaceInput,
        quality: QualityReport,
        eyes: EyeClassification,
        nose: NoseClassification,
        lips: LipClassification,
        bounding_boxes: FeatureBoxes,
    ) -> FaceAnalysis {
        let summary = self.summary.summarize(&eyes, &nose, &lips);
        debug!(
            eye = %eyes.category,
            nose = %nose.category,
            lips = %lips.category,
            acceptable = quality.is_acceptable,
            "Face analyzed"
        );

        FaceAnalysis {
            pixel_boxes: input.image.map(|dims| bounding_boxes.to_pixels(dims)),
            quality,
            eyes,
            nose,
            lips,
            bounding_boxes,
            summary,
        }
    }
}

impl Default for FeatureAnalyzer {
    fn default() -> Self {
        Self {
            eye: EyeShapeClassifier::default(),
            nose: NoseWidthClassifier::default(),
            lip: LipFullnessClassifier::default(),
            quality: QualityValidator::default(),
            boxes: BoundingBoxCalculator::default(),
            summary: FeatureSummaryAggregator::new(),
        }
    }
}

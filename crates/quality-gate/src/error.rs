//! Quality Gate Error Types

use face_mesh::ConfigError;
use thiserror::Error;

/// Errors raised by the quality gate
#[derive(Debug, Clone, PartialEq, Error)]
pub enum QualityError {
    /// Confidence list does not match the landmark count
    #[error("Expected {expected} landmark confidences, got {actual}")]
    ConfidenceCount { expected: usize, actual: usize },

    /// Confidence value is NaN or infinite
    #[error("Landmark confidence {index} is not finite")]
    NonFiniteConfidence { index: usize },

    /// Invalid gate thresholds
    #[error("Invalid quality configuration: {0}")]
    Config(#[from] ConfigError),
}

//! Analyzer Error Types

use face_mesh::MeshError;
use quality_gate::QualityError;
use thiserror::Error;

/// Errors raised by the analysis pipeline
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// Landmark input violates the mesh contract
    #[error("Invalid landmark input: {0}")]
    InputShape(#[from] MeshError),

    /// Threshold configuration failed validation
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Quality gate rejected its input
    #[error("Quality check failed: {0}")]
    Quality(#[from] QualityError),

    /// Configuration sources could not be read or merged
    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),
}

impl From<face_mesh::ConfigError> for AnalysisError {
    fn from(err: face_mesh::ConfigError) -> Self {
        AnalysisError::Configuration(err.to_string())
    }
}

//! Face Quality Gate
//!
//! Decides whether a landmark set is suitable for feature analysis:
//! - Head pose (in-plane rotation, nose centering, cheek depth asymmetry)
//! - Facial expression (open mouth, smile, raised eyebrows)
//! - Optional per-landmark detection confidence
//!
//! The gate is advisory: it produces warnings and recommendations but never
//! blocks the classifiers.

mod config;
mod error;
mod report;
mod validator;

pub use config::{QualityConfig, MAX_ACCEPTABLE_WARNINGS, MIN_ACCEPTABLE_SCORE};
pub use error::QualityError;
pub use report::{ExpressionReport, ExpressionType, LandmarkConfidenceReport, PoseReport, QualityReport};
pub use validator::QualityValidator;

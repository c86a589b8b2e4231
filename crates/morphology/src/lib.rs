//! Facial Feature Morphology
//!
//! Geometric classification of facial features from a validated landmark set:
//! - Eye shape (almond, round, monolid, hooded) and corner direction
//! - Nose width relative to face width, with 3D projection cues
//! - Lip fullness relative to mouth width, with upper/lower balance
//!
//! Classifiers hold only immutable thresholds and are safe to share across
//! threads. Over a valid [`face_mesh::LandmarkSet`] they cannot fail.

pub mod category;
pub mod config;
mod confidence;
pub mod eye;
pub mod lip;
pub mod nose;
pub mod result;

pub use category::{EyeShape, LipBalance, LipFullness, NoseWidth};
pub use config::{EyeThresholds, LipThresholds, MorphologyConfig, NoseThresholds};
pub use eye::{EyeClassification, EyeMetrics, EyeShapeClassifier, EyeSideMetrics};
pub use lip::{LipClassification, LipFullnessClassifier, LipMetrics};
pub use nose::{NoseClassification, NoseMetrics, NoseWidthClassifier};
pub use result::ClassificationResult;

//! Face Feature Analyzer
//!
//! Pipeline facade over the feature analysis crates. One landmark set goes
//! through the quality gate, the eye, nose and lip classifiers and the
//! bounding box calculator; the summary aggregator joins their results.
//!
//! The five stages are independent and may run concurrently
//! ([`FeatureAnalyzer::analyze_parallel`]); batches of faces are analyzed
//! with a parallel iterator ([`FeatureAnalyzer::analyze_batch`]).

mod analyzer;
mod error;
mod input;
mod settings;

pub use analyzer::FeatureAnalyzer;
pub use error::AnalysisError;
pub use input::{FaceAnalysis, FaceInput};
pub use settings::{AnalyzerConfig, ENV_PREFIX};

//! Feature Summary
//!
//! Joins the eye, nose and lip classifications into one summary for
//! downstream search and personalization: a readable description, ordered
//! search tags, makeup keywords per feature and a structured breakdown.
//! Output is a pure function of the classifications.

mod aggregator;
mod keywords;
mod summary;

pub use aggregator::FeatureSummaryAggregator;
pub use summary::{
    AnalysisSummary, EyeBreakdown, FeatureBreakdown, FeatureSet, LipBreakdown, MakeupKeywords,
    NoseBreakdown,
};

//! Robust Measurement Statistics
//!
//! Aggregates repeated samples of one geometric measurement into a single
//! value with a stability score. Used by every feature classifier.

mod robust;
mod sample;

pub use robust::{median, stability, RobustEstimate, SanityBand};
pub use sample::SampleStats;

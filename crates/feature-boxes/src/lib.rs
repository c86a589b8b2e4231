//! Feature Bounding Boxes
//!
//! Axis-aligned boxes around each facial region:
//! - Face contour, both eyes, nose and lips
//! - Symmetric padding relative to the region extent
//! - Normalized and pixel coordinate conversion

mod bbox;
mod calculator;
mod config;

pub use bbox::{BoundingBox, FeatureBoxes};
pub use calculator::BoundingBoxCalculator;
pub use config::BoxConfig;

//! Face Mesh Landmarks
//!
//! Input contract for the feature analysis pipeline:
//! - Exactly 478 normalized 3D landmarks per face
//! - Named anatomical identifiers instead of raw indices
//! - Fixed landmark groups per facial region
//! - Shared geometry helpers with degenerate-denominator guards

mod error;
mod geometry;
mod ids;
mod image;
mod landmark;
mod regions;
mod set;

pub use error::{ConfigError, MeshError};
pub use geometry::{clamp_unit, distance_2d, mean, mean_of, safe_ratio, MIN_EXTENT};
pub use ids::LandmarkId;
pub use image::ImageDimensions;
pub use landmark::Landmark;
pub use regions::{EyeSide, Region};
pub use set::{LandmarkSet, LANDMARK_COUNT};

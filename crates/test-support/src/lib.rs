//! Test support utilities for the feature analysis pipeline.
//!
//! Provides a parametric synthetic face whose geometry is known in closed
//! form, so classifier tests can target exact measurement values.
//!
//! # Example
//!
//! ```
//! use test_support::FaceBuilder;
//!
//! let neutral = FaceBuilder::new().build();
//! let upturned = FaceBuilder::new().eye_tilt(10.0).build();
//! assert_eq!(neutral.as_slice().len(), upturned.as_slice().len());
//! ```

mod builders;

pub use builders::{landmark_confidences, FaceBuilder};

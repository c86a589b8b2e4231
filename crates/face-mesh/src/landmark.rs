//! Single landmark point

use serde::{Deserialize, Serialize};

/// One named anatomical point on a detected face.
///
/// `x` and `y` are normalized to image width and height (roughly `[0, 1]`).
/// `z` shares the scale of `x`; smaller values are closer to the camera.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Landmark {
    pub x: f32,
    pub y: f32,
    #[serde(default)]
    pub z: f32,
}

impl Landmark {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// True when all three coordinates are finite
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    /// Mirror horizontally in normalized space
    pub fn mirrored(&self) -> Self {
        Self::new(1.0 - self.x, self.y, self.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_z_defaults_to_zero() {
        let lm: Landmark = serde_json::from_str(r#"{"x": 0.25, "y": 0.5}"#).unwrap();
        assert_eq!(lm, Landmark::new(0.25, 0.5, 0.0));
    }

    #[test]
    fn test_non_finite() {
        assert!(Landmark::new(0.1, 0.2, 0.3).is_finite());
        assert!(!Landmark::new(f32::NAN, 0.2, 0.3).is_finite());
        assert!(!Landmark::new(0.1, 0.2, f32::INFINITY).is_finite());
    }
}

//! Source image dimensions

use serde::{Deserialize, Serialize};

use crate::MeshError;

/// Pixel dimensions of the image the landmarks were detected on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawDimensions")]
pub struct ImageDimensions {
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
}

#[derive(Deserialize)]
struct RawDimensions {
    width: u32,
    height: u32,
}

impl ImageDimensions {
    /// Both dimensions must be non-zero
    pub fn new(width: u32, height: u32) -> Result<Self, MeshError> {
        if width == 0 || height == 0 {
            return Err(MeshError::InvalidDimensions { width, height });
        }
        Ok(Self { width, height })
    }

    pub fn width_f32(&self) -> f32 {
        self.width as f32
    }

    pub fn height_f32(&self) -> f32 {
        self.height as f32
    }
}

impl TryFrom<RawDimensions> for ImageDimensions {
    type Error = MeshError;

    fn try_from(raw: RawDimensions) -> Result<Self, Self::Error> {
        Self::new(raw.width, raw.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_zero_dimension() {
        assert!(ImageDimensions::new(640, 480).is_ok());
        assert_eq!(
            ImageDimensions::new(0, 480),
            Err(MeshError::InvalidDimensions { width: 0, height: 480 })
        );
        assert!(ImageDimensions::new(640, 0).is_err());
    }

    #[test]
    fn test_deserialize_validates() {
        let dims: ImageDimensions = serde_json::from_str(r#"{"width": 1280, "height": 720}"#).unwrap();
        assert_eq!(dims, ImageDimensions::new(1280, 720).unwrap());
        assert!(serde_json::from_str::<ImageDimensions>(r#"{"width": 0, "height": 720}"#).is_err());
    }
}

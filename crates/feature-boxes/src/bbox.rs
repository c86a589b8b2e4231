//! Bounding box types

use face_mesh::{ImageDimensions, Region};
use serde::{Deserialize, Serialize};

const EDGE_TOLERANCE: f32 = 1e-6;

/// Axis-aligned box, in normalized or pixel coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    /// Left edge
    pub x: f32,
    /// Top edge
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// True when coordinates are fractions of the image size
    pub normalized: bool,
}

impl BoundingBox {
    /// Normalized box from its edges
    pub fn from_edges(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            x: left,
            y: top,
            width: right - left,
            height: bottom - top,
            normalized: true,
        }
    }

    pub fn center(&self) -> (f32, f32) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Corners as top-left, top-right, bottom-right, bottom-left
    pub fn corners(&self) -> [(f32, f32); 4] {
        let right = self.x + self.width;
        let bottom = self.y + self.height;
        [(self.x, self.y), (right, self.y), (right, bottom), (self.x, bottom)]
    }

    /// Point inside or on the border, in the box's own coordinate space
    pub fn contains(&self, x: f32, y: f32) -> bool {
        // Far edges are rebuilt as origin + size, which can round by an ulp
        let tol_x = EDGE_TOLERANCE * (self.x.abs() + self.width.abs()).max(1.0);
        let tol_y = EDGE_TOLERANCE * (self.y.abs() + self.height.abs()).max(1.0);
        x >= self.x - tol_x
            && x <= self.x + self.width + tol_x
            && y >= self.y - tol_y
            && y <= self.y + self.height + tol_y
    }

    pub fn area(&self) -> f32 {
        self.width * self.height
    }

    /// Scale to pixel coordinates. A box already in pixels is returned as is.
    pub fn to_pixels(&self, dims: ImageDimensions) -> Self {
        if !self.normalized {
            return *self;
        }
        let (w, h) = (dims.width_f32(), dims.height_f32());
        Self {
            x: self.x * w,
            y: self.y * h,
            width: self.width * w,
            height: self.height * h,
            normalized: false,
        }
    }

    /// Scale to normalized coordinates. A normalized box is returned as is.
    pub fn to_normalized(&self, dims: ImageDimensions) -> Self {
        if self.normalized {
            return *self;
        }
        let (w, h) = (dims.width_f32(), dims.height_f32());
        Self {
            x: self.x / w,
            y: self.y / h,
            width: self.width / w,
            height: self.height / h,
            normalized: true,
        }
    }
}

/// One box per facial region
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureBoxes {
    pub face: BoundingBox,
    pub right_eye: BoundingBox,
    pub left_eye: BoundingBox,
    pub nose: BoundingBox,
    pub lips: BoundingBox,
}

impl FeatureBoxes {
    pub fn get(&self, region: Region) -> &BoundingBox {
        match region {
            Region::Face => &self.face,
            Region::RightEye => &self.right_eye,
            Region::LeftEye => &self.left_eye,
            Region::Nose => &self.nose,
            Region::Lips => &self.lips,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Region, &BoundingBox)> + '_ {
        Region::ALL.into_iter().map(move |region| (region, self.get(region)))
    }

    pub fn to_pixels(&self, dims: ImageDimensions) -> Self {
        self.map(|b| b.to_pixels(dims))
    }

    pub fn to_normalized(&self, dims: ImageDimensions) -> Self {
        self.map(|b| b.to_normalized(dims))
    }

    fn map(&self, f: impl Fn(&BoundingBox) -> BoundingBox) -> Self {
        Self {
            face: f(&self.face),
            right_eye: f(&self.right_eye),
            left_eye: f(&self.left_eye),
            nose: f(&self.nose),
            lips: f(&self.lips),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> BoundingBox {
        BoundingBox::from_edges(0.2, 0.3, 0.6, 0.5)
    }

    #[test]
    fn test_center_and_corners() {
        let b = sample();
        let (cx, cy) = b.center();
        assert!((cx - 0.4).abs() < 1e-6);
        assert!((cy - 0.4).abs() < 1e-6);

        let [tl, tr, br, bl] = b.corners();
        assert_eq!(tl, (0.2, 0.3));
        assert!((tr.0 - 0.6).abs() < 1e-6 && (tr.1 - 0.3).abs() < 1e-6);
        assert!((br.0 - 0.6).abs() < 1e-6 && (br.1 - 0.5).abs() < 1e-6);
        assert!((bl.0 - 0.2).abs() < 1e-6 && (bl.1 - 0.5).abs() < 1e-6);
        assert!((b.area() - 0.08).abs() < 1e-6);
    }

    #[test]
    fn test_contains_border() {
        let b = sample();
        assert!(b.contains(0.2, 0.3));
        assert!(b.contains(0.4, 0.4));
        assert!(b.contains(0.6, 0.5));
        assert!(!b.contains(0.19, 0.4));
        assert!(!b.contains(0.4, 0.51));
    }

    #[test]
    fn test_pixel_round_trip() {
        let dims = ImageDimensions::new(640, 480).unwrap();
        let pixels = sample().to_pixels(dims);
        assert!(!pixels.normalized);
        assert!((pixels.x - 128.0).abs() < 1e-3);
        assert!((pixels.height - 96.0).abs() < 1e-3);
        assert_eq!(pixels.to_pixels(dims), pixels);
        assert!((pixels.area() - sample().area() * 640.0 * 480.0).abs() < 0.5);

        let back = pixels.to_normalized(dims);
        assert!(back.normalized);
        assert!((back.x - 0.2).abs() < 1e-5);
        assert!((back.y - 0.3).abs() < 1e-5);
        assert!((back.width - 0.4).abs() < 1e-5);
        assert!((back.height - 0.2).abs() < 1e-5);
    }

    #[test]
    fn test_serializes_flat() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["normalized"], true);
        assert!(json.get("width").is_some());
    }
}

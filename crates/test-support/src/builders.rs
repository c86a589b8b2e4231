//! Synthetic face builder.
//!
//! Layout in normalized image space (the subject's right side is on the
//! image's left):
//! - cheeks at (0.25, 0.5) and (0.75, 0.5), forehead (0.5, 0.2), chin (0.5, 0.85)
//! - eyes centered at (0.38, 0.42) and (0.62, 0.42), corner-to-corner width 0.1
//! - nose tip at (0.5, 0.6), mouth midline at y = 0.72 with width 0.14
//!
//! Landmarks not used by any measurement sit at (0.5, 0.5, 0).

use face_mesh::{EyeSide, Landmark, LandmarkId, LandmarkSet, Region, LANDMARK_COUNT};

const FACE_CENTER: (f32, f32) = (0.5, 0.5);
const FACE_WIDTH: f32 = 0.5;
const EYE_Y: f32 = 0.42;
const EYE_HALF_WIDTH: f32 = 0.05;
const MOUTH_Y: f32 = 0.72;
const MOUTH_HALF_WIDTH: f32 = 0.07;

// Position of each lid pair along the eye, outer corner (-1) to inner corner (1)
const LID_PAIR_U: [f32; 7] = [-0.75, -0.5, -0.25, 0.0, 0.25, 0.5, 0.75];

/// Builder for a synthetic 478-point face with controllable morphology.
///
/// Defaults describe a frontal, neutral face with almond eyes, a medium nose
/// and medium balanced lips.
#[derive(Debug, Clone)]
pub struct FaceBuilder {
    eye_opening: f32,
    eye_tilt_degrees: f32,
    lid_coverage: f32,
    upper_lid_z: f32,
    lower_lid_z: f32,
    iris_z: f32,
    nose_ratio: f32,
    nose_tip_z: f32,
    nose_bridge_z: f32,
    nose_offset_x: f32,
    upper_lip: f32,
    lower_lip: f32,
    mouth_gap: f32,
    corner_lift: f32,
    lip_center_z: f32,
    brow_gap: f32,
    cheek_depth_offset: f32,
    roll_degrees: f32,
}

impl Default for FaceBuilder {
    fn default() -> Self {
        Self {
            eye_opening: 0.053,
            eye_tilt_degrees: 0.0,
            lid_coverage: 1.0,
            upper_lid_z: 0.0,
            lower_lid_z: 0.0,
            iris_z: 0.0,
            nose_ratio: 0.30,
            nose_tip_z: -0.06,
            nose_bridge_z: -0.03,
            nose_offset_x: 0.0,
            upper_lip: 0.011,
            lower_lip: 0.013,
            mouth_gap: 0.002,
            corner_lift: -0.003,
            lip_center_z: -0.005,
            brow_gap: 0.05,
            cheek_depth_offset: 0.0,
            roll_degrees: 0.0,
        }
    }
}

impl FaceBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Lid separation at the eye center. Height samples follow `opening * (1 - u^2)`,
    /// so their median is `0.75 * opening`.
    #[must_use]
    pub fn eye_opening(mut self, opening: f32) -> Self {
        self.eye_opening = opening;
        self
    }

    /// Corner-line angle in degrees, positive when the outer corners are higher
    #[must_use]
    pub fn eye_tilt(mut self, degrees: f32) -> Self {
        self.eye_tilt_degrees = degrees;
        self
    }

    /// Scale the coverage arc toward the top of the eye.
    ///
    /// 1.0 keeps the natural lid curve (coverage ~0.36), 0.5 gives ~0.22 and
    /// 0.0 gives ~0.07.
    #[must_use]
    pub fn lid_coverage(mut self, scale: f32) -> Self {
        self.lid_coverage = scale;
        self
    }

    /// Depth of the upper and lower lid points
    #[must_use]
    pub fn lid_depth(mut self, upper_z: f32, lower_z: f32) -> Self {
        self.upper_lid_z = upper_z;
        self.lower_lid_z = lower_z;
        self
    }

    #[must_use]
    pub fn iris_depth(mut self, z: f32) -> Self {
        self.iris_z = z;
        self
    }

    /// Average nose width as a fraction of face width
    #[must_use]
    pub fn nose_ratio(mut self, ratio: f32) -> Self {
        self.nose_ratio = ratio;
        self
    }

    /// Nose tip and bridge depth relative to the cheek plane (z = 0)
    #[must_use]
    pub fn nose_depth(mut self, tip_z: f32, bridge_z: f32) -> Self {
        self.nose_tip_z = tip_z;
        self.nose_bridge_z = bridge_z;
        self
    }

    /// Shift the nose tip horizontally away from the face center
    #[must_use]
    pub fn nose_offset(mut self, dx: f32) -> Self {
        self.nose_offset_x = dx;
        self
    }

    /// Upper and lower lip thickness
    #[must_use]
    pub fn lips(mut self, upper: f32, lower: f32) -> Self {
        self.upper_lip = upper;
        self.lower_lip = lower;
        self
    }

    /// Depth of the lip centers relative to the mouth corners (z = 0)
    #[must_use]
    pub fn lip_center_depth(mut self, z: f32) -> Self {
        self.lip_center_z = z;
        self
    }

    /// Vertical gap between the inner lip edges
    #[must_use]
    pub fn mouth_open(mut self, gap: f32) -> Self {
        self.mouth_gap = gap;
        self
    }

    /// Raise both mouth corners above the lip midline.
    ///
    /// Neutral corners sit slightly below the midline.
    #[must_use]
    pub fn smiling(mut self) -> Self {
        self.corner_lift = 0.02;
        self
    }

    /// Brow-to-eye-top distance
    #[must_use]
    pub fn brow_gap(mut self, gap: f32) -> Self {
        self.brow_gap = gap;
        self
    }

    /// Depth difference between the cheeks, as from a head turn
    #[must_use]
    pub fn turned(mut self, depth_offset: f32) -> Self {
        self.cheek_depth_offset = depth_offset;
        self
    }

    /// In-plane head roll about the face center
    #[must_use]
    pub fn roll(mut self, degrees: f32) -> Self {
        self.roll_degrees = degrees;
        self
    }

    /// Raw landmark points, before validation
    #[must_use]
    pub fn points(&self) -> Vec<Landmark> {
        let mut points = vec![Landmark::new(FACE_CENTER.0, FACE_CENTER.1, 0.0); LANDMARK_COUNT];

        self.place_contour(&mut points);
        for side in EyeSide::BOTH {
            self.place_eye(&mut points, side);
        }
        self.place_nose(&mut points);
        self.place_mouth(&mut points);

        if self.roll_degrees != 0.0 {
            let (sin, cos) = self.roll_degrees.to_radians().sin_cos();
            for p in &mut points {
                let dx = p.x - FACE_CENTER.0;
                let dy = p.y - FACE_CENTER.1;
                p.x = FACE_CENTER.0 + dx * cos - dy * sin;
                p.y = FACE_CENTER.1 + dx * sin + dy * cos;
            }
        }
        points
    }

    /// Build a validated landmark set
    ///
    /// # Panics
    ///
    /// Panics if the parameters produce non-finite coordinates.
    #[must_use]
    pub fn build(&self) -> LandmarkSet {
        LandmarkSet::new(self.points()).expect("synthetic face must be a valid landmark set")
    }

    fn place_contour(&self, points: &mut [Landmark]) {
        let contour = Region::Face.landmarks();
        let step = std::f32::consts::TAU / contour.len() as f32;
        for (i, id) in contour.iter().enumerate() {
            let angle = i as f32 * step;
            points[id.index()] = Landmark::new(0.5 + 0.25 * angle.sin(), 0.525 - 0.325 * angle.cos(), 0.0);
        }
        let half_depth = self.cheek_depth_offset / 2.0;
        set(points, LandmarkId::RIGHT_CHEEK, 0.5 - FACE_WIDTH / 2.0, 0.5, -half_depth);
        set(points, LandmarkId::LEFT_CHEEK, 0.5 + FACE_WIDTH / 2.0, 0.5, half_depth);
        set(points, LandmarkId::FOREHEAD_CENTER, 0.5, 0.2, 0.0);
        set(points, LandmarkId::CHIN, 0.5, 0.85, 0.0);
    }

    fn place_eye(&self, points: &mut [Landmark], side: EyeSide) {
        // Outer corner is away from the face midline
        let (center_x, direction) = match side {
            EyeSide::Right => (0.38, 1.0),
            EyeSide::Left => (0.62, -1.0),
        };
        let rise = 2.0 * EYE_HALF_WIDTH * self.eye_tilt_degrees.to_radians().tan();
        let half_open = self.eye_opening / 2.0;
        let x_at = |u: f32| center_x + direction * EYE_HALF_WIDTH * u;
        let line_y = |u: f32| EYE_Y + rise / 2.0 * u;

        set(points, side.outer_corner(), x_at(-1.0), line_y(-1.0), 0.0);
        set(points, side.inner_corner(), x_at(1.0), line_y(1.0), 0.0);
        for (&(upper, lower), u) in side.lid_pairs().iter().zip(LID_PAIR_U) {
            let bulge = half_open * (1.0 - u * u);
            set(points, upper, x_at(u), line_y(u) - bulge, self.upper_lid_z);
            set(points, lower, x_at(u), line_y(u) + bulge, self.lower_lid_z);
        }
        set(points, side.iris_center(), center_x, EYE_Y, self.iris_z);

        let top_y = points[side.top().index()].y;
        for &id in side.coverage_arc() {
            if id == side.top() || id == side.outer_corner() {
                continue;
            }
            let p = &mut points[id.index()];
            p.y = top_y + self.lid_coverage * (p.y - top_y);
        }

        let brow = match side {
            EyeSide::Right => LandmarkId::RIGHT_BROW_CENTER,
            EyeSide::Left => LandmarkId::LEFT_BROW_CENTER,
        };
        set(points, brow, center_x, top_y - self.brow_gap, 0.0);
    }

    fn place_nose(&self, points: &mut [Landmark]) {
        let half = self.nose_ratio * FACE_WIDTH / 2.0;
        let tip_x = 0.5 + self.nose_offset_x;

        set(points, LandmarkId::NOSE_TIP, tip_x, 0.6, self.nose_tip_z);
        set(points, LandmarkId::NOSE_BRIDGE_TOP, 0.5, 0.42, self.nose_bridge_z);
        // Ala, outer and inner nostril widths average to exactly the requested ratio
        set(points, LandmarkId::RIGHT_ALA, 0.5 - 1.1 * half, 0.6, -0.01);
        set(points, LandmarkId::LEFT_ALA, 0.5 + 1.1 * half, 0.6, -0.01);
        set(points, LandmarkId::RIGHT_NOSTRIL_OUTER, 0.5 - half, 0.62, -0.01);
        set(points, LandmarkId::LEFT_NOSTRIL_OUTER, 0.5 + half, 0.62, -0.01);
        set(points, LandmarkId::RIGHT_NOSTRIL_INNER, 0.5 - 0.9 * half, 0.615, -0.01);
        set(points, LandmarkId::LEFT_NOSTRIL_INNER, 0.5 + 0.9 * half, 0.615, -0.01);

        for (index, y) in [(2, 0.625), (94, 0.62), (19, 0.61), (4, 0.58), (5, 0.55), (195, 0.5), (197, 0.47)] {
            points[index] = Landmark::new(tip_x, y, -0.04);
        }
    }

    fn place_mouth(&self, points: &mut [Landmark]) {
        let upper_edge = MOUTH_Y - self.mouth_gap / 2.0;
        let lower_edge = MOUTH_Y + self.mouth_gap / 2.0;
        let corner_y = MOUTH_Y - self.corner_lift;

        set(points, LandmarkId::MOUTH_RIGHT_CORNER, 0.5 - MOUTH_HALF_WIDTH, corner_y, 0.0);
        set(points, LandmarkId::MOUTH_LEFT_CORNER, 0.5 + MOUTH_HALF_WIDTH, corner_y, 0.0);

        let upper = [
            (LandmarkId::UPPER_LIP_TOP_RIGHT, LandmarkId::UPPER_LIP_BOTTOM_RIGHT, 0.48),
            (LandmarkId::UPPER_LIP_TOP, LandmarkId::UPPER_LIP_BOTTOM, 0.5),
            (LandmarkId::UPPER_LIP_TOP_LEFT, LandmarkId::UPPER_LIP_BOTTOM_LEFT, 0.52),
        ];
        for (outer, inner, x) in upper {
            set(points, outer, x, upper_edge - self.upper_lip, 0.0);
            set(points, inner, x, upper_edge, 0.0);
        }
        let lower = [
            (LandmarkId::LOWER_LIP_TOP_RIGHT, LandmarkId::LOWER_LIP_BOTTOM_RIGHT, 0.48),
            (LandmarkId::LOWER_LIP_TOP, LandmarkId::LOWER_LIP_BOTTOM, 0.5),
            (LandmarkId::LOWER_LIP_TOP_LEFT, LandmarkId::LOWER_LIP_BOTTOM_LEFT, 0.52),
        ];
        for (inner, outer, x) in lower {
            set(points, inner, x, lower_edge, 0.0);
            set(points, outer, x, lower_edge + self.lower_lip, 0.0);
        }
        points[LandmarkId::UPPER_LIP_TOP.index()].z = self.lip_center_z;
        points[LandmarkId::LOWER_LIP_BOTTOM.index()].z = self.lip_center_z;

        // Remaining outer lip contour
        for (index, x) in [(185, 0.445), (40, 0.455), (39, 0.47), (269, 0.53), (270, 0.545), (409, 0.555)] {
            points[index] = Landmark::new(x, upper_edge - 0.8 * self.upper_lip, 0.0);
        }
        for (index, x) in [(146, 0.445), (91, 0.455), (181, 0.47), (405, 0.53), (321, 0.545), (375, 0.555)] {
            points[index] = Landmark::new(x, lower_edge + 0.8 * self.lower_lip, 0.0);
        }
    }
}

fn set(points: &mut [Landmark], id: LandmarkId, x: f32, y: f32, z: f32) {
    points[id.index()] = Landmark::new(x, y, z);
}

/// Per-landmark detection confidences with `low` entries below 0.5
#[must_use]
pub fn landmark_confidences(low: usize) -> Vec<f32> {
    (0..LANDMARK_COUNT)
        .map(|i| if i < low { 0.3 } else { 0.95 })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_face_is_valid() {
        let face = FaceBuilder::new().build();
        assert_eq!(face[LandmarkId::FOREHEAD_CENTER], Landmark::new(0.5, 0.2, 0.0));
        assert!(face[LandmarkId::RIGHT_EYE_OUTER_CORNER].x < face[LandmarkId::RIGHT_EYE_INNER_CORNER].x);
        assert!(face[LandmarkId::LEFT_EYE_OUTER_CORNER].x > face[LandmarkId::LEFT_EYE_INNER_CORNER].x);
    }

    #[test]
    fn test_tilt_raises_outer_corners() {
        let face = FaceBuilder::new().eye_tilt(10.0).build();
        for side in EyeSide::BOTH {
            assert!(face[side.outer_corner()].y < face[side.inner_corner()].y);
        }
    }

    #[test]
    fn test_confidences_count() {
        let scores = landmark_confidences(60);
        assert_eq!(scores.len(), LANDMARK_COUNT);
        assert_eq!(scores.iter().filter(|&&c| c < 0.5).count(), 60);
    }
}

//! Fixed landmark groups per facial region
//!
//! Changing the landmark topology is a breaking contract change: every table
//! here must be re-derived.

use serde::{Deserialize, Serialize};

use crate::LandmarkId;

macro_rules! ids {
    ($($index:expr),* $(,)?) => {
        [$(LandmarkId::from_raw($index)),*]
    };
}

const FACE_CONTOUR: [LandmarkId; 36] = ids![
    10, 338, 297, 332, 284, 251, 389, 356, 454, 323, 361, 288, 397, 365, 379, 378, 400, 377, 152,
    148, 176, 149, 150, 136, 172, 58, 132, 93, 234, 127, 162, 21, 54, 103, 67, 109,
];

const RIGHT_EYE_OUTLINE: [LandmarkId; 16] =
    ids![33, 7, 163, 144, 145, 153, 154, 155, 133, 173, 157, 158, 159, 160, 161, 246];

const LEFT_EYE_OUTLINE: [LandmarkId; 16] =
    ids![263, 249, 390, 373, 374, 380, 381, 382, 362, 398, 384, 385, 386, 387, 388, 466];

const NOSE: [LandmarkId; 15] = ids![1, 98, 327, 129, 358, 168, 219, 439, 2, 94, 19, 4, 5, 195, 197];

const LIPS: [LandmarkId; 20] = ids![
    61, 146, 91, 181, 84, 17, 314, 405, 321, 375, 291, 185, 40, 39, 37, 0, 267, 269, 270, 409,
];

// Vertically aligned (upper, lower) lid pairs, outer corner to inner corner
const RIGHT_LID_PAIRS: [(LandmarkId, LandmarkId); 7] = [
    (LandmarkId::from_raw(246), LandmarkId::from_raw(7)),
    (LandmarkId::from_raw(161), LandmarkId::from_raw(163)),
    (LandmarkId::from_raw(160), LandmarkId::from_raw(144)),
    (LandmarkId::from_raw(159), LandmarkId::from_raw(145)),
    (LandmarkId::from_raw(158), LandmarkId::from_raw(153)),
    (LandmarkId::from_raw(157), LandmarkId::from_raw(154)),
    (LandmarkId::from_raw(173), LandmarkId::from_raw(155)),
];

const LEFT_LID_PAIRS: [(LandmarkId, LandmarkId); 7] = [
    (LandmarkId::from_raw(466), LandmarkId::from_raw(249)),
    (LandmarkId::from_raw(388), LandmarkId::from_raw(390)),
    (LandmarkId::from_raw(387), LandmarkId::from_raw(373)),
    (LandmarkId::from_raw(386), LandmarkId::from_raw(374)),
    (LandmarkId::from_raw(385), LandmarkId::from_raw(380)),
    (LandmarkId::from_raw(384), LandmarkId::from_raw(381)),
    (LandmarkId::from_raw(398), LandmarkId::from_raw(382)),
];

// Top center, over the outer corner, onto the outer lower lid
const RIGHT_COVERAGE_ARC: [LandmarkId; 7] = ids![159, 160, 161, 246, 33, 7, 163];
const LEFT_COVERAGE_ARC: [LandmarkId; 7] = ids![386, 387, 388, 466, 263, 249, 390];

/// Which eye, from the subject's point of view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EyeSide {
    Right,
    Left,
}

impl EyeSide {
    pub const BOTH: [EyeSide; 2] = [EyeSide::Right, EyeSide::Left];

    pub fn outer_corner(self) -> LandmarkId {
        match self {
            EyeSide::Right => LandmarkId::RIGHT_EYE_OUTER_CORNER,
            EyeSide::Left => LandmarkId::LEFT_EYE_OUTER_CORNER,
        }
    }

    pub fn inner_corner(self) -> LandmarkId {
        match self {
            EyeSide::Right => LandmarkId::RIGHT_EYE_INNER_CORNER,
            EyeSide::Left => LandmarkId::LEFT_EYE_INNER_CORNER,
        }
    }

    pub fn top(self) -> LandmarkId {
        match self {
            EyeSide::Right => LandmarkId::RIGHT_EYE_TOP,
            EyeSide::Left => LandmarkId::LEFT_EYE_TOP,
        }
    }

    pub fn bottom(self) -> LandmarkId {
        match self {
            EyeSide::Right => LandmarkId::RIGHT_EYE_BOTTOM,
            EyeSide::Left => LandmarkId::LEFT_EYE_BOTTOM,
        }
    }

    pub fn iris_center(self) -> LandmarkId {
        match self {
            EyeSide::Right => LandmarkId::RIGHT_IRIS_CENTER,
            EyeSide::Left => LandmarkId::LEFT_IRIS_CENTER,
        }
    }

    /// (upper lid, lower lid) pairs used for robust height sampling
    pub fn lid_pairs(self) -> &'static [(LandmarkId, LandmarkId)] {
        match self {
            EyeSide::Right => &RIGHT_LID_PAIRS,
            EyeSide::Left => &LEFT_LID_PAIRS,
        }
    }

    pub fn upper_lid(self) -> impl Iterator<Item = LandmarkId> {
        self.lid_pairs().iter().map(|&(upper, _)| upper)
    }

    pub fn lower_lid(self) -> impl Iterator<Item = LandmarkId> {
        self.lid_pairs().iter().map(|&(_, lower)| lower)
    }

    /// Landmarks averaged for the eyelid coverage measure
    pub fn coverage_arc(self) -> &'static [LandmarkId] {
        match self {
            EyeSide::Right => &RIGHT_COVERAGE_ARC,
            EyeSide::Left => &LEFT_COVERAGE_ARC,
        }
    }

    pub fn outline(self) -> &'static [LandmarkId] {
        match self {
            EyeSide::Right => &RIGHT_EYE_OUTLINE,
            EyeSide::Left => &LEFT_EYE_OUTLINE,
        }
    }
}

/// Facial region with a fixed landmark group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Region {
    Face,
    RightEye,
    LeftEye,
    Nose,
    Lips,
}

impl Region {
    pub const ALL: [Region; 5] = [
        Region::Face,
        Region::RightEye,
        Region::LeftEye,
        Region::Nose,
        Region::Lips,
    ];

    pub fn landmarks(self) -> &'static [LandmarkId] {
        match self {
            Region::Face => &FACE_CONTOUR,
            Region::RightEye => &RIGHT_EYE_OUTLINE,
            Region::LeftEye => &LEFT_EYE_OUTLINE,
            Region::Nose => &NOSE,
            Region::Lips => &LIPS,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Region::Face => "face",
            Region::RightEye => "right_eye",
            Region::LeftEye => "left_eye",
            Region::Nose => "nose",
            Region::Lips => "lips",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_regions_have_unique_landmarks() {
        for region in Region::ALL {
            let ids = region.landmarks();
            let unique: HashSet<_> = ids.iter().collect();
            assert_eq!(unique.len(), ids.len(), "duplicate id in {}", region.name());
        }
    }

    #[test]
    fn test_lid_pairs_meet_at_centers() {
        for side in EyeSide::BOTH {
            assert!(side.lid_pairs().contains(&(side.top(), side.bottom())));
            assert_eq!(side.coverage_arc()[0], side.top());
            assert!(side.coverage_arc().contains(&side.outer_corner()));
        }
    }

    #[test]
    fn test_eye_outlines_contain_corners() {
        for side in EyeSide::BOTH {
            assert!(side.outline().contains(&side.inner_corner()));
            assert!(side.outline().contains(&side.outer_corner()));
            for (upper, lower) in side.lid_pairs() {
                assert!(side.outline().contains(upper));
                assert!(side.outline().contains(lower));
            }
        }
    }
}

//! Named anatomical landmark identifiers
//!
//! Left and right are the subject's: the subject's right eye appears on the
//! image's left side. Values are indices into the 478-point face mesh.

use std::fmt;

use crate::error::MeshError;
use crate::set::LANDMARK_COUNT;

/// Identifier of one landmark in the fixed 478-point topology.
///
/// Only the named constants below and [`LandmarkId::new`] can produce a value,
/// so every id is guaranteed to be in range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LandmarkId(u16);

impl LandmarkId {
    /// Checked conversion from a raw mesh index
    pub fn new(index: usize) -> Result<Self, MeshError> {
        if index < LANDMARK_COUNT {
            Ok(Self(index as u16))
        } else {
            Err(MeshError::IndexOutOfRange {
                index,
                len: LANDMARK_COUNT,
            })
        }
    }

    pub(crate) const fn from_raw(index: u16) -> Self {
        assert!((index as usize) < LANDMARK_COUNT);
        Self(index)
    }

    /// Raw mesh index
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    // Face outline
    pub const FOREHEAD_CENTER: Self = Self::from_raw(10);
    pub const CHIN: Self = Self::from_raw(152);
    pub const RIGHT_CHEEK: Self = Self::from_raw(234);
    pub const LEFT_CHEEK: Self = Self::from_raw(454);

    // Right eye
    pub const RIGHT_EYE_OUTER_CORNER: Self = Self::from_raw(33);
    pub const RIGHT_EYE_INNER_CORNER: Self = Self::from_raw(133);
    pub const RIGHT_EYE_TOP: Self = Self::from_raw(159);
    pub const RIGHT_EYE_BOTTOM: Self = Self::from_raw(145);
    pub const RIGHT_IRIS_CENTER: Self = Self::from_raw(468);

    // Left eye
    pub const LEFT_EYE_OUTER_CORNER: Self = Self::from_raw(263);
    pub const LEFT_EYE_INNER_CORNER: Self = Self::from_raw(362);
    pub const LEFT_EYE_TOP: Self = Self::from_raw(386);
    pub const LEFT_EYE_BOTTOM: Self = Self::from_raw(374);
    pub const LEFT_IRIS_CENTER: Self = Self::from_raw(473);

    // Brows
    pub const RIGHT_BROW_CENTER: Self = Self::from_raw(55);
    pub const LEFT_BROW_CENTER: Self = Self::from_raw(285);

    // Nose
    pub const NOSE_TIP: Self = Self::from_raw(1);
    pub const NOSE_BRIDGE_TOP: Self = Self::from_raw(168);
    pub const RIGHT_ALA: Self = Self::from_raw(129);
    pub const LEFT_ALA: Self = Self::from_raw(358);
    pub const RIGHT_NOSTRIL_OUTER: Self = Self::from_raw(98);
    pub const LEFT_NOSTRIL_OUTER: Self = Self::from_raw(327);
    pub const RIGHT_NOSTRIL_INNER: Self = Self::from_raw(219);
    pub const LEFT_NOSTRIL_INNER: Self = Self::from_raw(439);

    // Mouth
    pub const MOUTH_RIGHT_CORNER: Self = Self::from_raw(61);
    pub const MOUTH_LEFT_CORNER: Self = Self::from_raw(291);
    pub const UPPER_LIP_TOP: Self = Self::from_raw(0);
    pub const UPPER_LIP_TOP_RIGHT: Self = Self::from_raw(37);
    pub const UPPER_LIP_TOP_LEFT: Self = Self::from_raw(267);
    pub const UPPER_LIP_BOTTOM: Self = Self::from_raw(13);
    pub const UPPER_LIP_BOTTOM_RIGHT: Self = Self::from_raw(82);
    pub const UPPER_LIP_BOTTOM_LEFT: Self = Self::from_raw(312);
    pub const LOWER_LIP_TOP: Self = Self::from_raw(14);
    pub const LOWER_LIP_TOP_RIGHT: Self = Self::from_raw(87);
    pub const LOWER_LIP_TOP_LEFT: Self = Self::from_raw(317);
    pub const LOWER_LIP_BOTTOM: Self = Self::from_raw(17);
    pub const LOWER_LIP_BOTTOM_RIGHT: Self = Self::from_raw(84);
    pub const LOWER_LIP_BOTTOM_LEFT: Self = Self::from_raw(314);
}

impl fmt::Display for LandmarkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl TryFrom<usize> for LandmarkId {
    type Error = MeshError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Self::new(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checked_construction() {
        assert_eq!(LandmarkId::new(33).unwrap(), LandmarkId::RIGHT_EYE_OUTER_CORNER);
        assert_eq!(LandmarkId::new(477).unwrap().index(), 477);
        assert_eq!(LandmarkId::new(152).unwrap(), LandmarkId::CHIN);
        assert_eq!(
            LandmarkId::new(478),
            Err(MeshError::IndexOutOfRange { index: 478, len: 478 })
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(LandmarkId::NOSE_TIP.to_string(), "#1");
    }
}

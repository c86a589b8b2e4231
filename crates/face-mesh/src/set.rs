//! Validated fixed-size landmark set

use std::ops::Index;

use serde::{Deserialize, Serialize};

use crate::{Landmark, LandmarkId, MeshError};

/// Number of landmarks in the face mesh topology (468 face + 10 iris)
pub const LANDMARK_COUNT: usize = 478;

/// Exactly [`LANDMARK_COUNT`] finite landmarks for one face.
///
/// Construction is the only place input shape is checked. Everything
/// downstream indexes by [`LandmarkId`] and cannot go out of bounds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Landmark>", into = "Vec<Landmark>")]
pub struct LandmarkSet {
    points: Box<[Landmark]>,
}

impl LandmarkSet {
    /// Validate count and finiteness
    pub fn new(points: Vec<Landmark>) -> Result<Self, MeshError> {
        if points.len() != LANDMARK_COUNT {
            return Err(MeshError::LandmarkCount {
                expected: LANDMARK_COUNT,
                actual: points.len(),
            });
        }
        if let Some(index) = points.iter().position(|p| !p.is_finite()) {
            return Err(MeshError::NonFinite { index });
        }
        Ok(Self {
            points: points.into_boxed_slice(),
        })
    }

    /// Build from `(x, y, z)` triples
    pub fn from_tuples(points: &[(f32, f32, f32)]) -> Result<Self, MeshError> {
        Self::new(
            points
                .iter()
                .map(|&(x, y, z)| Landmark::new(x, y, z))
                .collect(),
        )
    }

    #[inline]
    pub fn get(&self, id: LandmarkId) -> Landmark {
        self.points[id.index()]
    }

    /// Lookup by raw mesh index
    pub fn try_point(&self, index: usize) -> Result<Landmark, MeshError> {
        LandmarkId::new(index).map(|id| self.get(id))
    }

    /// Landmarks for a group of ids, in group order
    pub fn points<'a>(&'a self, ids: &'a [LandmarkId]) -> impl Iterator<Item = Landmark> + 'a {
        ids.iter().map(move |&id| self.get(id))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Landmark> {
        self.points.iter()
    }

    pub fn as_slice(&self) -> &[Landmark] {
        &self.points
    }

    /// Horizontal mirror of every point, indices unchanged
    pub fn mirrored(&self) -> Self {
        Self {
            points: self.points.iter().map(Landmark::mirrored).collect(),
        }
    }

    /// Apply `f` to every point, keeping the set valid
    pub fn map<F>(&self, f: F) -> Result<Self, MeshError>
    where
        F: Fn(LandmarkId, Landmark) -> Landmark,
    {
        let points = self
            .points
            .iter()
            .enumerate()
            .map(|(i, &p)| LandmarkId::new(i).map(|id| f(id, p)))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(points)
    }
}

impl Index<LandmarkId> for LandmarkSet {
    type Output = Landmark;

    fn index(&self, id: LandmarkId) -> &Self::Output {
        &self.points[id.index()]
    }
}

impl TryFrom<Vec<Landmark>> for LandmarkSet {
    type Error = MeshError;

    fn try_from(points: Vec<Landmark>) -> Result<Self, Self::Error> {
        Self::new(points)
    }
}

impl From<LandmarkSet> for Vec<Landmark> {
    fn from(set: LandmarkSet) -> Self {
        set.points.into_vec()
    }
}

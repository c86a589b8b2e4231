//! Three-bucket ratio decision shared by the nose and lip classifiers

use face_mesh::clamp_unit;

const EDGE_BASE: f32 = 0.7;
const EDGE_GAIN: f32 = 4.0;
const EDGE_CAP: f32 = 0.95;
const MIDDLE_PEAK: f32 = 0.9;
const MIDDLE_PENALTY: f32 = 5.0;
const MIDDLE_FLOOR: f32 = 0.65;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Bucket {
    Low,
    Middle,
    High,
}

/// `[low | middle | high]` split at `low_max` and `high_min`.
///
/// The middle bucket includes both boundaries.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ThreeBuckets {
    pub low_max: f32,
    pub high_min: f32,
}

impl ThreeBuckets {
    pub fn midpoint(&self) -> f32 {
        (self.low_max + self.high_min) / 2.0
    }

    /// Bucket for `ratio` and its unscaled confidence.
    ///
    /// Edge buckets grow more confident with distance past the boundary; the
    /// middle bucket is most confident at its midpoint.
    pub fn decide(&self, ratio: f32) -> (Bucket, f32) {
        let (bucket, confidence) = if ratio < self.low_max {
            (Bucket::Low, (EDGE_BASE + EDGE_GAIN * (self.low_max - ratio)).min(EDGE_CAP))
        } else if ratio > self.high_min {
            (Bucket::High, (EDGE_BASE + EDGE_GAIN * (ratio - self.high_min)).min(EDGE_CAP))
        } else {
            let off_center = (ratio - self.midpoint()).abs();
            (Bucket::Middle, (MIDDLE_PEAK - MIDDLE_PENALTY * off_center).max(MIDDLE_FLOOR))
        };
        (bucket, clamp_unit(confidence))
    }
}

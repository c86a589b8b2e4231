//! Outlier-resistant aggregation

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::SampleStats;

/// Open interval of plausible values for one measurement.
///
/// Samples on or outside either bound are treated as detector noise.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SanityBand {
    pub min: f32,
    pub max: f32,
}

impl SanityBand {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    #[inline]
    pub fn contains(&self, value: f32) -> bool {
        value > self.min && value < self.max
    }

    /// Keep the samples inside the band, in order
    pub fn filter(&self, samples: &[f32]) -> Vec<f32> {
        samples.iter().copied().filter(|&v| self.contains(v)).collect()
    }
}

/// Median of the values; mean of the middle two for even counts
pub fn median(values: &[f32]) -> Option<f32> {
    if values.is_empty() {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f32::total_cmp);
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        Some((sorted[mid - 1] + sorted[mid]) / 2.0)
    } else {
        Some(sorted[mid])
    }
}

/// Map sample spread to a (0, 1] score; 1 means perfectly consistent samples
#[inline]
pub fn stability(std_dev: f32, gain: f32) -> f32 {
    1.0 / (1.0 + gain * std_dev.max(0.0))
}

/// Result of aggregating repeated samples of one measurement
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RobustEstimate {
    /// Median of the surviving samples, or the fallback
    pub value: f32,
    /// Samples inside the sanity band
    pub accepted: usize,
    /// Samples discarded as outliers
    pub rejected: usize,
    /// Spread of the surviving samples
    pub std_dev: f32,
    /// True when no sample survived and the fallback was used
    pub used_fallback: bool,
}

impl RobustEstimate {
    /// Band-filter the samples and take the median of the survivors.
    ///
    /// When nothing survives, `fallback` becomes the value and the spread is 0.
    pub fn from_samples(samples: &[f32], band: SanityBand, fallback: f32) -> Self {
        let survivors = band.filter(samples);
        let rejected = samples.len() - survivors.len();

        match median(&survivors) {
            Some(value) => Self {
                value,
                accepted: survivors.len(),
                rejected,
                std_dev: SampleStats::compute(&survivors).std_dev,
                used_fallback: false,
            },
            None => {
                debug!(
                    samples = samples.len(),
                    fallback, "No sample inside sanity band, using fallback"
                );
                Self {
                    value: fallback,
                    accepted: 0,
                    rejected,
                    std_dev: 0.0,
                    used_fallback: true,
                }
            }
        }
    }

    /// Stability score of this estimate with the given spread gain
    pub fn stability(&self, gain: f32) -> f32 {
        stability(self.std_dev, gain)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const HEIGHT_BAND: SanityBand = SanityBand::new(0.001, 0.5);

    #[test]
    fn test_median_odd_and_even() {
        assert_eq!(median(&[3.0, 1.0, 2.0]), Some(2.0));
        assert_eq!(median(&[4.0, 1.0, 3.0, 2.0]), Some(2.5));
        assert_eq!(median(&[]), None);
    }

    #[test]
    fn test_band_is_exclusive() {
        assert!(!HEIGHT_BAND.contains(0.001));
        assert!(!HEIGHT_BAND.contains(0.5));
        assert!(HEIGHT_BAND.contains(0.04));
    }

    #[test]
    fn test_outliers_do_not_move_estimate() {
        let estimate = RobustEstimate::from_samples(&[0.04, 0.041, 0.0, 0.039, 0.9], HEIGHT_BAND, 0.0);
        assert_eq!(estimate.accepted, 3);
        assert_eq!(estimate.rejected, 2);
        assert!((estimate.value - 0.04).abs() < 1e-6);
        assert!(!estimate.used_fallback);
    }

    #[test]
    fn test_fallback_when_nothing_survives() {
        let estimate = RobustEstimate::from_samples(&[0.0, 0.0005, 0.8], HEIGHT_BAND, 0.03);
        assert!(estimate.used_fallback);
        assert_eq!(estimate.value, 0.03);
        assert_eq!(estimate.stability(10.0), 1.0);
    }

    #[test]
    fn test_stability_decreases_with_spread() {
        assert_eq!(stability(0.0, 10.0), 1.0);
        assert!((stability(0.01, 10.0) - 1.0 / 1.1).abs() < 1e-6);
        assert!(stability(0.05, 10.0) < stability(0.01, 10.0));
    }

    proptest! {
        #[test]
        fn prop_median_within_bounds(values in prop::collection::vec(0.002f32..0.49, 1..20)) {
            let m = median(&values).unwrap();
            let stats = SampleStats::compute(&values);
            prop_assert!(m >= stats.min && m <= stats.max);
        }

        #[test]
        fn prop_stability_in_unit_interval(std_dev in 0.0f32..10.0, gain in 0.0f32..20.0) {
            let s = stability(std_dev, gain);
            prop_assert!(s > 0.0 && s <= 1.0);
        }
    }
}

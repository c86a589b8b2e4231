//! Summary statistics over a sample

use serde::{Deserialize, Serialize};

/// Summary statistics for a set of measurements
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SampleStats {
    /// Number of samples
    pub count: usize,
    /// Mean value
    pub mean: f32,
    /// Population standard deviation, 0 with fewer than two samples
    pub std_dev: f32,
    /// Minimum value
    pub min: f32,
    /// Maximum value
    pub max: f32,
}

impl SampleStats {
    /// Compute statistics from a slice of values
    pub fn compute(values: &[f32]) -> Self {
        if values.is_empty() {
            return Self::default();
        }

        let n = values.len() as f32;
        let mean = values.iter().sum::<f32>() / n;
        let min = values.iter().copied().fold(f32::MAX, f32::min);
        let max = values.iter().copied().fold(f32::MIN, f32::max);

        let std_dev = if values.len() < 2 {
            0.0
        } else {
            let m2: f32 = values.iter().map(|v| (v - mean) * (v - mean)).sum();
            (m2 / n).sqrt()
        };

        Self {
            count: values.len(),
            mean,
            std_dev,
            min,
            max,
        }
    }

    pub fn range(&self) -> f32 {
        self.max - self.min
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean_computation() {
        let stats = SampleStats::compute(&[1.0, 2.0, 3.0, 4.0, 5.0]);
        assert_eq!(stats.count, 5);
        assert!((stats.mean - 3.0).abs() < 1e-6);
        assert_eq!(stats.min, 1.0);
        assert_eq!(stats.max, 5.0);
    }

    #[test]
    fn test_std_dev_computation() {
        let stats = SampleStats::compute(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]);
        assert!((stats.std_dev - 2.0).abs() < 1e-4);
        assert!((stats.range() - 7.0).abs() < 1e-6);
    }

    #[test]
    fn test_single_sample_has_zero_spread() {
        let stats = SampleStats::compute(&[0.04]);
        assert_eq!(stats.std_dev, 0.0);
        assert_eq!(SampleStats::compute(&[]), SampleStats::default());
    }
}

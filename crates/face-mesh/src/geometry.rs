//! Geometry helpers shared by the classifiers

use crate::Landmark;

/// Smallest extent treated as non-degenerate in normalized space.
///
/// Every ratio in the pipeline floors or guards its denominator with this value.
pub const MIN_EXTENT: f32 = 1e-3;

/// Euclidean distance in the image plane
#[inline]
pub fn distance_2d(a: Landmark, b: Landmark) -> f32 {
    (a.x - b.x).hypot(a.y - b.y)
}

/// Clamp to [0, 1]; NaN maps to 0
#[inline]
pub fn clamp_unit(value: f32) -> f32 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

/// `numerator / denominator`, or `fallback` when the denominator is degenerate
#[inline]
pub fn safe_ratio(numerator: f32, denominator: f32, fallback: f32) -> f32 {
    if denominator.abs() < MIN_EXTENT {
        fallback
    } else {
        numerator / denominator
    }
}

/// Arithmetic mean; 0 for an empty slice
pub fn mean(values: &[f32]) -> f32 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f32>() / values.len() as f32
}

/// Mean of a projection over landmarks; 0 for an empty iterator
pub fn mean_of<I, F>(points: I, project: F) -> f32
where
    I: IntoIterator<Item = Landmark>,
    F: Fn(Landmark) -> f32,
{
    let (sum, count) = points
        .into_iter()
        .fold((0.0f32, 0usize), |(sum, count), p| (sum + project(p), count + 1));
    if count == 0 {
        0.0
    } else {
        sum / count as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_2d_ignores_depth() {
        let a = Landmark::new(0.0, 0.0, 5.0);
        let b = Landmark::new(3.0, 4.0, -5.0);
        assert!((distance_2d(a, b) - 5.0).abs() < 1e-6);
    }

    #[test]
    fn test_safe_ratio_fallback() {
        assert_eq!(safe_ratio(1.0, 0.0, 0.5), 0.5);
        assert_eq!(safe_ratio(1.0, 0.0005, 0.5), 0.5);
        assert!((safe_ratio(1.0, 4.0, 0.5) - 0.25).abs() < 1e-6);
    }

    #[test]
    fn test_clamp_unit() {
        assert_eq!(clamp_unit(1.7), 1.0);
        assert_eq!(clamp_unit(-0.2), 0.0);
        assert_eq!(clamp_unit(f32::NAN), 0.0);
    }

    #[test]
    fn test_mean_of_empty() {
        assert_eq!(mean(&[]), 0.0);
        assert_eq!(mean_of(Vec::<Landmark>::new(), |p| p.z), 0.0);
    }
}

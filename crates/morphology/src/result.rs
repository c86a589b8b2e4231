//! Classification result shared by all feature classifiers

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Outcome of classifying one feature
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult<C: Ord, M> {
    /// Primary category
    pub category: C,
    /// Confidence of the primary category in [0, 1]
    pub confidence: f32,
    /// Additional categories that also apply
    pub secondary_tags: Vec<C>,
    /// Confidence of every evaluated category
    pub confidence_map: BTreeMap<C, f32>,
    /// Raw measurements the decision was based on
    pub metrics: M,
}

impl<C: Ord + Copy, M> ClassificationResult<C, M> {
    /// Highest value in the confidence map, or the primary confidence if empty
    pub fn top_confidence(&self) -> f32 {
        self.confidence_map
            .values()
            .copied()
            .fold(None, |best: Option<f32>, c| Some(best.map_or(c, |b| b.max(c))))
            .unwrap_or(self.confidence)
    }

    /// Primary category followed by the secondary tags
    pub fn categories(&self) -> impl Iterator<Item = C> + '_ {
        std::iter::once(self.category).chain(self.secondary_tags.iter().copied())
    }

    pub fn has(&self, category: C) -> bool {
        self.categories().any(|c| c == category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::EyeShape;

    fn result() -> ClassificationResult<EyeShape, ()> {
        ClassificationResult {
            category: EyeShape::Upturned,
            confidence: 0.7,
            secondary_tags: vec![EyeShape::Hooded],
            confidence_map: BTreeMap::from([(EyeShape::Upturned, 0.7), (EyeShape::Hooded, 0.8)]),
            metrics: (),
        }
    }

    #[test]
    fn test_top_confidence_uses_map_maximum() {
        assert!((result().top_confidence() - 0.8).abs() < 1e-6);
    }

    #[test]
    fn test_categories_in_order() {
        let r = result();
        assert_eq!(r.categories().collect::<Vec<_>>(), vec![EyeShape::Upturned, EyeShape::Hooded]);
        assert!(r.has(EyeShape::Hooded));
        assert!(!r.has(EyeShape::Round));
    }
}

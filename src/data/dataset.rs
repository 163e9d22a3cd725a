use std::sync::Arc;

/// In-memory feature matrix plus labels for one supervised dataset.
///
/// Features live in a single contiguous row-major buffer with a stride of
/// `feature_count`, so the matrix is one allocation with one owner. Labels
/// are shared: a feature-mapped dataset reuses the source labels without a
/// copy, and labels are never mutated after load.
#[derive(Debug, Clone)]
pub struct Dataset {
    features: Vec<f32>,
    labels: Arc<[f32]>,
    feature_count: usize,
    examples: usize,
}

impl Dataset {
    /// Creates a dataset from owned feature storage and shared labels.
    ///
    /// # Panics
    /// - if `features.len() != examples * feature_count`
    /// - if `labels.len() != examples`
    /// - if `feature_count` is zero
    pub fn new(
        features: Vec<f32>,
        labels: Arc<[f32]>,
        feature_count: usize,
        examples: usize,
    ) -> Self {
        assert!(feature_count >= 1, "dataset needs at least one feature");
        assert_eq!(
            features.len(),
            examples * feature_count,
            "feature buffer does not match examples * feature_count"
        );
        assert_eq!(labels.len(), examples, "labels must have one entry per example");

        Self {
            features,
            labels,
            feature_count,
            examples,
        }
    }

    #[inline]
    pub fn examples(&self) -> usize {
        self.examples
    }

    #[inline]
    pub fn feature_count(&self) -> usize {
        self.feature_count
    }

    #[inline]
    pub fn labels(&self) -> &[f32] {
        &self.labels
    }

    /// Hands out another reference to the shared label vector.
    #[inline]
    pub fn share_labels(&self) -> Arc<[f32]> {
        Arc::clone(&self.labels)
    }

    /// Returns the feature row at `idx` (panics if out of bounds).
    #[inline]
    pub fn row(&self, idx: usize) -> &[f32] {
        let start = idx * self.feature_count;
        &self.features[start..start + self.feature_count]
    }

    /// Iterates over feature rows in example order.
    #[inline]
    pub fn rows(&self) -> impl Iterator<Item = &[f32]> {
        self.features.chunks_exact(self.feature_count)
    }
}

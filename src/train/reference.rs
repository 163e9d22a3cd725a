use super::{GradientStrategy, sigmoid};
use crate::data::Dataset;
use crate::error::{Result, TrainError};

/// Scalar reference implementation of the logistic-regression gradient.
///
/// Plain loops over the row-major buffer: dense matrix-vector product,
/// sigmoid residual, then the transposed product accumulated per column.
pub struct ReferenceStrategy<'a> {
    dataset: &'a Dataset,
    /// Residual scratch, reused each call (no per-iteration allocations).
    residuals: Vec<f32>,
}

impl<'a> ReferenceStrategy<'a> {
    pub fn new(dataset: &'a Dataset) -> Self {
        Self {
            residuals: vec![0.0; dataset.examples()],
            dataset,
        }
    }
}

impl GradientStrategy for ReferenceStrategy<'_> {
    fn compute(&mut self, theta: &[f32], grad: &mut [f32]) -> Result<()> {
        let feature_count = self.dataset.feature_count();
        if theta.len() != feature_count {
            return Err(TrainError::ShapeMismatch {
                what: "theta",
                got: theta.len(),
                expected: feature_count,
            });
        }
        if grad.len() != feature_count {
            return Err(TrainError::ShapeMismatch {
                what: "gradient",
                got: grad.len(),
                expected: feature_count,
            });
        }

        let labels = self.dataset.labels();
        for ((row, &label), residual) in self
            .dataset
            .rows()
            .zip(labels)
            .zip(self.residuals.iter_mut())
        {
            let z: f32 = row.iter().zip(theta).map(|(x, t)| x * t).sum();
            *residual = sigmoid(z) - label;
        }

        grad.fill(0.0);
        for (row, &residual) in self.dataset.rows().zip(&self.residuals) {
            for (g, &x) in grad.iter_mut().zip(row) {
                *g += x * residual;
            }
        }

        Ok(())
    }
}

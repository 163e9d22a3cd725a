use std::sync::Arc;

use super::GradientStrategy;
use crate::accel::VectorAccelerator;
use crate::data::Dataset;
use crate::error::{Result, TrainError};

/// Gradient strategy that streams lane-serialized examples through a
/// [`VectorAccelerator`] and reduces the returned partial rows.
///
/// The feature stream is serialized once at construction; every `compute`
/// call re-broadcasts the current theta into each per-example record before
/// issuing the stream, then column-sums the `stream_size * lanes` partials
/// into the gradient.
#[derive(Debug)]
pub struct BatchedStrategy<A> {
    accel: A,
    labels: Arc<[f32]>,
    feature_count: usize,
    stream_size: usize,
    examples_stream: Vec<f32>,
    theta_stream: Vec<f32>,
    partials: Vec<f32>,
}

impl<A: VectorAccelerator> BatchedStrategy<A> {
    /// Serializes `dataset` into zero-padded lane records for `accel`.
    ///
    /// # Errors
    /// Returns `TrainError::ShapeMismatch` when the dataset's feature count
    /// exceeds the accelerator's lane width; wide datasets are rejected, not
    /// truncated.
    pub fn new(dataset: &Dataset, accel: A) -> Result<Self> {
        let lanes = accel.lanes();
        let feature_count = dataset.feature_count();
        if feature_count > lanes {
            return Err(TrainError::ShapeMismatch {
                what: "lane slots",
                got: feature_count,
                expected: lanes,
            });
        }

        let stream_size = dataset.examples();
        let mut examples_stream = vec![0.0f32; stream_size * lanes];
        for (record, row) in examples_stream.chunks_exact_mut(lanes).zip(dataset.rows()) {
            record[..feature_count].copy_from_slice(row);
        }

        Ok(Self {
            accel,
            labels: dataset.share_labels(),
            feature_count,
            stream_size,
            examples_stream,
            theta_stream: vec![0.0; stream_size * lanes],
            partials: vec![0.0; stream_size * lanes],
        })
    }
}

impl<A: VectorAccelerator> GradientStrategy for BatchedStrategy<A> {
    fn compute(&mut self, theta: &[f32], grad: &mut [f32]) -> Result<()> {
        let feature_count = self.feature_count;
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

        // Broadcast: every record sees the same parameter row; padded slots
        // stay zero so padded feature slots contribute nothing.
        let lanes = self.accel.lanes();
        for record in self.theta_stream.chunks_exact_mut(lanes) {
            record[..feature_count].copy_from_slice(theta);
        }

        self.accel.batched_gradient(
            self.stream_size,
            &self.examples_stream,
            &self.theta_stream,
            &self.labels,
            &mut self.partials,
        )?;

        grad.fill(0.0);
        for record in self.partials.chunks_exact(lanes) {
            for (g, &p) in grad.iter_mut().zip(record) {
                *g += p;
            }
        }

        Ok(())
    }
}

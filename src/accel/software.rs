use rayon::prelude::*;

use super::VectorAccelerator;
use crate::error::{Result, TrainError};
use crate::train::sigmoid;

/// Software stand-in for the hardware dataflow engine.
///
/// Each example's partial row depends only on that example's record, so the
/// stream is processed in parallel across examples; the cross-example
/// reduction stays with the caller.
#[derive(Debug)]
pub struct SoftwareAccelerator {
    lanes: usize,
}

impl SoftwareAccelerator {
    /// # Panics
    /// - if `lanes` is zero
    pub fn new(lanes: usize) -> Self {
        assert!(lanes > 0, "lane width must be at least 1");
        Self { lanes }
    }
}

impl Default for SoftwareAccelerator {
    /// Eight lanes, the width of the hardware engine this replaces.
    fn default() -> Self {
        Self::new(8)
    }
}

impl VectorAccelerator for SoftwareAccelerator {
    #[inline]
    fn lanes(&self) -> usize {
        self.lanes
    }

    fn batched_gradient(
        &self,
        stream_size: usize,
        examples: &[f32],
        theta: &[f32],
        labels: &[f32],
        partials: &mut [f32],
    ) -> Result<()> {
        let slots = stream_size * self.lanes;
        if examples.len() != slots {
            return Err(TrainError::ShapeMismatch {
                what: "examples stream",
                got: examples.len(),
                expected: slots,
            });
        }
        if theta.len() != slots {
            return Err(TrainError::ShapeMismatch {
                what: "theta stream",
                got: theta.len(),
                expected: slots,
            });
        }
        if labels.len() != stream_size {
            return Err(TrainError::ShapeMismatch {
                what: "label stream",
                got: labels.len(),
                expected: stream_size,
            });
        }
        if partials.len() != slots {
            return Err(TrainError::ShapeMismatch {
                what: "partials stream",
                got: partials.len(),
                expected: slots,
            });
        }

        partials
            .par_chunks_mut(self.lanes)
            .zip(examples.par_chunks(self.lanes))
            .zip(theta.par_chunks(self.lanes))
            .zip(labels.par_iter())
            .for_each(|(((out, x), t), &label)| {
                let z: f32 = x.iter().zip(t).map(|(xi, ti)| xi * ti).sum();
                let residual = sigmoid(z) - label;
                for (o, &xi) in out.iter_mut().zip(x) {
                    *o = xi * residual;
                }
            });

        Ok(())
    }
}

mod software;

pub use software::SoftwareAccelerator;

use crate::error::Result;

/// Boundary to a fixed-lane-width vector accelerator.
///
/// The accelerator consumes flat streams of `stream_size` records, each
/// serialized into exactly [`lanes`](VectorAccelerator::lanes) scalar slots,
/// and produces one partial gradient row per record. Calls are blocking: a
/// call returns only once all `stream_size` result rows are available.
pub trait VectorAccelerator {
    /// Number of scalar lanes per streamed record.
    fn lanes(&self) -> usize;

    /// Computes one sigmoid-residual partial gradient row per example.
    ///
    /// # Args
    /// * `stream_size` - Number of examples in the stream.
    /// * `examples` - `stream_size * lanes` feature slots, zero-padded past
    ///   the true feature count.
    /// * `theta` - `stream_size * lanes` parameter slots, one identical row
    ///   per example.
    /// * `labels` - `stream_size` labels.
    /// * `partials` - Output buffer of `stream_size * lanes` slots, fully
    ///   overwritten on success.
    ///
    /// # Errors
    /// Returns `TrainError::ShapeMismatch` when any buffer length disagrees
    /// with the stream shape.
    fn batched_gradient(
        &self,
        stream_size: usize,
        examples: &[f32],
        theta: &[f32],
        labels: &[f32],
        partials: &mut [f32],
    ) -> Result<()>;
}

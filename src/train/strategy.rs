use crate::error::Result;

/// Abstraction over one full-batch gradient computation.
///
/// Implementations own their view of the training data; the trainer treats
/// them as a black box mapping the current parameters to a gradient. This is
/// the seam that keeps the scalar reference path and the accelerator-backed
/// path interchangeable.
pub trait GradientStrategy {
    /// Computes the logistic-regression log-likelihood gradient for `theta`
    /// into `grad`.
    ///
    /// # Args
    /// * `theta` - Read-only slice of current parameters, one per feature.
    /// * `grad` - Gradient buffer provided by the caller, fully overwritten.
    ///
    /// # Errors
    /// Returns `TrainError::ShapeMismatch` when a buffer length does not
    /// match the dataset's feature count.
    fn compute(&mut self, theta: &[f32], grad: &mut [f32]) -> Result<()>;
}

use std::num::NonZeroUsize;

/// Hyperparameters for one training run.
///
/// There is no external configuration surface; the binary runs with the
/// defaults below and `RUST_LOG` is the only environment knob.
#[derive(Debug, Clone, Copy)]
pub struct TrainConfig {
    /// Polynomial expansion order applied before training.
    pub degree: NonZeroUsize,
    /// Gradient-descent step size.
    pub learning_rate: f32,
    /// Fixed iteration count; there is no convergence-based early exit.
    pub max_iter: usize,
}

impl Default for TrainConfig {
    fn default() -> Self {
        Self {
            degree: NonZeroUsize::new(2).unwrap(),
            learning_rate: 0.02,
            max_iter: 500,
        }
    }
}

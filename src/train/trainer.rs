use log::debug;

use super::GradientStrategy;
use crate::config::TrainConfig;
use crate::error::Result;
use crate::optim::{GradientDescent, Optimizer};

/// Runs fixed-iteration batch gradient descent over one gradient strategy.
pub struct Trainer<S> {
    strategy: S,
    optimizer: GradientDescent,
    max_iter: usize,
}

impl<S: GradientStrategy> Trainer<S> {
    pub fn new(strategy: S, config: &TrainConfig) -> Self {
        Self {
            strategy,
            optimizer: GradientDescent::new(config.learning_rate),
            max_iter: config.max_iter,
        }
    }

    /// Fits a parameter vector of `feature_count` entries, starting from zero.
    ///
    /// The iteration count is fixed; there is no convergence check, and a
    /// learning rate large enough to diverge propagates inf/NaN into the
    /// result undetected.
    ///
    /// # Errors
    /// Propagates shape errors from the underlying strategy.
    pub fn fit(&mut self, feature_count: usize) -> Result<Vec<f32>> {
        let mut theta = vec![0.0f32; feature_count];
        let mut grad = vec![0.0f32; feature_count];

        for iter in 0..self.max_iter {
            self.strategy.compute(&theta, &mut grad)?;
            self.optimizer.update_params(&mut theta, &grad);

            if (iter + 1) % 100 == 0 {
                debug!("iteration {}/{}", iter + 1, self.max_iter);
            }
        }

        Ok(theta)
    }
}

#[cfg(test)]
mod tests {
    use std::num::NonZeroUsize;

    use super::*;
    use crate::data::Dataset;
    use crate::train::ReferenceStrategy;

    fn mapped_dataset() -> Dataset {
        let features = vec![
            1.0, 0.0, 0.0, //
            1.0, 1.0, 1.0, //
            1.0, 2.0, 4.0, //
            1.0, 3.0, 9.0,
        ];
        Dataset::new(features, vec![0.0, 0.0, 1.0, 1.0].into(), 3, 4)
    }

    fn config(max_iter: usize) -> TrainConfig {
        TrainConfig {
            degree: NonZeroUsize::new(2).unwrap(),
            learning_rate: 0.02,
            max_iter,
        }
    }

    #[test]
    fn one_iteration_from_zero_matches_the_closed_form_step() {
        let dataset = mapped_dataset();
        let mut trainer = Trainer::new(ReferenceStrategy::new(&dataset), &config(1));
        let theta = trainer.fit(dataset.feature_count()).unwrap();

        // grad at zero theta is [0, -2, -6]; theta = -0.02 * grad.
        assert!((theta[0] - 0.0).abs() < 1e-6);
        assert!((theta[1] - 0.04).abs() < 1e-6);
        assert!((theta[2] - 0.12).abs() < 1e-6);
    }

    #[test]
    fn repeated_fits_are_bit_identical() {
        let dataset = mapped_dataset();

        let mut first = Trainer::new(ReferenceStrategy::new(&dataset), &config(50));
        let mut second = Trainer::new(ReferenceStrategy::new(&dataset), &config(50));

        assert_eq!(
            first.fit(dataset.feature_count()).unwrap(),
            second.fit(dataset.feature_count()).unwrap()
        );
    }

    #[test]
    fn zero_iterations_leaves_theta_at_zero() {
        let dataset = mapped_dataset();
        let mut trainer = Trainer::new(ReferenceStrategy::new(&dataset), &config(0));
        assert_eq!(trainer.fit(dataset.feature_count()).unwrap(), vec![0.0; 3]);
    }
}

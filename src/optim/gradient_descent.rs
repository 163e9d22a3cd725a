use super::Optimizer;

/// Plain batch gradient descent.
pub struct GradientDescent {
    learning_rate: f32,
}

impl GradientDescent {
    /// Returns a new `GradientDescent`.
    ///
    /// # Arguments
    /// * `learning_rate` - The length of the step taken on `update_params`.
    pub fn new(learning_rate: f32) -> Self {
        Self { learning_rate }
    }
}

impl Optimizer for GradientDescent {
    /// Steps every parameter against its gradient entry, scaled by the
    /// learning rate.
    fn update_params(&mut self, params: &mut [f32], grad: &[f32]) {
        let lr = self.learning_rate;

        for (w, g) in params.iter_mut().zip(grad) {
            *w -= lr * g;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_steps_against_the_gradient() {
        let mut opt = GradientDescent::new(0.5);
        let mut params = [1.0f32, -1.0];
        opt.update_params(&mut params, &[2.0, -4.0]);
        assert_eq!(params, [0.0, 1.0]);
    }
}

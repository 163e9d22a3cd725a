mod gradient_descent;

pub use gradient_descent::GradientDescent;

/// Parameter update rule applied once per training iteration.
pub trait Optimizer {
    /// Updates `params` in place using `grad`.
    fn update_params(&mut self, params: &mut [f32], grad: &[f32]);
}

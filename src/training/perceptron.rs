use ndarray::ArrayView1;
use rand::Rng;

use super::LearningRule;
use crate::{
    Result,
    arch::{LinearModel, OutputPolicy, activations::ActFn},
    initialization::WeightInit,
};

/// The perceptron learning rule.
///
/// Weights only move on examples the model gets wrong, the bias moves on every example by
/// `learning_rate * error`. The run converges after the first epoch whose *signed* error sum
/// is exactly zero, so an epoch where a `+1` and a `-1` cancel each other out also stops it.
#[derive(Clone, Debug)]
pub struct Perceptron {
    learning_rate: f64,
    threshold: f64,
    act_fn: ActFn,
    init: WeightInit,
}

impl Perceptron {
    /// Creates a new `Perceptron` with a boolean step activation and weights seeded uniformly
    /// from `[0, 1)`.
    ///
    /// # Arguments
    /// * `learning_rate` - The size of the steps taken on each update.
    /// * `threshold` - The initial bias.
    pub fn new(learning_rate: f64, threshold: f64) -> Self {
        Self {
            learning_rate,
            threshold,
            act_fn: ActFn::boolean(),
            init: WeightInit::seeds(),
        }
    }

    pub fn with_act_fn(mut self, act_fn: ActFn) -> Self {
        self.act_fn = act_fn;
        self
    }

    pub fn with_init(mut self, init: WeightInit) -> Self {
        self.init = init;
        self
    }

    pub fn learning_rate(&self) -> f64 {
        self.learning_rate
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }
}

impl LearningRule for Perceptron {
    fn init_model<R: Rng + ?Sized>(&self, dims: usize, rng: &mut R) -> Result<LinearModel> {
        let weights = self.init.generate(dims, rng)?;
        let model = LinearModel::new(weights, Some(self.threshold), self.act_fn)
            .with_policy(OutputPolicy::Activation);

        Ok(model)
    }

    fn accumulate(&self, total: f64, error: f64) -> f64 {
        total + error
    }

    fn update(&self, model: &mut LinearModel, x: ArrayView1<f64>, _output: f64, error: f64) {
        let lr = self.learning_rate;

        if error != 0. {
            for (w, x) in model.weights.iter_mut().zip(x) {
                *w += lr * x * error;
            }
        }

        if let Some(bias) = model.bias.as_mut() {
            *bias += lr * error;
        }
    }

    fn converged(&self, total: f64) -> bool {
        total == 0.
    }
}

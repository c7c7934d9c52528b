use ndarray::ArrayView1;
use rand::Rng;

use super::LearningRule;
use crate::{
    Result,
    arch::{LinearModel, OutputPolicy, activations::ActFn},
    initialization::WeightInit,
};

/// The policy a delta-rule model uses when predicting.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DeltaClamp {
    /// See `OutputPolicy::LegacyClamp`.
    #[default]
    Legacy,
    /// See `OutputPolicy::Threshold`.
    Threshold,
}

impl From<DeltaClamp> for OutputPolicy {
    fn from(value: DeltaClamp) -> Self {
        match value {
            DeltaClamp::Legacy => OutputPolicy::LegacyClamp,
            DeltaClamp::Threshold => OutputPolicy::Threshold,
        }
    }
}

/// The delta rule: gradient descent on the quadratic error of a model without bias.
///
/// Each weight moves by `learning_rate * x * output * (1 - output) * error`. The
/// `output * (1 - output)` factor is the derivative of the unit logistic sigmoid, so the update
/// only follows the gradient when the activation is `ActFn::sigmoid(1.)`. Any other
/// activation still trains, but not along its own gradient.
#[derive(Clone, Debug)]
pub struct DeltaRule {
    learning_rate: f64,
    act_fn: ActFn,
    init: WeightInit,
    clamp: DeltaClamp,
}

impl DeltaRule {
    /// The epoch energy at or below which the run converges.
    pub const TOLERANCE: f64 = 0.1;

    /// Creates a new `DeltaRule` with a unit sigmoid activation and zeroed weights.
    ///
    /// # Arguments
    /// * `learning_rate` - The size of the steps taken on each update.
    pub fn new(learning_rate: f64) -> Self {
        Self {
            learning_rate,
            act_fn: ActFn::sigmoid(1.),
            init: WeightInit::zeros(),
            clamp: DeltaClamp::default(),
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

    pub fn with_clamp(mut self, clamp: DeltaClamp) -> Self {
        self.clamp = clamp;
        self
    }

    pub fn learning_rate(&self) -> f64 {
        self.learning_rate
    }
}

impl LearningRule for DeltaRule {
    fn init_model<R: Rng + ?Sized>(&self, dims: usize, rng: &mut R) -> Result<LinearModel> {
        let weights = self.init.generate(dims, rng)?;
        let model = LinearModel::new(weights, None, self.act_fn).with_policy(self.clamp.into());

        Ok(model)
    }

    fn accumulate(&self, total: f64, error: f64) -> f64 {
        total + 0.5 * (error * error)
    }

    fn update(&self, model: &mut LinearModel, x: ArrayView1<f64>, output: f64, error: f64) {
        let lr = self.learning_rate;

        for (w, x) in model.weights.iter_mut().zip(x) {
            *w += lr * x * output * (1. - output) * error;
        }
    }

    fn converged(&self, total: f64) -> bool {
        total <= Self::TOLERANCE
    }
}

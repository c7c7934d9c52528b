use ndarray::ArrayView1;

use super::activations::ActFn;
use crate::{
    MlErr, Result,
    dataset::{DataDescriptor, FeatureMatrix},
};

/// How a trained model turns the weighted sum of an input into a prediction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputPolicy {
    /// Applies the activation the model was trained with.
    #[default]
    Activation,
    /// `1` if the raw weighted sum is strictly greater than `1`, `0` otherwise.
    ///
    /// This maps almost every input to `0`. Default for delta-rule models, see `Threshold`.
    ///
    /// The clamp is applied once, to the whole sum. Older delta-rule code clamped the running
    /// sum after every feature, so it can disagree: weights `[0.6, 0.6]` on `[1, 1]` give `1`
    /// here and gave `0` there.
    LegacyClamp,
    /// `1` if the activated output is at least `0.5`, `0` otherwise.
    Threshold,
}

/// A single layer linear model: `act(w · x + b)`.
#[derive(Clone, Debug)]
pub struct LinearModel {
    pub(crate) weights: Vec<f64>,
    pub(crate) bias: Option<f64>,
    act_fn: ActFn,
    policy: OutputPolicy,
}

impl LinearModel {
    /// Creates a new `LinearModel`.
    ///
    /// # Arguments
    /// * `weights` - One weight per feature.
    /// * `bias` - The bias (threshold) added to the weighted sum, if the model has one.
    /// * `act_fn` - The activation applied to the weighted sum.
    pub fn new(weights: Vec<f64>, bias: Option<f64>, act_fn: ActFn) -> Self {
        Self {
            weights,
            bias,
            act_fn,
            policy: OutputPolicy::default(),
        }
    }

    /// Sets the policy used by `predict`.
    pub fn with_policy(mut self, policy: OutputPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    pub fn bias(&self) -> Option<f64> {
        self.bias
    }

    pub fn act_fn(&self) -> ActFn {
        self.act_fn
    }

    pub fn policy(&self) -> OutputPolicy {
        self.policy
    }

    /// The dimensionality this model expects.
    pub fn dims(&self) -> usize {
        self.weights.len()
    }

    /// The weighted sum of `x` plus the bias, if any.
    pub fn net(&self, x: ArrayView1<f64>) -> f64 {
        let sum = self
            .weights
            .iter()
            .zip(x)
            .fold(0.0, |acc, (w, x)| acc + w * x);

        match self.bias {
            Some(b) => sum + b,
            None => sum,
        }
    }

    /// The activated output for `x`, as used while training.
    pub fn output(&self, x: ArrayView1<f64>) -> f64 {
        self.act_fn.f(self.net(x))
    }

    pub(crate) fn is_finite(&self) -> bool {
        self.weights.iter().all(|w| w.is_finite()) && self.bias.is_none_or(f64::is_finite)
    }

    /// Scores every row of `matrix` following this model's `OutputPolicy`.
    ///
    /// # Arguments
    /// * `matrix` - The rows to score, with or without their label slot.
    /// * `descriptor` - The layout of the rows.
    ///
    /// # Returns
    /// One prediction per row, or an error if the rows don't fit the model.
    pub fn predict(
        &self,
        matrix: &FeatureMatrix,
        descriptor: &DataDescriptor,
    ) -> Result<Vec<f64>> {
        if descriptor.features() != self.dims() {
            return Err(MlErr::SizeMismatch {
                a: "descriptor features",
                b: "model weights",
                got: descriptor.features(),
                expected: self.dims(),
            });
        }

        let x = matrix.features(descriptor)?;
        let predictions = x.outer_iter().map(|x| self.predict_one(x)).collect();

        Ok(predictions)
    }

    fn predict_one(&self, x: ArrayView1<f64>) -> f64 {
        let net = self.net(x);

        match self.policy {
            OutputPolicy::Activation => self.act_fn.f(net),
            OutputPolicy::LegacyClamp => {
                if net > 1. {
                    1.
                } else {
                    0.
                }
            }
            OutputPolicy::Threshold => {
                if self.act_fn.f(net) >= 0.5 {
                    1.
                } else {
                    0.
                }
            }
        }
    }
}

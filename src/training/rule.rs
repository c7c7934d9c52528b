use ndarray::ArrayView1;
use rand::Rng;

use crate::{Result, arch::LinearModel};

/// The algorithm specific half of a training run.
///
/// `ModelTrainer` owns the epoch loop: it walks the examples in order, computes each output
/// and error, and asks the rule how to fold the error into the epoch total, how to update the
/// model and whether the epoch total means the run has converged.
pub trait LearningRule {
    /// Builds the model the first epoch starts from.
    ///
    /// # Arguments
    /// * `dims` - The dimensionality of the feature vectors.
    /// * `rng` - A random number generator for stochastic initializations.
    fn init_model<R: Rng + ?Sized>(&self, dims: usize, rng: &mut R) -> Result<LinearModel>;

    /// Folds the error of a single example into the running epoch total.
    fn accumulate(&self, total: f64, error: f64) -> f64;

    /// Updates the model after seeing a single example.
    ///
    /// # Arguments
    /// * `model` - The model being trained.
    /// * `x` - The features of the example.
    /// * `output` - The activated output the model produced for `x` before the update.
    /// * `error` - The label minus `output`.
    fn update(&self, model: &mut LinearModel, x: ArrayView1<f64>, output: f64, error: f64);

    /// Whether an epoch that ended with `total` stops the run.
    fn converged(&self, total: f64) -> bool;
}
